use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Instant;

use crate::ui::app::{App, Pane};
use crate::ui::carousel::Direction;

/// Route a key event to the focused pane's controller.
pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') {
        app.request_quit();
        return;
    }

    if matches!(key.code, KeyCode::Tab | KeyCode::BackTab) {
        app.toggle_pane();
        return;
    }

    let now = Instant::now();
    match app.pane() {
        Pane::Guides => handle_guides_key(app, key),
        Pane::Testimonials => handle_testimonials_key(app, key, now),
    }
}

fn handle_guides_key(app: &mut App, key: KeyEvent) {
    if is_ctrl_char(key, 'f') {
        app.cycle_facet();
        return;
    }
    match key.code {
        KeyCode::Esc => {
            if app.browse().criteria().search.is_empty() {
                app.request_quit();
            } else {
                app.search_clear();
            }
        }
        KeyCode::Backspace => app.search_pop(),
        KeyCode::Left | KeyCode::PageUp => app.prev_page(),
        KeyCode::Right | KeyCode::PageDown => app.next_page(),
        KeyCode::Home => app.goto_page(1),
        KeyCode::End => app.goto_page(usize::MAX),
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.search_push(ch);
        }
        _ => {}
    }
}

fn handle_testimonials_key(app: &mut App, key: KeyEvent, now: Instant) {
    match key.code {
        KeyCode::Esc => app.request_quit(),
        KeyCode::Left => app.advance_carousel(Direction::Prev, now),
        KeyCode::Right => app.advance_carousel(Direction::Next, now),
        KeyCode::Char(ch) if ch.is_ascii_digit() && ch != '0' => {
            let index = ch.to_digit(10).unwrap_or(1) as usize;
            app.jump_carousel(index - 1, now);
        }
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, ch: char) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char(ch)
}
