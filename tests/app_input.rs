//! Key routing: view-layer gestures become controller intents.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use guidedesk::config::Config;
use guidedesk::content::CountryGuide;
use guidedesk::ui::app::{App, Pane};
use guidedesk::ui::input::handle_key;

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn ctrl(ch: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL)
}

fn guides(n: usize) -> Vec<CountryGuide> {
    (0..n)
        .map(|i| CountryGuide {
            id: i as i64,
            name: format!("Country {}", i),
            description: None,
            flag_image: None,
            university_count: i as u32,
        })
        .collect()
}

fn loaded_app(n: usize) -> App {
    let mut app = App::new(&Config::default());
    app.guides_loaded(guides(n));
    app
}

#[test]
fn typing_builds_the_search_and_backspace_edits_it() {
    let mut app = loaded_app(8);
    for ch in ['c', 'o', 'u'] {
        handle_key(&mut app, key(KeyCode::Char(ch)));
    }
    assert_eq!(app.browse().criteria().search, "cou");
    handle_key(&mut app, key(KeyCode::Backspace));
    assert_eq!(app.browse().criteria().search, "co");
}

#[test]
fn escape_clears_search_before_quitting() {
    let mut app = loaded_app(8);
    handle_key(&mut app, key(KeyCode::Char('x')));
    handle_key(&mut app, key(KeyCode::Esc));
    assert!(app.browse().criteria().search.is_empty());
    assert!(!app.should_quit());
    handle_key(&mut app, key(KeyCode::Esc));
    assert!(app.should_quit());
}

#[test]
fn arrows_page_through_the_guides() {
    let mut app = loaded_app(8); // page_size 6 -> 2 pages
    handle_key(&mut app, key(KeyCode::Right));
    assert_eq!(app.browse().page(), 2);
    handle_key(&mut app, key(KeyCode::Right));
    assert_eq!(app.browse().page(), 2, "clamped at the last page");
    handle_key(&mut app, key(KeyCode::Left));
    assert_eq!(app.browse().page(), 1);
}

#[test]
fn ctrl_f_cycles_the_facet_and_resets_the_page() {
    let mut app = loaded_app(20);
    handle_key(&mut app, key(KeyCode::Right));
    assert_eq!(app.browse().page(), 2);
    handle_key(&mut app, ctrl('f'));
    assert_eq!(app.browse().page(), 1);
}

#[test]
fn tab_switches_pane_and_holds_the_carousel() {
    let mut app = loaded_app(0);
    assert_eq!(app.pane(), Pane::Guides);
    handle_key(&mut app, key(KeyCode::Tab));
    assert_eq!(app.pane(), Pane::Testimonials);
    assert!(app.carousel().explicit_hold());
    handle_key(&mut app, key(KeyCode::Tab));
    assert_eq!(app.pane(), Pane::Guides);
    assert!(!app.carousel().explicit_hold());
}

#[test]
fn ctrl_q_quits_from_either_pane() {
    let mut app = loaded_app(0);
    handle_key(&mut app, ctrl('q'));
    assert!(app.should_quit());

    let mut app = loaded_app(0);
    handle_key(&mut app, key(KeyCode::Tab));
    handle_key(&mut app, ctrl('q'));
    assert!(app.should_quit());
}
