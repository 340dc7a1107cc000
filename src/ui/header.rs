use ratatui::layout::Alignment;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::content::ContentRecord;
use crate::ui::app::App;
use crate::ui::theme::{ACCENT_GOLD, GLOBAL_BORDER, HEADER_TEXT};

pub struct Header;

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}

impl Header {
    pub fn new() -> Self {
        Self
    }

    /// Title plus the stats strip: countries covered and universities
    /// listed across the unfiltered snapshot.
    pub fn widget(&self, app: &App) -> Paragraph<'static> {
        let browse = app.browse();
        let stats = if browse.is_loading() {
            "loading...".to_string()
        } else {
            let countries = browse.records().len();
            let universities: u32 = browse.records().iter().map(|g| g.facet_count()).sum();
            format!(
                "{} countries covered · {} universities listed",
                countries, universities
            )
        };

        let line = Line::from(vec![
            Span::styled(
                " Country Study Guides ",
                Style::default()
                    .fg(ACCENT_GOLD)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("│ {}", stats),
                Style::default().fg(HEADER_TEXT),
            ),
        ]);

        Paragraph::new(line).alignment(Alignment::Left).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
