use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use crate::content::{CountryGuide, Testimonial};
use crate::ui::app::{App, Pane};
use crate::ui::browse::{BrowseState, FacetBucket};
use crate::ui::carousel::CarouselState;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{layout_regions, split_body};
use crate::ui::theme::{
    ACCENT_GOLD, FOCUS_BORDER, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT, PRIMARY_BLUE, STATUS_OK,
};

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    frame.render_widget(Header::new().widget(app), header);
    frame.render_widget(Clear, body);

    let (guides_area, testimonials_area) = split_body(body);
    draw_guides(frame, guides_area, app.browse(), app.pane() == Pane::Guides);
    draw_testimonials(
        frame,
        testimonials_area,
        app.carousel(),
        app.pane() == Pane::Testimonials,
    );

    frame.render_widget(Footer::new().widget(footer), footer);
}

fn pane_block(title: &'static str, focused: bool) -> Block<'static> {
    let border = if focused { FOCUS_BORDER } else { GLOBAL_BORDER };
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
}

fn draw_guides(frame: &mut Frame<'_>, area: Rect, browse: &BrowseState<CountryGuide>, focused: bool) {
    let mut lines = Vec::new();

    let cursor = if focused { "▏" } else { "" };
    lines.push(Line::from(vec![
        Span::styled("Search: ", Style::default().fg(MUTED_TEXT)),
        Span::styled(
            format!("{}{}", browse.criteria().search, cursor),
            Style::default().fg(HEADER_TEXT),
        ),
    ]));
    lines.push(Line::from(vec![
        Span::styled("Universities: ", Style::default().fg(MUTED_TEXT)),
        Span::styled(
            browse.criteria().facet.label(browse.thresholds()),
            Style::default().fg(ACCENT_GOLD),
        ),
    ]));
    lines.push(Line::from(""));

    if browse.is_loading() {
        lines.push(Line::from(Span::styled(
            "Loading country guides...",
            Style::default().fg(MUTED_TEXT),
        )));
    } else {
        let view = browse.view();
        if view.visible.is_empty() {
            lines.push(Line::from(Span::styled(
                "No Matches Found",
                Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
            )));
            let detail = if browse.criteria().search.is_empty()
                && browse.criteria().facet == FacetBucket::All
            {
                "No country guides are available at the moment.".to_string()
            } else {
                format!(
                    "Your search for \"{}\" did not return any results.",
                    browse.criteria().search
                )
            };
            lines.push(Line::from(Span::styled(
                detail,
                Style::default().fg(MUTED_TEXT),
            )));
        } else {
            for guide in &view.visible {
                lines.push(Line::from(vec![
                    Span::styled(
                        format!("{} ", guide.name),
                        Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(
                        format!("🎓 {} universities", guide.university_count),
                        Style::default().fg(ACCENT_GOLD),
                    ),
                ]));
                lines.push(Line::from(Span::styled(
                    format!("  {}", guide.summary(120)),
                    Style::default().fg(MUTED_TEXT),
                )));
                lines.push(Line::from(Span::styled(
                    format!("  /country-guides/{}", guide.guide_slug()),
                    Style::default().fg(PRIMARY_BLUE).add_modifier(Modifier::DIM),
                )));
                lines.push(Line::from(""));
            }

            // Pagination bar only when there is more than one page.
            if view.total_pages > 1 {
                let mut spans = vec![Span::styled(
                    "Prev ",
                    Style::default().fg(if view.page > 1 { HEADER_TEXT } else { MUTED_TEXT }),
                )];
                for n in 1..=view.total_pages {
                    let style = if n == view.page {
                        Style::default().fg(ACCENT_GOLD).add_modifier(Modifier::BOLD)
                    } else {
                        Style::default().fg(HEADER_TEXT)
                    };
                    spans.push(Span::styled(format!("[{}] ", n), style));
                }
                spans.push(Span::styled(
                    "Next",
                    Style::default().fg(if view.page < view.total_pages {
                        HEADER_TEXT
                    } else {
                        MUTED_TEXT
                    }),
                ));
                spans.push(Span::styled(
                    format!("  · {} matches", view.filtered_count),
                    Style::default().fg(MUTED_TEXT),
                ));
                lines.push(Line::from(spans));
            }
        }
    }

    let widget = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(pane_block(" Guides ", focused));
    frame.render_widget(widget, area);
}

fn draw_testimonials(
    frame: &mut Frame<'_>,
    area: Rect,
    carousel: &CarouselState<Testimonial>,
    focused: bool,
) {
    let mut lines = Vec::new();

    if carousel.is_loading() {
        lines.push(Line::from(Span::styled(
            "Loading testimonials...",
            Style::default().fg(MUTED_TEXT),
        )));
    } else if let Some(testimonial) = carousel.current() {
        lines.push(Line::from(vec![
            Span::styled(
                format!("({}) ", testimonial.avatar_label()),
                Style::default().fg(ACCENT_GOLD).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                testimonial.name.clone(),
                Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
            ),
        ]));
        if !testimonial.designation.is_empty() {
            lines.push(Line::from(Span::styled(
                testimonial.designation.clone(),
                Style::default().fg(MUTED_TEXT),
            )));
        }
        if !testimonial.company.is_empty() {
            lines.push(Line::from(Span::styled(
                testimonial.company.clone(),
                Style::default().fg(MUTED_TEXT),
            )));
        }

        let stars = usize::from(testimonial.stars());
        lines.push(Line::from(vec![
            Span::styled("★".repeat(stars), Style::default().fg(ACCENT_GOLD)),
            Span::styled("☆".repeat(5 - stars), Style::default().fg(MUTED_TEXT)),
        ]));
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("\u{201c}{}\u{201d}", testimonial.content),
            Style::default().fg(HEADER_TEXT),
        )));
        lines.push(Line::from(""));

        // Dot markers with the focused slide highlighted.
        let mut dots = Vec::new();
        for index in 0..carousel.len() {
            let (glyph, color) = if index == carousel.focused() {
                ("● ", ACCENT_GOLD)
            } else {
                ("○ ", MUTED_TEXT)
            };
            dots.push(Span::styled(glyph, Style::default().fg(color)));
        }
        lines.push(Line::from(dots));

        if carousel.len() > 1 {
            let status = if carousel.is_paused() {
                Span::styled("⏸ Auto-scroll paused", Style::default().fg(MUTED_TEXT))
            } else {
                Span::styled("▶ Auto-scrolling", Style::default().fg(STATUS_OK))
            };
            lines.push(Line::from(status));
        }
    } else {
        lines.push(Line::from(Span::styled(
            "No testimonials available at the moment.",
            Style::default().fg(MUTED_TEXT),
        )));
    }

    let widget = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(pane_block(" Student Reviews ", focused));
    frame.render_widget(widget, area);
}
