//! Plot footer panel.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::styles::ColorTheme;

/// Render the footer panel with keyboard shortcuts.
///
/// The raw-value hint is only shown when there is a raw series to toggle.
pub fn render_footer(frame: &mut Frame, area: Rect, has_raw: bool) {
    let theme = ColorTheme::default();
    let mut spans = vec![
        Span::styled("q", theme.key_style()),
        Span::raw(": quit"),
    ];
    if has_raw {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled("v", theme.key_style()));
        spans.push(Span::raw(": raw values"));
    }

    let block = Block::default().borders(Borders::TOP);
    let paragraph = Paragraph::new(vec![Line::from(spans)]).block(block);
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn footer_row(has_raw: bool) -> String {
        let backend = TestBackend::new(80, 3);
        let mut terminal = Terminal::new(backend).unwrap();
        let buf = terminal
            .draw(|frame| {
                let area = frame.area();
                render_footer(frame, area, has_raw);
            })
            .unwrap();

        // Row 1 (after the border) holds the key hints
        (0..buf.area.width)
            .map(|x| buf.buffer[(x, 1)].symbol().to_string())
            .collect()
    }

    #[test]
    fn render_footer_contains_quit_key() {
        assert!(footer_row(false).contains("quit"));
    }

    #[test]
    fn render_footer_raw_hint_only_with_raw() {
        assert!(footer_row(true).contains("raw values"));
        assert!(!footer_row(false).contains("raw values"));
    }

    #[test]
    fn render_footer_small_area() {
        let backend = TestBackend::new(20, 2);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                render_footer(frame, area, true);
            })
            .unwrap();
    }
}
