//! Plot header panel.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::styles::ColorTheme;

/// Render the header with the source file and point counts.
pub fn render_header(frame: &mut Frame, area: Rect, source: &str, points: usize, computed: usize) {
    let theme = ColorTheme::default();
    let text = vec![Line::from(vec![
        Span::styled("SmoothPlot", theme.title_style()),
        Span::raw(format!(" | {source} | {points} points, {computed} smoothed")),
    ])];

    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(theme.muted_style());

    let paragraph = Paragraph::new(text).block(block);
    frame.render_widget(paragraph, area);
}
