//! Plot colors.

use ratatui::style::{Color, Modifier, Style};

/// Color theme for the plot view.
pub struct ColorTheme {
    pub primary: Color,
    pub smoothed: Color,
    pub raw: Color,
    pub axis: Color,
    pub key: Color,
    pub muted: Color,
}

impl Default for ColorTheme {
    fn default() -> Self {
        Self {
            primary: Color::Cyan,
            smoothed: Color::Cyan,
            raw: Color::DarkGray,
            axis: Color::Gray,
            key: Color::Yellow,
            muted: Color::DarkGray,
        }
    }
}

impl ColorTheme {
    /// Style for titles.
    #[must_use]
    pub fn title_style(&self) -> Style {
        Style::default()
            .fg(self.primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for the smoothed line.
    #[must_use]
    pub fn smoothed_style(&self) -> Style {
        Style::default().fg(self.smoothed)
    }

    /// Style for the raw value overlay.
    #[must_use]
    pub fn raw_style(&self) -> Style {
        Style::default().fg(self.raw)
    }

    /// Style for axes and their labels.
    #[must_use]
    pub fn axis_style(&self) -> Style {
        Style::default().fg(self.axis)
    }

    /// Style for key hints.
    #[must_use]
    pub fn key_style(&self) -> Style {
        Style::default().fg(self.key)
    }

    /// Style for secondary text.
    #[must_use]
    pub fn muted_style(&self) -> Style {
        Style::default().fg(self.muted)
    }
}
