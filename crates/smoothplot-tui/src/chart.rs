//! Line chart of the smoothed series.

use ratatui::layout::Rect;
use ratatui::symbols::Marker;
use ratatui::text::Span;
use ratatui::widgets::{Axis, Block, Borders, Chart, Dataset, GraphType};
use ratatui::Frame;

use smoothplot_core::PlotSeries;

use crate::styles::ColorTheme;

/// Chart title.
pub const TITLE: &str = "Value vs Step";
/// X axis label.
pub const X_LABEL: &str = "Step";
/// Y axis label.
pub const Y_LABEL: &str = "Value";

/// Widen a degenerate or absent range so the axis has a span.
#[must_use]
pub fn axis_bounds(range: Option<(f64, f64)>) -> [f64; 2] {
    match range {
        None => [0.0, 1.0],
        Some((lo, hi)) if (hi - lo).abs() < f64::EPSILON => [lo - 1.0, hi + 1.0],
        Some((lo, hi)) => [lo, hi],
    }
}

/// Format an axis tick. Whole numbers print without decimals.
#[must_use]
pub fn format_tick(v: f64) -> String {
    if v.fract() == 0.0 && v.abs() < 1e12 {
        format!("{v:.0}")
    } else {
        format!("{v:.2}")
    }
}

fn axis_labels(bounds: [f64; 2]) -> Vec<Span<'static>> {
    let mid = (bounds[0] + bounds[1]) / 2.0;
    vec![
        Span::raw(format_tick(bounds[0])),
        Span::raw(format_tick(mid)),
        Span::raw(format_tick(bounds[1])),
    ]
}

/// Render `smoothed` against `Step`, optionally over the raw values.
///
/// Each contiguous run of smoothed values is drawn as its own line so that
/// missing rows leave a gap.
pub fn render_chart(frame: &mut Frame, area: Rect, series: &PlotSeries, show_raw: bool) {
    let theme = ColorTheme::default();
    let show_raw = show_raw && series.has_raw;

    let segments = series.smoothed_segments();
    let raw = if show_raw {
        series.raw_points()
    } else {
        Vec::new()
    };

    let mut datasets = Vec::with_capacity(segments.len() + 1);
    if show_raw {
        datasets.push(
            Dataset::default()
                .name("Value")
                .marker(Marker::Dot)
                .graph_type(GraphType::Scatter)
                .style(theme.raw_style())
                .data(&raw),
        );
    }
    for (i, segment) in segments.iter().enumerate() {
        let mut dataset = Dataset::default()
            .marker(Marker::Braille)
            .graph_type(GraphType::Line)
            .style(theme.smoothed_style())
            .data(segment);
        // Only the first run is named so the legend lists the series once.
        if i == 0 {
            dataset = dataset.name("smoothed");
        }
        datasets.push(dataset);
    }

    let x_bounds = axis_bounds(series.x_bounds());
    let y_bounds = axis_bounds(series.y_bounds(show_raw));

    let chart = Chart::new(datasets)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(Span::styled(format!(" {TITLE} "), theme.title_style())),
        )
        .x_axis(
            Axis::default()
                .title(X_LABEL)
                .style(theme.axis_style())
                .bounds(x_bounds)
                .labels(axis_labels(x_bounds)),
        )
        .y_axis(
            Axis::default()
                .title(Y_LABEL)
                .style(theme.axis_style())
                .bounds(y_bounds)
                .labels(axis_labels(y_bounds)),
        );

    frame.render_widget(chart, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::buffer::Buffer;
    use ratatui::Terminal;
    use std::path::Path;

    fn series(data: &str) -> PlotSeries {
        PlotSeries::from_reader(data.as_bytes(), Path::new("t.csv")).unwrap()
    }

    fn sample() -> PlotSeries {
        series("Step,Value,smoothed\n0,10,\n1,20,\n2,30,30.0\n3,40,40.0\n4,50,50.0\n5,60,\n6,70,\n")
    }

    fn render(width: u16, height: u16, series: &PlotSeries, show_raw: bool) -> Buffer {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        let buf = terminal
            .draw(|frame| {
                let area = frame.area();
                render_chart(frame, area, series, show_raw);
            })
            .unwrap()
            .buffer
            .clone();
        buf
    }

    fn text(buf: &Buffer) -> String {
        let mut out = String::new();
        for y in 0..buf.area.height {
            for x in 0..buf.area.width {
                out.push_str(buf[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn axis_bounds_defaults() {
        assert_eq!(axis_bounds(None), [0.0, 1.0]);
        assert_eq!(axis_bounds(Some((5.0, 5.0))), [4.0, 6.0]);
        assert_eq!(axis_bounds(Some((1.0, 9.0))), [1.0, 9.0]);
    }

    #[test]
    fn tick_format() {
        assert_eq!(format_tick(30.0), "30");
        assert_eq!(format_tick(-2.0), "-2");
        assert_eq!(format_tick(1.23456), "1.23");
    }

    #[test]
    fn chart_has_title_and_axis_labels() {
        let buf = render(80, 24, &sample(), false);
        let content = text(&buf);
        assert!(content.contains(TITLE));
        assert!(content.contains(X_LABEL));
        assert!(content.contains(Y_LABEL));
        // y axis spans the smoothed range only
        assert!(content.contains("50"));
        assert!(!content.contains("70"));
    }

    #[test]
    fn raw_overlay_widens_y_axis() {
        let buf = render(80, 24, &sample(), true);
        assert!(text(&buf).contains("70"));
    }

    #[test]
    fn raw_overlay_ignored_without_value_column() {
        let s = series("Step,smoothed\n0,1\n1,2\n");
        render(80, 24, &s, true);
    }

    #[test]
    fn empty_series_does_not_panic() {
        let s = series("Step,Value,smoothed\n");
        render(80, 24, &s, false);
        render(80, 24, &s, true);
    }

    #[test]
    fn gaps_do_not_panic() {
        let s = series("Step,smoothed\n0,1\n1,\n2,3\n3,\n4,5\n");
        render(40, 12, &s, false);
    }

    #[test]
    fn tiny_area_does_not_panic() {
        render(8, 4, &sample(), true);
    }
}
