//! Bar widgets for [`ChartSpec`] input.

use crate::chart::ChartSpec;
use crate::tui::theme::colors;
use crate::tui::widgets::truncate_str;
use ratatui::{
    prelude::*,
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Widget},
};

/// `BarChart` only takes integers; values are scaled by this factor.
pub const BAR_SCALE: f64 = 10_000.0;

/// Scale a chart value to bar units. Negative and non-finite values draw
/// as empty bars.
#[must_use]
pub fn scaled_value(value: f64) -> u64 {
    if value.is_finite() && value > 0.0 {
        (value * BAR_SCALE).round() as u64
    } else {
        0
    }
}

/// Build a vertical bar chart from a chart spec.
///
/// Bars display the spec's formatted text instead of the scaled integer.
pub fn chart_bar_chart(spec: &ChartSpec, bar_width: u16, bar_gap: u16) -> BarChart<'static> {
    let scheme = colors();
    let label_width = usize::from(bar_width.max(4));
    let bars: Vec<Bar<'static>> = spec
        .bars
        .iter()
        .map(|bar| {
            Bar::default()
                .value(scaled_value(bar.value))
                .text_value(bar.text.clone())
                .label(Line::from(truncate_str(&bar.label, label_width)))
                .style(Style::default().fg(scheme.record_color(&bar.color)))
        })
        .collect();

    BarChart::default()
        .block(
            Block::default()
                .title(format!(" {} ", spec.title))
                .title_bottom(Line::from(vec![
                    Span::styled("■ ", Style::default().fg(scheme.record_color(&spec.legend_color))),
                    Span::styled(spec.legend.clone(), Style::default().fg(scheme.text_muted)),
                ]))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(scheme.border)),
        )
        .bar_width(bar_width)
        .bar_gap(bar_gap)
        .value_style(Style::default().fg(scheme.badge_fg_dark).bold())
        .label_style(Style::default().fg(scheme.text))
        .data(BarGroup::default().bars(&bars))
}

/// A one-line horizontal bar for fractional values, e.g. importances.
pub struct HorizontalBar {
    label: String,
    value: f64,
    max_value: f64,
    text: String,
    color: Color,
    label_width: usize,
}

impl HorizontalBar {
    pub fn new(label: impl Into<String>, value: f64, max_value: f64) -> Self {
        Self {
            label: label.into(),
            value,
            max_value,
            text: format!("{value:.2}"),
            color: colors().primary,
            label_width: 24,
        }
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Text shown after the bar.
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn label_width(mut self, width: usize) -> Self {
        self.label_width = width;
        self
    }

    fn filled(&self, bar_width: usize) -> usize {
        if self.max_value > 0.0 && self.value.is_finite() && self.value > 0.0 {
            let ratio = (self.value / self.max_value).min(1.0);
            (ratio * bar_width as f64).round() as usize
        } else {
            0
        }
    }
}

impl Widget for HorizontalBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 20 || area.height < 1 {
            return;
        }

        let label_width = self.label_width.min(area.width as usize / 3);
        let text_width = 8;
        let bar_width = (area.width as usize).saturating_sub(label_width + text_width + 2);
        let filled = self.filled(bar_width);

        let label = format!(
            "{:width$}",
            truncate_str(&self.label, label_width),
            width = label_width
        );
        let mut line = vec![
            Span::styled(label, Style::default().fg(colors().text)),
            Span::raw(" "),
            Span::styled("█".repeat(filled), Style::default().fg(self.color)),
            Span::styled(
                "░".repeat(bar_width - filled),
                Style::default().fg(colors().muted),
            ),
            Span::raw(" "),
        ];
        line.push(Span::styled(
            format!("{:>7}", self.text),
            Style::default().fg(colors().primary).bold(),
        ));

        Line::from(line).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scaled_value() {
        assert_eq!(scaled_value(0.9121), 9121);
        assert_eq!(scaled_value(3.5487), 35_487);
        assert_eq!(scaled_value(-0.2), 0);
        assert_eq!(scaled_value(f64::NAN), 0);
    }

    #[test]
    fn test_horizontal_bar_fill() {
        let bar = HorizontalBar::new("x", 0.5, 1.0);
        assert_eq!(bar.filled(40), 20);
        let bar = HorizontalBar::new("x", 2.0, 1.0);
        assert_eq!(bar.filled(40), 40);
        let bar = HorizontalBar::new("x", 0.5, 0.0);
        assert_eq!(bar.filled(40), 0);
    }

    #[test]
    fn test_horizontal_bar_renders_text() {
        let area = Rect::new(0, 0, 60, 1);
        let mut buf = Buffer::empty(area);
        HorizontalBar::new("temp_maxima_lag_1", 0.5894, 0.5894)
            .text("58.9%")
            .render(area, &mut buf);
        let rendered: String = buf.content().iter().map(|c| c.symbol()).collect();
        assert!(rendered.starts_with("temp_maxima_lag_1"));
        assert!(rendered.trim_end().ends_with("58.9%"));
    }
}
