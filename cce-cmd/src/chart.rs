//! Text bar chart for the terminal dashboard.

use cce_data::ChartRenderer;
use cce_utils::numbers::to_fixed_1;

/// Width in characters of the longest bar.
pub const BAR_WIDTH: usize = 40;

const BAR_CHAR: char = '█';

/// A drawn chart. Replaced wholesale on every render.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartHandle {
    pub id: u64,
    pub lines: Vec<String>,
}

/// Owns at most one live chart; rendering destroys the previous one first.
#[derive(Debug, Default)]
pub struct TerminalChart {
    active: Option<ChartHandle>,
    next_id: u64,
    destroyed: usize,
}

impl TerminalChart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> Option<&ChartHandle> {
        self.active.as_ref()
    }

    /// How many charts have been torn down so far.
    pub fn destroyed(&self) -> usize {
        self.destroyed
    }

    fn destroy(&mut self) {
        if let Some(handle) = self.active.take() {
            log::debug!("chart: destroyed chart {}", handle.id);
            self.destroyed += 1;
        }
    }
}

fn bar_length(value: f64, max: f64) -> usize {
    if max <= 0.0 || !value.is_finite() || value <= 0.0 {
        return 0;
    }
    ((value / max) * BAR_WIDTH as f64).round() as usize
}

impl ChartRenderer for TerminalChart {
    fn render_bar_series(&mut self, labels: &[String], values: &[f64]) {
        self.destroy();

        let max = values.iter().cloned().fold(0.0, f64::max);
        let label_width = labels.iter().map(|l| l.chars().count()).max().unwrap_or(0);
        let lines = labels
            .iter()
            .zip(values)
            .map(|(label, &value)| {
                let bar: String = std::iter::repeat(BAR_CHAR)
                    .take(bar_length(value, max))
                    .collect();
                format!(
                    "{:<width$} | {} {}",
                    label,
                    bar,
                    to_fixed_1(value),
                    width = label_width
                )
            })
            .collect();

        self.next_id += 1;
        self.active = Some(ChartHandle {
            id: self.next_id,
            lines,
        });
    }

    fn clear(&mut self) {
        self.destroy();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(n: usize) -> Vec<String> {
        (1..=n).map(|i| format!("Report {}", i)).collect()
    }

    #[test]
    fn renders_scaled_bars() {
        let mut chart = TerminalChart::new();
        chart.render_bar_series(&labels(2), &[384.0, 192.0]);
        let handle = chart.active().unwrap();
        assert_eq!(handle.lines.len(), 2);
        assert_eq!(
            handle.lines[0],
            format!("Report 1 | {} 384.0", "█".repeat(BAR_WIDTH))
        );
        assert_eq!(
            handle.lines[1],
            format!("Report 2 | {} 192.0", "█".repeat(BAR_WIDTH / 2))
        );
    }

    #[test]
    fn rerender_tears_down_previous_chart() {
        let mut chart = TerminalChart::new();
        chart.render_bar_series(&labels(1), &[1.0]);
        let first = chart.active().unwrap().id;
        chart.render_bar_series(&labels(3), &[1.0, 2.0, 3.0]);
        let second = chart.active().unwrap();
        assert_ne!(second.id, first);
        assert_eq!(second.lines.len(), 3);
        assert_eq!(chart.destroyed(), 1);
    }

    #[test]
    fn clear_removes_chart_once() {
        let mut chart = TerminalChart::new();
        chart.clear();
        assert_eq!(chart.destroyed(), 0);
        chart.render_bar_series(&labels(1), &[5.0]);
        chart.clear();
        chart.clear();
        assert!(chart.active().is_none());
        assert_eq!(chart.destroyed(), 1);
    }

    #[test]
    fn all_zero_values_draw_empty_bars() {
        let mut chart = TerminalChart::new();
        chart.render_bar_series(&labels(1), &[0.0]);
        assert_eq!(chart.active().unwrap().lines[0], "Report 1 |  0.0");
    }
}
