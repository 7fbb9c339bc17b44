//! Chart renderer seam.
//!
//! The aggregator only produces data; whoever owns the chart implements this
//! trait and is responsible for tearing down a previous chart before drawing
//! a new one, so at most one chart is ever live.

use crate::history::History;

pub trait ChartRenderer {
    /// Draw one bar per label. `labels` and `values` have equal length.
    fn render_bar_series(&mut self, labels: &[String], values: &[f64]);

    /// Remove the current chart, if any.
    fn clear(&mut self);
}

/// Render a history's series on `renderer`.
pub fn render_history<R: ChartRenderer + ?Sized>(renderer: &mut R, history: &History) {
    let (labels, values) = history.chart_series();
    renderer.render_bar_series(&labels, &values);
}
