//! Terminal front end: prints results and the dashboard, and follows
//! sign-in changes.

use crate::chart::TerminalChart;
use crate::flow::{load_dashboard, DashboardView, ResultsView, SaveStatus};
use crate::session::AuthEvents;
use cce_core::{AuthEvent, EmissionResult, PersistenceGateway, RawInput};
use cce_data::{render_history, ChartRenderer, DisplayData, HistorySummary};
use cce_utils::numbers::to_fixed_1;
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Calculation output in `--json` mode.
#[derive(Serialize)]
struct ResultsJson<'a> {
    input: &'a RawInput,
    emissions: &'a EmissionResult,
    display: &'a DisplayData,
}

pub struct Shell<W: Write> {
    out: W,
    chart: TerminalChart,
    format: OutputFormat,
}

impl<W: Write> Shell<W> {
    pub fn new(out: W, format: OutputFormat) -> Self {
        Self {
            out,
            chart: TerminalChart::new(),
            format,
        }
    }

    pub fn chart(&self) -> &TerminalChart {
        &self.chart
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn emit(&mut self, lines: &[String]) {
        for line in lines {
            if let Err(err) = writeln!(self.out, "{}", line) {
                log::error!("shell: write failed: {}", err);
                return;
            }
        }
    }

    fn emit_json<T: Serialize>(&mut self, value: &T) {
        match serde_json::to_string_pretty(value) {
            Ok(json) => self.emit(&[json]),
            Err(err) => log::error!("shell: could not serialize output: {}", err),
        }
    }

    /// Replace the dashboard panel with `view`.
    pub fn show_dashboard(&mut self, view: &DashboardView) {
        match view {
            DashboardView::Summary(HistorySummary::HasData(history)) => {
                render_history(&mut self.chart, history)
            }
            _ => self.chart.clear(),
        }

        if self.format == OutputFormat::Json {
            self.emit_json(view);
            return;
        }
        let mut lines = vec![view.text()];
        if let DashboardView::Summary(HistorySummary::HasData(history)) = view {
            lines.push(format!(
                "Daily Average: {} kg CO₂e/day",
                to_fixed_1(history.daily_average())
            ));
        }
        if let Some(handle) = self.chart.active() {
            lines.extend(handle.lines.iter().cloned());
        }
        self.emit(&lines);
    }

    pub fn show_save_status(&mut self, status: &SaveStatus) {
        if self.format == OutputFormat::Json {
            return;
        }
        let line = match status {
            SaveStatus::Saved(id) => format!("Saved as report {}.", id),
            SaveStatus::SkippedSignedOut => "Log in to save this calculation.".to_string(),
            SaveStatus::Failed(_) => "Could not save this calculation.".to_string(),
        };
        self.emit(&[line]);
    }

    /// React to a sign-in change. Signing in loads the user's dashboard,
    /// signing out clears it.
    pub async fn on_auth_event<G>(&mut self, event: &AuthEvent, gateway: &G)
    where
        G: PersistenceGateway + ?Sized,
    {
        let view = match event {
            AuthEvent::SignedIn(user) => load_dashboard(gateway, &Some(user.clone())).await,
            AuthEvent::SignedOut => DashboardView::LoginPrompt,
        };
        self.show_dashboard(&view);
    }

    /// Handle the current sign-in state, then every change until the session ends.
    pub async fn follow_auth<G>(&mut self, events: &mut AuthEvents, gateway: &G)
    where
        G: PersistenceGateway + ?Sized,
    {
        let current = events.current();
        self.on_auth_event(&current, gateway).await;
        while let Some(event) = events.next().await {
            self.on_auth_event(&event, gateway).await;
        }
        log::debug!("shell: auth session closed");
    }
}

impl<W: Write> ResultsView for Shell<W> {
    fn show_results(&mut self, input: &RawInput, result: &EmissionResult, display: &DisplayData) {
        match self.format {
            OutputFormat::Json => self.emit_json(&ResultsJson {
                input,
                emissions: result,
                display,
            }),
            OutputFormat::Text => {
                let lines = display.lines();
                self.emit(&lines);
            }
        }
    }
}
