//! Calculation and dashboard pipelines.
//!
//! A calculation runs validate → calculate → format → show → save. Results
//! are shown before the save is attempted and a failed save never turns into
//! an error for the caller. The dashboard lists, aggregates in full, and only
//! then hands a finished view back for a single render.

use cce_core::{
    AuthProvider, EmissionResult, InvalidInputError, NewRecord, PersistenceError,
    PersistenceGateway, RawInput, RecordId,
};
use cce_data::{aggregate, format_result, DisplayData, HistorySummary};
use serde::Serialize;

/// Where calculation results are shown.
pub trait ResultsView {
    /// `display` is derived from `result`, which was computed from `input`.
    fn show_results(&mut self, input: &RawInput, result: &EmissionResult, display: &DisplayData);
}

/// What happened to the report after the results were shown.
#[derive(Debug, Clone, PartialEq)]
pub enum SaveStatus {
    Saved(RecordId),
    /// Nobody signed in; nothing attempted
    SkippedSignedOut,
    Failed(PersistenceError),
}

#[derive(Debug, Clone, PartialEq)]
pub struct CalculationOutcome {
    pub result: EmissionResult,
    pub display: DisplayData,
    pub record: NewRecord,
    pub save: SaveStatus,
}

/// Calculation pipeline with its collaborators injected.
pub struct CalculationFlow<'a, G, A> {
    gateway: &'a G,
    auth: &'a A,
}

impl<'a, G: PersistenceGateway, A: AuthProvider> CalculationFlow<'a, G, A> {
    pub fn new(gateway: &'a G, auth: &'a A) -> Self {
        Self { gateway, auth }
    }

    /// Run one calculation. Invalid input stops before anything is computed,
    /// shown or saved.
    pub async fn submit<V: ResultsView + ?Sized>(
        &self,
        raw: RawInput,
        view: &mut V,
    ) -> Result<CalculationOutcome, InvalidInputError> {
        let validated = raw.validate()?;
        let result = validated.calculate();
        let display = format_result(&result);
        view.show_results(validated.raw(), &result, &display);

        let record = NewRecord::cooking(validated.raw(), &result);
        let save = self.save(&record).await;
        Ok(CalculationOutcome {
            result,
            display,
            record,
            save,
        })
    }

    async fn save(&self, record: &NewRecord) -> SaveStatus {
        let Some(user) = self.auth.current_user() else {
            log::debug!("flow: no signed-in user, calculation not saved");
            return SaveStatus::SkippedSignedOut;
        };
        match self.gateway.append(&user, record).await {
            Ok(id) => {
                log::info!("Calculation saved for user: {}", user.display_name());
                SaveStatus::Saved(id)
            }
            Err(err) => {
                log::error!("Error saving calculation: {}", err);
                SaveStatus::Failed(err)
            }
        }
    }
}

/// Everything the dashboard panel can show.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "view", content = "summary", rename_all = "snake_case")]
pub enum DashboardView {
    LoginPrompt,
    Summary(HistorySummary),
}

impl DashboardView {
    pub fn text(&self) -> String {
        match self {
            DashboardView::LoginPrompt => "Please log in.".to_string(),
            DashboardView::Summary(summary) => summary.text(),
        }
    }
}

/// Load and aggregate the signed-in user's history.
///
/// A failed listing degrades to the empty summary after logging.
pub async fn load_dashboard<G, A>(gateway: &G, auth: &A) -> DashboardView
where
    G: PersistenceGateway + ?Sized,
    A: AuthProvider + ?Sized,
{
    let Some(user) = auth.current_user() else {
        return DashboardView::LoginPrompt;
    };
    match gateway.list(&user.id).await {
        Ok(records) => DashboardView::Summary(aggregate(&records)),
        Err(err) => {
            log::error!("Error loading dashboard for {}: {}", user.id, err);
            DashboardView::Summary(HistorySummary::NoData)
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use cce_core::{FuelType, StoredRecord, User};
    use std::cell::RefCell;

    /// Gateway that records calls and can be told to fail.
    #[derive(Default)]
    pub(crate) struct SpyGateway {
        pub appended: RefCell<Vec<(User, NewRecord)>>,
        pub list_calls: RefCell<usize>,
        pub stored: Vec<StoredRecord>,
        pub fail: bool,
    }

    impl PersistenceGateway for SpyGateway {
        async fn append(
            &self,
            owner: &User,
            record: &NewRecord,
        ) -> Result<RecordId, PersistenceError> {
            if self.fail {
                return Err(PersistenceError::Backend("offline".to_string()));
            }
            let mut appended = self.appended.borrow_mut();
            appended.push((owner.clone(), record.clone()));
            Ok(appended.len() as RecordId)
        }

        async fn list(&self, _owner_id: &str) -> Result<Vec<StoredRecord>, PersistenceError> {
            *self.list_calls.borrow_mut() += 1;
            if self.fail {
                return Err(PersistenceError::Backend("offline".to_string()));
            }
            Ok(self.stored.clone())
        }
    }

    #[derive(Default)]
    struct CapturingView {
        shown: Vec<DisplayData>,
    }

    impl ResultsView for CapturingView {
        fn show_results(&mut self, input: &RawInput, result: &EmissionResult, display: &DisplayData) {
            assert_eq!(&format_result(result), display);
            assert_eq!(result, &input.validate().unwrap().calculate());
            self.shown.push(display.clone());
        }
    }

    pub(crate) fn cook() -> User {
        User::new("u1", Some("cook@example.com".to_string()))
    }

    #[tokio::test]
    async fn signed_in_calculation_is_shown_then_saved() {
        let gateway = SpyGateway::default();
        let auth = Some(cook());
        let mut view = CapturingView::default();

        let outcome = CalculationFlow::new(&gateway, &auth)
            .submit(RawInput::new(FuelType::Wood, 10.0, 2.0), &mut view)
            .await
            .unwrap();

        assert_eq!(outcome.result.total(), 384.0);
        assert_eq!(outcome.save, SaveStatus::Saved(1));
        assert_eq!(view.shown.len(), 1);
        assert_eq!(view.shown[0], outcome.display);

        let appended = gateway.appended.borrow();
        assert_eq!(appended.len(), 1);
        assert_eq!(appended[0].0, cook());
        assert_eq!(appended[0].1, outcome.record);
        assert_eq!(appended[0].1.total_emissions, 384.0);
    }

    #[tokio::test]
    async fn signed_out_calculation_is_shown_but_not_saved() {
        let gateway = SpyGateway::default();
        let auth: Option<User> = None;
        let mut view = CapturingView::default();

        let outcome = CalculationFlow::new(&gateway, &auth)
            .submit(RawInput::new(FuelType::Lpg, 2.0, 1.0), &mut view)
            .await
            .unwrap();

        assert_eq!(outcome.save, SaveStatus::SkippedSignedOut);
        assert_eq!(view.shown.len(), 1);
        assert!(gateway.appended.borrow().is_empty());
    }

    #[tokio::test]
    async fn invalid_input_touches_nothing() {
        let gateway = SpyGateway::default();
        let auth = Some(cook());
        let flow = CalculationFlow::new(&gateway, &auth);

        for raw in [
            RawInput::new(FuelType::Wood, -1.0, 2.0),
            RawInput::new(FuelType::Wood, 1.0, -0.5),
            RawInput::from_text("wood", "many", "2"),
            RawInput::from_text("wood", "2", ""),
        ] {
            let mut view = CapturingView::default();
            assert!(flow.submit(raw, &mut view).await.is_err());
            assert!(view.shown.is_empty());
        }
        assert!(gateway.appended.borrow().is_empty());
    }

    #[tokio::test]
    async fn failed_save_keeps_results() {
        let gateway = SpyGateway {
            fail: true,
            ..SpyGateway::default()
        };
        let auth = Some(cook());
        let mut view = CapturingView::default();

        let outcome = CalculationFlow::new(&gateway, &auth)
            .submit(RawInput::new(FuelType::Charcoal, 1.0, 1.0), &mut view)
            .await
            .expect("save failure is not a calculation error");

        assert!(matches!(outcome.save, SaveStatus::Failed(PersistenceError::Backend(_))));
        assert_eq!(view.shown.len(), 1);
    }

    #[tokio::test]
    async fn overflowing_input_is_rejected_and_history_kept() {
        let db = cce_db::Database::new().unwrap();
        let auth = Some(cook());
        let mut view = CapturingView::default();
        let flow = CalculationFlow::new(&db, &auth);
        flow.submit(RawInput::new(FuelType::Wood, 10.0, 2.0), &mut view)
            .await
            .unwrap();

        let err = flow
            .submit(RawInput::new(FuelType::Wood, 1e307, 0.0), &mut view)
            .await
            .unwrap_err();
        assert_eq!(err.reason, cce_core::InvalidReason::OutOfRange);
        assert_eq!(view.shown.len(), 1);

        let dashboard = load_dashboard(&db, &auth).await;
        assert_eq!(
            dashboard.text(),
            "Total Emissions: 384.0 kg CO₂e (from 1 report(s))"
        );
    }

    #[tokio::test]
    async fn dashboard_requires_sign_in() {
        let gateway = SpyGateway::default();
        let view = load_dashboard(&gateway, &None::<User>).await;
        assert_eq!(view, DashboardView::LoginPrompt);
        assert_eq!(view.text(), "Please log in.");
        assert_eq!(*gateway.list_calls.borrow(), 0);
    }

    #[tokio::test]
    async fn dashboard_without_reports_is_empty() {
        let gateway = SpyGateway::default();
        let view = load_dashboard(&gateway, &Some(cook())).await;
        assert_eq!(view, DashboardView::Summary(HistorySummary::NoData));
        assert_eq!(view.text(), "No emissions recorded yet.");
    }

    #[tokio::test]
    async fn dashboard_list_failure_degrades_to_empty() {
        let gateway = SpyGateway {
            fail: true,
            ..SpyGateway::default()
        };
        let view = load_dashboard(&gateway, &Some(cook())).await;
        assert_eq!(view, DashboardView::Summary(HistorySummary::NoData));
        assert_eq!(*gateway.list_calls.borrow(), 1);
    }

    #[tokio::test]
    async fn dashboard_summarizes_saved_reports() {
        let db = cce_db::Database::new().unwrap();
        let auth = Some(cook());
        let mut view = CapturingView::default();
        let flow = CalculationFlow::new(&db, &auth);
        flow.submit(RawInput::new(FuelType::Wood, 10.0, 2.0), &mut view)
            .await
            .unwrap();
        flow.submit(RawInput::new(FuelType::Other, 5.0, 0.0), &mut view)
            .await
            .unwrap();

        let dashboard = load_dashboard(&db, &auth).await;
        assert_eq!(
            dashboard.text(),
            "Total Emissions: 504.0 kg CO₂e (from 2 report(s))"
        );
    }
}
