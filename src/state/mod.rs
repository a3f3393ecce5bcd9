// src/state/mod.rs
use crate::api::{AnalysisResult, AnalyzeError, AnalyzeRequest};

pub mod form;

pub use form::DealForm;

/// Inline error for a submission missing a required field.
pub const REQUIRED_FIELDS_MESSAGE: &str = "Followers and Offer Amount are required.";

// Core application state
#[derive(Debug, Default)]
pub struct AppState {
    pub form: DealForm,

    // Minimal UI state: loading plus an optional inline error. The result
    // and the error are never both populated; submitting clears both.
    pub loading: bool,
    pub error_message: Option<String>,
    pub result: Option<AnalysisResult>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear the previous outcome, then validate. Returns the coerced
    /// request when the form passes; otherwise records the inline error and
    /// stays out of the loading state so no request is issued.
    pub fn prepare_submit(&mut self) -> Option<AnalyzeRequest> {
        self.error_message = None;
        self.result = None;

        if !self.form.has_required_fields() {
            self.error_message = Some(REQUIRED_FIELDS_MESSAGE.to_string());
            return None;
        }

        self.loading = true;
        Some(self.form.to_request())
    }

    /// Leave the loading state and record how the submission settled.
    pub fn apply_outcome(&mut self, outcome: Result<AnalysisResult, AnalyzeError>) {
        self.loading = false;
        match outcome {
            Ok(result) => {
                self.result = Some(result);
                self.error_message = None;
            }
            Err(err) => {
                tracing::error!("analysis request failed: {err}");
                self.error_message = Some(err.user_message());
                self.result = None;
            }
        }
    }
}
