// src/jobs.rs
use std::sync::mpsc::{channel, Receiver, Sender, TryRecvError};
use std::thread;

use crate::api::{self, AnalysisResult, AnalyzeError, AnalyzeRequest};

/// Completion message for one submission.
#[derive(Debug)]
pub struct AnalysisOutcome {
    pub result: Result<AnalysisResult, AnalyzeError>,
}

/// Runs analysis requests off the UI thread. Each submission spawns one
/// worker that sends exactly one completion message; the UI drains the
/// channel every frame. Overlapping submissions are not guarded here — the
/// disabled submit button is the only guard, and when two requests are in
/// flight the last message received wins.
pub struct AnalysisJobs {
    outcome_tx: Sender<AnalysisOutcome>,
    outcome_rx: Receiver<AnalysisOutcome>,
}

impl AnalysisJobs {
    pub fn new() -> Self {
        let (outcome_tx, outcome_rx) = channel();
        Self {
            outcome_tx,
            outcome_rx,
        }
    }

    pub fn begin_analysis(&self, request: AnalyzeRequest) {
        let tx = self.outcome_tx.clone();
        thread::spawn(move || {
            let result = api::analyze_deal(&request);
            let _ = tx.send(AnalysisOutcome { result });
        });
    }

    pub fn try_recv_outcome(&self) -> Result<AnalysisOutcome, TryRecvError> {
        self.outcome_rx.try_recv()
    }
}
