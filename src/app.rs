// src/app.rs
use std::time::Duration;

use eframe::egui;

use crate::jobs::AnalysisJobs;
use crate::state::AppState;

pub struct DealApp {
    state: AppState,
    jobs: AnalysisJobs,
}

impl DealApp {
    pub fn new() -> Self {
        Self {
            state: AppState::new(),
            jobs: AnalysisJobs::new(),
        }
    }

    fn drain_job_messages(&mut self) {
        while let Ok(outcome) = self.jobs.try_recv_outcome() {
            self.state.apply_outcome(outcome.result);
        }
    }
}

impl eframe::App for DealApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.drain_job_messages();

        egui::CentralPanel::default().show(ctx, |ui| {
            crate::ui::deal_form::show_deal_form(ui, &mut self.state, &self.jobs);

            if let Some(result) = &self.state.result {
                crate::ui::result::show_result_panel(ui, result);
            }
        });

        // A worker can finish while no input events arrive; keep polling
        // until the outstanding request settles.
        if self.state.loading {
            ctx.request_repaint_after(Duration::from_millis(100));
        }
    }
}
