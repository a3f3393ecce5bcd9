// src/ui/deal_form.rs
use eframe::egui;

use crate::api::Platform;
use crate::jobs::AnalysisJobs;
use crate::state::AppState;

pub fn show_deal_form(ui: &mut egui::Ui, state: &mut AppState, jobs: &AnalysisJobs) {
    ui.heading("Influencer Deal Analyzer");
    ui.add_space(8.0);

    egui::ComboBox::from_label("Platform")
        .selected_text(state.form.platform.label())
        .show_ui(ui, |ui| {
            for platform in Platform::ALL {
                ui.selectable_value(&mut state.form.platform, platform, platform.label());
            }
        });

    ui.add_space(4.0);

    ui.add(
        egui::TextEdit::singleline(&mut state.form.followers)
            .desired_width(f32::INFINITY)
            .hint_text("Followers (e.g., 20000)"),
    );
    ui.add(
        egui::TextEdit::singleline(&mut state.form.engagement_rate)
            .desired_width(f32::INFINITY)
            .hint_text("Engagement Rate (%) (optional)"),
    );
    ui.add(
        egui::TextEdit::singleline(&mut state.form.offer_amount)
            .desired_width(f32::INFINITY)
            .hint_text("Offer Amount (USD)"),
    );

    ui.add_space(8.0);

    // The disabled state is the only guard against resubmission while a
    // request is in flight.
    let label = if state.loading {
        "Analyzing..."
    } else {
        "Analyze Deal"
    };
    if ui
        .add_enabled(!state.loading, egui::Button::new(label))
        .clicked()
    {
        if let Some(request) = state.prepare_submit() {
            jobs.begin_analysis(request);
        }
    }

    if let Some(error) = &state.error_message {
        ui.add_space(8.0);
        ui.colored_label(egui::Color32::RED, error);
    }
}
