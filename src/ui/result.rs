// src/ui/result.rs
use eframe::egui;

use crate::api::AnalysisResult;

pub fn show_result_panel(ui: &mut egui::Ui, result: &AnalysisResult) {
    ui.add_space(8.0);
    ui.group(|ui| {
        ui.set_width(ui.available_width());

        ui.horizontal(|ui| {
            ui.label(egui::RichText::new("Expected Range:").strong());
            ui.label(format_expected_range(&result.expected_range));
        });
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new("Verdict:").strong());
            ui.label(&result.verdict);
        });
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new("AI Suggestion:").strong());
            ui.label(&result.suggestion);
        });
    });
}

/// Two-decimal, currency-prefixed bounds, e.g. "$100.50 - $200.25".
pub fn format_expected_range(range: &[f64; 2]) -> String {
    format!("${:.2} - ${:.2}", range[0], range[1])
}
