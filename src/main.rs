// src/main.rs
use eframe::egui;
use anyhow::Result;
use tracing_subscriber::EnvFilter;

mod api;
mod app;
mod jobs;
mod state;
mod ui;

use app::DealApp;

fn main() -> Result<()> {
    if let Err(err) = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init()
    {
        eprintln!("Logging disabled: {err}");
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([480.0, 420.0])
            .with_title("Influencer Deal Analyzer"),
        ..Default::default()
    };

    eframe::run_native(
        "Influencer Deal Analyzer",
        options,
        Box::new(|_cc| Box::new(DealApp::new())),
    ).map_err(|e| anyhow::anyhow!("Failed to run application: {}", e))
}
