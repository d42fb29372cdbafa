use std::path::Path;

use anyhow::{anyhow, Result};
use eframe::egui;

use crate::app::HistogramApp;
use crate::config::Settings;
use crate::histogram::Histogram;
use crate::state::AppState;

/// Final consumer of a computed histogram.
pub trait HistogramSink {
    fn show(&mut self, source: &Path, histogram: Histogram) -> Result<()>;
}

// ---------------------------------------------------------------------------
// Interactive window
// ---------------------------------------------------------------------------

/// Opens a native window and blocks until the user closes it.
pub struct WindowSink {
    title: String,
    options: eframe::NativeOptions,
}

impl WindowSink {
    pub fn new(settings: &Settings) -> Self {
        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size(settings.inner_size)
                .with_min_inner_size(settings.min_inner_size)
                .with_title(&settings.window_title),
            ..Default::default()
        };
        Self {
            title: settings.window_title.clone(),
            options,
        }
    }
}

impl HistogramSink for WindowSink {
    fn show(&mut self, source: &Path, histogram: Histogram) -> Result<()> {
        let state = AppState::new(source.to_path_buf(), histogram);
        log::info!("Opening window: {}", state.summary());

        eframe::run_native(
            &self.title,
            std::mem::take(&mut self.options),
            Box::new(|_cc| Ok(Box::new(HistogramApp::new(state)))),
        )
        .map_err(|e| anyhow!("display window failed: {e}"))
    }
}
