use eframe::egui::{self, Ui};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top bar: source summary and per-column totals.
pub fn top_bar(ui: &mut Ui, state: &AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.label(state.summary());

        if state.histogram.series.len() > 1 {
            ui.separator();
            ui.label(format!("{} columns", state.histogram.series.len()));
        }
    });
}
