use eframe::egui::Ui;
use egui_plot::{Bar, BarChart, Legend, Plot};

use crate::state::AppState;

/// Fraction of a bin covered by bars; the rest is the gap between bins.
const BAR_FILL: f64 = 0.9;

// ---------------------------------------------------------------------------
// Histogram plot (central panel)
// ---------------------------------------------------------------------------

/// Render the histogram in the central panel.
///
/// With several columns the bars of one bin sit side by side.
pub fn histogram_plot(ui: &mut Ui, state: &AppState) {
    let hist = &state.histogram;
    if hist.is_empty() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading(format!("{} contains no values", state.source.display()));
        });
        return;
    }

    let n_series = hist.series.len() as f64;
    let bar_width = hist.bin_width() * BAR_FILL / n_series;

    Plot::new("histogram_plot")
        .legend(Legend::default())
        .x_axis_label("Value")
        .y_axis_label("Count")
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for (i, (series, color)) in hist.series.iter().zip(&state.colors).enumerate() {
                // Offset of this series' bar from the bin centre.
                let offset = (i as f64 - (n_series - 1.0) / 2.0) * bar_width;

                let bars: Vec<Bar> = hist
                    .centers()
                    .zip(&series.counts)
                    .map(|(center, &count)| {
                        Bar::new(center + offset, count as f64).width(bar_width)
                    })
                    .collect();

                let chart = BarChart::new(bars).name(&series.name).color(*color);
                plot_ui.bar_chart(chart);
            }
        });
}
