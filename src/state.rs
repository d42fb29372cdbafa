use std::path::PathBuf;

use eframe::egui::Color32;

use crate::color::generate_palette;
use crate::histogram::Histogram;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// Everything the window draws, computed once before it opens.
pub struct AppState {
    /// File the histogram was built from.
    pub source: PathBuf,

    /// Binned counts, one series per CSV column.
    pub histogram: Histogram,

    /// One colour per series, same order as `histogram.series`.
    pub colors: Vec<Color32>,
}

impl AppState {
    pub fn new(source: PathBuf, histogram: Histogram) -> Self {
        let colors = generate_palette(histogram.series.len());
        Self {
            source,
            histogram,
            colors,
        }
    }

    /// One-line description for the top bar.
    pub fn summary(&self) -> String {
        let hist = &self.histogram;
        if hist.is_empty() {
            return format!("{}: no values", self.source.display());
        }
        format!(
            "{}: {} values in {} bins of width {}",
            self.source.display(),
            hist.total(),
            hist.bin_count(),
            hist.bin_width()
        )
    }
}
