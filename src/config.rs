use std::path::PathBuf;

use crate::histogram::Binning;

/// Input file read from the working directory.
pub const DATA_FILE: &str = "data.csv";

/// Fixed run settings. There are no flags; logging is controlled with
/// `RUST_LOG`.
#[derive(Debug, Clone)]
pub struct Settings {
    pub data_path: PathBuf,
    pub binning: Binning,
    pub window_title: String,
    pub inner_size: [f32; 2],
    pub min_inner_size: [f32; 2],
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DATA_FILE),
            binning: Binning::Auto,
            window_title: "Histogram".to_string(),
            inner_size: [1000.0, 700.0],
            min_inner_size: [400.0, 300.0],
        }
    }
}
