use std::path::Path;

use anyhow::{Context, Result};

use crate::data::loader::load_file;
use crate::data::model::ArrayView;
use crate::histogram::{Binning, Histogram};
use crate::sink::HistogramSink;

/// Load `path`, convert it to numbers and bin it.
pub fn prepare(path: &Path, binning: Binning) -> Result<Histogram> {
    let dataset = load_file(path)?;
    let array = ArrayView::from_dataset(&dataset)
        .with_context(|| format!("converting {} to numbers", path.display()))?;
    Ok(Histogram::compute(&array, binning))
}

/// Build the histogram and hand it to `sink`. The sink is not called when
/// loading or conversion fails.
pub fn run(path: &Path, binning: Binning, sink: &mut dyn HistogramSink) -> Result<()> {
    let histogram = prepare(path, binning)?;
    sink.show(path, histogram)
}
