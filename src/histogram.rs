//! Histogram binning over an [`ArrayView`].
//!
//! All columns share one set of bin edges so their bars line up in the
//! chart. Bins are half-open `[lo, hi)` except the last, which also holds
//! the maximum.

use crate::data::model::ArrayView;

/// Bin count used when nothing better fits the data.
pub const DEFAULT_BINS: usize = 10;

/// Largest number of bins laid out by [`Binning::Auto`] or [`Binning::Width`].
pub const MAX_UNIT_BINS: usize = 256;

/// How the value range is split into bins.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Binning {
    /// `n` equal-width bins spanning min..=max.
    Count(usize),
    /// Bins of the given width, the first starting at the minimum.
    Width(f64),
    /// One bin per integer for small integral ranges, otherwise
    /// [`DEFAULT_BINS`] equal bins.
    Auto,
}

impl Default for Binning {
    fn default() -> Self {
        Binning::Auto
    }
}

/// Counts for one column of the array.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub name: String,
    pub counts: Vec<u64>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Histogram {
    /// `bin_count() + 1` ascending edges; empty when there were no values.
    pub edges: Vec<f64>,
    pub series: Vec<Series>,
}

/// Resolved bin layout: first and last edge, bin width, number of bins.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Layout {
    start: f64,
    end: f64,
    width: f64,
    bins: usize,
}

impl Histogram {
    pub fn compute(array: &ArrayView, binning: Binning) -> Histogram {
        let Some((min, max)) = array.min_max() else {
            return Histogram::default();
        };

        let layout = Layout::resolve(array, min, max, binning);
        log::debug!(
            "Binning {} values into {} bins of width {} starting at {}",
            array.len(),
            layout.bins,
            layout.width,
            layout.start
        );

        let series = array
            .columns
            .iter()
            .enumerate()
            .map(|(i, column)| {
                let mut counts = vec![0u64; layout.bins];
                for &v in column {
                    counts[layout.index_of(v)] += 1;
                }
                Series {
                    name: format!("column {}", i + 1),
                    counts,
                }
            })
            .collect();

        let edges = (0..=layout.bins).map(|i| layout.edge(i)).collect();

        Histogram { edges, series }
    }

    pub fn bin_count(&self) -> usize {
        self.edges.len().saturating_sub(1)
    }

    pub fn bin_width(&self) -> f64 {
        match self.edges.as_slice() {
            [first, second, ..] => second - first,
            _ => 0.0,
        }
    }

    /// Midpoint of every bin, in order.
    pub fn centers(&self) -> impl Iterator<Item = f64> + '_ {
        self.edges.windows(2).map(|w| w[0] / 2.0 + w[1] / 2.0)
    }

    /// Number of values counted across all series.
    pub fn total(&self) -> u64 {
        self.series.iter().flat_map(|s| s.counts.iter()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

impl Layout {
    fn resolve(array: &ArrayView, min: f64, max: f64, binning: Binning) -> Layout {
        match binning {
            Binning::Count(n) => Layout::counted(min, max, n.max(1)),
            Binning::Width(w) if w.is_finite() && w > 0.0 => {
                let bins = (max / w - min / w).floor() + 1.0;
                if bins.is_finite() && bins <= MAX_UNIT_BINS as f64 {
                    let bins = bins as usize;
                    Layout {
                        start: min,
                        end: min + bins as f64 * w,
                        width: w,
                        bins,
                    }
                } else {
                    log::warn!(
                        "Bin width {w} needs more than {MAX_UNIT_BINS} bins, using {DEFAULT_BINS} bins"
                    );
                    Layout::counted(min, max, DEFAULT_BINS)
                }
            }
            Binning::Width(w) => {
                log::warn!("Ignoring bin width {w}, using {DEFAULT_BINS} bins");
                Layout::counted(min, max, DEFAULT_BINS)
            }
            Binning::Auto => {
                let span = max - min + 1.0;
                let integral = array.values().all(|v| v.fract() == 0.0);
                if integral && span <= MAX_UNIT_BINS as f64 {
                    Layout {
                        start: min - 0.5,
                        end: max + 0.5,
                        width: 1.0,
                        bins: span as usize,
                    }
                } else {
                    Layout::counted(min, max, DEFAULT_BINS)
                }
            }
        }
    }

    fn counted(min: f64, max: f64, bins: usize) -> Layout {
        let (lo, hi) = if min == max {
            (min - 0.5, max + 0.5)
        } else {
            (min, max)
        };
        // Divide before subtracting so ranges near f64::MAX stay finite.
        Layout {
            start: lo,
            end: hi,
            width: hi / bins as f64 - lo / bins as f64,
            bins,
        }
    }

    /// Edge `i` of `0..=bins`; the last one is exactly `end`.
    fn edge(&self, i: usize) -> f64 {
        if i >= self.bins {
            self.end
        } else {
            self.start + i as f64 * self.width
        }
    }

    fn index_of(&self, v: f64) -> usize {
        let index = (v / self.width - self.start / self.width).floor().max(0.0) as usize;
        index.min(self.bins - 1)
    }
}
