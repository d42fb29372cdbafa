// ---------------------------------------------------------------------------
// Row / Dataset – raw text grid as read from the file
// ---------------------------------------------------------------------------

/// One line of the source file, split into untyped text fields.
pub type Row = Vec<String>;

/// All rows of the source file, in file order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    pub rows: Vec<Row>,
}

impl Dataset {
    pub fn from_rows(rows: Vec<Row>) -> Self {
        Dataset { rows }
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Field count of the first row, or 0 when there are no rows.
    pub fn width(&self) -> usize {
        self.rows.first().map(Vec::len).unwrap_or(0)
    }
}

// ---------------------------------------------------------------------------
// ArrayView – the same grid as homogeneous numbers
// ---------------------------------------------------------------------------

/// Rectangular `f64` grid stored column-major: `columns[c][r]`.
///
/// Each column becomes one histogram series.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArrayView {
    pub columns: Vec<Vec<f64>>,
    pub rows: usize,
}

impl ArrayView {
    /// Total number of values across all columns.
    pub fn len(&self) -> usize {
        self.rows * self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate every value, column by column.
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.columns.iter().flatten().copied()
    }

    /// Smallest and largest value, or `None` for an empty array.
    pub fn min_max(&self) -> Option<(f64, f64)> {
        self.values().fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
    }
}
