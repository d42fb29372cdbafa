use thiserror::Error;

use super::model::{ArrayView, Dataset};

#[derive(Error, Debug, PartialEq)]
pub enum ArrayError {
    #[error("row {row}, column {column}: '{value}' is not a finite number")]
    NonNumeric {
        row: usize,
        column: usize,
        value: String,
    },
    #[error("row {row} has {found} fields, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
}

impl ArrayView {
    /// Convert the text grid into numbers.
    ///
    /// Every field must parse as a finite `f64` (surrounding whitespace is
    /// ignored) and every row must have as many fields as the first one.
    /// Positions in errors are 1-based.
    pub fn from_dataset(dataset: &Dataset) -> Result<ArrayView, ArrayError> {
        let width = dataset.width();
        let mut columns = vec![Vec::with_capacity(dataset.len()); width];

        for (r, row) in dataset.rows.iter().enumerate() {
            if row.len() != width {
                return Err(ArrayError::Ragged {
                    row: r + 1,
                    expected: width,
                    found: row.len(),
                });
            }

            for (c, field) in row.iter().enumerate() {
                let value = parse_field(field).ok_or_else(|| ArrayError::NonNumeric {
                    row: r + 1,
                    column: c + 1,
                    value: field.clone(),
                })?;
                columns[c].push(value);
            }
        }

        Ok(ArrayView {
            columns,
            rows: dataset.len(),
        })
    }
}

fn parse_field(s: &str) -> Option<f64> {
    s.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dataset(rows: &[&[&str]]) -> Dataset {
        Dataset::from_rows(
            rows.iter()
                .map(|r| r.iter().map(|s| s.to_string()).collect())
                .collect(),
        )
    }

    #[test]
    fn builds_column_major_grid() {
        let ds = dataset(&[&["1", "10"], &["2", " 20 "], &["3.5", "-30"]]);
        let array = ArrayView::from_dataset(&ds).unwrap();

        assert_eq!(array.rows, 3);
        assert_eq!(array.columns, vec![vec![1.0, 2.0, 3.5], vec![10.0, 20.0, -30.0]]);
        assert_eq!(array.len(), 6);
        assert_eq!(array.min_max(), Some((-30.0, 20.0)));
    }

    #[test]
    fn empty_dataset_gives_empty_array() {
        let array = ArrayView::from_dataset(&Dataset::default()).unwrap();
        assert!(array.is_empty());
        assert!(array.columns.is_empty());
        assert_eq!(array.min_max(), None);
    }

    #[test]
    fn rejects_text_fields() {
        let ds = dataset(&[&["1", "2"], &["3", "abc"]]);
        assert_eq!(
            ArrayView::from_dataset(&ds),
            Err(ArrayError::NonNumeric {
                row: 2,
                column: 2,
                value: "abc".to_string()
            })
        );
    }

    #[test]
    fn rejects_empty_and_non_finite_fields() {
        let ds = dataset(&[&["1", ""]]);
        assert!(matches!(
            ArrayView::from_dataset(&ds),
            Err(ArrayError::NonNumeric { column: 2, .. })
        ));

        let ds = dataset(&[&["NaN"]]);
        assert!(matches!(
            ArrayView::from_dataset(&ds),
            Err(ArrayError::NonNumeric { row: 1, .. })
        ));

        let ds = dataset(&[&["inf"]]);
        assert!(ArrayView::from_dataset(&ds).is_err());
    }

    #[test]
    fn rejects_ragged_rows() {
        let ds = dataset(&[&["1", "2"], &["3", "4"], &["5"]]);
        let err = ArrayView::from_dataset(&ds).unwrap_err();

        assert_eq!(
            err,
            ArrayError::Ragged {
                row: 3,
                expected: 2,
                found: 1
            }
        );
        assert_eq!(err.to_string(), "row 3 has 1 fields, expected 2");
    }
}
