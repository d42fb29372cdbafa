use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};

use super::model::{Dataset, Row};

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a comma-separated file into a [`Dataset`].
///
/// The first line is data, not a header. Rows may have differing field
/// counts here; shape is checked later when building the array view.
pub fn load_file(path: &Path) -> Result<Dataset> {
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let dataset =
        read_dataset(file).with_context(|| format!("reading {}", path.display()))?;

    log::info!(
        "Loaded {} rows ({} fields in first row) from {}",
        dataset.len(),
        dataset.width(),
        path.display()
    );
    Ok(dataset)
}

// ---------------------------------------------------------------------------
// CSV parsing
// ---------------------------------------------------------------------------

/// Parse comma-separated rows from any reader.
pub fn read_dataset<R: Read>(reader: R) -> Result<Dataset> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut rows = Vec::new();
    for (row_no, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("CSV row {}", row_no + 1))?;
        let row: Row = record.iter().map(str::to_string).collect();
        rows.push(row);
    }

    Ok(Dataset::from_rows(rows))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn write_csv(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn reads_every_row_without_header() {
        let file = write_csv("1,2,3\n4,5,6\n7,8,9\n10,11,12\n");
        let dataset = load_file(file.path()).unwrap();

        assert_eq!(dataset.len(), 4);
        assert_eq!(dataset.width(), 3);
        assert_eq!(dataset.rows[0], vec!["1", "2", "3"]);
        assert_eq!(dataset.rows[3], vec!["10", "11", "12"]);
    }

    #[test]
    fn missing_file_surfaces_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_file(&dir.path().join("data.csv")).unwrap_err();

        let io = err
            .root_cause()
            .downcast_ref::<std::io::Error>()
            .expect("root cause should be an io::Error");
        assert_eq!(io.kind(), std::io::ErrorKind::NotFound);
        assert!(format!("{err:#}").contains("data.csv"));
    }

    #[test]
    fn empty_file_gives_empty_dataset() {
        let file = write_csv("");
        let dataset = load_file(file.path()).unwrap();

        assert!(dataset.is_empty());
        assert_eq!(dataset.width(), 0);
    }

    #[test]
    fn ragged_rows_are_accepted_at_read_time() {
        let dataset = read_dataset("1,2\n3\n4,5,6\n".as_bytes()).unwrap();

        assert_eq!(dataset.len(), 3);
        assert_eq!(dataset.rows[1], vec!["3"]);
        assert_eq!(dataset.rows[2].len(), 3);
    }

    #[test]
    fn invalid_utf8_names_the_row() {
        let err = read_dataset(&b"1\n\xff\n"[..]).unwrap_err();

        assert!(err.downcast_ref::<csv::Error>().is_some());
        assert!(format!("{err:#}").contains("CSV row 2"));
    }

    #[test]
    fn quoted_fields_are_unquoted() {
        let dataset = read_dataset("\"1.5\",2\n".as_bytes()).unwrap();
        assert_eq!(dataset.rows[0], vec!["1.5", "2"]);
    }
}
