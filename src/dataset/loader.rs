// CSV loading for review datasets.
//
// The first row is the header. Identifiers are zero-based data-row
// positions. A cell counts as missing when it is empty or one of the usual
// NA markers; rows missing the text field are dropped.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use tracing::info;

use super::ReviewDataset;
use crate::error::DatasetError;

/// Cell values treated as missing (exact match).
pub const NA_MARKERS: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

pub fn is_missing(cell: &str) -> bool {
    NA_MARKERS.contains(&cell)
}

impl ReviewDataset {
    /// Load a CSV file, dropping rows whose `text_field` cell is missing.
    pub fn from_path(path: &Path, text_field: &str) -> Result<Self, DatasetError> {
        let file = File::open(path).map_err(|source| DatasetError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let dataset = Self::from_reader(file, text_field)?;
        info!(
            path = %path.display(),
            kept = dataset.len(),
            dropped = dataset.dropped(),
            "Loaded review dataset"
        );
        Ok(dataset)
    }

    /// Load CSV from any reader. Short rows are accepted; their absent
    /// cells count as missing.
    pub fn from_reader<R: Read>(reader: R, text_field: &str) -> Result<Self, DatasetError> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let headers: Vec<String> = rdr.headers()?.iter().map(str::to_string).collect();
        let text_column = headers
            .iter()
            .position(|h| h == text_field)
            .ok_or_else(|| DatasetError::MissingColumn {
                field: text_field.to_string(),
                available: headers.join(", "),
            })?;

        let mut rows = BTreeMap::new();
        let mut dropped = 0;

        for (id, result) in rdr.records().enumerate() {
            let record = result?;
            let cells: Vec<Option<String>> = (0..headers.len())
                .map(|col| {
                    record
                        .get(col)
                        .filter(|cell| !is_missing(cell))
                        .map(str::to_string)
                })
                .collect();

            if cells[text_column].is_none() {
                dropped += 1;
                continue;
            }
            rows.insert(id, cells);
        }

        Ok(Self {
            headers,
            text_column,
            rows,
            dropped,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CSV: &str = "\
id,reviews.title,reviews.text
a,Nice,Great product loved it
b,,
c,Meh,NA
d,Bad,\"Broke after a week, sadly\"
";

    #[test]
    fn test_drops_missing_text_and_keeps_ids() {
        let ds = ReviewDataset::from_reader(CSV.as_bytes(), "reviews.text").unwrap();
        let ids: Vec<usize> = ds.ids().collect();
        assert_eq!(ids, vec![0, 3]);
        assert_eq!(ds.dropped(), 2);
        assert_eq!(ds.record(3).unwrap().text, "Broke after a week, sadly");
    }

    #[test]
    fn test_other_columns_are_addressable() {
        let ds = ReviewDataset::from_reader(CSV.as_bytes(), "reviews.text").unwrap();
        assert_eq!(ds.field(0, "reviews.title").unwrap(), "Nice");
    }

    #[test]
    fn test_missing_column_is_an_error() {
        let err = ReviewDataset::from_reader(CSV.as_bytes(), "text").unwrap_err();
        assert!(matches!(err, DatasetError::MissingColumn { .. }));
    }

    #[test]
    fn test_short_rows_count_as_missing() {
        let csv = "title,text\nonly-title\nt,body\n";
        let ds = ReviewDataset::from_reader(csv.as_bytes(), "text").unwrap();
        assert_eq!(ds.ids().collect::<Vec<_>>(), vec![1]);
        assert_eq!(ds.dropped(), 1);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let path = std::env::temp_dir().join("reviewmood-no-such-file.csv");
        let err = ReviewDataset::from_path(&path, "text").unwrap_err();
        assert!(matches!(err, DatasetError::Io { .. }));
    }

    #[test]
    fn test_na_markers() {
        assert!(is_missing(""));
        assert!(is_missing("NaN"));
        assert!(!is_missing(" "));
        assert!(!is_missing("none of them"));
    }
}
