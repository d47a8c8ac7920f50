// Review dataset — CSV rows keyed by their original row position.
//
// Rows whose text cell is missing are dropped at load time, but the rest
// keep their original identifiers, so review 1025 is always the 1026th data
// row of the file regardless of how many rows before it were dropped.

pub mod loader;

use std::collections::BTreeMap;

use crate::error::ReviewError;

/// One review: its row identifier and text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReviewRecord<'a> {
    pub id: usize,
    pub text: &'a str,
}

/// Loaded reviews. Cells are `None` when missing (empty or an NA marker).
#[derive(Debug, Clone)]
pub struct ReviewDataset {
    headers: Vec<String>,
    text_column: usize,
    rows: BTreeMap<usize, Vec<Option<String>>>,
    dropped: usize,
}

impl ReviewDataset {
    /// Build a single-column dataset from `(id, text)` pairs.
    pub fn from_texts<I, S>(text_field: &str, texts: I) -> Self
    where
        I: IntoIterator<Item = (usize, S)>,
        S: Into<String>,
    {
        let rows = texts
            .into_iter()
            .map(|(id, text)| (id, vec![Some(text.into())]))
            .collect();
        Self {
            headers: vec![text_field.to_string()],
            text_column: 0,
            rows,
            dropped: 0,
        }
    }

    /// Number of kept rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of rows dropped for a missing text cell.
    pub fn dropped(&self) -> usize {
        self.dropped
    }

    /// Kept row identifiers in ascending order.
    pub fn ids(&self) -> impl Iterator<Item = usize> + '_ {
        self.rows.keys().copied()
    }

    /// Look up a cell by row identifier and column name.
    pub fn field(&self, id: usize, field: &str) -> Result<&str, ReviewError> {
        let row = self.rows.get(&id).ok_or(ReviewError::NotFound(id))?;
        let column = self
            .headers
            .iter()
            .position(|h| h == field)
            .ok_or_else(|| ReviewError::UnknownField(field.to_string()))?;
        row.get(column)
            .and_then(|cell| cell.as_deref())
            .ok_or_else(|| ReviewError::MissingText {
                id,
                field: field.to_string(),
            })
    }

    /// The record for `id` using the load-time text field.
    pub fn record(&self, id: usize) -> Option<ReviewRecord<'_>> {
        let row = self.rows.get(&id)?;
        let text = row.get(self.text_column)?.as_deref()?;
        Some(ReviewRecord { id, text })
    }

    /// All records, in identifier order.
    pub fn records(&self) -> impl Iterator<Item = ReviewRecord<'_>> + '_ {
        self.ids().filter_map(move |id| self.record(id))
    }
}
