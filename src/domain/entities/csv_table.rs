//! Parsed CSV table entity.

/// A rectangular view over parsed CSV rows.
///
/// Row 0 is the header; all remaining rows are body rows. Rows are allowed to
/// be ragged — [`CsvTable::cell`] substitutes an empty string for any cell a
/// short row is missing, so consumers always see the header's column count.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CsvTable {
    rows: Vec<Vec<String>>,
}

impl CsvTable {
    /// Wraps parsed rows into a table.
    #[must_use]
    pub fn from_rows(rows: Vec<Vec<String>>) -> Self {
        Self { rows }
    }

    /// Returns true when the table holds no rows at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns the header row, if any.
    #[must_use]
    pub fn header(&self) -> Option<&[String]> {
        self.rows.first().map(Vec::as_slice)
    }

    /// Number of columns, defined by the header row.
    #[must_use]
    pub fn column_count(&self) -> usize {
        self.header().map_or(0, <[String]>::len)
    }

    /// Body rows (everything after the header).
    #[must_use]
    pub fn body(&self) -> &[Vec<String>] {
        if self.rows.is_empty() {
            &[]
        } else {
            &self.rows[1..]
        }
    }

    /// Cell lookup over the body with ragged-row tolerance.
    ///
    /// `row` indexes the body (0 = first data row). Missing cells in short
    /// rows come back as `""`.
    #[must_use]
    pub fn cell(&self, row: usize, col: usize) -> &str {
        self.body()
            .get(row)
            .and_then(|r| r.get(col))
            .map_or("", String::as_str)
    }

    /// Returns a table with the body capped at `limit` rows.
    ///
    /// The header always survives. Used for bounded previews of large
    /// server responses.
    #[must_use]
    pub fn preview(&self, limit: usize) -> Self {
        let mut rows = Vec::with_capacity(self.rows.len().min(limit + 1));
        rows.extend(self.rows.iter().take(limit + 1).cloned());
        Self { rows }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(rows: &[&[&str]]) -> CsvTable {
        CsvTable::from_rows(
            rows.iter()
                .map(|r| r.iter().map(ToString::to_string).collect())
                .collect(),
        )
    }

    #[test]
    fn test_empty_table() {
        let t = CsvTable::default();
        assert!(t.is_empty());
        assert_eq!(t.column_count(), 0);
        assert!(t.body().is_empty());
    }

    #[test]
    fn test_header_defines_columns() {
        let t = table(&[&["a", "b", "c"], &["1", "2"]]);
        assert_eq!(t.column_count(), 3);
        assert_eq!(t.body().len(), 1);
    }

    #[test]
    fn test_ragged_cell_is_empty_string() {
        let t = table(&[&["a", "b", "c"], &["1", "2"]]);
        assert_eq!(t.cell(0, 0), "1");
        assert_eq!(t.cell(0, 2), "");
        assert_eq!(t.cell(5, 0), "");
    }

    #[test]
    fn test_preview_caps_body_not_header() {
        let mut rows = vec![vec!["h".to_string()]];
        for i in 0..500 {
            rows.push(vec![i.to_string()]);
        }
        let t = CsvTable::from_rows(rows);
        let p = t.preview(200);
        assert_eq!(p.header(), t.header());
        assert_eq!(p.body().len(), 200);
    }

    #[test]
    fn test_preview_of_small_table_is_identity() {
        let t = table(&[&["h"], &["1"], &["2"]]);
        assert_eq!(t.preview(200), t);
    }
}
