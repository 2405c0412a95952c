//! Key/value parameter tables
//!
//! A `ParamTable` backs both the query-parameter and the body-parameter
//! panels. Row 0 is the header row of the grid and never holds data, so data
//! rows are addressed 1..=N. The table always ends with a blank row that the
//! user can type into.

use crate::error::{Error, Result};

/// A single key/value pair
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Param {
    pub key: String,
    pub value: String,
}

impl Param {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Param {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Both fields empty
    pub fn is_blank(&self) -> bool {
        self.key.is_empty() && self.value.is_empty()
    }

    /// Both fields non-empty. Whitespace counts as content.
    pub fn qualifies(&self) -> bool {
        !self.key.is_empty() && !self.value.is_empty()
    }

    fn field(&self, column: Column) -> &str {
        match column {
            Column::Key => &self.key,
            Column::Value => &self.value,
        }
    }

    fn field_mut(&mut self, column: Column) -> &mut String {
        match column {
            Column::Key => &mut self.key,
            Column::Value => &mut self.value,
        }
    }
}

/// Editable columns of the grid. Grid column 0 holds the row index.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Column {
    Key,
    Value,
}

impl Column {
    pub fn header(&self) -> &'static str {
        match self {
            Column::Key => "Key",
            Column::Value => "Value",
        }
    }

    /// Grid column index
    pub fn index(&self) -> usize {
        match self {
            Column::Key => 1,
            Column::Value => 2,
        }
    }
}

/// Ordered, append-mostly table of parameters
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParamTable {
    rows: Vec<Param>,
}

impl Default for ParamTable {
    fn default() -> Self {
        Self::new()
    }
}

impl ParamTable {
    /// A table holding just the blank row
    pub fn new() -> Self {
        ParamTable {
            rows: vec![Param::default()],
        }
    }

    /// Build a table from pairs, followed by the blank row
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let mut rows: Vec<Param> = pairs.into_iter().map(|(k, v)| Param::new(k, v)).collect();
        rows.push(Param::default());
        ParamTable { rows }
    }

    /// Number of data rows, blank row included
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Index of the last data row
    pub fn last_row(&self) -> usize {
        self.rows.len()
    }

    pub fn row(&self, row: usize) -> Option<&Param> {
        row.checked_sub(1).and_then(|i| self.rows.get(i))
    }

    /// Data rows in order, paired with their 1-based index
    pub fn rows(&self) -> impl Iterator<Item = (usize, &Param)> {
        self.rows.iter().enumerate().map(|(i, p)| (i + 1, p))
    }

    /// Rows that contribute to serialized output
    pub fn qualifying(&self) -> impl Iterator<Item = &Param> {
        self.rows.iter().filter(|p| p.qualifies())
    }

    pub fn blank_rows(&self) -> usize {
        self.rows.iter().filter(|p| p.is_blank()).count()
    }

    pub fn cell(&self, row: usize, column: Column) -> Result<&str> {
        self.row(row)
            .map(|p| p.field(column))
            .ok_or(Error::OutOfRange {
                row,
                column: column.index(),
            })
    }

    /// Overwrite one cell
    pub fn set_cell(&mut self, row: usize, column: Column, text: impl Into<String>) -> Result<()> {
        let param = row
            .checked_sub(1)
            .and_then(|i| self.rows.get_mut(i))
            .ok_or(Error::OutOfRange {
                row,
                column: column.index(),
            })?;
        *param.field_mut(column) = text.into();
        Ok(())
    }

    /// Append a row with both fields empty, returning its index
    pub fn append_blank_row(&mut self) -> usize {
        self.rows.push(Param::default());
        self.rows.len()
    }

    /// Commit an edited cell. Filling either field of the last row grows the
    /// table by one blank row, so there is always a free row to type into.
    ///
    /// Returns the index of the appended row, if any.
    pub fn commit_edit(&mut self, row: usize, text: impl Into<String>, column: Column) -> Result<Option<usize>> {
        let text = text.into();
        let grows = row == self.last_row() && !text.is_empty();
        self.set_cell(row, column, text)?;

        if grows {
            Ok(Some(self.append_blank_row()))
        } else {
            Ok(None)
        }
    }

    /// Remove a row, keeping indices contiguous. A blank row is appended
    /// afterwards if the table no longer ends in one.
    pub fn delete_row(&mut self, row: usize) -> Result<()> {
        if row == 0 || row > self.rows.len() {
            return Err(Error::OutOfRange { row, column: 0 });
        }
        self.rows.remove(row - 1);
        if self.rows.last().map_or(true, |p| !p.is_blank()) {
            self.append_blank_row();
        }
        Ok(())
    }

    /// `?k1=v1&k2=v2`, or `""` when no row qualifies. Pairs are emitted as
    /// typed; the URL field owns the escaping of its own query.
    pub fn to_query_string(&self) -> String {
        let mut query = String::new();
        for (emitted, param) in self.qualifying().enumerate() {
            query.push(if emitted == 0 { '?' } else { '&' });
            query.push_str(&param.key);
            query.push('=');
            query.push_str(&param.value);
        }
        query
    }

    /// Form-url-encoded body: `k1=v1&k2=v2` in row order, duplicate keys kept.
    ///
    /// Keys and values are percent-encoded with everything but the RFC 3986
    /// unreserved set escaped, so a space becomes `%20`.
    pub fn to_body_params(&self) -> String {
        self.qualifying()
            .map(|p| {
                format!(
                    "{}={}",
                    urlencoding::encode(&p.key),
                    urlencoding::encode(&p.value)
                )
            })
            .collect::<Vec<_>>()
            .join("&")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Fill key then value of the last row, the way a user would.
    fn fill_last(table: &mut ParamTable, key: &str, value: &str) {
        let row = table.last_row();
        table.commit_edit(row, key, Column::Key).unwrap();
        table.commit_edit(row, value, Column::Value).unwrap();
    }

    #[test]
    fn test_new_table_has_only_blank_row() {
        let table = ParamTable::new();
        assert_eq!(table.row_count(), 1);
        assert!(table.row(1).unwrap().is_blank());
        assert_eq!(table.to_query_string(), "");
        assert_eq!(table.to_body_params(), "");
    }

    #[test]
    fn test_row_zero_is_header() {
        let mut table = ParamTable::new();
        assert_eq!(
            table.set_cell(0, Column::Key, "a"),
            Err(Error::OutOfRange { row: 0, column: 1 })
        );
        assert!(table.set_cell(2, Column::Value, "a").is_err());
        assert!(table.row(0).is_none());
    }

    #[test]
    fn test_key_alone_grows_table() {
        let mut table = ParamTable::new();
        let appended = table.commit_edit(1, "a", Column::Key).unwrap();
        assert_eq!(appended, Some(2));
        assert_eq!(table.row_count(), 2);

        // Filling the value of a row that is no longer last does not grow it again
        assert_eq!(table.commit_edit(1, "1", Column::Value).unwrap(), None);
        assert_eq!(table.row_count(), 2);
    }

    #[test]
    fn test_empty_commit_on_last_row_does_not_grow() {
        let mut table = ParamTable::new();
        assert_eq!(table.commit_edit(1, "", Column::Value).unwrap(), None);
        assert_eq!(table.row_count(), 1);
    }

    #[test]
    fn test_each_fill_adds_exactly_one_row() {
        let mut table = ParamTable::new();
        for i in 0..5 {
            let before = table.row_count();
            fill_last(&mut table, &format!("k{i}"), &format!("v{i}"));
            assert_eq!(table.row_count(), before + 1);
            assert_eq!(table.blank_rows(), 1);
            assert!(table.row(table.last_row()).unwrap().is_blank());
        }
    }

    #[test]
    fn test_middle_edit_does_not_clobber_next_row() {
        let mut table = ParamTable::from_pairs([("a", "1"), ("b", "2")]);
        table.commit_edit(1, "x", Column::Key).unwrap();
        assert_eq!(table.row(2), Some(&Param::new("b", "2")));
        assert_eq!(table.row_count(), 3);
    }

    #[test]
    fn test_query_string() {
        let mut table = ParamTable::new();
        fill_last(&mut table, "a", "1");
        fill_last(&mut table, "b", "2");
        assert_eq!(table.to_query_string(), "?a=1&b=2");
    }

    #[test]
    fn test_skipped_rows_do_not_consume_prefix() {
        let table = ParamTable::from_pairs([("a", ""), ("", "2"), ("c", "3")]);
        assert_eq!(table.to_query_string(), "?c=3");
        assert_eq!(table.to_body_params(), "c=3");
    }

    #[test]
    fn test_whitespace_counts_as_content() {
        let table = ParamTable::from_pairs([(" ", " ")]);
        assert_eq!(table.to_query_string(), "? = ");
        assert_eq!(table.to_body_params(), "%20=%20");
    }

    #[test]
    fn test_body_params_encoding_and_order() {
        let table = ParamTable::from_pairs([("a", "1"), ("b", "2")]);
        assert_eq!(table.to_body_params(), "a=1&b=2");

        let table = ParamTable::from_pairs([("name", "John Doe"), ("q", "a&b=c"), ("name", "x")]);
        assert_eq!(table.to_body_params(), "name=John%20Doe&q=a%26b%3Dc&name=x");
    }

    #[test]
    fn test_delete_row_keeps_blank_tail() {
        let mut table = ParamTable::from_pairs([("a", "1"), ("b", "2")]);
        table.delete_row(1).unwrap();
        assert_eq!(table.row(1), Some(&Param::new("b", "2")));
        assert_eq!(table.row_count(), 2);

        // Deleting the blank row brings a fresh one back
        table.delete_row(2).unwrap();
        assert_eq!(table.row_count(), 2);
        assert!(table.row(2).unwrap().is_blank());

        assert!(table.delete_row(0).is_err());
        assert!(table.delete_row(3).is_err());
    }
}
