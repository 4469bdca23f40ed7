//! The `Table` value type: validated construction, column sorting, and
//! pretty printing.
//!
//! A `Table` is immutable once built. The data flow is:
//! 1. Typed records (tuples, vecs, arrays of `Cell` values)
//! 2. `Table` (validated, cells already stringified)
//! 3. `pretty_string` (aligned fixed-width text)
//!
//! Sorting never mutates; it returns a new, independent `Table`.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::align::Alignment;
use crate::error::TableError;
use crate::record::Record;
use crate::render::{column_widths, format_line};
use crate::Result;

/// An immutable table of stringified cells with named columns and an
/// optional title.
///
/// Construction validates that columns are non-empty, rows are non-empty,
/// and the first row's arity matches the column count. Rows after the
/// first are trusted to match; a later row with a different arity renders
/// misaligned rather than failing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    /// Column headers, in display order
    columns: Vec<String>,
    /// Data rows; each cell is already rendered as a string
    rows: Vec<Vec<String>>,
    /// Table title; empty means "no title"
    name: String,
}

impl Table {
    /// Create a table from already-stringified cells.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::EmptyColumns`] when `columns` is empty,
    /// [`TableError::EmptyRows`] when `rows` is empty, and
    /// [`TableError::ArityMismatch`] when the first row's cell count
    /// differs from the column count. Only the first row is checked.
    pub fn new(columns: Vec<String>, rows: Vec<Vec<String>>, name: impl Into<String>) -> Result<Self> {
        if columns.is_empty() {
            return Err(TableError::EmptyColumns);
        }
        if rows.is_empty() {
            return Err(TableError::EmptyRows);
        }
        if rows[0].len() != columns.len() {
            return Err(TableError::ArityMismatch {
                expected: columns.len(),
                found: rows[0].len(),
            });
        }
        Ok(Table {
            columns,
            rows,
            name: name.into(),
        })
    }

    /// Create a table by stringifying typed records positionally.
    ///
    /// Each record's fields become one row of cells via [`Record`];
    /// `Option::None` fields render as empty cells. Row order follows
    /// input order. Validation is the same as [`Table::new`].
    pub fn from_records<C, S, I, R>(columns: C, records: I, name: impl Into<String>) -> Result<Self>
    where
        C: IntoIterator<Item = S>,
        S: Into<String>,
        I: IntoIterator<Item = R>,
        R: Record,
    {
        let columns = columns.into_iter().map(Into::into).collect();
        let rows = records.into_iter().map(Record::into_cells).collect();
        Self::new(columns, rows, name)
    }

    /// Column headers, in display order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Data rows.
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Table title; empty means "no title".
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Return a new table with columns reordered by ascending
    /// lexicographic column name.
    ///
    /// A single permutation is derived from the column names and applied
    /// to the header list and to every row, so each (column, value)
    /// association is preserved.
    pub fn sort_columns_ascending(&self) -> Table {
        let mut order: Vec<usize> = (0..self.columns.len()).collect();
        order.sort_by(|&a, &b| self.columns[a].cmp(&self.columns[b]));

        let columns = order.iter().map(|&i| self.columns[i].clone()).collect();
        let rows = self
            .rows
            .iter()
            .map(|row| {
                order
                    .iter()
                    .map(|&i| row.get(i).cloned().unwrap_or_default())
                    .collect()
            })
            .collect();

        Table {
            columns,
            rows,
            name: self.name.clone(),
        }
    }

    /// Return a new table with columns in descending lexicographic order.
    ///
    /// Implemented as the exact reversal of [`sort_columns_ascending`]'s
    /// header list and of each row. This equals an independent descending
    /// sort only when column names are unique; with duplicate names the
    /// tied columns come out in reversed input order.
    ///
    /// [`sort_columns_ascending`]: Table::sort_columns_ascending
    pub fn sort_columns_descending(&self) -> Table {
        let mut sorted = self.sort_columns_ascending();
        sorted.columns.reverse();
        for row in &mut sorted.rows {
            row.reverse();
        }
        sorted
    }

    /// Render the table as aligned fixed-width text.
    ///
    /// Each column is as wide as its longest cell or header (minimum 1).
    /// A cell's alignment is looked up by column name in
    /// `column_alignments`, falling back to `default_alignment`; the
    /// header row uses the same per-column alignments. When the table has
    /// a name, a title block spanning the full table width is emitted
    /// first, with the name aligned per `name_alignment`.
    ///
    /// ```
    /// use texttable::{Alignment, Table};
    /// use std::collections::HashMap;
    ///
    /// let table = Table::from_records(["id", "state"], [(1, "done"), (2, "open")], "").unwrap();
    /// let text = table.pretty_string(Alignment::Center, &HashMap::new(), Alignment::Left);
    /// assert_eq!(text.lines().next().unwrap(), "+----+-------+");
    /// ```
    pub fn pretty_string(
        &self,
        name_alignment: Alignment,
        column_alignments: &HashMap<String, Alignment>,
        default_alignment: Alignment,
    ) -> String {
        let widths = column_widths(&self.columns, &self.rows);
        let alignments: Vec<Alignment> = (0..widths.len())
            .map(|i| {
                self.columns
                    .get(i)
                    .and_then(|name| column_alignments.get(name).copied())
                    .unwrap_or(default_alignment)
            })
            .collect();
        let border = format_line(&[], &widths, &alignments, '-', '+');

        let mut lines = Vec::with_capacity(self.rows.len() + 6);
        if !self.name.is_empty() {
            // One cell spanning the table: total width minus the two
            // border chars and the two framing spaces.
            let title_width = [border.chars().count().saturating_sub(4)];
            let title_alignment = [name_alignment];
            lines.push(format_line(&[], &title_width, &title_alignment, '-', '+'));
            lines.push(format_line(
                std::slice::from_ref(&self.name),
                &title_width,
                &title_alignment,
                ' ',
                '|',
            ));
        }
        lines.push(border.clone());
        lines.push(format_line(&self.columns, &widths, &alignments, ' ', '|'));
        lines.push(border.clone());
        for row in &self.rows {
            lines.push(format_line(row, &widths, &alignments, ' ', '|'));
        }
        lines.push(border);

        lines.join("\n")
    }
}

/// Renders with defaults: name centered, all columns left-aligned.
impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.pretty_string(Alignment::Center, &HashMap::new(), Alignment::Left))
    }
}
