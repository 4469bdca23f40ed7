//! # texttable
//!
//! Aligned plain-text tables with borders, optional titles, and
//! per-column alignment.
//!
//! ## Overview
//!
//! A [`Table`] holds named columns and rows of already-stringified cells,
//! plus an optional title. Tables are immutable: construction validates
//! the shape once, and everything afterwards (sorting, rendering) is a
//! pure function returning a new value or a string. Rendering sizes each
//! column to its widest cell and frames rows with `|` and `+---+`
//! borders.
//!
//! - **Typed factory**: build tables from tuples (or vecs/arrays) of
//!   ordinary values; each field is stringified positionally and
//!   `Option::None` becomes an empty cell
//! - **Three alignments**: left, right, and center, per column and for
//!   the title
//! - **Column sorting**: reorder columns (and every row with them) by
//!   column name, ascending or descending
//!
//! ## Example
//!
//! ```rust
//! use texttable::Table;
//!
//! let table = Table::from_records(
//!     ["date", "amount"],
//!     [(1u32, 4.95f64), (2, 12.65)],
//!     "Tx",
//! ).unwrap();
//!
//! assert_eq!(table.to_string(), "\
//! +---------------+
//! |      Tx       |
//! +------+--------+
//! | date | amount |
//! +------+--------+
//! | 1    | 4.95   |
//! | 2    | 12.65  |
//! +------+--------+");
//!
//! let sorted = table.sort_columns_ascending();
//! assert_eq!(sorted.columns(), &["amount", "date"]);
//! ```

pub mod align;
pub mod error;
pub mod record;
pub mod table;

mod render;

pub use align::Alignment;
pub use error::TableError;
pub use record::{Cell, Record};
pub use table::Table;

/// Result type for texttable operations
pub type Result<T> = std::result::Result<T, TableError>;
