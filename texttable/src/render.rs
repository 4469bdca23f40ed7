//! Width computation and line formatting internals.
//!
//! A rendered line is always `sep fill cell fill sep ...`: content lines
//! use `|` and spaces (`| date | amount |`), border lines use `+` and
//! dashes with empty cells (`+------+--------+`). The title line reuses
//! the same shape with a single cell spanning the whole table.

use crate::align::{pad, Alignment};

/// Compute the display width of each column.
///
/// Widths start from the column-name lengths and are folded up with an
/// element-wise max over every row's cell lengths, with a floor of 1.
/// Rows longer than the column list extend the vector (missing positions
/// count as 0); rows are not required to share a length.
pub(crate) fn column_widths(columns: &[String], rows: &[Vec<String>]) -> Vec<usize> {
    let seed: Vec<usize> = columns.iter().map(|c| c.chars().count()).collect();
    let widths = rows.iter().fold(seed, |acc, row| {
        element_max(acc, row.iter().map(|cell| cell.chars().count()))
    });
    widths.into_iter().map(|w| w.max(1)).collect()
}

/// Element-wise max of an accumulator and a sequence of lengths,
/// extending the accumulator when the sequence is longer.
fn element_max(mut acc: Vec<usize>, lengths: impl Iterator<Item = usize>) -> Vec<usize> {
    for (i, len) in lengths.enumerate() {
        match acc.get_mut(i) {
            Some(slot) => *slot = (*slot).max(len),
            None => acc.push(len),
        }
    }
    acc
}

/// Format one line of the table.
///
/// One cell is emitted per width; cells beyond `cells.len()` render as
/// empty (which is how border lines are produced), and alignments beyond
/// `alignments.len()` fall back to left.
pub(crate) fn format_line(
    cells: &[String],
    widths: &[usize],
    alignments: &[Alignment],
    fill: char,
    sep: char,
) -> String {
    let gutter: String = [fill, sep, fill].iter().collect();
    let body = widths
        .iter()
        .enumerate()
        .map(|(i, &width)| {
            let value = cells.get(i).map(String::as_str).unwrap_or("");
            let alignment = alignments.get(i).copied().unwrap_or_default();
            pad(value, width, fill, alignment)
        })
        .collect::<Vec<_>>()
        .join(&gutter);
    format!("{sep}{fill}{body}{fill}{sep}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_widths_seeded_from_headers() {
        let widths = column_widths(&strings(&["date", "amount"]), &[]);
        assert_eq!(widths, vec![4, 6]);
    }

    #[test]
    fn test_widths_take_max_of_header_and_cells() {
        let columns = strings(&["date", "amount"]);
        let rows = vec![strings(&["1", "4.95"]), strings(&["2", "12.65"])];
        assert_eq!(column_widths(&columns, &rows), vec![4, 6]);

        let rows = vec![strings(&["2024-01-01", "4.95"])];
        assert_eq!(column_widths(&columns, &rows), vec![10, 6]);
    }

    #[test]
    fn test_widths_floor_is_one() {
        let widths = column_widths(&strings(&[""]), &[strings(&[""])]);
        assert_eq!(widths, vec![1]);
    }

    #[test]
    fn test_widths_extend_for_overlong_rows() {
        let columns = strings(&["a"]);
        let rows = vec![strings(&["x", "long"])];
        assert_eq!(column_widths(&columns, &rows), vec![1, 4]);
    }

    #[test]
    fn test_format_content_line() {
        let line = format_line(
            &strings(&["date", "amount"]),
            &[4, 6],
            &[Alignment::Left, Alignment::Left],
            ' ',
            '|',
        );
        assert_eq!(line, "| date | amount |");
    }

    #[test]
    fn test_format_border_line() {
        let line = format_line(&[], &[4, 6], &[], '-', '+');
        assert_eq!(line, "+------+--------+");
    }

    #[test]
    fn test_format_line_short_row_pads_with_empty_cells() {
        let line = format_line(&strings(&["x"]), &[1, 3], &[], ' ', '|');
        assert_eq!(line, "| x |     |");
    }
}
