//! Cell alignment and the padding primitive.

use serde::{Deserialize, Serialize};

/// Text alignment within a cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    /// Left-align text (fill on the right).
    #[default]
    Left,
    /// Right-align text (fill on the left).
    Right,
    /// Center text (fill on both sides; an odd fill unit goes right).
    Center,
}

/// Pad `value` to `width` with `fill` according to `alignment`.
///
/// Widths are measured in `char`s. A value already at or beyond `width`
/// is returned unchanged. For `Center`, the left side gets
/// `(width - len) / 2` fill characters and the right side the remainder.
pub(crate) fn pad(value: &str, width: usize, fill: char, alignment: Alignment) -> String {
    let len = value.chars().count();
    if len >= width {
        return value.to_string();
    }
    let gap = width - len;
    match alignment {
        Alignment::Left => format!("{}{}", value, fill_str(fill, gap)),
        Alignment::Right => format!("{}{}", fill_str(fill, gap), value),
        Alignment::Center => {
            let left = gap / 2;
            format!("{}{}{}", fill_str(fill, left), value, fill_str(fill, gap - left))
        }
    }
}

fn fill_str(fill: char, count: usize) -> String {
    std::iter::repeat(fill).take(count).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alignment_default_is_left() {
        assert_eq!(Alignment::default(), Alignment::Left);
    }

    #[test]
    fn test_alignment_serde_roundtrip() {
        for alignment in [Alignment::Left, Alignment::Right, Alignment::Center] {
            let json = serde_json::to_string(&alignment).unwrap();
            let parsed: Alignment = serde_json::from_str(&json).unwrap();
            assert_eq!(parsed, alignment);
        }
        assert_eq!(serde_json::to_string(&Alignment::Center).unwrap(), "\"center\"");
    }

    #[test]
    fn test_pad_left() {
        assert_eq!(pad("ab", 5, ' ', Alignment::Left), "ab   ");
    }

    #[test]
    fn test_pad_right() {
        assert_eq!(pad("ab", 5, ' ', Alignment::Right), "   ab");
    }

    #[test]
    fn test_pad_center_odd_gap_favors_right() {
        // gap of 3: one space left, two right
        assert_eq!(pad("ab", 5, ' ', Alignment::Center), " ab  ");
    }

    #[test]
    fn test_pad_center_even_gap() {
        assert_eq!(pad("ab", 6, ' ', Alignment::Center), "  ab  ");
    }

    #[test]
    fn test_pad_with_dash_fill() {
        assert_eq!(pad("", 4, '-', Alignment::Left), "----");
        assert_eq!(pad("x", 4, '-', Alignment::Right), "---x");
    }

    #[test]
    fn test_pad_value_at_or_over_width() {
        assert_eq!(pad("abcde", 5, ' ', Alignment::Center), "abcde");
        assert_eq!(pad("abcdef", 5, ' ', Alignment::Left), "abcdef");
    }

    #[test]
    fn test_pad_counts_chars_not_bytes() {
        assert_eq!(pad("éé", 4, ' ', Alignment::Left), "éé  ");
    }
}
