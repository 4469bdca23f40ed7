//! Stringification of typed records into table cells.
//!
//! The table factory accepts arbitrary typed records and turns each field
//! into a cell string positionally. Two traits drive this:
//!
//! - **Cell**: one value rendered as one cell. Implemented for the
//!   primitive types, strings, and `Option<T>` (where `None` becomes the
//!   empty string).
//! - **Record**: one value rendered as an ordered row of cells.
//!   Implemented for tuples up to arity 12, `Vec<T>`, and arrays.

/// A single value that can be rendered into a table cell.
pub trait Cell {
    /// Render this value as its cell string.
    fn to_cell(&self) -> String;
}

macro_rules! impl_cell_via_display {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Cell for $ty {
                fn to_cell(&self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

impl_cell_via_display!(
    bool, char, u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64, String,
    &str,
);

/// Absent values render as the empty cell.
impl<T: Cell> Cell for Option<T> {
    fn to_cell(&self) -> String {
        match self {
            Some(value) => value.to_cell(),
            None => String::new(),
        }
    }
}

/// An ordered product of fields that can be rendered into one table row.
pub trait Record {
    /// Consume this record, rendering each field into a cell in order.
    fn into_cells(self) -> Vec<String>;
}

macro_rules! impl_record_for_tuple {
    ($($field:ident),+) => {
        impl<$($field: Cell),+> Record for ($($field,)+) {
            fn into_cells(self) -> Vec<String> {
                #[allow(non_snake_case)]
                let ($($field,)+) = self;
                vec![$($field.to_cell()),+]
            }
        }
    };
}

impl_record_for_tuple!(A);
impl_record_for_tuple!(A, B);
impl_record_for_tuple!(A, B, C);
impl_record_for_tuple!(A, B, C, D);
impl_record_for_tuple!(A, B, C, D, E);
impl_record_for_tuple!(A, B, C, D, E, F);
impl_record_for_tuple!(A, B, C, D, E, F, G);
impl_record_for_tuple!(A, B, C, D, E, F, G, H);
impl_record_for_tuple!(A, B, C, D, E, F, G, H, I);
impl_record_for_tuple!(A, B, C, D, E, F, G, H, I, J);
impl_record_for_tuple!(A, B, C, D, E, F, G, H, I, J, K);
impl_record_for_tuple!(A, B, C, D, E, F, G, H, I, J, K, L);

impl<T: Cell> Record for Vec<T> {
    fn into_cells(self) -> Vec<String> {
        self.iter().map(Cell::to_cell).collect()
    }
}

impl<T: Cell, const N: usize> Record for [T; N] {
    fn into_cells(self) -> Vec<String> {
        self.iter().map(Cell::to_cell).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_primitives() {
        assert_eq!(42u32.to_cell(), "42");
        assert_eq!((-7i64).to_cell(), "-7");
        assert_eq!(true.to_cell(), "true");
        assert_eq!('x'.to_cell(), "x");
        assert_eq!(4.95f64.to_cell(), "4.95");
        assert_eq!("hi".to_cell(), "hi");
        assert_eq!(String::from("hi").to_cell(), "hi");
    }

    #[test]
    fn test_cell_option_none_is_empty() {
        assert_eq!(None::<u32>.to_cell(), "");
        assert_eq!(Some(3u32).to_cell(), "3");
    }

    #[test]
    fn test_record_tuple_preserves_field_order() {
        let cells = ("a", 1u8, 2.5f32).into_cells();
        assert_eq!(cells, vec!["a", "1", "2.5"]);
    }

    #[test]
    fn test_record_tuple_with_missing_field() {
        let cells = ("x", None::<i32>).into_cells();
        assert_eq!(cells, vec!["x", ""]);
    }

    #[test]
    fn test_record_vec_and_array() {
        assert_eq!(vec![1u8, 2, 3].into_cells(), vec!["1", "2", "3"]);
        assert_eq!(["a", "b"].into_cells(), vec!["a", "b"]);
    }
}
