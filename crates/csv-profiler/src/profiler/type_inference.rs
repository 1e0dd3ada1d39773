//! Type inference logic for column analysis.

use crate::types::ColumnType;
use crate::utils::{present_value, try_parse_float};

/// Infer the type of a column from its raw values.
///
/// A column is numeric only if it has at least one present value and every
/// present value parses as a float. A single non-numeric value makes the
/// whole column text; there is no partially numeric type.
pub(crate) fn infer_type(values: &[Option<&str>]) -> ColumnType {
    let mut present = values.iter().filter_map(|v| present_value(*v)).peekable();

    if present.peek().is_none() {
        return ColumnType::Text;
    }

    if present.all(|v| try_parse_float(v).is_some()) {
        ColumnType::Number
    } else {
        ColumnType::Text
    }
}
