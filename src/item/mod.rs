#[cfg(feature = "logger")]
/// Writer logging every row, useful for debugging
pub mod logger;

#[cfg(feature = "csv")]
/// CSV writer
pub mod csv;

#[cfg(feature = "json")]
/// JSON writer
pub mod json;

use crate::core::value::Row;

#[cfg(any(feature = "csv", feature = "logger"))]
/// Text of every cell of `row`, with an empty string for blanks.
pub(crate) fn cells(row: &Row) -> impl Iterator<Item = String> + '_ {
    row.iter()
        .map(|value| value.as_ref().map(ToString::to_string).unwrap_or_default())
}
