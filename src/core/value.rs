use std::fmt;

use log::debug;
use rand::{RngCore, seq::index};
use serde::{Serialize, Serializer};
use time::Date;

/// A single generated scalar.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    Date(Date),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Text(text) => f.write_str(text),
            Value::Int(int) => write!(f, "{int}"),
            Value::Float(float) => write!(f, "{float}"),
            Value::Bool(boolean) => write!(f, "{boolean}"),
            Value::Date(date) => write!(
                f,
                "{:02}.{:02}.{:04}",
                date.day(),
                u8::from(date.month()),
                date.year()
            ),
        }
    }
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::Text(text) => serializer.serialize_str(text),
            Value::Int(int) => serializer.serialize_i64(*int),
            Value::Float(float) => serializer.serialize_f64(*float),
            Value::Bool(boolean) => serializer.serialize_bool(*boolean),
            Value::Date(_) => serializer.collect_str(self),
        }
    }
}

/// One generated column; `None` is the absent marker left by blanking.
pub type Column = Vec<Option<Value>>;

/// One output row, aligned with the requested column order.
pub type Row = Vec<Option<Value>>;

/// The result of a generation run: column names and row-major values.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Table {
    pub column_names: Vec<String>,
    pub rows: Vec<Row>,
}

impl Table {
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.column_names.len()
    }

    /// Values of the named column, top to bottom.
    pub fn column(&self, name: &str) -> Option<Vec<&Option<Value>>> {
        let position = self.column_names.iter().position(|column| column == name)?;
        Some(self.rows.iter().map(|row| &row[position]).collect())
    }
}

/// Replaces `floor(len * percent / 100)` distinct, uniformly chosen entries
/// with the absent marker.
pub fn inject_blanks(mut column: Column, percent: u8, rng: &mut dyn RngCore) -> Column {
    let percent = usize::from(percent.min(100));
    let amount = column.len() * percent / 100;

    if amount == 0 {
        return column;
    }

    for position in index::sample(rng, column.len(), amount) {
        column[position] = None;
    }

    debug!("Blanked {} of {} values", amount, column.len());
    column
}

/// Transposes column-major data into rows.
///
/// # Panics
///
/// When the columns do not all have the same length; that can only come from
/// a strategy producing the wrong number of values.
pub fn assemble(columns: Vec<Column>) -> Vec<Row> {
    let Some(row_count) = columns.first().map(Vec::len) else {
        return Vec::new();
    };
    assert!(
        columns.iter().all(|column| column.len() == row_count),
        "generated columns must all hold {row_count} values"
    );

    let mut rows: Vec<Row> = (0..row_count)
        .map(|_| Vec::with_capacity(columns.len()))
        .collect();
    for column in columns {
        for (row, value) in rows.iter_mut().zip(column) {
            row.push(value);
        }
    }
    rows
}
