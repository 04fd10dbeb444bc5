use std::{
    cell::{Cell, RefCell},
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use serde::{Serialize, Serializer, ser::SerializeMap};

use crate::{
    DbGenError,
    core::{
        item::{ItemWriter, ItemWriterResult},
        value::Row,
    },
};

/// A row keyed by column name; blanks serialize as `null`.
struct Record<'a> {
    column_names: &'a [String],
    row: &'a Row,
}

impl Serialize for Record<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.column_names.len()))?;
        for (name, value) in self.column_names.iter().zip(self.row) {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

/// Writes generated rows as a JSON array of objects.
pub struct JsonItemWriter<T: Write> {
    stream: RefCell<BufWriter<T>>,
    column_names: Vec<String>,
    use_pretty_formatter: bool,
    is_first_element: Cell<bool>,
}

fn writer_error(error: impl ToString) -> DbGenError {
    DbGenError::ItemWriter(error.to_string())
}

impl<T: Write> JsonItemWriter<T> {
    fn write_bytes(&self, bytes: &[u8]) -> ItemWriterResult {
        self.stream
            .borrow_mut()
            .write_all(bytes)
            .map_err(writer_error)
    }

    /// Flushes and returns the underlying writer.
    pub fn into_inner(self) -> Result<T, DbGenError> {
        self.stream.into_inner().into_inner().map_err(writer_error)
    }
}

impl<T: Write> ItemWriter<Row> for JsonItemWriter<T> {
    fn write(&self, items: &[Row]) -> ItemWriterResult {
        for row in items {
            let record = Record {
                column_names: &self.column_names,
                row,
            };
            let json = if self.use_pretty_formatter {
                serde_json::to_string_pretty(&record)
            } else {
                serde_json::to_string(&record)
            }
            .map_err(writer_error)?;

            if !self.is_first_element.get() {
                self.write_bytes(b",")?;
                if self.use_pretty_formatter {
                    self.write_bytes(b"\n")?;
                }
            }
            self.write_bytes(json.as_bytes())?;
            self.is_first_element.set(false);
        }
        Ok(())
    }

    fn flush(&self) -> ItemWriterResult {
        self.stream.borrow_mut().flush().map_err(writer_error)
    }

    fn open(&self) -> ItemWriterResult {
        self.is_first_element.set(true);
        if self.use_pretty_formatter {
            self.write_bytes(b"[\n")
        } else {
            self.write_bytes(b"[")
        }
    }

    fn close(&self) -> ItemWriterResult {
        if self.use_pretty_formatter {
            self.write_bytes(b"\n]\n")?;
        } else {
            self.write_bytes(b"]")?;
        }
        self.flush()
    }
}

#[derive(Default)]
pub struct JsonItemWriterBuilder {
    column_names: Vec<String>,
    pretty_formatter: bool,
}

impl JsonItemWriterBuilder {
    pub fn new() -> JsonItemWriterBuilder {
        JsonItemWriterBuilder::default()
    }

    pub fn column_names(mut self, column_names: &[String]) -> JsonItemWriterBuilder {
        self.column_names = column_names.to_vec();
        self
    }

    pub fn pretty_formatter(mut self, yes: bool) -> JsonItemWriterBuilder {
        self.pretty_formatter = yes;
        self
    }

    pub fn from_path<P: AsRef<Path>>(self, path: P) -> Result<JsonItemWriter<File>, DbGenError> {
        let file = File::create(path).map_err(writer_error)?;
        Ok(self.from_writer(file))
    }

    pub fn from_writer<W: Write>(self, wtr: W) -> JsonItemWriter<W> {
        JsonItemWriter {
            stream: RefCell::new(BufWriter::new(wtr)),
            column_names: self.column_names,
            use_pretty_formatter: self.pretty_formatter,
            is_first_element: Cell::new(true),
        }
    }
}
