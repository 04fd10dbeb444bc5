use std::{
    cell::RefCell,
    fs::File,
    io::{self, Write},
    path::Path,
    result,
};

use csv::{Writer, WriterBuilder};
use log::debug;

use crate::{
    DbGenError,
    core::{
        item::{ItemWriter, ItemWriterResult},
        value::Row,
    },
    item::cells,
};

/// Writes generated rows as CSV records.
///
/// Blank cells become empty fields. The header, when enabled, is written by
/// [`open`](ItemWriter::open) from the column names given to the builder.
pub struct CsvItemWriter<T: Write> {
    wrapper: RefCell<Writer<T>>,
    column_names: Vec<String>,
    has_headers: bool,
}

fn writer_error(error: impl ToString) -> DbGenError {
    DbGenError::ItemWriter(error.to_string())
}

impl<T: Write> ItemWriter<Row> for CsvItemWriter<T> {
    fn write(&self, items: &[Row]) -> ItemWriterResult {
        let mut wrapper = self.wrapper.borrow_mut();
        for row in items {
            wrapper.write_record(cells(row)).map_err(writer_error)?;
        }
        debug!("Wrote {} CSV records", items.len());
        Ok(())
    }

    fn flush(&self) -> ItemWriterResult {
        self.wrapper.borrow_mut().flush().map_err(writer_error)
    }

    fn open(&self) -> ItemWriterResult {
        if self.has_headers {
            self.wrapper
                .borrow_mut()
                .write_record(&self.column_names)
                .map_err(writer_error)?;
        }
        Ok(())
    }

    fn close(&self) -> ItemWriterResult {
        self.flush()
    }
}

impl<T: Write> CsvItemWriter<T> {
    /// Flushes and returns the underlying writer.
    pub fn into_inner(self) -> result::Result<T, DbGenError> {
        self.wrapper.into_inner().into_inner().map_err(writer_error)
    }
}

#[derive(Default)]
pub struct CsvItemWriterBuilder {
    delimiter: u8,
    has_headers: bool,
    column_names: Vec<String>,
}

impl CsvItemWriterBuilder {
    pub fn new() -> CsvItemWriterBuilder {
        CsvItemWriterBuilder {
            delimiter: b',',
            has_headers: true,
            column_names: Vec::new(),
        }
    }

    pub fn delimiter(mut self, delimiter: u8) -> CsvItemWriterBuilder {
        self.delimiter = delimiter;
        self
    }

    pub fn has_headers(mut self, yes: bool) -> CsvItemWriterBuilder {
        self.has_headers = yes;
        self
    }

    pub fn column_names(mut self, column_names: &[String]) -> CsvItemWriterBuilder {
        self.column_names = column_names.to_vec();
        self
    }

    pub fn from_path<R: AsRef<Path>>(self, path: R) -> Result<CsvItemWriter<File>, DbGenError> {
        let file = File::create(path).map_err(writer_error)?;
        Ok(self.from_writer(file))
    }

    pub fn from_writer<W: io::Write>(self, wtr: W) -> CsvItemWriter<W> {
        let wtr = WriterBuilder::new()
            .flexible(false)
            .delimiter(self.delimiter)
            .has_headers(false)
            .from_writer(wtr);

        CsvItemWriter {
            wrapper: RefCell::new(wtr),
            column_names: self.column_names,
            has_headers: self.has_headers,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error;

    use super::CsvItemWriterBuilder;
    use crate::core::{
        item::ItemWriter,
        value::{Row, Value},
    };

    fn rows() -> Vec<Row> {
        vec![
            vec![
                Some(Value::Text("Boston, MA".to_owned())),
                Some(Value::Int(4628910)),
            ],
            vec![None, Some(Value::Bool(true))],
        ]
    }

    #[test]
    fn rows_are_written_after_the_header() -> Result<(), Box<dyn Error>> {
        let wtr = CsvItemWriterBuilder::new()
            .column_names(&["city".to_owned(), "population".to_owned()])
            .from_writer(vec![]);

        wtr.open()?;
        wtr.write(&rows())?;
        wtr.close()?;

        let data = String::from_utf8(wtr.into_inner()?)?;
        assert_eq!(data, "city,population\n\"Boston, MA\",4628910\n,true\n");

        Ok(())
    }

    #[test]
    fn header_can_be_disabled() -> Result<(), Box<dyn Error>> {
        let wtr = CsvItemWriterBuilder::new()
            .has_headers(false)
            .delimiter(b';')
            .column_names(&["city".to_owned(), "population".to_owned()])
            .from_writer(vec![]);

        wtr.open()?;
        wtr.write(&rows())?;

        let data = String::from_utf8(wtr.into_inner()?)?;
        assert_eq!(data, "Boston, MA;4628910\n;true\n");

        Ok(())
    }
}
