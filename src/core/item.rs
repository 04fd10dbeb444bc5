use crate::error::DbGenError;

/// Represents the result of writing items.
pub type ItemWriterResult = Result<(), DbGenError>;

/// A sink for generated rows.
///
/// A generation job calls [`open`](ItemWriter::open) once, then
/// [`write`](ItemWriter::write) and [`flush`](ItemWriter::flush) for every
/// chunk of rows, and [`close`](ItemWriter::close) once every row has been
/// handed over. Column names are known to the writer when it is built.
///
/// Methods take `&self`; implementations keep their mutable state behind a
/// `RefCell` or `Cell`.
pub trait ItemWriter<W> {
    /// Writes a chunk of items.
    fn write(&self, items: &[W]) -> ItemWriterResult;

    /// Flushes buffered output; called after each chunk.
    fn flush(&self) -> ItemWriterResult {
        Ok(())
    }

    /// Called once before the first chunk, e.g. to emit a header.
    fn open(&self) -> ItemWriterResult {
        Ok(())
    }

    /// Called once after the last chunk, e.g. to emit a footer.
    fn close(&self) -> ItemWriterResult {
        Ok(())
    }
}
