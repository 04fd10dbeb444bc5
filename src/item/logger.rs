use log::info;

use crate::{
    core::{
        item::{ItemWriter, ItemWriterResult},
        value::Row,
    },
    item::cells,
};

/// Logs every row at `info` level, cells separated by `|`.
#[derive(Default)]
pub struct LoggerWriter {}

impl ItemWriter<Row> for LoggerWriter {
    fn write(&self, items: &[Row]) -> ItemWriterResult {
        items
            .iter()
            .for_each(|row| info!("Record:{}", cells(row).collect::<Vec<_>>().join("|")));
        Ok(())
    }
}
