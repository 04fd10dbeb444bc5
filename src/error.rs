use thiserror::Error;

use crate::core::specifier::SpecifierError;

#[derive(Error, Debug)]
/// Generation error
pub enum DbGenError {
    #[error("Configuration: {0}")]
    Configuration(String),

    #[error("No such attribute family: {0}")]
    UnknownFamily(String),

    #[error("Specifier: {0}")]
    Specifier(#[from] SpecifierError),

    #[error("Column '{column}' with specifier '{specifier}': {source}")]
    Column {
        column: String,
        specifier: String,
        #[source]
        source: SpecifierError,
    },

    #[error("Provider from: {0}")]
    Provider(String),

    #[error("ItemWriter from: {0}")]
    ItemWriter(String),
}

impl DbGenError {
    /// Attaches the failing column to a bare specifier error.
    pub(crate) fn in_column(self, column: &str, specifier: &str) -> DbGenError {
        match self {
            DbGenError::Specifier(source) => DbGenError::Column {
                column: column.to_owned(),
                specifier: specifier.to_owned(),
                source,
            },
            other => other,
        }
    }
}
