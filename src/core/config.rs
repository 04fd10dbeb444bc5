use std::io::Read;

use serde::{Deserialize, Serialize};

use super::locale::Locale;
use crate::DbGenError;

pub const DEFAULT_ROW_COUNT: i64 = 10;

const DEFAULT_COLUMNS: [(&str, &str); 3] =
    [("name", "name_full"), ("phone", "phone"), ("email", "email")];

/// Raw generation settings, as read from JSON or assembled by a
/// [`GenerationConfigBuilder`].
///
/// Nothing is checked until [`validate`](GenerationConfig::validate) is
/// called, so every field may be missing or out of range here.
///
/// ```json
/// {
///   "column_names": ["id", "name", "born"],
///   "specifiers": ["int_1_1000", "name_full", "date_01.01.1950_31.12.2005"],
///   "row_count": 100,
///   "locale": "ru",
///   "blank_percentages": [0, 0, 10]
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GenerationConfig {
    pub column_names: Option<Vec<String>>,
    pub specifiers: Option<Vec<String>>,
    pub row_count: Option<i64>,
    pub locale: Option<String>,
    pub blank_percentages: Option<Vec<i64>>,
}

/// One requested output column.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnRequest {
    pub name: String,
    pub specifier: String,
    pub blank_percent: u8,
}

/// Settings that passed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedConfig {
    pub columns: Vec<ColumnRequest>,
    pub row_count: usize,
    pub locale: Locale,
}

fn configuration_error(message: impl Into<String>) -> DbGenError {
    DbGenError::Configuration(message.into())
}

impl GenerationConfig {
    pub fn from_json(json: &str) -> Result<Self, DbGenError> {
        serde_json::from_str(json).map_err(|error| configuration_error(error.to_string()))
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, DbGenError> {
        serde_json::from_reader(reader).map_err(|error| configuration_error(error.to_string()))
    }

    /// Applies defaults and checks every setting.
    ///
    /// Without column names and specifiers the table has `name`, `phone` and
    /// `email` columns. A single blank percentage applies to every column.
    pub fn validate(&self) -> Result<ValidatedConfig, DbGenError> {
        let (names, specifiers) = match (&self.column_names, &self.specifiers) {
            (None, None) => DEFAULT_COLUMNS
                .iter()
                .map(|(name, specifier)| (name.to_string(), specifier.to_string()))
                .unzip(),
            (Some(names), Some(specifiers)) => (names.clone(), specifiers.clone()),
            _ => {
                return Err(configuration_error(
                    "column names and specifiers must be given together",
                ));
            }
        };

        if names.is_empty() {
            return Err(configuration_error("at least one column is required"));
        }
        if names.len() != specifiers.len() {
            return Err(configuration_error(format!(
                "{} column names but {} specifiers",
                names.len(),
                specifiers.len()
            )));
        }

        let row_count = self.row_count.unwrap_or(DEFAULT_ROW_COUNT);
        if row_count <= 0 {
            return Err(configuration_error(format!(
                "row count must be positive, got {row_count}"
            )));
        }
        let row_count = usize::try_from(row_count)
            .map_err(|_| configuration_error(format!("row count {row_count} is too large")))?;

        let locale = match &self.locale {
            Some(code) => code.parse::<Locale>()?,
            None => Locale::default(),
        };

        let percentages = self.blank_percentages(names.len())?;

        let columns = names
            .into_iter()
            .zip(specifiers)
            .zip(percentages)
            .map(|((name, specifier), blank_percent)| ColumnRequest {
                name,
                specifier,
                blank_percent,
            })
            .collect();

        Ok(ValidatedConfig {
            columns,
            row_count,
            locale,
        })
    }

    fn blank_percentages(&self, column_count: usize) -> Result<Vec<u8>, DbGenError> {
        let given = match self.blank_percentages.as_deref() {
            None | Some([]) => return Ok(vec![0; column_count]),
            Some([single]) => vec![*single; column_count],
            Some(all) if all.len() == column_count => all.to_vec(),
            Some(all) => {
                return Err(configuration_error(format!(
                    "{} blank percentages for {column_count} columns",
                    all.len()
                )));
            }
        };

        given
            .into_iter()
            .map(|percent| match u8::try_from(percent) {
                Ok(percent) if percent <= 100 => Ok(percent),
                _ => Err(configuration_error(format!(
                    "blank percentage must be between 0 and 100, got {percent}"
                ))),
            })
            .collect()
    }
}

#[derive(Default)]
pub struct GenerationConfigBuilder {
    config: GenerationConfig,
}

impl GenerationConfigBuilder {
    pub fn new() -> GenerationConfigBuilder {
        Self::default()
    }

    /// Adds a column; columns keep the order in which they are added.
    pub fn column(mut self, name: &str, specifier: &str) -> GenerationConfigBuilder {
        self.config
            .column_names
            .get_or_insert_with(Vec::new)
            .push(name.to_owned());
        self.config
            .specifiers
            .get_or_insert_with(Vec::new)
            .push(specifier.to_owned());
        self
    }

    pub fn row_count(mut self, row_count: i64) -> GenerationConfigBuilder {
        self.config.row_count = Some(row_count);
        self
    }

    pub fn locale(mut self, locale: &str) -> GenerationConfigBuilder {
        self.config.locale = Some(locale.to_owned());
        self
    }

    pub fn blank_percentages(mut self, percentages: Vec<i64>) -> GenerationConfigBuilder {
        self.config.blank_percentages = Some(percentages);
        self
    }

    pub fn build(self) -> GenerationConfig {
        self.config
    }
}
