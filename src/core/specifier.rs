use std::{fmt::Display, str::FromStr};

use thiserror::Error;
use time::{Date, macros::format_description};

/// Character separating the tokens of an attribute specifier.
pub const SEPARATOR: char = '_';

/// Reason why a specifier (or one of its parameters) was rejected.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SpecifierError {
    #[error("empty token at position {0}")]
    EmptyToken(usize),

    #[error("expected {expected} parameter(s), found {found}")]
    Arity { expected: &'static str, found: usize },

    #[error("'{0}' is not a valid integer")]
    InvalidInteger(String),

    #[error("'{0}' is not a valid finite number")]
    InvalidFloat(String),

    #[error("'{0}' is not a valid date, expected dd.mm.yyyy")]
    InvalidDate(String),

    #[error("range start {start} is greater than range end {end}")]
    InvertedRange { start: String, end: String },

    #[error("range {start}..={end} is too wide to draw from")]
    UnboundedRange { start: String, end: String },

    #[error("probability {0} is outside of 0..=100")]
    ProbabilityOutOfRange(i64),

    #[error("length bounds must satisfy 1 <= min <= max, found {min} and {max}")]
    InvalidLength { min: i64, max: i64 },

    #[error("unknown component '{0}'")]
    UnknownComponent(String),

    #[error("component '{0}' expects two bounds after it")]
    MissingComponentBounds(String),
}

/// A tokenized attribute specifier: `family[_param...]`.
///
/// Only tokenization happens here. Each family validates the shape of its own
/// parameters when the column is generated.
///
/// ```
/// use dbgen::core::specifier::Specifier;
///
/// let specifier: Specifier = "address_country_num_1_10".parse().unwrap();
/// assert_eq!(specifier.family(), "address");
/// assert_eq!(specifier.params(), ["country", "num", "1", "10"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Specifier {
    raw: String,
    tokens: Vec<String>,
}

impl Specifier {
    pub fn parse(raw: &str) -> Result<Specifier, SpecifierError> {
        let tokens: Vec<String> = raw.split(SEPARATOR).map(str::to_owned).collect();

        if let Some(position) = tokens.iter().position(String::is_empty) {
            return Err(SpecifierError::EmptyToken(position));
        }

        Ok(Specifier {
            raw: raw.to_owned(),
            tokens,
        })
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn family(&self) -> &str {
        &self.tokens[0]
    }

    pub fn params(&self) -> &[String] {
        &self.tokens[1..]
    }
}

impl FromStr for Specifier {
    type Err = SpecifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Specifier::parse(s)
    }
}

/// Fails unless `params` holds one of the `allowed` counts.
pub(crate) fn expect_arity(
    params: &[String],
    allowed: &[usize],
    expected: &'static str,
) -> Result<(), SpecifierError> {
    if allowed.contains(&params.len()) {
        Ok(())
    } else {
        Err(SpecifierError::Arity {
            expected,
            found: params.len(),
        })
    }
}

pub(crate) fn parse_int(token: &str) -> Result<i64, SpecifierError> {
    token
        .parse::<i64>()
        .map_err(|_| SpecifierError::InvalidInteger(token.to_owned()))
}

pub(crate) fn parse_float(token: &str) -> Result<f64, SpecifierError> {
    match token.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(SpecifierError::InvalidFloat(token.to_owned())),
    }
}

/// Parses a `dd.mm.yyyy` date; single-digit days and months are accepted.
pub(crate) fn parse_date(token: &str) -> Result<Date, SpecifierError> {
    Date::parse(
        token,
        format_description!("[day padding:none].[month padding:none].[year]"),
    )
    .map_err(|_| SpecifierError::InvalidDate(token.to_owned()))
}

/// Returns the bounds unchanged when `start <= end`.
pub(crate) fn ordered<T: PartialOrd + Display>(start: T, end: T) -> Result<(T, T), SpecifierError> {
    if start > end {
        return Err(SpecifierError::InvertedRange {
            start: start.to_string(),
            end: end.to_string(),
        });
    }
    Ok((start, end))
}

#[cfg(test)]
mod tests {
    use time::{Date, Month};

    use super::{Specifier, SpecifierError, ordered, parse_date, parse_float, parse_int};

    #[test]
    fn bare_family_has_no_params() {
        let specifier = Specifier::parse("email").unwrap();
        assert_eq!(specifier.family(), "email");
        assert!(specifier.params().is_empty());
        assert_eq!(specifier.raw(), "email");
    }

    #[test]
    fn empty_tokens_are_rejected() {
        assert_eq!(Specifier::parse(""), Err(SpecifierError::EmptyToken(0)));
        assert_eq!(Specifier::parse("int__5"), Err(SpecifierError::EmptyToken(1)));
        assert_eq!(Specifier::parse("phone_7_"), Err(SpecifierError::EmptyToken(2)));
    }

    #[test]
    fn family_tokens_are_case_sensitive() {
        let specifier: Specifier = "Name_First".parse().unwrap();
        assert_eq!(specifier.family(), "Name");
        assert_eq!(specifier.params(), ["First"]);
    }

    #[test]
    fn numbers_are_validated() {
        assert_eq!(parse_int("-12"), Ok(-12));
        assert_eq!(
            parse_int("1.5"),
            Err(SpecifierError::InvalidInteger("1.5".to_owned()))
        );
        assert_eq!(parse_float("0.25"), Ok(0.25));
        assert_eq!(
            parse_float("inf"),
            Err(SpecifierError::InvalidFloat("inf".to_owned()))
        );
    }

    #[test]
    fn dates_use_day_month_year() {
        assert_eq!(
            parse_date("01.02.2020"),
            Ok(Date::from_calendar_date(2020, Month::February, 1).unwrap())
        );
        assert_eq!(
            parse_date("5.3.1999"),
            Ok(Date::from_calendar_date(1999, Month::March, 5).unwrap())
        );
        assert!(parse_date("2020-01-01").is_err());
        assert!(parse_date("31.02.2020").is_err());
    }

    #[test]
    fn inverted_ranges_fail() {
        assert_eq!(ordered(1, 1), Ok((1, 1)));
        assert_eq!(
            ordered(10, 2),
            Err(SpecifierError::InvertedRange {
                start: "10".to_owned(),
                end: "2".to_owned()
            })
        );
    }
}
