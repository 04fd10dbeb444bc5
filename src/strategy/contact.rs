use rand::{Rng, RngCore};

use super::draw_text_column;
use crate::{
    DbGenError,
    core::{
        family::ColumnStrategy,
        gender::GenerationContext,
        specifier::{SpecifierError, expect_arity},
        value::Column,
    },
    provider::Provider,
};

/// `email` or `email_<domain>`; a leading `@` on the domain is dropped.
pub struct EmailStrategy;

impl ColumnStrategy for EmailStrategy {
    fn generate(
        &self,
        params: &[String],
        context: &GenerationContext,
        provider: &dyn Provider,
        rng: &mut dyn RngCore,
    ) -> Result<Column, DbGenError> {
        expect_arity(params, &[0, 1], "0 or 1")?;

        let domain = match params.first() {
            Some(token) => match token.trim_start_matches('@') {
                "" => return Err(SpecifierError::UnknownComponent(token.clone()).into()),
                domain => Some(domain),
            },
            None => None,
        };

        draw_text_column(context, provider, rng, |provider, rng| {
            provider.draw_email(rng, context.locale, domain)
        })
    }
}

/// Country or region code of a phone number: digits, or `r`.
#[derive(Debug, Clone, PartialEq)]
enum Code {
    Fixed(String),
    /// Drawn per row, written as `r` in the specifier.
    Random,
}

impl Code {
    fn parse(token: &str) -> Result<Code, SpecifierError> {
        match token {
            "r" => Ok(Code::Random),
            fixed if !fixed.is_empty() && fixed.bytes().all(|b| b.is_ascii_digit()) => {
                Ok(Code::Fixed(fixed.to_owned()))
            }
            other => Err(SpecifierError::UnknownComponent(other.to_owned())),
        }
    }

    fn resolve(&self, rng: &mut dyn RngCore, digits: usize) -> String {
        match self {
            Code::Fixed(code) => code.clone(),
            Code::Random => (0..digits)
                .map(|_| char::from(b'0' + rng.random_range(1..=9u8)))
                .collect(),
        }
    }
}

/// `phone` or `phone_<country>_<region>`, formatted `C-(RRR)-###-####`.
pub struct PhoneStrategy;

impl ColumnStrategy for PhoneStrategy {
    fn generate(
        &self,
        params: &[String],
        context: &GenerationContext,
        provider: &dyn Provider,
        rng: &mut dyn RngCore,
    ) -> Result<Column, DbGenError> {
        let (country, region) = match params {
            [] => (Code::Random, Code::Random),
            [country, region] => (Code::parse(country)?, Code::parse(region)?),
            _ => {
                return Err(SpecifierError::Arity {
                    expected: "0 or 2",
                    found: params.len(),
                }
                .into());
            }
        };

        draw_text_column(context, provider, rng, |provider, rng| {
            let mask = format!(
                "{}-({})-###-####",
                country.resolve(rng, 1),
                region.resolve(rng, 3)
            );
            provider.draw_phone(rng, &mask)
        })
    }
}
