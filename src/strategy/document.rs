use rand::RngCore;

use super::draw_text_column;
use crate::{
    DbGenError,
    core::{family::ColumnStrategy, gender::GenerationContext, value::Column},
    provider::{PassportPart, Provider},
};

/// `passport_number`, `passport_series`; anything else yields series and number.
pub struct PassportStrategy;

fn part(params: &[String]) -> PassportPart {
    match params.first().map(String::as_str) {
        Some("number") => PassportPart::Number,
        Some("series") => PassportPart::Series,
        _ => PassportPart::Combined,
    }
}

impl ColumnStrategy for PassportStrategy {
    fn generate(
        &self,
        params: &[String],
        context: &GenerationContext,
        provider: &dyn Provider,
        rng: &mut dyn RngCore,
    ) -> Result<Column, DbGenError> {
        let part = part(params);
        draw_text_column(context, provider, rng, |provider, rng| {
            provider.draw_passport(rng, part)
        })
    }
}
