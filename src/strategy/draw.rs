use rand::RngCore;

use super::draw_text_column;
use crate::{
    DbGenError,
    core::{
        family::ColumnStrategy, gender::GenerationContext, locale::Locale,
        specifier::expect_arity, value::Column,
    },
    provider::{DrawResult, Provider},
};

type Draw = fn(&dyn Provider, &mut dyn RngCore, Locale) -> DrawResult;

/// A parameterless family backed by a single provider draw per row.
pub struct SingleDraw {
    draw: Draw,
}

impl SingleDraw {
    pub fn new(draw: Draw) -> Self {
        SingleDraw { draw }
    }
}

impl ColumnStrategy for SingleDraw {
    fn generate(
        &self,
        params: &[String],
        context: &GenerationContext,
        provider: &dyn Provider,
        rng: &mut dyn RngCore,
    ) -> Result<Column, DbGenError> {
        expect_arity(params, &[0], "0")?;
        draw_text_column(context, provider, rng, |provider, rng| {
            (self.draw)(provider, rng, context.locale)
        })
    }
}
