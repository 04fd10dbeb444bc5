use rand::RngCore;

use super::draw_text_column;
use crate::{
    DbGenError,
    core::{family::ColumnStrategy, gender::GenerationContext, value::Column},
    provider::{Provider, VehicleKind},
};

/// `car_brand`, `car_number` or `car_manufacturer`; anything else is a brand.
pub struct CarStrategy;

fn kind(params: &[String]) -> VehicleKind {
    match params.first().map(String::as_str) {
        Some("number") => VehicleKind::Number,
        Some("manufacturer") => VehicleKind::Manufacturer,
        _ => VehicleKind::Brand,
    }
}

impl ColumnStrategy for CarStrategy {
    fn generate(
        &self,
        params: &[String],
        context: &GenerationContext,
        provider: &dyn Provider,
        rng: &mut dyn RngCore,
    ) -> Result<Column, DbGenError> {
        let kind = kind(params);
        draw_text_column(context, provider, rng, |provider, rng| {
            provider.draw_vehicle(rng, kind, context.locale)
        })
    }
}
