//! One column strategy per attribute family.
//!
//! Each strategy checks the arity and types of its own parameters before
//! making any provider draw, so a malformed specifier fails without producing
//! values.

use rand::RngCore;

use crate::{
    DbGenError,
    core::{
        family::{ColumnStrategy, Family},
        gender::GenerationContext,
        value::{Column, Value},
    },
    provider::Provider,
};

pub mod address;
pub mod contact;
pub mod document;
pub mod draw;
pub mod gender;
pub mod name;
pub mod numeric;
pub mod temporal;
pub mod vehicle;

use self::{
    address::AddressStrategy,
    contact::{EmailStrategy, PhoneStrategy},
    document::PassportStrategy,
    draw::SingleDraw,
    gender::GenderStrategy,
    name::NameStrategy,
    numeric::{BooleanStrategy, FloatStrategy, IntStrategy, StringStrategy},
    temporal::DateStrategy,
    vehicle::CarStrategy,
};

fn entry(
    family: Family,
    strategy: impl ColumnStrategy + 'static,
) -> (Family, Box<dyn ColumnStrategy>) {
    (family, Box::new(strategy))
}

/// The built-in strategy of every family.
pub(crate) fn defaults() -> Vec<(Family, Box<dyn ColumnStrategy>)> {
    vec![
        entry(Family::Name, NameStrategy),
        entry(Family::Address, AddressStrategy),
        entry(Family::Email, EmailStrategy),
        entry(Family::Date, DateStrategy),
        entry(Family::Phone, PhoneStrategy),
        entry(Family::Gender, GenderStrategy),
        entry(Family::Int, IntStrategy),
        entry(Family::Float, FloatStrategy),
        entry(Family::Boolean, BooleanStrategy),
        entry(Family::String, StringStrategy),
        entry(Family::Car, CarStrategy),
        entry(Family::Passport, PassportStrategy),
        entry(
            Family::Airplane,
            SingleDraw::new(|provider, rng, _| provider.draw_airplane(rng)),
        ),
        entry(
            Family::Education,
            SingleDraw::new(|provider, rng, locale| provider.draw_university(rng, locale)),
        ),
        entry(
            Family::Occupation,
            SingleDraw::new(|provider, rng, locale| provider.draw_occupation(rng, locale)),
        ),
        entry(
            Family::Color,
            SingleDraw::new(|provider, rng, locale| provider.draw_color(rng, locale)),
        ),
        entry(
            Family::Postal,
            SingleDraw::new(|provider, rng, locale| provider.draw_postal_code(rng, locale)),
        ),
        entry(
            Family::Bic,
            SingleDraw::new(|provider, rng, _| provider.draw_bank_code(rng)),
        ),
        entry(
            Family::Inn,
            SingleDraw::new(|provider, rng, _| provider.draw_tax_id(rng)),
        ),
        entry(
            Family::Kpp,
            SingleDraw::new(|provider, rng, _| provider.draw_registration_reason_code(rng)),
        ),
        entry(
            Family::Ogrn,
            SingleDraw::new(|provider, rng, _| provider.draw_state_registration_number(rng)),
        ),
        entry(
            Family::Snils,
            SingleDraw::new(|provider, rng, _| provider.draw_insurance_number(rng)),
        ),
    ]
}

/// Calls `draw` once per row, passing the row index.
pub(crate) fn draw_column(
    context: &GenerationContext,
    rng: &mut dyn RngCore,
    mut draw: impl FnMut(&mut dyn RngCore, usize) -> Result<Value, DbGenError>,
) -> Result<Column, DbGenError> {
    let mut column = Vec::with_capacity(context.row_count);
    for row in 0..context.row_count {
        column.push(Some(draw(rng, row)?));
    }
    Ok(column)
}

/// Draws one text value per row from the provider.
pub(crate) fn draw_text_column(
    context: &GenerationContext,
    provider: &dyn Provider,
    rng: &mut dyn RngCore,
    draw: impl Fn(&dyn Provider, &mut dyn RngCore) -> Result<String, DbGenError>,
) -> Result<Column, DbGenError> {
    draw_column(context, rng, |rng, _| draw(provider, rng).map(Value::Text))
}
