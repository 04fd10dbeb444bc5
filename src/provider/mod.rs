//! Locale-aware draws of realistic field values.
//!
//! Column strategies decide which draw to make and how to combine the
//! results; a [`Provider`] supplies the individual values. Every draw receives
//! the run's random source so a seeded run stays reproducible.

use rand::RngCore;

use crate::{
    DbGenError,
    core::{gender::Gender, locale::Locale},
};

#[cfg(feature = "fake")]
/// A [`Provider`] backed by the `fake` crate and built-in catalogues.
pub mod fake;

#[cfg(test)]
pub(crate) mod stub;

/// Result of a single provider draw.
pub type DrawResult = Result<String, DbGenError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NamePart {
    First,
    Last,
    /// A patronymic in Russian, a middle name elsewhere.
    Patronymic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressPart {
    Continent,
    Country,
    City,
    Street,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VehicleKind {
    Brand,
    Number,
    Manufacturer,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PassportPart {
    Number,
    Series,
    Combined,
}

pub trait Provider {
    fn draw_person_name_part(
        &self,
        rng: &mut dyn RngCore,
        part: NamePart,
        gender: Gender,
        locale: Locale,
    ) -> DrawResult;

    fn draw_full_name(&self, rng: &mut dyn RngCore, gender: Gender, locale: Locale)
    -> DrawResult;

    fn draw_address_part(&self, rng: &mut dyn RngCore, part: AddressPart, locale: Locale)
    -> DrawResult;

    fn draw_postal_code(&self, rng: &mut dyn RngCore, locale: Locale) -> DrawResult;

    /// Draws an e-mail address, on `domain` when one is given.
    fn draw_email(&self, rng: &mut dyn RngCore, locale: Locale, domain: Option<&str>)
    -> DrawResult;

    /// Replaces every `#` of `mask` with a random digit.
    fn draw_phone(&self, rng: &mut dyn RngCore, mask: &str) -> DrawResult;

    fn draw_university(&self, rng: &mut dyn RngCore, locale: Locale) -> DrawResult;

    fn draw_occupation(&self, rng: &mut dyn RngCore, locale: Locale) -> DrawResult;

    fn draw_color(&self, rng: &mut dyn RngCore, locale: Locale) -> DrawResult;

    fn draw_vehicle(&self, rng: &mut dyn RngCore, kind: VehicleKind, locale: Locale)
    -> DrawResult;

    fn draw_airplane(&self, rng: &mut dyn RngCore) -> DrawResult;

    /// Russian bank identification code (BIC).
    fn draw_bank_code(&self, rng: &mut dyn RngCore) -> DrawResult;

    /// Russian taxpayer number (INN).
    fn draw_tax_id(&self, rng: &mut dyn RngCore) -> DrawResult;

    /// Russian registration reason code (KPP).
    fn draw_registration_reason_code(&self, rng: &mut dyn RngCore) -> DrawResult;

    /// Russian primary state registration number (OGRN).
    fn draw_state_registration_number(&self, rng: &mut dyn RngCore) -> DrawResult;

    /// Russian individual insurance account number (SNILS).
    fn draw_insurance_number(&self, rng: &mut dyn RngCore) -> DrawResult;

    fn draw_passport(&self, rng: &mut dyn RngCore, part: PassportPart) -> DrawResult;
}
