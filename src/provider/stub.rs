//! Deterministic provider for unit tests: every draw describes its arguments.

use std::cell::RefCell;

use rand::RngCore;

use super::{AddressPart, DrawResult, NamePart, PassportPart, Provider, VehicleKind};
use crate::core::{gender::Gender, locale::Locale};

#[derive(Default)]
pub(crate) struct StubProvider {
    pub calls: RefCell<Vec<String>>,
}

impl StubProvider {
    fn record(&self, call: String) -> DrawResult {
        self.calls.borrow_mut().push(call.clone());
        Ok(call)
    }
}

impl Provider for StubProvider {
    fn draw_person_name_part(
        &self,
        _rng: &mut dyn RngCore,
        part: NamePart,
        gender: Gender,
        _locale: Locale,
    ) -> DrawResult {
        self.record(format!("{part:?}-{gender:?}"))
    }

    fn draw_full_name(&self, _rng: &mut dyn RngCore, gender: Gender, _locale: Locale) -> DrawResult {
        self.record(format!(" Full-{gender:?} "))
    }

    fn draw_address_part(
        &self,
        _rng: &mut dyn RngCore,
        part: AddressPart,
        _locale: Locale,
    ) -> DrawResult {
        self.record(format!("{part:?}"))
    }

    fn draw_postal_code(&self, _rng: &mut dyn RngCore, locale: Locale) -> DrawResult {
        self.record(format!("Postal-{locale}"))
    }

    fn draw_email(&self, _rng: &mut dyn RngCore, _locale: Locale, domain: Option<&str>) -> DrawResult {
        self.record(format!("user@{}", domain.unwrap_or("example.com")))
    }

    fn draw_phone(&self, _rng: &mut dyn RngCore, mask: &str) -> DrawResult {
        self.record(mask.replace('#', "0"))
    }

    fn draw_university(&self, _rng: &mut dyn RngCore, _locale: Locale) -> DrawResult {
        self.record("University".to_owned())
    }

    fn draw_occupation(&self, _rng: &mut dyn RngCore, _locale: Locale) -> DrawResult {
        self.record("Occupation".to_owned())
    }

    fn draw_color(&self, _rng: &mut dyn RngCore, _locale: Locale) -> DrawResult {
        self.record("Color".to_owned())
    }

    fn draw_vehicle(&self, _rng: &mut dyn RngCore, kind: VehicleKind, _locale: Locale) -> DrawResult {
        self.record(format!("{kind:?}"))
    }

    fn draw_airplane(&self, _rng: &mut dyn RngCore) -> DrawResult {
        self.record("Airplane".to_owned())
    }

    fn draw_bank_code(&self, _rng: &mut dyn RngCore) -> DrawResult {
        self.record("Bic".to_owned())
    }

    fn draw_tax_id(&self, _rng: &mut dyn RngCore) -> DrawResult {
        self.record("Inn".to_owned())
    }

    fn draw_registration_reason_code(&self, _rng: &mut dyn RngCore) -> DrawResult {
        self.record("Kpp".to_owned())
    }

    fn draw_state_registration_number(&self, _rng: &mut dyn RngCore) -> DrawResult {
        self.record("Ogrn".to_owned())
    }

    fn draw_insurance_number(&self, _rng: &mut dyn RngCore) -> DrawResult {
        self.record("Snils".to_owned())
    }

    fn draw_passport(&self, _rng: &mut dyn RngCore, part: PassportPart) -> DrawResult {
        self.record(format!("{part:?}"))
    }
}
