#![allow(dead_code)]

mod mocks;

pub use mocks::MockFile;

use std::cell::Cell;
use std::env::temp_dir;
use std::path::PathBuf;

use dbgen::{
    DbGenError,
    core::{gender::Gender, locale::Locale},
    provider::{AddressPart, DrawResult, NamePart, PassportPart, Provider, VehicleKind},
};
use rand::{
    RngCore,
    distr::{Alphanumeric, SampleString},
};

/// Random file name in the system temp directory.
pub fn temp_file(extension: &str) -> PathBuf {
    let name = Alphanumeric.sample_string(&mut rand::rng(), 16);
    temp_dir().join(format!("{name}.{extension}"))
}

/// True when `text` has the shape of `mask`, where `d` stands for any digit.
pub fn has_shape(text: &str, mask: &str) -> bool {
    text.chars().count() == mask.chars().count()
        && text.chars().zip(mask.chars()).all(|(c, m)| match m {
            'd' => c.is_ascii_digit(),
            other => c == other,
        })
}

/// Provider answering every draw with a description of its arguments.
#[derive(Default)]
pub struct EchoProvider;

impl Provider for EchoProvider {
    fn draw_person_name_part(
        &self,
        _rng: &mut dyn RngCore,
        part: NamePart,
        gender: Gender,
        _locale: Locale,
    ) -> DrawResult {
        Ok(format!("{part:?}:{gender:?}"))
    }

    fn draw_full_name(&self, _rng: &mut dyn RngCore, gender: Gender, _locale: Locale) -> DrawResult {
        Ok(format!("{gender:?}"))
    }

    fn draw_address_part(
        &self,
        _rng: &mut dyn RngCore,
        part: AddressPart,
        _locale: Locale,
    ) -> DrawResult {
        Ok(format!("{part:?}"))
    }

    fn draw_postal_code(&self, _rng: &mut dyn RngCore, locale: Locale) -> DrawResult {
        Ok(format!("postal-{locale}"))
    }

    fn draw_email(&self, _rng: &mut dyn RngCore, _locale: Locale, domain: Option<&str>) -> DrawResult {
        Ok(format!("someone@{}", domain.unwrap_or("example.com")))
    }

    fn draw_phone(&self, rng: &mut dyn RngCore, mask: &str) -> DrawResult {
        Ok(mask
            .chars()
            .map(|c| match c {
                '#' => char::from(b'0' + (rng.next_u32() % 10) as u8),
                other => other,
            })
            .collect())
    }

    fn draw_university(&self, _rng: &mut dyn RngCore, _locale: Locale) -> DrawResult {
        Ok("university".to_owned())
    }

    fn draw_occupation(&self, _rng: &mut dyn RngCore, _locale: Locale) -> DrawResult {
        Ok("occupation".to_owned())
    }

    fn draw_color(&self, _rng: &mut dyn RngCore, _locale: Locale) -> DrawResult {
        Ok("color".to_owned())
    }

    fn draw_vehicle(&self, _rng: &mut dyn RngCore, kind: VehicleKind, _locale: Locale) -> DrawResult {
        Ok(format!("{kind:?}"))
    }

    fn draw_airplane(&self, _rng: &mut dyn RngCore) -> DrawResult {
        Ok("airplane".to_owned())
    }

    fn draw_bank_code(&self, _rng: &mut dyn RngCore) -> DrawResult {
        Ok("bic".to_owned())
    }

    fn draw_tax_id(&self, _rng: &mut dyn RngCore) -> DrawResult {
        Ok("inn".to_owned())
    }

    fn draw_registration_reason_code(&self, _rng: &mut dyn RngCore) -> DrawResult {
        Ok("kpp".to_owned())
    }

    fn draw_state_registration_number(&self, _rng: &mut dyn RngCore) -> DrawResult {
        Ok("ogrn".to_owned())
    }

    fn draw_insurance_number(&self, _rng: &mut dyn RngCore) -> DrawResult {
        Ok("snils".to_owned())
    }

    fn draw_passport(&self, _rng: &mut dyn RngCore, part: PassportPart) -> DrawResult {
        Ok(format!("{part:?}"))
    }
}

/// [`EchoProvider`] whose e-mail draws fail once `succeed` of them went through.
pub struct FailingProvider {
    succeed: usize,
    emails: Cell<usize>,
}

impl FailingProvider {
    pub fn new(succeed: usize) -> Self {
        Self {
            succeed,
            emails: Cell::new(0),
        }
    }

    /// E-mail draws attempted so far, the failing one included.
    pub fn email_draws(&self) -> usize {
        self.emails.get()
    }
}

impl Provider for FailingProvider {
    fn draw_person_name_part(
        &self,
        rng: &mut dyn RngCore,
        part: NamePart,
        gender: Gender,
        locale: Locale,
    ) -> DrawResult {
        EchoProvider.draw_person_name_part(rng, part, gender, locale)
    }

    fn draw_full_name(&self, rng: &mut dyn RngCore, gender: Gender, locale: Locale) -> DrawResult {
        EchoProvider.draw_full_name(rng, gender, locale)
    }

    fn draw_address_part(
        &self,
        rng: &mut dyn RngCore,
        part: AddressPart,
        locale: Locale,
    ) -> DrawResult {
        EchoProvider.draw_address_part(rng, part, locale)
    }

    fn draw_postal_code(&self, rng: &mut dyn RngCore, locale: Locale) -> DrawResult {
        EchoProvider.draw_postal_code(rng, locale)
    }

    fn draw_email(&self, rng: &mut dyn RngCore, locale: Locale, domain: Option<&str>) -> DrawResult {
        let draws = self.emails.get() + 1;
        self.emails.set(draws);
        if draws > self.succeed {
            return Err(DbGenError::Provider("mailbox catalogue unavailable".to_owned()));
        }
        EchoProvider.draw_email(rng, locale, domain)
    }

    fn draw_phone(&self, rng: &mut dyn RngCore, mask: &str) -> DrawResult {
        EchoProvider.draw_phone(rng, mask)
    }

    fn draw_university(&self, rng: &mut dyn RngCore, locale: Locale) -> DrawResult {
        EchoProvider.draw_university(rng, locale)
    }

    fn draw_occupation(&self, rng: &mut dyn RngCore, locale: Locale) -> DrawResult {
        EchoProvider.draw_occupation(rng, locale)
    }

    fn draw_color(&self, rng: &mut dyn RngCore, locale: Locale) -> DrawResult {
        EchoProvider.draw_color(rng, locale)
    }

    fn draw_vehicle(&self, rng: &mut dyn RngCore, kind: VehicleKind, locale: Locale) -> DrawResult {
        EchoProvider.draw_vehicle(rng, kind, locale)
    }

    fn draw_airplane(&self, rng: &mut dyn RngCore) -> DrawResult {
        EchoProvider.draw_airplane(rng)
    }

    fn draw_bank_code(&self, rng: &mut dyn RngCore) -> DrawResult {
        EchoProvider.draw_bank_code(rng)
    }

    fn draw_tax_id(&self, rng: &mut dyn RngCore) -> DrawResult {
        EchoProvider.draw_tax_id(rng)
    }

    fn draw_registration_reason_code(&self, rng: &mut dyn RngCore) -> DrawResult {
        EchoProvider.draw_registration_reason_code(rng)
    }

    fn draw_state_registration_number(&self, rng: &mut dyn RngCore) -> DrawResult {
        EchoProvider.draw_state_registration_number(rng)
    }

    fn draw_insurance_number(&self, rng: &mut dyn RngCore) -> DrawResult {
        EchoProvider.draw_insurance_number(rng)
    }

    fn draw_passport(&self, rng: &mut dyn RngCore, part: PassportPart) -> DrawResult {
        EchoProvider.draw_passport(rng, part)
    }
}
