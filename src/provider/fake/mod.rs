use fake::{
    Fake,
    faker::{
        address::raw::{CityName, CountryName, PostCode, StreetName},
        company::raw::Profession,
        internet::raw::{FreeEmail, Username},
        name::raw::LastName,
        number::raw::NumberWithFormat,
    },
    locales::{AR_SA, EN, FR_FR, JA_JP, PT_BR, ZH_CN},
};
use log::debug;
use rand::{Rng, RngCore, seq::IndexedRandom};

use super::{AddressPart, DrawResult, NamePart, PassportPart, Provider, VehicleKind};
use crate::{
    DbGenError,
    core::{gender::Gender, locale::Locale},
};

pub mod russia;
mod tables;

/// Draws `$faker` from the `fake` locale closest to `$locale`, falling back
/// to English.
macro_rules! localized {
    ($faker:ident, $locale:expr, $rng:expr) => {{
        let value: String = match $locale {
            Locale::Fr => $faker(FR_FR).fake_with_rng(&mut *$rng),
            Locale::Pt | Locale::PtBr => $faker(PT_BR).fake_with_rng(&mut *$rng),
            Locale::Ja => $faker(JA_JP).fake_with_rng(&mut *$rng),
            Locale::Zh => $faker(ZH_CN).fake_with_rng(&mut *$rng),
            locale if locale.code().starts_with("ar") => {
                $faker(AR_SA).fake_with_rng(&mut *$rng)
            }
            _ => $faker(EN).fake_with_rng(&mut *$rng),
        };
        value
    }};
}

/// Gendered given names of `locale`; English ones where no catalogue exists.
fn given_names(locale: Locale, gender: Gender) -> &'static [&'static str] {
    match (locale, gender) {
        (Locale::Ru, Gender::Female) => &tables::RU_FEMALE_FIRST_NAMES,
        (Locale::Ru, Gender::Male) => &tables::RU_MALE_FIRST_NAMES,
        (Locale::Fr, Gender::Female) => &tables::FR_FEMALE_FIRST_NAMES,
        (Locale::Fr, Gender::Male) => &tables::FR_MALE_FIRST_NAMES,
        (Locale::Pt | Locale::PtBr, Gender::Female) => &tables::PT_FEMALE_FIRST_NAMES,
        (Locale::Pt | Locale::PtBr, Gender::Male) => &tables::PT_MALE_FIRST_NAMES,
        (Locale::Ja, Gender::Female) => &tables::JA_FEMALE_FIRST_NAMES,
        (Locale::Ja, Gender::Male) => &tables::JA_MALE_FIRST_NAMES,
        (Locale::Zh, Gender::Female) => &tables::ZH_FEMALE_FIRST_NAMES,
        (Locale::Zh, Gender::Male) => &tables::ZH_MALE_FIRST_NAMES,
        (locale, Gender::Female) if locale.code().starts_with("ar") => {
            &tables::AR_FEMALE_FIRST_NAMES
        }
        (locale, Gender::Male) if locale.code().starts_with("ar") => &tables::AR_MALE_FIRST_NAMES,
        (_, Gender::Female) => &tables::EN_FEMALE_FIRST_NAMES,
        (_, Gender::Male) => &tables::EN_MALE_FIRST_NAMES,
    }
}

fn pick(rng: &mut dyn RngCore, catalogue: &[&str]) -> DrawResult {
    catalogue
        .choose(rng)
        .map(|value| value.to_string())
        .ok_or_else(|| DbGenError::Provider("empty catalogue".to_owned()))
}

/// [`Provider`] built on the `fake` crate's locale data, completed with
/// catalogues for Russian names, places and identifiers.
///
/// # Examples
///
/// ```
/// use dbgen::core::{gender::Gender, locale::Locale};
/// use dbgen::provider::{NamePart, Provider, fake::FakeProvider};
/// use rand::{SeedableRng, rngs::StdRng};
///
/// let provider = FakeProvider::new();
/// let mut rng = StdRng::seed_from_u64(7);
///
/// let patronymic = provider
///     .draw_person_name_part(&mut rng, NamePart::Patronymic, Gender::Female, Locale::Ru)
///     .unwrap();
/// assert!(patronymic.ends_with("вна"));
///
/// let phone = provider.draw_phone(&mut rng, "7-(999)-###-####").unwrap();
/// assert!(phone.starts_with("7-(999)-"));
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct FakeProvider;

impl FakeProvider {
    pub fn new() -> Self {
        Self
    }

    fn given_name(&self, rng: &mut dyn RngCore, gender: Gender, locale: Locale) -> DrawResult {
        pick(rng, given_names(locale, gender))
    }

    fn family_name(&self, rng: &mut dyn RngCore, gender: Gender, locale: Locale) -> DrawResult {
        match locale {
            Locale::Ru => {
                let surname = pick(rng, &tables::RU_SURNAMES)?;
                Ok(match gender {
                    Gender::Female => tables::feminine_surname(&surname),
                    Gender::Male => surname,
                })
            }
            locale => Ok(localized!(LastName, locale, rng)),
        }
    }

    fn license_plate(&self, rng: &mut dyn RngCore, locale: Locale) -> String {
        match locale {
            Locale::Ru => {
                let mut letter = || {
                    tables::RU_PLATE_LETTERS[rng.random_range(0..tables::RU_PLATE_LETTERS.len())]
                };
                let (first, second, third) = (letter(), letter(), letter());
                format!(
                    "{first}{:03}{second}{third} {:02}",
                    rng.random_range(1..=999),
                    rng.random_range(1..=99)
                )
            }
            _ => {
                let letters: String = (0..3)
                    .map(|_| char::from(rng.random_range(b'A'..=b'Z')))
                    .collect();
                format!("{letters}-{:04}", rng.random_range(0..=9999))
            }
        }
    }
}

impl Provider for FakeProvider {
    fn draw_person_name_part(
        &self,
        rng: &mut dyn RngCore,
        part: NamePart,
        gender: Gender,
        locale: Locale,
    ) -> DrawResult {
        match (part, locale) {
            (NamePart::First, _) => self.given_name(rng, gender, locale),
            (NamePart::Last, _) => self.family_name(rng, gender, locale),
            (NamePart::Patronymic, Locale::Ru) => match gender {
                Gender::Female => pick(rng, &tables::RU_FEMALE_PATRONYMICS),
                Gender::Male => pick(rng, &tables::RU_MALE_PATRONYMICS),
            },
            // a middle name of the same gender
            (NamePart::Patronymic, _) => self.given_name(rng, gender, locale),
        }
    }

    fn draw_full_name(&self, rng: &mut dyn RngCore, gender: Gender, locale: Locale) -> DrawResult {
        let given = self.given_name(rng, gender, locale)?;
        let family = self.family_name(rng, gender, locale)?;
        if locale.family_name_first() {
            Ok(format!("{family} {given}"))
        } else {
            Ok(format!("{given} {family}"))
        }
    }

    fn draw_address_part(
        &self,
        rng: &mut dyn RngCore,
        part: AddressPart,
        locale: Locale,
    ) -> DrawResult {
        match (part, locale) {
            (AddressPart::Continent, Locale::Ru) => pick(rng, &tables::RU_CONTINENTS),
            (AddressPart::Continent, _) => pick(rng, &tables::EN_CONTINENTS),
            (AddressPart::Country, Locale::Ru) => pick(rng, &tables::RU_COUNTRIES),
            (AddressPart::Country, locale) => Ok(localized!(CountryName, locale, rng)),
            (AddressPart::City, Locale::Ru) => pick(rng, &tables::RU_CITIES),
            (AddressPart::City, locale) => Ok(localized!(CityName, locale, rng)),
            (AddressPart::Street, Locale::Ru) => {
                Ok(format!("ул. {}", pick(rng, &tables::RU_STREETS)?))
            }
            (AddressPart::Street, locale) => Ok(localized!(StreetName, locale, rng)),
        }
    }

    fn draw_postal_code(&self, rng: &mut dyn RngCore, locale: Locale) -> DrawResult {
        match locale {
            Locale::Ru => Ok(NumberWithFormat(EN, "^#####").fake_with_rng(rng)),
            locale => Ok(localized!(PostCode, locale, rng)),
        }
    }

    fn draw_email(
        &self,
        rng: &mut dyn RngCore,
        _locale: Locale,
        domain: Option<&str>,
    ) -> DrawResult {
        match domain {
            Some(domain) => {
                let user: String = Username(EN).fake_with_rng(rng);
                Ok(format!("{}@{domain}", user.to_lowercase()))
            }
            None => Ok(FreeEmail(EN).fake_with_rng(rng)),
        }
    }

    fn draw_phone(&self, rng: &mut dyn RngCore, mask: &str) -> DrawResult {
        Ok(NumberWithFormat(EN, mask).fake_with_rng(rng))
    }

    fn draw_university(&self, rng: &mut dyn RngCore, locale: Locale) -> DrawResult {
        match locale {
            Locale::Ru => pick(rng, &tables::RU_UNIVERSITIES),
            Locale::En | Locale::EnAu | Locale::EnCa | Locale::EnGb => {
                pick(rng, &tables::EN_UNIVERSITIES)
            }
            locale => Ok(format!(
                "University of {}",
                localized!(CityName, locale, rng)
            )),
        }
    }

    fn draw_occupation(&self, rng: &mut dyn RngCore, locale: Locale) -> DrawResult {
        match locale {
            Locale::Ru => pick(rng, &tables::RU_OCCUPATIONS),
            locale => Ok(localized!(Profession, locale, rng)),
        }
    }

    fn draw_color(&self, rng: &mut dyn RngCore, locale: Locale) -> DrawResult {
        match locale {
            Locale::Ru => pick(rng, &tables::RU_COLORS),
            _ => pick(rng, &tables::EN_COLORS),
        }
    }

    fn draw_vehicle(&self, rng: &mut dyn RngCore, kind: VehicleKind, locale: Locale) -> DrawResult {
        match kind {
            VehicleKind::Brand => pick(rng, &tables::CAR_BRANDS),
            VehicleKind::Manufacturer => pick(rng, &tables::CAR_MANUFACTURERS),
            VehicleKind::Number => Ok(self.license_plate(rng, locale)),
        }
    }

    fn draw_airplane(&self, rng: &mut dyn RngCore) -> DrawResult {
        pick(rng, &tables::AIRPLANES)
    }

    fn draw_bank_code(&self, rng: &mut dyn RngCore) -> DrawResult {
        Ok(russia::bic(rng))
    }

    fn draw_tax_id(&self, rng: &mut dyn RngCore) -> DrawResult {
        Ok(russia::inn(rng))
    }

    fn draw_registration_reason_code(&self, rng: &mut dyn RngCore) -> DrawResult {
        Ok(russia::kpp(rng))
    }

    fn draw_state_registration_number(&self, rng: &mut dyn RngCore) -> DrawResult {
        Ok(russia::ogrn(rng))
    }

    fn draw_insurance_number(&self, rng: &mut dyn RngCore) -> DrawResult {
        Ok(russia::snils(rng))
    }

    fn draw_passport(&self, rng: &mut dyn RngCore, part: PassportPart) -> DrawResult {
        let passport = match part {
            PassportPart::Number => russia::passport_number(rng),
            PassportPart::Series => russia::passport_series(rng),
            PassportPart::Combined => {
                let series = russia::passport_series(rng);
                format!("{series} {}", russia::passport_number(rng))
            }
        };
        debug!("Drew passport {part:?}: {passport}");
        Ok(passport)
    }
}
