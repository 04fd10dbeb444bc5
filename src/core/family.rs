use std::{collections::HashMap, fmt, str::FromStr};

use rand::RngCore;

use crate::{
    DbGenError,
    core::{gender::GenerationContext, value::Column},
    provider::Provider,
    strategy,
};

/// Leading token of a specifier, selecting the generation strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    Name,
    Address,
    Email,
    Date,
    Phone,
    Gender,
    Int,
    Float,
    Boolean,
    String,
    Car,
    Airplane,
    Education,
    Occupation,
    Color,
    Bic,
    Inn,
    Kpp,
    Ogrn,
    Snils,
    Postal,
    Passport,
}

impl Family {
    pub const ALL: [Family; 22] = [
        Family::Name,
        Family::Address,
        Family::Email,
        Family::Date,
        Family::Phone,
        Family::Gender,
        Family::Int,
        Family::Float,
        Family::Boolean,
        Family::String,
        Family::Car,
        Family::Airplane,
        Family::Education,
        Family::Occupation,
        Family::Color,
        Family::Bic,
        Family::Inn,
        Family::Kpp,
        Family::Ogrn,
        Family::Snils,
        Family::Postal,
        Family::Passport,
    ];

    pub fn token(&self) -> &'static str {
        match self {
            Family::Name => "name",
            Family::Address => "address",
            Family::Email => "email",
            Family::Date => "date",
            Family::Phone => "phone",
            Family::Gender => "gender",
            Family::Int => "int",
            Family::Float => "float",
            Family::Boolean => "boolean",
            Family::String => "string",
            Family::Car => "car",
            Family::Airplane => "airplane",
            Family::Education => "education",
            Family::Occupation => "occupation",
            Family::Color => "color",
            Family::Bic => "bic",
            Family::Inn => "inn",
            Family::Kpp => "kpp",
            Family::Ogrn => "ogrn",
            Family::Snils => "snils",
            Family::Postal => "postal",
            Family::Passport => "passport",
        }
    }

    /// Specifier forms accepted by the family, one per line.
    pub fn usage(&self) -> &'static str {
        match self {
            Family::Name => {
                "name | name_full - full name\n\
                 name_first | name_last | name_patronymic - a single component\n\
                 name_first_patronymic_last - components joined in the listed order"
            }
            Family::Address => {
                "address | address_full - country, city, street and a number in 1..=10\n\
                 address_continent | address_country | address_city | address_street\n\
                 address_num_N1_N2 - a number in N1..=N2\n\
                 address_country_city_street_num_1_10 - components joined in the listed order"
            }
            Family::Email => "email - random domains\nemail_mail.ru - every address on @mail.ru",
            Family::Date => {
                "date - a date in 01.01.2000..=12.12.2010\n\
                 date_DD.MM.YYYY_DD.MM.YYYY - a date in the inclusive range"
            }
            Family::Phone => {
                "phone | phone_r_r - random country and region codes\n\
                 phone_C_A - fixed country code C and region code A, 'r' draws either one per row"
            }
            Family::Gender => "gender - F/M (Ж/М in ru)\ngender_full - Female/Male (Женщина/Мужчина in ru)",
            Family::Int => "int - an integer in 0..=100\nint_N1_N2 - an integer in N1..=N2",
            Family::Float => "float - a number in 0..=1\nfloat_N1_N2 - a number in N1..=N2",
            Family::Boolean => "boolean - true half of the time\nboolean_P - true P% of the time",
            Family::String => {
                "string - alphanumeric text of length 10..=20\nstring_N1_N2 - length N1..=N2"
            }
            Family::Car => "car | car_brand - brand\ncar_number - registration plate\ncar_manufacturer",
            Family::Airplane => "airplane - airplane model",
            Family::Education => "education - university",
            Family::Occupation => "occupation - profession",
            Family::Color => "color - colour name",
            Family::Bic => "bic - bank identification code",
            Family::Inn => "inn - taxpayer identification number",
            Family::Kpp => "kpp - registration reason code",
            Family::Ogrn => "ogrn - primary state registration number",
            Family::Snils => "snils - individual insurance account number",
            Family::Postal => "postal - postal code",
            Family::Passport => {
                "passport - series and number\npassport_number | passport_series"
            }
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for Family {
    type Err = DbGenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Family::ALL
            .iter()
            .find(|family| family.token() == s)
            .copied()
            .ok_or_else(|| DbGenError::UnknownFamily(s.to_owned()))
    }
}

/// Turns a family's parameters into a full column of values.
pub trait ColumnStrategy {
    /// Validates `params` and generates `context.row_count` values.
    fn generate(
        &self,
        params: &[String],
        context: &GenerationContext,
        provider: &dyn Provider,
        rng: &mut dyn RngCore,
    ) -> Result<Column, DbGenError>;
}

/// Closed mapping from family to strategy.
pub struct StrategyRegistry {
    strategies: HashMap<Family, Box<dyn ColumnStrategy>>,
}

impl StrategyRegistry {
    /// Resolves a family token; an unknown token fails the whole run.
    pub fn dispatch(&self, family_token: &str) -> Result<&dyn ColumnStrategy, DbGenError> {
        let family: Family = family_token.parse()?;
        match self.strategies.get(&family) {
            Some(strategy) => Ok(strategy.as_ref()),
            None => Err(DbGenError::UnknownFamily(family_token.to_owned())),
        }
    }

    /// Replaces the strategy of a family.
    pub fn register(&mut self, family: Family, strategy: Box<dyn ColumnStrategy>) {
        self.strategies.insert(family, strategy);
    }
}

impl Default for StrategyRegistry {
    fn default() -> Self {
        StrategyRegistry {
            strategies: strategy::defaults().into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Family, StrategyRegistry};
    use crate::DbGenError;

    #[test]
    fn every_family_token_parses() {
        for family in Family::ALL {
            assert_eq!(family.token().parse::<Family>().unwrap(), family);
            assert!(!family.usage().is_empty());
        }
    }

    #[test]
    fn every_family_has_a_strategy() {
        let registry = StrategyRegistry::default();
        for family in Family::ALL {
            assert!(registry.dispatch(family.token()).is_ok(), "{family}");
        }
    }

    #[test]
    fn unknown_family_is_an_error() {
        let registry = StrategyRegistry::default();
        match registry.dispatch("unknownthing") {
            Err(DbGenError::UnknownFamily(token)) => assert_eq!(token, "unknownthing"),
            _ => panic!("expected an unknown family error"),
        }
        assert!(registry.dispatch("Name").is_err());
    }
}
