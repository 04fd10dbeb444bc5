use rand::RngCore;

use super::draw_column;
use crate::{
    DbGenError,
    core::{
        family::ColumnStrategy,
        gender::GenerationContext,
        specifier::SpecifierError,
        value::{Column, Value},
    },
    provider::Provider,
};

/// `gender` (short labels) or `gender_full`, read from the run's gender
/// assignment rather than drawn.
pub struct GenderStrategy;

impl ColumnStrategy for GenderStrategy {
    fn generate(
        &self,
        params: &[String],
        context: &GenerationContext,
        _provider: &dyn Provider,
        rng: &mut dyn RngCore,
    ) -> Result<Column, DbGenError> {
        let long = match params {
            [] => false,
            [only] if only == "full" => true,
            [other] => return Err(SpecifierError::UnknownComponent(other.clone()).into()),
            _ => {
                return Err(SpecifierError::Arity {
                    expected: "0 or 1",
                    found: params.len(),
                }
                .into());
            }
        };

        draw_column(context, rng, |_, row| {
            let gender = context.genders[row];
            let label = if long {
                gender.long_label(context.locale)
            } else {
                gender.short_label(context.locale)
            };
            Ok(Value::Text(label.to_owned()))
        })
    }
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::GenderStrategy;
    use crate::{
        core::{
            family::ColumnStrategy,
            gender::{Gender, GenerationContext},
            locale::Locale,
            value::Value,
        },
        provider::stub::StubProvider,
    };

    fn labels(tokens: &[String], locale: Locale) -> Vec<Option<Value>> {
        let context = GenerationContext {
            row_count: 3,
            locale,
            genders: vec![Gender::Male, Gender::Female, Gender::Male],
        };
        let mut rng = StdRng::seed_from_u64(0);
        GenderStrategy
            .generate(tokens, &context, &StubProvider::default(), &mut rng)
            .unwrap()
    }

    fn text(label: &str) -> Option<Value> {
        Some(Value::Text(label.to_owned()))
    }

    #[test]
    fn labels_mirror_assignment() {
        assert_eq!(labels(&[], Locale::En), [text("M"), text("F"), text("M")]);
        assert_eq!(
            labels(&["full".to_owned()], Locale::Ru),
            [text("Мужчина"), text("Женщина"), text("Мужчина")]
        );
    }

    #[test]
    fn unknown_form_is_rejected() {
        let context = GenerationContext {
            row_count: 1,
            locale: Locale::En,
            genders: vec![Gender::Male],
        };
        let mut rng = StdRng::seed_from_u64(0);
        assert!(
            GenderStrategy
                .generate(&["long".to_owned()], &context, &StubProvider::default(), &mut rng)
                .is_err()
        );
    }
}
