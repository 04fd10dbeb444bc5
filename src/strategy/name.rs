use rand::RngCore;

use super::draw_column;
use crate::{
    DbGenError,
    core::{
        family::ColumnStrategy,
        gender::{Gender, GenerationContext},
        locale::Locale,
        specifier::SpecifierError,
        value::{Column, Value},
    },
    provider::{NamePart, Provider},
};

/// `name`, `name_full` or a list of `first`/`last`/`patronymic` components.
///
/// Names follow the run's gender assignment so that they agree with any
/// `gender` column of the same row.
pub struct NameStrategy;

#[derive(Debug, PartialEq)]
enum NameLayout {
    Full,
    Parts(Vec<NamePart>),
}

fn layout(params: &[String]) -> Result<NameLayout, SpecifierError> {
    match params {
        [] => Ok(NameLayout::Full),
        [only] if only == "full" => Ok(NameLayout::Full),
        _ => params
            .iter()
            .map(|token| match token.as_str() {
                "first" => Ok(NamePart::First),
                "last" => Ok(NamePart::Last),
                "patronymic" => Ok(NamePart::Patronymic),
                other => Err(SpecifierError::UnknownComponent(other.to_owned())),
            })
            .collect::<Result<Vec<_>, _>>()
            .map(NameLayout::Parts),
    }
}

fn compose(
    parts: &[NamePart],
    provider: &dyn Provider,
    rng: &mut dyn RngCore,
    gender: Gender,
    locale: Locale,
) -> Result<String, DbGenError> {
    let mut components = Vec::with_capacity(parts.len());
    for part in parts {
        let component = provider.draw_person_name_part(rng, *part, gender, locale)?;
        components.push(component.trim().to_owned());
    }
    Ok(components.join(" ").trim().to_owned())
}

impl ColumnStrategy for NameStrategy {
    fn generate(
        &self,
        params: &[String],
        context: &GenerationContext,
        provider: &dyn Provider,
        rng: &mut dyn RngCore,
    ) -> Result<Column, DbGenError> {
        let layout = layout(params)?;
        let locale = context.locale;

        draw_column(context, rng, |rng, row| {
            let gender = context.genders[row];
            let name = match &layout {
                // Russian full names carry a patronymic between given and family name
                NameLayout::Full if locale == Locale::Ru => compose(
                    &[NamePart::First, NamePart::Patronymic, NamePart::Last],
                    provider,
                    rng,
                    gender,
                    locale,
                )?,
                NameLayout::Full => provider
                    .draw_full_name(rng, gender, locale)?
                    .trim()
                    .to_owned(),
                NameLayout::Parts(parts) => compose(parts, provider, rng, gender, locale)?,
            };
            Ok(Value::Text(name))
        })
    }
}
