use rand::{Rng, RngCore};

use super::draw_column;
use crate::{
    DbGenError,
    core::{
        family::ColumnStrategy,
        gender::GenerationContext,
        specifier::{SpecifierError, ordered, parse_int},
        value::{Column, Value},
    },
    provider::{AddressPart, Provider},
};

/// `address`, `address_full` or a list of components joined with `", "`.
///
/// The `num` component consumes the two tokens after it as inclusive bounds:
/// `address_street_num_1_200`.
pub struct AddressStrategy;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Component {
    Part(AddressPart),
    Number { low: i64, high: i64 },
}

const FULL_ADDRESS: [Component; 4] = [
    Component::Part(AddressPart::Country),
    Component::Part(AddressPart::City),
    Component::Part(AddressPart::Street),
    Component::Number { low: 1, high: 10 },
];

fn components(params: &[String]) -> Result<Vec<Component>, SpecifierError> {
    match params {
        [] => return Ok(FULL_ADDRESS.to_vec()),
        [only] if only == "full" => return Ok(FULL_ADDRESS.to_vec()),
        _ => {}
    }

    let mut components = Vec::with_capacity(params.len());
    let mut tokens = params.iter();
    while let Some(token) = tokens.next() {
        let component = match token.as_str() {
            "continent" => Component::Part(AddressPart::Continent),
            "country" => Component::Part(AddressPart::Country),
            "city" => Component::Part(AddressPart::City),
            "street" => Component::Part(AddressPart::Street),
            "num" => {
                let (Some(low), Some(high)) = (tokens.next(), tokens.next()) else {
                    return Err(SpecifierError::MissingComponentBounds(token.clone()));
                };
                let (low, high) = ordered(parse_int(low)?, parse_int(high)?)?;
                Component::Number { low, high }
            }
            other => return Err(SpecifierError::UnknownComponent(other.to_owned())),
        };
        components.push(component);
    }
    Ok(components)
}

impl ColumnStrategy for AddressStrategy {
    fn generate(
        &self,
        params: &[String],
        context: &GenerationContext,
        provider: &dyn Provider,
        rng: &mut dyn RngCore,
    ) -> Result<Column, DbGenError> {
        let components = components(params)?;

        draw_column(context, rng, |rng, _| {
            let mut place = Vec::with_capacity(components.len());
            for component in &components {
                let text = match *component {
                    Component::Part(part) => provider
                        .draw_address_part(rng, part, context.locale)?
                        .trim()
                        .to_owned(),
                    Component::Number { low, high } => rng.random_range(low..=high).to_string(),
                };
                place.push(text);
            }
            Ok(Value::Text(place.join(", ")))
        })
    }
}
