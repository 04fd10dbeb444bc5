use rand::{
    Rng, RngCore,
    distr::{Alphanumeric, Distribution},
};

use super::draw_column;
use crate::{
    DbGenError,
    core::{
        family::ColumnStrategy,
        gender::GenerationContext,
        specifier::{SpecifierError, ordered, parse_float, parse_int},
        value::{Column, Value},
    },
    provider::Provider,
};

/// Optional `_<low>_<high>` pair shared by the numeric families.
fn bounds<T>(
    params: &[String],
    default: (T, T),
    parse: impl Fn(&str) -> Result<T, SpecifierError>,
) -> Result<(T, T), SpecifierError> {
    match params {
        [] => Ok(default),
        [low, high] => Ok((parse(low)?, parse(high)?)),
        _ => Err(SpecifierError::Arity {
            expected: "0 or 2",
            found: params.len(),
        }),
    }
}

/// `int` or `int_<low>_<high>`, inclusive; defaults to 0..=100.
pub struct IntStrategy;

impl ColumnStrategy for IntStrategy {
    fn generate(
        &self,
        params: &[String],
        context: &GenerationContext,
        _provider: &dyn Provider,
        rng: &mut dyn RngCore,
    ) -> Result<Column, DbGenError> {
        let (low, high) = bounds(params, (0, 100), parse_int)?;
        let (low, high) = ordered(low, high)?;

        draw_column(context, rng, |rng, _| {
            Ok(Value::Int(rng.random_range(low..=high)))
        })
    }
}

/// `float` or `float_<low>_<high>`, inclusive; defaults to 0.0..=1.0.
pub struct FloatStrategy;

impl ColumnStrategy for FloatStrategy {
    fn generate(
        &self,
        params: &[String],
        context: &GenerationContext,
        _provider: &dyn Provider,
        rng: &mut dyn RngCore,
    ) -> Result<Column, DbGenError> {
        let (low, high) = bounds(params, (0.0, 1.0), parse_float)?;
        let (low, high) = ordered(low, high)?;
        if !(high - low).is_finite() {
            return Err(SpecifierError::UnboundedRange {
                start: low.to_string(),
                end: high.to_string(),
            }
            .into());
        }

        draw_column(context, rng, |rng, _| {
            Ok(Value::Float(rng.random_range(low..=high)))
        })
    }
}

/// `boolean` or `boolean_<percent>` giving the chance of `true`.
pub struct BooleanStrategy;

impl ColumnStrategy for BooleanStrategy {
    fn generate(
        &self,
        params: &[String],
        context: &GenerationContext,
        _provider: &dyn Provider,
        rng: &mut dyn RngCore,
    ) -> Result<Column, DbGenError> {
        let percent = match params {
            [] => 50,
            [percent] => parse_int(percent)?,
            _ => {
                return Err(SpecifierError::Arity {
                    expected: "0 or 1",
                    found: params.len(),
                }
                .into());
            }
        };
        if !(0..=100).contains(&percent) {
            return Err(SpecifierError::ProbabilityOutOfRange(percent).into());
        }
        let probability = percent as f64 / 100.0;

        draw_column(context, rng, |rng, _| {
            Ok(Value::Bool(rng.random_bool(probability)))
        })
    }
}

/// `string` or `string_<min>_<max>`: alphanumeric text whose length is drawn
/// per row; defaults to 10..=20.
pub struct StringStrategy;

impl ColumnStrategy for StringStrategy {
    fn generate(
        &self,
        params: &[String],
        context: &GenerationContext,
        _provider: &dyn Provider,
        rng: &mut dyn RngCore,
    ) -> Result<Column, DbGenError> {
        let (min, max) = bounds(params, (10, 20), parse_int)?;
        if min < 1 || max < min {
            return Err(SpecifierError::InvalidLength { min, max }.into());
        }
        let (min, max) = (min as usize, max as usize);

        draw_column(context, rng, |rng, _| {
            let length = rng.random_range(min..=max);
            let text: String = (0..length)
                .map(|_| char::from(Alphanumeric.sample(rng)))
                .collect();
            Ok(Value::Text(text))
        })
    }
}
