use rand::{Rng, RngCore};
use time::{Date, Duration, macros::date};

use super::draw_column;
use crate::{
    DbGenError,
    core::{
        family::ColumnStrategy,
        gender::GenerationContext,
        specifier::{SpecifierError, ordered, parse_date},
        value::{Column, Value},
    },
    provider::Provider,
};

const DEFAULT_START: Date = date!(2000 - 01 - 01);
const DEFAULT_END: Date = date!(2010 - 12 - 12);

/// `date` or `date_<dd.mm.yyyy>_<dd.mm.yyyy>`: a uniformly drawn day within
/// the inclusive range.
pub struct DateStrategy;

fn bounds(params: &[String]) -> Result<(Date, Date), SpecifierError> {
    match params {
        [] => Ok((DEFAULT_START, DEFAULT_END)),
        [start, end] => ordered(parse_date(start)?, parse_date(end)?),
        _ => Err(SpecifierError::Arity {
            expected: "0 or 2",
            found: params.len(),
        }),
    }
}

impl ColumnStrategy for DateStrategy {
    fn generate(
        &self,
        params: &[String],
        context: &GenerationContext,
        _provider: &dyn Provider,
        rng: &mut dyn RngCore,
    ) -> Result<Column, DbGenError> {
        let (start, end) = bounds(params)?;
        let span = i64::from(end.to_julian_day() - start.to_julian_day());

        draw_column(context, rng, |rng, _| {
            let offset = Duration::days(rng.random_range(0..=span));
            Ok(Value::Date(start.saturating_add(offset)))
        })
    }
}
