use rand::{Rng, RngCore};

use super::locale::Locale;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gender {
    Female,
    Male,
}

impl Gender {
    /// `F`/`M`, or `Ж`/`М` for Russian.
    pub fn short_label(&self, locale: Locale) -> &'static str {
        match (locale, self) {
            (Locale::Ru, Gender::Female) => "Ж",
            (Locale::Ru, Gender::Male) => "М",
            (_, Gender::Female) => "F",
            (_, Gender::Male) => "M",
        }
    }

    pub fn long_label(&self, locale: Locale) -> &'static str {
        match (locale, self) {
            (Locale::Ru, Gender::Female) => "Женщина",
            (Locale::Ru, Gender::Male) => "Мужчина",
            (_, Gender::Female) => "Female",
            (_, Gender::Male) => "Male",
        }
    }
}

/// Draws one gender per row, independently and uniformly.
pub fn assign(row_count: usize, rng: &mut dyn RngCore) -> Vec<Gender> {
    (0..row_count)
        .map(|_| {
            if rng.random_bool(0.5) {
                Gender::Female
            } else {
                Gender::Male
            }
        })
        .collect()
}

/// Read-only state shared by every column of a run.
#[derive(Debug, Clone)]
pub struct GenerationContext {
    pub row_count: usize,
    pub locale: Locale,
    pub genders: Vec<Gender>,
}

impl GenerationContext {
    /// Builds the context, drawing the run's gender assignment.
    pub fn new(row_count: usize, locale: Locale, rng: &mut dyn RngCore) -> Self {
        GenerationContext {
            row_count,
            locale,
            genders: assign(row_count, rng),
        }
    }
}
