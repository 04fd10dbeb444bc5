//! Russian regulatory identifiers with valid check digits.

use rand::{Rng, RngCore, seq::IndexedRandom};

/// Tax office codes used as the first four digits of a KPP.
const TAX_OFFICES: [&str; 12] = [
    "7700", "7800", "5000", "0100", "0200", "0300", "0500", "0600", "0700", "0800", "0900", "1000",
];

fn digits(rng: &mut dyn RngCore, count: usize, leading_nonzero: bool) -> Vec<u32> {
    (0..count)
        .map(|position| {
            let low = if position == 0 && leading_nonzero { 1 } else { 0 };
            rng.random_range(low..=9)
        })
        .collect()
}

fn join(digits: &[u32]) -> String {
    digits.iter().map(|digit| digit.to_string()).collect()
}

fn weighted_check(digits: &[u32], weights: &[u32]) -> u32 {
    let sum: u32 = digits.iter().zip(weights).map(|(d, w)| d * w).sum();
    sum % 11 % 10
}

/// Nine digits: `04`, region, branch and office numbers.
pub fn bic(rng: &mut dyn RngCore) -> String {
    format!(
        "04{:02}{:02}{:03}",
        rng.random_range(1..=10),
        rng.random_range(0..=99),
        rng.random_range(50..=999)
    )
}

/// Twelve digit individual INN with both control digits.
pub fn inn(rng: &mut dyn RngCore) -> String {
    let mut number = digits(rng, 10, true);
    number.push(weighted_check(&number, &[7, 2, 4, 10, 3, 5, 9, 4, 6, 8]));
    number.push(weighted_check(&number, &[3, 7, 2, 4, 10, 3, 5, 9, 4, 6, 8]));
    join(&number)
}

pub fn kpp(rng: &mut dyn RngCore) -> String {
    let office = TAX_OFFICES.choose(rng).copied().unwrap_or("7700");
    format!(
        "{office}{:02}{:03}",
        rng.random_range(1..=99),
        rng.random_range(1..=999)
    )
}

/// Thirteen digits; the last is the remainder of the first twelve by 11, mod 10.
pub fn ogrn(rng: &mut dyn RngCore) -> String {
    let body = join(&digits(rng, 12, true));
    // twelve decimal digits always fit in a u64
    let value: u64 = body.parse().unwrap_or_default();
    format!("{body}{}", value % 11 % 10)
}

pub(crate) fn snils_check(number: &[u32]) -> u32 {
    let sum: u32 = number
        .iter()
        .enumerate()
        .map(|(position, digit)| digit * (9 - position as u32))
        .sum();
    match sum {
        0..=99 => sum,
        100 | 101 => 0,
        _ => match sum % 101 {
            100 => 0,
            rest => rest,
        },
    }
}

/// Eleven digits: nine random digits and a two digit control number.
pub fn snils(rng: &mut dyn RngCore) -> String {
    let number = digits(rng, 9, false);
    format!("{}{:02}", join(&number), snils_check(&number))
}

/// Region and issue year, e.g. `45 16`.
pub fn passport_series(rng: &mut dyn RngCore) -> String {
    format!("{:02} {}", rng.random_range(1..=99), rng.random_range(10..=24))
}

pub fn passport_number(rng: &mut dyn RngCore) -> String {
    rng.random_range(100_000..=999_999).to_string()
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::{bic, inn, kpp, ogrn, passport_number, passport_series, snils, snils_check};

    fn numeric(text: &str) -> Vec<u32> {
        text.chars().map(|c| c.to_digit(10).unwrap()).collect()
    }

    #[test]
    fn inn_control_digits_are_valid() {
        let mut rng = StdRng::seed_from_u64(17);
        for _ in 0..100 {
            let inn = inn(&mut rng);
            assert_eq!(inn.len(), 12);
            let d = numeric(&inn);
            let n11 = [7, 2, 4, 10, 3, 5, 9, 4, 6, 8]
                .iter()
                .zip(&d)
                .map(|(w, d)| w * d)
                .sum::<u32>()
                % 11
                % 10;
            let n12 = [3, 7, 2, 4, 10, 3, 5, 9, 4, 6, 8]
                .iter()
                .zip(&d)
                .map(|(w, d)| w * d)
                .sum::<u32>()
                % 11
                % 10;
            assert_eq!((d[10], d[11]), (n11, n12));
        }
    }

    #[test]
    fn ogrn_check_digit_is_valid() {
        let mut rng = StdRng::seed_from_u64(4);
        for _ in 0..100 {
            let ogrn = ogrn(&mut rng);
            assert_eq!(ogrn.len(), 13);
            let body: u64 = ogrn[..12].parse().unwrap();
            assert_eq!(ogrn[12..].parse::<u64>().unwrap(), body % 11 % 10);
        }
    }

    #[test]
    fn snils_control_number() {
        // 112-233-445 95 is the reference example
        assert_eq!(snils_check(&[1, 1, 2, 2, 3, 3, 4, 4, 5]), 95);
        assert_eq!(snils_check(&[0; 9]), 0);

        let mut rng = StdRng::seed_from_u64(8);
        for _ in 0..100 {
            let snils = snils(&mut rng);
            assert_eq!(snils.len(), 11);
            let d = numeric(&snils);
            assert_eq!(d[9] * 10 + d[10], snils_check(&d[..9]));
        }
    }

    #[test]
    fn fixed_width_codes() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..50 {
            let bic = bic(&mut rng);
            assert_eq!(bic.len(), 9);
            assert!(bic.starts_with("04"));
            assert_eq!(kpp(&mut rng).len(), 9);
            assert_eq!(passport_number(&mut rng).len(), 6);
            assert_eq!(passport_series(&mut rng).len(), 5);
        }
    }
}
