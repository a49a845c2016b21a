use std::str::FromStr;

use bigdecimal::BigDecimal;
use num_traits::Zero;
use once_cell::sync::Lazy;
use regex::Regex;

static PRICE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[0-9]+(?:[.,][0-9]{1,2})?").expect("valid price pattern"));

const MIN_NAME_CHARS: usize = 4;
const MAX_NAME_CHARS: usize = 49;
const MAX_NAME_DIGITS: usize = 3;

/// Best-effort guesses pulled out of recognized text.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExtractedFields {
    pub price: Option<BigDecimal>,
    pub name: Option<String>,
}

/// Scans recognized text for a unit price and a product name.
///
/// Both searches walk the non-blank lines in order and keep the first
/// acceptable candidate. Finding nothing is a normal outcome.
pub fn extract_fields(text: &str) -> ExtractedFields {
    let lines: Vec<&str> = text.lines().filter(|line| !line.trim().is_empty()).collect();

    ExtractedFields {
        price: extract_price(&lines),
        name: extract_name(&lines),
    }
}

/// Only the first number of each line is considered; it must lie in `(0, 10000)`.
fn extract_price(lines: &[&str]) -> Option<BigDecimal> {
    let upper_bound = BigDecimal::from(10_000);

    lines.iter().find_map(|line| {
        let candidate = PRICE_RE.find(line)?;
        let value = BigDecimal::from_str(&candidate.as_str().replace(',', ".")).ok()?;
        (value > BigDecimal::zero() && value < upper_bound).then_some(value)
    })
}

fn extract_name(lines: &[&str]) -> Option<String> {
    lines.iter().map(|line| line.trim()).find_map(|line| {
        let length = line.chars().count();
        if !(MIN_NAME_CHARS..=MAX_NAME_CHARS).contains(&length) {
            return None;
        }

        let letters = line.chars().filter(|c| c.is_alphabetic()).count();
        let digits = line.chars().filter(|c| c.is_ascii_digit()).count();
        (letters > digits && digits < MAX_NAME_DIGITS).then(|| line.to_string())
    })
}
