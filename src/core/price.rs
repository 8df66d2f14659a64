use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use crate::models::Price;

/// An amount in id-ID formatting with an optional shorthand multiplier:
/// `20.000`, `1.250.000,50`, `20rb`, `1,5jt`
static AMOUNT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(\d[\d.]*(?:,\d+)?)\s*(ribu|rb|k|juta|jt)?\b").expect("valid amount regex")
});

impl Price {
    /// Parse a formatted price text
    ///
    /// One amount gives `Fixed`, two or more give a `Range` over the first
    /// two (in either order). `"Rp20.000 - Rp50.000"` is `Range { 20000, 50000 }`.
    /// Returns `None` when the text holds no amount.
    pub fn parse(text: &str) -> Option<Self> {
        let mut amounts = AMOUNT_RE
            .captures_iter(text)
            .filter_map(|caps| {
                let digits = caps.get(1)?.as_str();
                let multiplier = caps.get(2).map_or(1.0, |m| unit_multiplier(m.as_str()));
                parse_amount(digits).map(|v| v * multiplier)
            });

        let first = amounts.next()?;
        match amounts.next() {
            Some(second) => Some(Self::Range {
                min: first.min(second),
                max: first.max(second),
            }),
            None => Some(Self::Fixed { amount: first }),
        }
    }

    /// Read a price from a raw catalog field: a number or a formatted string
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Number(n) => n
                .as_f64()
                .filter(|v| v.is_finite())
                .map(|amount| Self::Fixed { amount }),
            Value::String(s) => Self::parse(s),
            _ => None,
        }
    }

    /// Sort key for cheapest-first ordering: the fixed amount or the range minimum
    #[inline]
    pub fn ascending_key(&self) -> f64 {
        match *self {
            Self::Fixed { amount } => amount,
            Self::Range { min, .. } => min,
        }
    }

    /// Sort key for most-expensive-first ordering: the fixed amount or the range maximum
    #[inline]
    pub fn descending_key(&self) -> f64 {
        match *self {
            Self::Fixed { amount } => amount,
            Self::Range { max, .. } => max,
        }
    }
}

fn unit_multiplier(unit: &str) -> f64 {
    match unit.to_lowercase().as_str() {
        "ribu" | "rb" | "k" => 1_000.0,
        "juta" | "jt" => 1_000_000.0,
        _ => 1.0,
    }
}

/// `1.250.000,50` -> 1250000.5 (dots group thousands, comma is the decimal mark)
fn parse_amount(digits: &str) -> Option<f64> {
    let normalized: String = digits
        .trim_end_matches('.')
        .chars()
        .filter(|c| *c != '.')
        .map(|c| if c == ',' { '.' } else { c })
        .collect();

    normalized.parse::<f64>().ok().filter(|v| v.is_finite())
}
