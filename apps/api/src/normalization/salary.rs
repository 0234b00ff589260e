//! Salary expectation parsing: numeric range, currency and pay period.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::normalization::text::clean;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Currency {
    #[default]
    #[serde(rename = "EUR")]
    Eur,
    #[serde(rename = "USD")]
    Usd,
    #[serde(rename = "GBP")]
    Gbp,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PayPeriod {
    #[default]
    Yearly,
    Monthly,
    Daily,
    Hourly,
}

/// Structured salary expectation. When both bounds are set, `min <= max`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SalaryRange {
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub currency: Currency,
    pub period: PayPeriod,
}

static NUMBER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d+[.,]?\d*").expect("number pattern is valid"));

/// Parses a free-text salary expectation such as `"45-50k"` or `"3000 € par mois"`.
///
/// Never fails: text without digits yields a range with both bounds unset.
/// A `k` anywhere in the text scales every extracted number by 1000, including
/// numbers that were already written in full.
pub fn parse_salary(text: &str) -> SalaryRange {
    let cleaned = clean(text);
    if cleaned.is_empty() {
        return SalaryRange::default();
    }

    let thousands = cleaned.contains('k');
    let mut numbers: Vec<f64> = NUMBER
        .find_iter(&cleaned)
        .filter_map(|m| parse_number(m.as_str()))
        .map(|n| if thousands { n * 1000.0 } else { n })
        .collect();
    numbers.sort_by(|a, b| a.total_cmp(b));

    let (min, max) = match numbers.as_slice() {
        [] => (None, None),
        [only] => (Some(*only), None),
        [first, .., last] => (Some(*first), Some(*last)),
    };

    SalaryRange {
        min,
        max,
        currency: detect_currency(&cleaned),
        period: detect_period(&cleaned),
    }
}

fn parse_number(token: &str) -> Option<f64> {
    token
        .trim_end_matches(['.', ','])
        .replace(',', ".")
        .parse::<f64>()
        .ok()
}

fn detect_currency(cleaned: &str) -> Currency {
    if cleaned.contains('€') || cleaned.contains("eur") {
        Currency::Eur
    } else if cleaned.contains('$') || cleaned.contains("usd") {
        Currency::Usd
    } else if cleaned.contains('£') || cleaned.contains("gbp") {
        Currency::Gbp
    } else {
        Currency::Eur
    }
}

fn detect_period(cleaned: &str) -> PayPeriod {
    if cleaned.contains("mois") || cleaned.contains("mensuel") {
        PayPeriod::Monthly
    } else if cleaned.contains("jour") || cleaned.contains("daily") {
        PayPeriod::Daily
    } else if cleaned.contains("heure") || cleaned.contains("hourly") {
        PayPeriod::Hourly
    } else {
        PayPeriod::Yearly
    }
}
