//! Currency formatting
//!
//! Turns raw amounts into display strings. Kept apart from the estimator
//! so that cost computation never depends on locale settings.

use crate::core::DisplayConfig;

const LAKH: f64 = 100_000.0;
const CRORE: f64 = 10_000_000.0;

/// Digit grouping convention
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grouping {
    /// 12,34,56,789 (lakh/crore)
    Indian,
    /// 123,456,789
    Western,
}

impl Grouping {
    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "western" | "international" => Grouping::Western,
            "indian" => Grouping::Indian,
            other => {
                log::warn!("Unknown grouping '{}', using indian", other);
                Grouping::Indian
            }
        }
    }
}

/// How to render an amount
#[derive(Debug, Clone, PartialEq)]
pub struct CurrencyFormat {
    pub symbol: String,
    pub grouping: Grouping,
    pub decimals: usize,
}

impl CurrencyFormat {
    pub fn from_config(config: &DisplayConfig) -> Self {
        Self {
            symbol: config.currency_symbol.clone(),
            grouping: Grouping::from_name(&config.grouping),
            decimals: config.decimals,
        }
    }

    pub fn indian_rupee() -> Self {
        Self {
            symbol: "\u{20B9}".to_string(),
            grouping: Grouping::Indian,
            decimals: 0,
        }
    }
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        Self::indian_rupee()
    }
}

/// Full grouped amount, e.g. `₹46,00,000`. `None` for NaN or infinity.
pub fn format_amount(amount: f64, fmt: &CurrencyFormat) -> Option<String> {
    if !amount.is_finite() {
        return None;
    }
    let sign = if amount < 0.0 { "-" } else { "" };
    Some(format!(
        "{}{}{}",
        sign,
        fmt.symbol,
        group_number(amount.abs(), fmt.decimals, fmt.grouping)
    ))
}

/// Shorthand amount: `₹1.20 Cr`, `₹46.00 L` (Indian) or `$4.60M`, `$150.00K`
/// (Western). Small amounts fall back to the full form.
pub fn format_compact(amount: f64, fmt: &CurrencyFormat) -> Option<String> {
    if !amount.is_finite() {
        return None;
    }
    let sign = if amount < 0.0 { "-" } else { "" };
    let abs = amount.abs();

    let scaled = match fmt.grouping {
        Grouping::Indian if abs >= CRORE => Some((abs / CRORE, " Cr")),
        Grouping::Indian if abs >= LAKH => Some((abs / LAKH, " L")),
        Grouping::Western if abs >= 1_000_000.0 => Some((abs / 1_000_000.0, "M")),
        Grouping::Western if abs >= 1_000.0 => Some((abs / 1_000.0, "K")),
        _ => None,
    };

    match scaled {
        Some((value, suffix)) => Some(format!("{}{}{:.2}{}", sign, fmt.symbol, value, suffix)),
        None => format_amount(amount, fmt),
    }
}

/// Group a non-negative number's integer digits and append the fraction
fn group_number(value: f64, decimals: usize, grouping: Grouping) -> String {
    let rendered = format!("{:.*}", decimals, value);
    let (int_part, frac_part) = match rendered.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (rendered.as_str(), None),
    };

    let grouped = match grouping {
        Grouping::Western => group_digits(int_part, 3, 3),
        Grouping::Indian => group_digits(int_part, 3, 2),
    };

    match frac_part {
        Some(f) => format!("{}.{}", grouped, f),
        None => grouped,
    }
}

/// Insert commas: the rightmost group has `first` digits, the rest `rest`
fn group_digits(digits: &str, first: usize, rest: usize) -> String {
    if digits.len() <= first {
        return digits.to_string();
    }

    let (head, tail) = digits.split_at(digits.len() - first);
    let mut groups: Vec<&str> = vec![tail];
    let mut remaining = head;
    while remaining.len() > rest {
        let (h, t) = remaining.split_at(remaining.len() - rest);
        groups.push(t);
        remaining = h;
    }
    groups.push(remaining);
    groups.reverse();
    groups.join(",")
}

/// Area with thousands separators and unit, e.g. `4,000 sq ft`
pub fn format_area(area: f64, unit: &str) -> String {
    let digits = if area.fract() == 0.0 { 0 } else { 2 };
    format!("{} {}", group_number(area.abs(), digits, Grouping::Western), unit)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn western() -> CurrencyFormat {
        CurrencyFormat {
            symbol: "$".to_string(),
            grouping: Grouping::Western,
            decimals: 0,
        }
    }

    #[test]
    fn test_indian_grouping() {
        let fmt = CurrencyFormat::indian_rupee();
        assert_eq!(format_amount(4_600_000.0, &fmt).as_deref(), Some("\u{20B9}46,00,000"));
        assert_eq!(format_amount(150_000.0, &fmt).as_deref(), Some("\u{20B9}1,50,000"));
        assert_eq!(format_amount(123_456_789.0, &fmt).as_deref(), Some("\u{20B9}12,34,56,789"));
        assert_eq!(format_amount(999.0, &fmt).as_deref(), Some("\u{20B9}999"));
        assert_eq!(format_amount(0.0, &fmt).as_deref(), Some("\u{20B9}0"));
    }

    #[test]
    fn test_western_grouping() {
        let fmt = western();
        assert_eq!(format_amount(4_600_000.0, &fmt).as_deref(), Some("$4,600,000"));
        assert_eq!(format_amount(1_000.0, &fmt).as_deref(), Some("$1,000"));
        assert_eq!(format_amount(100.0, &fmt).as_deref(), Some("$100"));
    }

    #[test]
    fn test_decimals() {
        let mut fmt = CurrencyFormat::indian_rupee();
        fmt.decimals = 2;
        assert_eq!(format_amount(2_990_000.0000001, &fmt).as_deref(), Some("\u{20B9}29,90,000.00"));
        assert_eq!(format_amount(1234.5, &fmt).as_deref(), Some("\u{20B9}1,234.50"));
    }

    #[test]
    fn test_compact_indian() {
        let fmt = CurrencyFormat::indian_rupee();
        assert_eq!(format_compact(4_600_000.0, &fmt).as_deref(), Some("\u{20B9}46.00 L"));
        assert_eq!(format_compact(12_000_000.0, &fmt).as_deref(), Some("\u{20B9}1.20 Cr"));
        assert_eq!(format_compact(75_000.0, &fmt).as_deref(), Some("\u{20B9}75,000"));
    }

    #[test]
    fn test_compact_western() {
        let fmt = western();
        assert_eq!(format_compact(4_600_000.0, &fmt).as_deref(), Some("$4.60M"));
        assert_eq!(format_compact(150_000.0, &fmt).as_deref(), Some("$150.00K"));
        assert_eq!(format_compact(999.0, &fmt).as_deref(), Some("$999"));
    }

    #[test]
    fn test_non_finite_is_not_formatted() {
        let fmt = CurrencyFormat::indian_rupee();
        assert_eq!(format_amount(f64::NAN, &fmt), None);
        assert_eq!(format_amount(f64::NEG_INFINITY, &fmt), None);
        assert_eq!(format_compact(f64::INFINITY, &fmt), None);
    }

    #[test]
    fn test_grouping_from_name() {
        assert_eq!(Grouping::from_name("Western"), Grouping::Western);
        assert_eq!(Grouping::from_name("indian"), Grouping::Indian);
        assert_eq!(Grouping::from_name("klingon"), Grouping::Indian);
    }

    #[test]
    fn test_format_area() {
        assert_eq!(format_area(4000.0, "sq ft"), "4,000 sq ft");
        assert_eq!(format_area(850.5, "sq ft"), "850.50 sq ft");
    }
}
