//! Locale-aware number formatting for dashboard values

use serde::{Deserialize, Serialize};

/// Separators and currency decoration used when rendering numbers.
///
/// The dashboard never hardcodes a locale; callers pick one of the presets
/// or build their own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberLocale {
    /// Inserted every three digits of the integer part
    pub group_separator: char,
    pub decimal_separator: char,
    /// Printed before the amount, e.g. "$"
    pub currency_prefix: String,
    /// Printed after the amount, e.g. " €"
    pub currency_suffix: String,
}

impl NumberLocale {
    /// French grouping with Euro suffix: `12 500,00 €`
    pub fn fr_eur() -> Self {
        Self {
            group_separator: '\u{202f}',
            decimal_separator: ',',
            currency_prefix: String::new(),
            currency_suffix: "\u{a0}€".to_string(),
        }
    }

    /// US grouping with Dollar prefix: `$12,500.00`
    pub fn en_usd() -> Self {
        Self {
            group_separator: ',',
            decimal_separator: '.',
            currency_prefix: "$".to_string(),
            currency_suffix: String::new(),
        }
    }

    /// Resolves a preset by its configuration key (`fr-eur`, `en-usd`).
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "fr-eur" => Some(Self::fr_eur()),
            "en-usd" => Some(Self::en_usd()),
            _ => None,
        }
    }
}

impl Default for NumberLocale {
    fn default() -> Self {
        Self::fr_eur()
    }
}

/// Formats a number with locale grouping and a fixed number of decimals.
///
/// ```
/// use contracts::shared::number_format::{format_number_with_decimals, NumberLocale};
///
/// let formatted = format_number_with_decimals(1234.567, 2, &NumberLocale::en_usd());
/// assert_eq!(formatted, "1,234.57");
/// ```
pub fn format_number_with_decimals(value: f64, decimals: usize, locale: &NumberLocale) -> String {
    let formatted = format!("{:.*}", decimals, value.abs());
    let (integer_part, decimal_part) = match formatted.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (formatted.as_str(), None),
    };

    let mut grouped = String::new();
    for (i, c) in integer_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(locale.group_separator);
        }
        grouped.push(c);
    }
    let mut result: String = grouped.chars().rev().collect();

    if let Some(fraction) = decimal_part {
        result.push(locale.decimal_separator);
        result.push_str(fraction);
    }

    // "-0,00" is not a thing
    let is_zero = !formatted.chars().any(|c| c.is_ascii_digit() && c != '0');
    if value < 0.0 && !is_zero {
        result.insert(0, '-');
    }
    result
}

/// Currency display: two decimals plus the locale's currency decoration.
pub fn format_currency(value: f64, locale: &NumberLocale) -> String {
    let number = format_number_with_decimals(value, 2, locale);
    match number.strip_prefix('-') {
        Some(unsigned) => format!(
            "-{}{}{}",
            locale.currency_prefix, unsigned, locale.currency_suffix
        ),
        None => format!(
            "{}{}{}",
            locale.currency_prefix, number, locale.currency_suffix
        ),
    }
}

/// Integer display with locale grouping.
pub fn format_count(value: f64, locale: &NumberLocale) -> String {
    format_number_with_decimals(value, 0, locale)
}

/// Raw value followed by `%`, no grouping and no currency symbol.
pub fn format_percent(value: f64) -> String {
    format!("{}%", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency_fr() {
        let fr = NumberLocale::fr_eur();
        assert_eq!(format_currency(12500.0, &fr), "12\u{202f}500,00\u{a0}€");
        assert_eq!(format_currency(450.0, &fr), "450,00\u{a0}€");
        assert_eq!(format_currency(-1675.5, &fr), "-1\u{202f}675,50\u{a0}€");
    }

    #[test]
    fn test_format_currency_en() {
        let en = NumberLocale::en_usd();
        assert_eq!(format_currency(1234567.891, &en), "$1,234,567.89");
        assert_eq!(format_currency(0.0, &en), "$0.00");
        assert_eq!(format_currency(-12.0, &en), "-$12.00");
    }

    #[test]
    fn test_format_number_with_decimals() {
        let en = NumberLocale::en_usd();
        assert_eq!(format_number_with_decimals(1234.567, 0, &en), "1,235");
        assert_eq!(format_number_with_decimals(1234.567, 1, &en), "1,234.6");
        assert_eq!(format_number_with_decimals(1234.567, 3, &en), "1,234.567");
        assert_eq!(format_number_with_decimals(-0.001, 2, &en), "0.00");
    }

    #[test]
    fn test_format_count() {
        let fr = NumberLocale::fr_eur();
        assert_eq!(format_count(310.0, &fr), "310");
        assert_eq!(format_count(1234567.0, &fr), "1\u{202f}234\u{202f}567");
        assert_eq!(format_count(-1234.0, &NumberLocale::en_usd()), "-1,234");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(68.0), "68%");
        assert_eq!(format_percent(25.9), "25.9%");
    }

    #[test]
    fn test_locale_from_key() {
        assert_eq!(NumberLocale::from_key("en-usd"), Some(NumberLocale::en_usd()));
        assert_eq!(NumberLocale::from_key("fr-eur"), Some(NumberLocale::fr_eur()));
        assert_eq!(NumberLocale::from_key("de-chf"), None);
    }
}
