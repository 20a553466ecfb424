//! Field temperatures are recorded as Fahrenheit text, e.g. "76" or "85.5",
//! and printed in both scales.

use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

const DEGREE_SIGN: char = '\u{00B0}';

fn fahrenheit(temperature: Option<&str>) -> Option<Decimal> {
    let text = temperature?.trim();
    if text.is_empty() {
        return None;
    }
    Decimal::from_str(text).ok()
}

fn round_tenths(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(1, RoundingStrategy::MidpointNearestEven)
}

/// Blank text or a decimal number.
pub fn is_valid_temperature(temperature: Option<&str>) -> bool {
    match temperature.map(str::trim) {
        None | Some("") => true,
        Some(text) => Decimal::from_str(text).is_ok(),
    }
}

/// "76°F", "85.5°F"; a trailing ".0" is dropped.
pub fn temp_f(temperature: Option<&str>) -> String {
    match fahrenheit(temperature) {
        Some(value) => format!("{}{DEGREE_SIGN}F", round_tenths(value).normalize()),
        None => String::new(),
    }
}

/// "24.4°C", always with one decimal.
pub fn temp_c(temperature: Option<&str>) -> String {
    let Some(value) = fahrenheit(temperature) else {
        return String::new();
    };

    let mut celsius = round_tenths((value - Decimal::from(32)) * Decimal::from(5) / Decimal::from(9));
    if celsius.is_zero() {
        celsius = Decimal::ZERO;
    }
    celsius.rescale(1);
    format!("{celsius}{DEGREE_SIGN}C")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Some("85.5"), "85.5°F", "29.7°C")]
    #[case(Some("76"), "76°F", "24.4°C")]
    #[case(Some("76.0"), "76°F", "24.4°C")]
    #[case(Some("32"), "32°F", "0.0°C")]
    #[case(Some("-4"), "-4°F", "-20.0°C")]
    #[case(Some("100"), "100°F", "37.8°C")]
    #[case(Some(""), "", "")]
    #[case(Some("   "), "", "")]
    #[case(None, "", "")]
    fn test_temperatures(
        #[case] temperature: Option<&str>,
        #[case] fahrenheit: &str,
        #[case] celsius: &str,
    ) {
        assert_eq!(temp_f(temperature), fahrenheit);
        assert_eq!(temp_c(temperature), celsius);
    }

    #[test]
    fn test_unparseable_temperature_formats_empty() {
        assert_eq!(temp_f(Some("warm")), "");
        assert_eq!(temp_c(Some("warm")), "");
    }

    #[rstest]
    #[case(None, true)]
    #[case(Some(""), true)]
    #[case(Some("85.5"), true)]
    #[case(Some(" 76 "), true)]
    #[case(Some("76F"), false)]
    #[case(Some("warm"), false)]
    fn test_is_valid_temperature(#[case] temperature: Option<&str>, #[case] valid: bool) {
        assert_eq!(is_valid_temperature(temperature), valid);
    }
}
