//! Price extraction from free-text, locale-formatted price strings.

use std::sync::LazyLock;

use regex::Regex;

/// Currency marker the feed writes after every amount.
pub const CURRENCY_MARKER: &str = "лв";

/// Digits, grouping spaces, and decimal commas immediately before the marker.
static PRICE_RE: LazyLock<Regex> = LazyLock::new(|| {
    let pattern = format!(r"([\d\s,]+)\s*{}", regex::escape(CURRENCY_MARKER));
    Regex::new(&pattern).expect("price pattern is valid")
});

/// Extract a comparable numeric price from `text`.
///
/// `"18 500,50 лв"` parses to `18500.5`. Absent input, text without a
/// currency amount, and malformed amounts all yield `f64::INFINITY`, so
/// unpriced records sort after every priced one.
pub fn parse_price(text: Option<&str>) -> f64 {
    let Some(text) = text.filter(|t| !t.is_empty()) else {
        return f64::INFINITY;
    };
    let Some(caps) = PRICE_RE.captures(text) else {
        return f64::INFINITY;
    };
    let cleaned: String = caps[1]
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| if c == ',' { '.' } else { c })
        .collect();
    cleaned.parse::<f64>().unwrap_or(f64::INFINITY)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grouped_integer_price() {
        assert_eq!(parse_price(Some("25 000 лв")), 25_000.0);
    }

    #[test]
    fn decimal_comma_price() {
        assert_eq!(parse_price(Some("18 500,50 лв")), 18_500.5);
    }

    #[test]
    fn price_embedded_in_description() {
        assert_eq!(
            parse_price(Some("Peugeot 208 Active, цена: 31 990 лв с ДДС")),
            31_990.0
        );
    }

    #[test]
    fn marker_without_space() {
        assert_eq!(parse_price(Some("42000лв")), 42_000.0);
    }

    #[test]
    fn non_breaking_space_grouping() {
        assert_eq!(parse_price(Some("27\u{a0}300 лв")), 27_300.0);
    }

    #[test]
    fn absent_or_empty_is_infinite() {
        assert_eq!(parse_price(None), f64::INFINITY);
        assert_eq!(parse_price(Some("")), f64::INFINITY);
    }

    #[test]
    fn amount_is_read_before_currency_marker() {
        assert!(PRICE_RE.as_str().ends_with(CURRENCY_MARKER));
        let text = format!("Цена: 31 990{CURRENCY_MARKER} с ДДС");
        assert_eq!(parse_price(Some(&text)), 31_990.0);
    }

    #[test]
    fn text_without_marker_is_infinite() {
        assert_eq!(parse_price(Some("N/A")), f64::INFINITY);
        assert_eq!(parse_price(Some("25 000 EUR")), f64::INFINITY);
    }

    #[test]
    fn malformed_amount_is_infinite() {
        assert_eq!(parse_price(Some("1,234,5 лв")), f64::INFINITY);
        assert_eq!(parse_price(Some("цена по запитване лв")), f64::INFINITY);
        assert_eq!(parse_price(Some(", лв")), f64::INFINITY);
    }
}
