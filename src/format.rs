//! Price Formatting
//!
//! Integer prices grouped with the locale's thousands separator plus the
//! fixed "UZS" currency label. Presentation only, never a wire format.

use crate::models::Lang;

/// Thousands separator per locale: comma for English, narrow no-break space
/// for Russian and Uzbek (the grouping the site has always shown).
fn separator(lang: Lang) -> char {
    match lang {
        Lang::En => ',',
        Lang::Ru | Lang::Uz => '\u{202f}',
    }
}

/// Group the digits of a price in threes, e.g. 159000 -> "159 000".
pub fn group_digits(price: u64, lang: Lang) -> String {
    let digits = price.to_string();
    let sep = separator(lang);
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(sep);
        }
        out.push(ch);
    }
    out
}

/// Full display form: grouped digits plus the currency label.
pub fn format_price(price: u64, lang: Lang) -> String {
    format!("{} UZS", group_digits(price, lang))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_uses_commas() {
        assert_eq!(group_digits(159_000, Lang::En), "159,000");
        assert_eq!(group_digits(1_250_000, Lang::En), "1,250,000");
    }

    #[test]
    fn russian_and_uzbek_use_spaces() {
        assert_eq!(group_digits(159_000, Lang::Ru), "159\u{202f}000");
        assert_eq!(group_digits(57_000, Lang::Uz), "57\u{202f}000");
    }

    #[test]
    fn short_prices_are_ungrouped() {
        assert_eq!(group_digits(0, Lang::En), "0");
        assert_eq!(group_digits(999, Lang::Ru), "999");
    }

    #[test]
    fn full_form_carries_currency_label() {
        assert_eq!(format_price(35_000, Lang::En), "35,000 UZS");
    }
}
