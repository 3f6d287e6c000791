//! Grammar of starting-equipment option strings
//!
//! Three surface forms, tried in order:
//! - `"<N> GP"`, `"<N> SP"`, `"<N> CP"`: currency
//! - `"<N> <ItemName>"`: quantity-prefixed item
//! - `"<ItemName>"`: anything else, one unit
//!
//! The last form accepts every string, so parsing cannot fail. Currency
//! tolerates trailing spaces or tabs after the suffix. Digit runs too large
//! for `u32` saturate rather than failing.

use nom::branch::alt;
use nom::bytes::complete::tag;
use nom::character::complete::{digit1, space0, space1};
use nom::combinator::{all_consuming, map, rest, value, verify};
use nom::sequence::{separated_pair, terminated};
use nom::{IResult, Parser};

use super::currency::Denomination;

/// One classified option string, borrowing from the input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionToken<'a> {
    /// Currency grant
    Currency { denomination: Denomination, amount: u32 },
    /// `"<N> <item>"`, item trimmed
    Quantified { count: u32, item: &'a str },
    /// Bare item name, exactly as written
    Single(&'a str),
}

/// Classify one option string
pub fn parse_option(input: &str) -> OptionToken<'_> {
    if let Ok((_, (amount, denomination))) = currency(input) {
        return OptionToken::Currency {
            denomination,
            amount,
        };
    }

    if let Ok((_, (count, item))) = quantified(input) {
        return OptionToken::Quantified {
            count,
            item: item.trim(),
        };
    }

    OptionToken::Single(input)
}

/// Strip one plural "s", leaving words that end in "ss" alone
///
/// This is a heuristic: irregular plurals ("Staves") are not recognized.
pub fn singularize(name: &str) -> &str {
    match name.strip_suffix('s') {
        Some(stem) if !stem.ends_with('s') => stem,
        _ => name,
    }
}

// digit1 leaves overflow as the only way the parse can fail
fn quantity(input: &str) -> IResult<&str, u32> {
    map(digit1, |digits: &str| digits.parse::<u32>().unwrap_or(u32::MAX)).parse(input)
}

fn denomination(input: &str) -> IResult<&str, Denomination> {
    alt((
        value(Denomination::Gold, tag("GP")),
        value(Denomination::Silver, tag("SP")),
        value(Denomination::Copper, tag("CP")),
    ))
    .parse(input)
}

fn currency(input: &str) -> IResult<&str, (u32, Denomination)> {
    all_consuming(separated_pair(quantity, space1, terminated(denomination, space0))).parse(input)
}

fn quantified(input: &str) -> IResult<&str, (u32, &str)> {
    separated_pair(
        quantity,
        space1,
        verify(rest, |item: &str| !item.trim().is_empty()),
    )
    .parse(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_forms() {
        assert_eq!(
            parse_option("110 GP"),
            OptionToken::Currency {
                denomination: Denomination::Gold,
                amount: 110
            }
        );
        assert_eq!(
            parse_option("5 SP"),
            OptionToken::Currency {
                denomination: Denomination::Silver,
                amount: 5
            }
        );
        assert_eq!(
            parse_option("30 CP"),
            OptionToken::Currency {
                denomination: Denomination::Copper,
                amount: 30
            }
        );
    }

    #[test]
    fn test_currency_needs_exact_suffix() {
        // Lower-case or trailing text is an ordinary quantified item
        assert_eq!(
            parse_option("10 gp"),
            OptionToken::Quantified { count: 10, item: "gp" }
        );
        assert_eq!(
            parse_option("10 GP worth of gems"),
            OptionToken::Quantified {
                count: 10,
                item: "GP worth of gems"
            }
        );
    }

    #[test]
    fn test_quantified_item_is_trimmed() {
        assert_eq!(
            parse_option("4 Handaxes "),
            OptionToken::Quantified {
                count: 4,
                item: "Handaxes"
            }
        );
    }

    #[test]
    fn test_bare_items() {
        assert_eq!(parse_option("Leather Armor"), OptionToken::Single("Leather Armor"));
        // No digits up front
        assert_eq!(parse_option("GP"), OptionToken::Single("GP"));
        // Digits with nothing after them
        assert_eq!(parse_option("12"), OptionToken::Single("12"));
        assert_eq!(parse_option("3   "), OptionToken::Single("3   "));
        assert_eq!(parse_option(""), OptionToken::Single(""));
    }

    #[test]
    fn test_currency_allows_trailing_whitespace() {
        assert_eq!(
            parse_option("10 GP "),
            OptionToken::Currency {
                denomination: Denomination::Gold,
                amount: 10
            }
        );
        assert_eq!(
            parse_option("5 SP\t"),
            OptionToken::Currency {
                denomination: Denomination::Silver,
                amount: 5
            }
        );
        // Leading whitespace is not stripped
        assert_eq!(parse_option(" 10 GP"), OptionToken::Single(" 10 GP"));
    }

    #[test]
    fn test_overflowing_quantity_saturates() {
        assert_eq!(
            parse_option("4294967296 GP"),
            OptionToken::Currency {
                denomination: Denomination::Gold,
                amount: u32::MAX
            }
        );
        assert_eq!(
            parse_option("99999999999999999999 Daggers"),
            OptionToken::Quantified {
                count: u32::MAX,
                item: "Daggers"
            }
        );
    }

    #[test]
    fn test_singularize() {
        assert_eq!(singularize("Handaxes"), "Handaxe");
        assert_eq!(singularize("Daggers"), "Dagger");
        assert_eq!(singularize("Brass"), "Brass");
        assert_eq!(singularize("Glass"), "Glass");
        assert_eq!(singularize("Rope"), "Rope");
        // Irregular plurals are out of reach of the heuristic
        assert_eq!(singularize("Staves"), "Stave");
    }
}
