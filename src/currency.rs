//! Currency descriptors and display formatting.
//!
//! Presentation-layer helpers only: rounding to the currency's decimal places
//! happens here and nowhere else. Stored totals keep full precision.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Where the symbol sits relative to the amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolPosition {
    Before,
    After,
}

/// Fixed per-currency display descriptor.
#[derive(Debug, Clone, Copy)]
pub struct CurrencyInfo {
    pub code: &'static str,
    pub name: &'static str,
    pub symbol: &'static str,
    pub symbol_position: SymbolPosition,
    pub decimal_places: u32,
    pub decimal_separator: char,
    pub thousands_separator: char,
}

/// Supported invoice currencies. Unrecognized codes fall back to USD.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE", from = "String")]
pub enum Currency {
    #[default]
    Usd,
    Eur,
    Ron,
    Gbp,
    Cad,
    Aud,
    Chf,
    Jpy,
}

impl From<String> for Currency {
    fn from(code: String) -> Self {
        Currency::from_code(&code)
    }
}

impl Currency {
    pub const ALL: [Currency; 8] = [
        Currency::Usd,
        Currency::Eur,
        Currency::Ron,
        Currency::Gbp,
        Currency::Cad,
        Currency::Aud,
        Currency::Chf,
        Currency::Jpy,
    ];

    /// Look up a currency by code, defaulting to USD for anything unknown.
    pub fn from_code(code: &str) -> Self {
        match code {
            "EUR" => Currency::Eur,
            "RON" => Currency::Ron,
            "GBP" => Currency::Gbp,
            "CAD" => Currency::Cad,
            "AUD" => Currency::Aud,
            "CHF" => Currency::Chf,
            "JPY" => Currency::Jpy,
            _ => Currency::Usd,
        }
    }

    pub fn info(&self) -> &'static CurrencyInfo {
        match self {
            Currency::Usd => &CurrencyInfo {
                code: "USD",
                name: "US Dollar",
                symbol: "$",
                symbol_position: SymbolPosition::Before,
                decimal_places: 2,
                decimal_separator: '.',
                thousands_separator: ',',
            },
            Currency::Eur => &CurrencyInfo {
                code: "EUR",
                name: "Euro",
                symbol: "\u{20ac}",
                symbol_position: SymbolPosition::Before,
                decimal_places: 2,
                decimal_separator: ',',
                thousands_separator: '.',
            },
            Currency::Ron => &CurrencyInfo {
                code: "RON",
                name: "Romanian Leu",
                symbol: "lei",
                symbol_position: SymbolPosition::After,
                decimal_places: 2,
                decimal_separator: ',',
                thousands_separator: '.',
            },
            Currency::Gbp => &CurrencyInfo {
                code: "GBP",
                name: "British Pound",
                symbol: "\u{a3}",
                symbol_position: SymbolPosition::Before,
                decimal_places: 2,
                decimal_separator: '.',
                thousands_separator: ',',
            },
            Currency::Cad => &CurrencyInfo {
                code: "CAD",
                name: "Canadian Dollar",
                symbol: "C$",
                symbol_position: SymbolPosition::Before,
                decimal_places: 2,
                decimal_separator: '.',
                thousands_separator: ',',
            },
            Currency::Aud => &CurrencyInfo {
                code: "AUD",
                name: "Australian Dollar",
                symbol: "A$",
                symbol_position: SymbolPosition::Before,
                decimal_places: 2,
                decimal_separator: '.',
                thousands_separator: ',',
            },
            Currency::Chf => &CurrencyInfo {
                code: "CHF",
                name: "Swiss Franc",
                symbol: "CHF",
                symbol_position: SymbolPosition::Before,
                decimal_places: 2,
                decimal_separator: ',',
                thousands_separator: '.',
            },
            Currency::Jpy => &CurrencyInfo {
                code: "JPY",
                name: "Japanese Yen",
                symbol: "\u{a5}",
                symbol_position: SymbolPosition::Before,
                decimal_places: 0,
                decimal_separator: '.',
                thousands_separator: ',',
            },
        }
    }

    pub fn code(&self) -> &'static str {
        self.info().code
    }

    pub fn symbol(&self) -> &'static str {
        self.info().symbol
    }

    pub fn name(&self) -> &'static str {
        self.info().name
    }
}

/// Render an amount in the currency's display convention.
///
/// A missing amount renders as the zero string for the currency's precision
/// ("$0.00"). This is the only place monetary values are rounded.
pub fn format(amount: Option<Decimal>, currency: Currency) -> String {
    let info = currency.info();
    let amount = amount.unwrap_or(Decimal::ZERO);
    let rounded = amount.round_dp_with_strategy(
        info.decimal_places,
        RoundingStrategy::MidpointAwayFromZero,
    );

    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let digits = format!("{:.*}", info.decimal_places as usize, rounded.abs());
    let (int_part, frac_part) = match digits.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (digits.as_str(), None),
    };

    let mut number = group_thousands(int_part, info.thousands_separator);
    if let Some(frac) = frac_part {
        number.push(info.decimal_separator);
        number.push_str(frac);
    }

    let sign = if negative { "-" } else { "" };
    match info.symbol_position {
        SymbolPosition::Before => format!("{}{}{}", sign, info.symbol, number),
        SymbolPosition::After => format!("{}{} {}", sign, number, info.symbol),
    }
}

/// Parse a display string back to a number using the currency's separator
/// convention. Malformed input yields zero, never an error.
pub fn parse(text: &str, currency: Currency) -> Decimal {
    let info = currency.info();

    let cleaned: String = text
        .chars()
        .filter(|c| {
            c.is_ascii_digit()
                || *c == '-'
                || *c == info.decimal_separator
                || *c == info.thousands_separator
        })
        .collect();

    let normalized: String = cleaned
        .chars()
        .filter(|c| *c != info.thousands_separator)
        .map(|c| {
            if c == info.decimal_separator {
                '.'
            } else {
                c
            }
        })
        .collect();

    normalized.parse::<Decimal>().unwrap_or(Decimal::ZERO)
}

/// Convert between currencies at a caller-supplied rate, rounding to the
/// target currency's precision. Identity when both sides match.
pub fn convert(amount: Decimal, from: Currency, to: Currency, rate: Decimal) -> Decimal {
    if from == to {
        return amount;
    }
    (amount * rate).round_dp_with_strategy(
        to.info().decimal_places,
        RoundingStrategy::MidpointAwayFromZero,
    )
}

fn group_thousands(digits: &str, separator: char) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    let len = digits.len();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(c);
    }
    out
}
