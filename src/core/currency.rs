//! Currency normalization - parsing and formatting of monetary amounts.
//!
//! The studio works in a closed set of currencies (XAF, EUR, USD) described by
//! a lookup table, so adding a currency is a data change rather than new
//! control flow. Amounts are displayed integer-rounded with space-grouped
//! thousands and a trailing suffix (`1 500 000 FCFA`, `2 500 €`). Every
//! function here is total: malformed input resolves to the zero amount in the
//! default currency, never an error.

/// A supported display currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Currency {
    /// Central African CFA franc
    Xaf,
    /// Euro
    Eur,
    /// United States dollar
    Usd,
}

/// Display policy for one supported currency.
struct CurrencyInfo {
    currency: Currency,
    code: &'static str,
    suffix: &'static str,
    decimal_digits: u32,
}

/// The closed set of supported currencies. Adding one is a new row here.
const CURRENCIES: [CurrencyInfo; 3] = [
    CurrencyInfo {
        currency: Currency::Xaf,
        code: "XAF",
        suffix: "FCFA",
        decimal_digits: 0,
    },
    CurrencyInfo {
        currency: Currency::Eur,
        code: "EUR",
        suffix: "€",
        decimal_digits: 0,
    },
    CurrencyInfo {
        currency: Currency::Usd,
        code: "USD",
        suffix: "$",
        decimal_digits: 0,
    },
];

impl Currency {
    /// Default currency for the studio; also the fallback for unknown codes.
    pub const DEFAULT: Self = Self::Xaf;

    /// Resolves a currency code to a supported currency.
    ///
    /// Unknown or empty codes fall back to the default currency rather than
    /// failing, since codes originate from records edited outside this crate.
    #[must_use]
    pub fn from_code(code: &str) -> Self {
        CURRENCIES
            .iter()
            .find(|info| info.code.eq_ignore_ascii_case(code.trim()))
            .map_or(Self::DEFAULT, |info| info.currency)
    }

    /// The ISO-style code for this currency (e.g., `"XAF"`).
    #[must_use]
    pub fn code(self) -> &'static str {
        self.info().code
    }

    /// The display suffix appended after formatted amounts (e.g., `"FCFA"`).
    #[must_use]
    pub fn suffix(self) -> &'static str {
        self.info().suffix
    }

    fn info(self) -> &'static CurrencyInfo {
        CURRENCIES
            .iter()
            .find(|info| info.currency == self)
            .unwrap_or(&CURRENCIES[0])
    }
}

/// Formats a monetary amount for display in the given currency.
///
/// The amount is rounded to the currency's decimal policy (no supported
/// currency shows decimals today), grouped in thousands with spaces, and
/// suffixed. Non-finite amounts render as the zero amount in the default
/// currency instead of panicking or producing `"NaN"`.
///
/// # Examples
/// ```
/// use atelier_desk::core::currency::{Currency, format_amount};
///
/// assert_eq!(format_amount(1_500_000.0, Currency::Xaf), "1 500 000 FCFA");
/// assert_eq!(format_amount(2500.0, Currency::Eur), "2 500 €");
/// ```
#[must_use]
pub fn format_amount(amount: f64, currency: Currency) -> String {
    if !amount.is_finite() {
        return format!("0 {}", Currency::DEFAULT.suffix());
    }

    let info = currency.info();
    let factor = 10u128.pow(info.decimal_digits);

    // Cast safety: amount is finite and float-to-int casts saturate, so the
    // worst case for absurd magnitudes is a clamped display value.
    #[allow(clippy::cast_precision_loss, clippy::cast_sign_loss, clippy::cast_possible_truncation)]
    let scaled = (amount.abs() * factor as f64).round() as u128;

    let units = scaled / factor;
    let fraction = scaled % factor;
    let sign = if amount < 0.0 && scaled > 0 { "-" } else { "" };
    let grouped = group_thousands(units);

    if info.decimal_digits > 0 {
        let width = info.decimal_digits as usize;
        format!("{sign}{grouped}.{fraction:0width$} {}", info.suffix)
    } else {
        format!("{sign}{grouped} {}", info.suffix)
    }
}

/// Formats free-form amount text for display in the given currency.
///
/// Text that does not contain a parseable amount renders as the zero amount in
/// the default currency, matching [`format_amount`]'s malformed-input policy.
#[must_use]
pub fn format_amount_text(raw: &str, currency: Currency) -> String {
    try_parse_amount(raw).map_or_else(
        || format!("0 {}", Currency::DEFAULT.suffix()),
        |amount| format_amount(amount, currency),
    )
}

/// Parses a monetary amount out of free-form text.
///
/// Strips every character that is not a digit, minus sign, or decimal point,
/// then parses the remainder. Empty or unparseable text yields `0.0`, never an
/// error. Formatting is lossy (no decimals are displayed), so parsing a
/// formatted string need not reproduce the source amount exactly, but one
/// format → parse → format round trip is stable.
#[must_use]
pub fn parse_amount(text: &str) -> f64 {
    try_parse_amount(text).unwrap_or(0.0)
}

/// Like [`parse_amount`], but reports unparseable text as `None` so callers
/// can distinguish "no amount" from a genuine zero.
#[must_use]
pub fn try_parse_amount(text: &str) -> Option<f64> {
    let cleaned: String = text
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '-' || *c == '.')
        .collect();

    cleaned.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Inserts a space between every group of three digits, from the right.
fn group_thousands(value: u128) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(ch);
    }

    grouped
}
