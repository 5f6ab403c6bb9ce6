//! Money type for representing monetary values.
//!
//! Uses cents-based integer representation to avoid floating-point
//! precision issues that plague monetary calculations. Decimal input is
//! parsed exactly through `rust_decimal`, and rounding to two places only
//! happens when an amount is rendered by a [`PriceFormat`].

use crate::error::CommerceError;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Supported currencies.
///
/// The storefront prices everything in one currency; there is no
/// conversion between them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    EUR,
    USD,
    GBP,
}

impl Currency {
    /// Get the currency code (e.g., "EUR").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::EUR => "EUR",
            Currency::USD => "USD",
            Currency::GBP => "GBP",
        }
    }

    /// Get the currency symbol (e.g., "€").
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::EUR => "\u{20ac}",
            Currency::USD => "$",
            Currency::GBP => "\u{00a3}",
        }
    }

    /// Get the number of decimal places for this currency.
    pub fn decimal_places(&self) -> u32 {
        2
    }

    /// Locale used when an amount is displayed without an explicit format.
    pub fn default_locale(&self) -> Locale {
        match self {
            Currency::EUR => Locale::EsEs,
            Currency::USD | Currency::GBP => Locale::EnUs,
        }
    }

    /// Parse a currency code string.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_uppercase().as_str() {
            "EUR" => Some(Currency::EUR),
            "USD" => Some(Currency::USD),
            "GBP" => Some(Currency::GBP),
            _ => None,
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A monetary value with currency.
///
/// Amounts are stored in the smallest unit of the currency (e.g., cents).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Money {
    /// Amount in smallest currency unit (e.g., cents).
    pub amount_cents: i64,
    /// The currency.
    pub currency: Currency,
}

impl Money {
    /// Create a new Money value from cents.
    pub fn new(amount_cents: i64, currency: Currency) -> Self {
        Self {
            amount_cents,
            currency,
        }
    }

    /// Create a Money value from an exact decimal amount.
    ///
    /// Fails if the amount has more fractional digits than the currency
    /// allows, or does not fit in the minor-unit representation.
    ///
    /// ```
    /// use chatshop_commerce::money::{Currency, Money};
    /// use rust_decimal::Decimal;
    ///
    /// let price = Money::from_decimal(Decimal::new(79999, 2), Currency::EUR).unwrap();
    /// assert_eq!(price.amount_cents, 79999);
    /// ```
    pub fn from_decimal(amount: Decimal, currency: Currency) -> Result<Self, CommerceError> {
        let places = currency.decimal_places();
        if amount.round_dp(places) != amount {
            return Err(CommerceError::InvalidPrice(format!(
                "{amount} has more than {places} decimal places"
            )));
        }
        let scale = Decimal::from(10_i64.pow(places));
        let amount_cents = amount
            .checked_mul(scale)
            .and_then(|d| d.to_i64())
            .ok_or(CommerceError::Overflow)?;
        Ok(Self::new(amount_cents, currency))
    }

    /// Parse a decimal string such as `"799.99"`.
    pub fn parse(amount: &str, currency: Currency) -> Result<Self, CommerceError> {
        let decimal = Decimal::from_str(amount.trim())
            .map_err(|e| CommerceError::InvalidPrice(format!("{amount:?}: {e}")))?;
        Self::from_decimal(decimal, currency)
    }

    /// Create a zero amount in the given currency.
    pub fn zero(currency: Currency) -> Self {
        Self::new(0, currency)
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.amount_cents == 0
    }

    /// Check if this is positive.
    pub fn is_positive(&self) -> bool {
        self.amount_cents > 0
    }

    /// Check if this is negative.
    pub fn is_negative(&self) -> bool {
        self.amount_cents < 0
    }

    /// Convert to an exact decimal value.
    pub fn to_decimal(&self) -> Decimal {
        Decimal::new(self.amount_cents, self.currency.decimal_places())
    }

    /// Format with the currency's default locale (e.g., "799,99 €").
    pub fn display(&self) -> String {
        PriceFormat::new(self.currency.default_locale()).format(self)
    }

    /// Try to add another Money value, returning None if currencies don't
    /// match or the sum overflows.
    pub fn try_add(&self, other: &Money) -> Option<Money> {
        if self.currency != other.currency {
            return None;
        }
        self.amount_cents
            .checked_add(other.amount_cents)
            .map(|cents| Money::new(cents, self.currency))
    }

    /// Multiply by a quantity, returning None on overflow.
    pub fn try_multiply(&self, factor: i64) -> Option<Money> {
        self.amount_cents
            .checked_mul(factor)
            .map(|cents| Money::new(cents, self.currency))
    }

    /// Sum an iterator of Money values.
    ///
    /// Returns None on currency mismatch or overflow.
    pub fn try_sum<'a>(
        mut iter: impl Iterator<Item = &'a Money>,
        currency: Currency,
    ) -> Option<Money> {
        iter.try_fold(Money::zero(currency), |acc, m| acc.try_add(m))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

/// Number-formatting conventions for rendering prices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Locale {
    /// Spanish (Spain): `1299,97 €`, `12.999,00 €`.
    #[default]
    #[serde(rename = "es-ES")]
    EsEs,
    /// English (United States): `$1,299.97`.
    #[serde(rename = "en-US")]
    EnUs,
}

impl Locale {
    /// BCP 47 tag (e.g., "es-ES").
    pub fn tag(&self) -> &'static str {
        match self {
            Locale::EsEs => "es-ES",
            Locale::EnUs => "en-US",
        }
    }

    /// Parse a BCP 47 tag, case-insensitively; `_` is accepted for `-`.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.trim().replace('_', "-").to_lowercase().as_str() {
            "es-es" | "es" => Some(Locale::EsEs),
            "en-us" | "en" => Some(Locale::EnUs),
            _ => None,
        }
    }

    fn decimal_separator(&self) -> char {
        match self {
            Locale::EsEs => ',',
            Locale::EnUs => '.',
        }
    }

    fn group_separator(&self) -> char {
        match self {
            Locale::EsEs => '.',
            Locale::EnUs => ',',
        }
    }

    /// Minimum digits that must precede the first group separator.
    /// Spanish does not group four-digit amounts.
    fn min_grouping_digits(&self) -> usize {
        match self {
            Locale::EsEs => 2,
            Locale::EnUs => 1,
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Fixed, locale-aware currency formatter.
///
/// Always renders exactly the currency's decimal places, so unit prices,
/// subtotals, and totals in one message are formatted consistently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PriceFormat {
    locale: Locale,
}

impl PriceFormat {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Render an amount, e.g. `1299,97 €` (es-ES) or `$1,299.97` (en-US).
    pub fn format(&self, money: &Money) -> String {
        let places = money.currency.decimal_places();
        let divisor = 10_u64.pow(places);
        let abs = money.amount_cents.unsigned_abs();

        let whole = group_digits(
            &(abs / divisor).to_string(),
            self.locale.group_separator(),
            self.locale.min_grouping_digits(),
        );
        let number = if places == 0 {
            whole
        } else {
            format!(
                "{whole}{sep}{frac:0width$}",
                sep = self.locale.decimal_separator(),
                frac = abs % divisor,
                width = places as usize,
            )
        };

        let sign = if money.is_negative() { "-" } else { "" };
        let symbol = money.currency.symbol();
        match self.locale {
            Locale::EsEs => format!("{sign}{number} {symbol}"),
            Locale::EnUs => format!("{sign}{symbol}{number}"),
        }
    }
}

fn group_digits(digits: &str, separator: char, min_grouping: usize) -> String {
    let len = digits.len();
    if len < 3 + min_grouping {
        return digits.to_string();
    }
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i != 0 && (len - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(c);
    }
    out
}
