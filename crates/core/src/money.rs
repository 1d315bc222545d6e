//! Money helpers: currency precision and lenient decimal parsing.

use core::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// ISO 4217 code used when an invoice does not name a currency.
pub const DEFAULT_CURRENCY: &str = "MAD";

/// Currency of an invoice, identified by its ISO 4217 code.
///
/// Only the precision of the minor unit matters to the domain: amounts are
/// rounded to it when an invoice is submitted.
///
/// Codes are stored upper-case; a blank code means the default currency.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String")]
pub struct Currency(String);

impl Currency {
    pub fn new(code: impl Into<String>) -> Self {
        let code: String = code.into();
        let code = code.trim();
        if code.is_empty() {
            return Self::default();
        }
        Self(code.to_ascii_uppercase())
    }

    pub fn code(&self) -> &str {
        &self.0
    }

    /// Number of decimal places of the minor unit.
    pub fn minor_units(&self) -> u32 {
        match self.0.as_str() {
            "BIF" | "CLP" | "DJF" | "GNF" | "ISK" | "JPY" | "KMF" | "KRW" | "PYG" | "RWF"
            | "UGX" | "VND" | "VUV" | "XAF" | "XOF" | "XPF" => 0,
            "BHD" | "IQD" | "JOD" | "KWD" | "LYD" | "OMR" | "TND" => 3,
            _ => 2,
        }
    }

    /// Round an amount to the minor unit, half away from zero.
    pub fn round(&self, amount: Decimal) -> Decimal {
        amount.round_dp_with_strategy(self.minor_units(), RoundingStrategy::MidpointAwayFromZero)
    }
}

impl Default for Currency {
    fn default() -> Self {
        Self(DEFAULT_CURRENCY.to_string())
    }
}

impl From<String> for Currency {
    fn from(code: String) -> Self {
        Self::new(code)
    }
}

impl core::fmt::Display for Currency {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Parse a decimal typed by a user or sent by an upstream system.
///
/// Surrounding whitespace is ignored. Returns `None` for blank or
/// non-numeric text.
pub fn parse_decimal(text: &str) -> Option<Decimal> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    Decimal::from_str(text).ok()
}

/// Parse a non-negative quantity or price.
///
/// Negative values are treated like unparsable input.
pub fn parse_number(text: &str) -> Option<Decimal> {
    parse_decimal(text).filter(|v| !v.is_sign_negative() || v.is_zero())
}
