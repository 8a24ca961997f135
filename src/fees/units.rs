//! Fee tags and exact unit conversion.
//!
//! Values are unbounded `BigDecimal`s from parsing to final formatting. Unit
//! changes only move the decimal point, so no conversion ever rounds.

use bigdecimal::BigDecimal;
use num_bigint::{BigInt, Sign};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::core::errors::ClientError;
use crate::core::result_ext::ResultExt;

/// Fee speed tier, applied as a multiplier on the node's gas price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Speed {
    Fastest,
    Fast,
    Average,
    #[serde(rename = "safelow")]
    SafeLow,
}

impl Speed {
    pub fn multiplier(self) -> BigDecimal {
        match self {
            Speed::Fastest => BigDecimal::from(10u32),
            Speed::Fast => BigDecimal::from(5u32),
            Speed::Average => BigDecimal::new(BigInt::from(15u32), 1),
            Speed::SafeLow => BigDecimal::from(1u32),
        }
    }

    /// No tier means the base price.
    pub fn multiplier_for(speed: Option<Speed>) -> BigDecimal {
        speed.map_or_else(|| BigDecimal::from(1u32), Speed::multiplier)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Speed::Fastest => "fastest",
            Speed::Fast => "fast",
            Speed::Average => "average",
            Speed::SafeLow => "safelow",
        }
    }
}

impl FromStr for Speed {
    type Err = ClientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fastest" => Ok(Speed::Fastest),
            "fast" => Ok(Speed::Fast),
            "average" => Ok(Speed::Average),
            "safelow" => Ok(Speed::SafeLow),
            other => Err(ClientError::Conversion(format!("unknown speed '{}'", other))),
        }
    }
}

impl fmt::Display for Speed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Denomination. The node's gas price is treated as gwei.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Currency {
    Wei,
    #[default]
    Gwei,
    Ether,
}

impl Currency {
    /// Power of ten relative to wei.
    pub fn decimals(self) -> i64 {
        match self {
            Currency::Wei => 0,
            Currency::Gwei => 9,
            Currency::Ether => 18,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Currency::Wei => "wei",
            Currency::Gwei => "gwei",
            Currency::Ether => "ether",
        }
    }
}

impl FromStr for Currency {
    type Err = ClientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "wei" => Ok(Currency::Wei),
            "gwei" => Ok(Currency::Gwei),
            "ether" | "eth" => Ok(Currency::Ether),
            other => Err(ClientError::Conversion(format!("unknown currency '{}'", other))),
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Output representation of a fee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// Fixed-point decimal string.
    #[default]
    String,
    /// `0x`-prefixed hexadecimal string.
    Hex,
    /// The exact decimal value, for callers doing further arithmetic.
    Number,
}

impl FromStr for Format {
    type Err = ClientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "string" => Ok(Format::String),
            "hex" => Ok(Format::Hex),
            "number" | "bg" | "bignumber" => Ok(Format::Number),
            other => Err(ClientError::Conversion(format!("unknown format '{}'", other))),
        }
    }
}

/// A fee after [`apply_format`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormattedFee {
    Text(String),
    Hex(String),
    Number(BigDecimal),
}

impl FormattedFee {
    /// Exact value of the fee, whatever the representation.
    pub fn to_decimal(&self) -> Result<BigDecimal, ClientError> {
        match self {
            FormattedFee::Text(s) => parse_quantity(s),
            FormattedFee::Hex(s) => parse_quantity(s),
            FormattedFee::Number(d) => Ok(d.clone()),
        }
    }
}

impl fmt::Display for FormattedFee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormattedFee::Text(s) | FormattedFee::Hex(s) => f.write_str(s),
            FormattedFee::Number(d) => f.write_str(&to_plain(d)),
        }
    }
}

/// Fixed-point rendering without trailing zeros or exponent notation.
pub(crate) fn to_plain(value: &BigDecimal) -> String {
    value.normalized().to_plain_string()
}

/// Parses a node quantity: `0x`-prefixed hex or a plain decimal string.
pub fn parse_quantity(s: &str) -> Result<BigDecimal, ClientError> {
    let s = s.trim();
    if let Some(digits) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        let n = digits
            .bytes()
            .all(|b| b.is_ascii_hexdigit())
            .then(|| BigInt::parse_bytes(digits.as_bytes(), 16))
            .flatten()
            .ok_or_else(|| ClientError::Conversion(format!("invalid hex quantity '{}'", s)))?;
        return Ok(BigDecimal::from(n));
    }
    BigDecimal::from_str(s)
        .map_err(|e| ClientError::Conversion(format!("invalid decimal quantity '{}': {}", s, e)))
}

/// Moves the decimal point `places` digits to the right.
fn shift(value: &BigDecimal, places: i64) -> BigDecimal {
    let (digits, scale) = value.as_bigint_and_exponent();
    BigDecimal::new(digits, scale - places)
}

/// Converts `value` denominated in `unit` to wei.
pub fn to_wei(value: &BigDecimal, unit: Currency) -> BigDecimal {
    shift(value, unit.decimals())
}

/// Converts a wei amount to `unit`.
pub fn from_wei(wei: &BigDecimal, unit: Currency) -> BigDecimal {
    shift(wei, -unit.decimals()).normalized()
}

/// Converts a gwei fee into `currency`. `None` passes through.
pub fn apply_currency(fee: Option<BigDecimal>, currency: Currency) -> Option<BigDecimal> {
    let fee = fee?;
    Some(match currency {
        Currency::Ether => from_wei(&to_wei(&fee, Currency::Gwei), Currency::Ether),
        Currency::Wei => to_wei(&fee, Currency::Gwei).normalized(),
        Currency::Gwei => fee,
    })
}

/// Inverse of [`apply_currency`]: converts a value in `currency` back to gwei.
pub fn revert_currency(value: &BigDecimal, currency: Currency) -> BigDecimal {
    match currency {
        Currency::Ether | Currency::Wei => from_wei(&to_wei(value, currency), Currency::Gwei),
        Currency::Gwei => value.clone(),
    }
}

/// `0x`-prefixed lowercase hex of a non-negative integral value.
pub fn to_hex(value: &BigDecimal) -> Result<String, ClientError> {
    let integral = value.with_scale(0);
    if &integral != value {
        return Err(ClientError::Conversion(format!(
            "cannot hex-encode non-integral value {}",
            to_plain(value)
        )));
    }
    let (n, _) = integral.into_bigint_and_exponent();
    if n.sign() == Sign::Minus {
        return Err(ClientError::Conversion(format!("cannot hex-encode negative value {}", n)));
    }
    Ok(format!("0x{}", n.to_str_radix(16)))
}

/// Renders `value` in `format`. `None` passes through.
pub fn apply_format(value: Option<BigDecimal>, format: Format) -> Option<FormattedFee> {
    let value = value?;
    match format {
        Format::String => Some(FormattedFee::Text(to_plain(&value))),
        Format::Hex => to_hex(&value).ok_or_log("apply_format").map(FormattedFee::Hex),
        Format::Number => Some(FormattedFee::Number(value)),
    }
}
