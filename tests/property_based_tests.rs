//! Property tests for exact fee unit and format conversion.

use bigdecimal::BigDecimal;
use num_bigint::{BigInt, BigUint};
use parity_rpc_client::fees::units::{parse_quantity, to_hex};
use parity_rpc_client::fees::{apply_currency, apply_format, revert_currency, FormattedFee};
use parity_rpc_client::{Currency, Format};
use proptest::prelude::*;
use std::str::FromStr;

/// Mantissas well past 128 bits: `high * 2^128 + low`.
fn wide_mantissa() -> impl Strategy<Value = BigInt> {
    (any::<u64>(), any::<u128>())
        .prop_map(|(high, low)| (BigInt::from(high) << 128u32) + BigInt::from(low))
}

proptest! {
    #[test]
    fn ether_roundtrip_reconstructs_gwei(units in wide_mantissa(), scale in 0i64..40) {
        let gwei = BigDecimal::new(units, scale);
        let ether = apply_currency(Some(gwei.clone()), Currency::Ether).unwrap();
        prop_assert_eq!(revert_currency(&ether, Currency::Ether), gwei);
    }

    #[test]
    fn wei_roundtrip_reconstructs_gwei(units in wide_mantissa(), scale in 0i64..40) {
        let gwei = BigDecimal::new(units, scale);
        let wei = apply_currency(Some(gwei.clone()), Currency::Wei).unwrap();
        prop_assert_eq!(revert_currency(&wei, Currency::Wei), gwei);
    }

    #[test]
    fn hex_format_parses_back(units in wide_mantissa()) {
        let value = BigDecimal::from(units.clone());
        match apply_format(Some(value.clone()), Format::Hex) {
            Some(FormattedFee::Hex(hex)) => {
                prop_assert!(hex.starts_with("0x"));
                prop_assert_eq!(parse_quantity(&hex).unwrap(), value);
                let parsed = BigUint::parse_bytes(hex[2..].as_bytes(), 16).unwrap();
                prop_assert_eq!(BigInt::from(parsed), units);
            }
            other => prop_assert!(false, "unexpected {:?}", other),
        }
    }

    #[test]
    fn string_format_is_exact(
        units in wide_mantissa(),
        negative in any::<bool>(),
        scale in -30i64..40
    ) {
        let units = if negative { -units } else { units };
        let value = BigDecimal::new(units, scale);
        match apply_format(Some(value.clone()), Format::String) {
            Some(FormattedFee::Text(text)) => {
                prop_assert!(!text.contains('e') && !text.contains('E'));
                prop_assert_eq!(parse_quantity(&text).unwrap(), value);
            }
            other => prop_assert!(false, "unexpected {:?}", other),
        }
    }
}

#[test]
fn null_passes_through_every_tag() {
    for currency in [Currency::Wei, Currency::Gwei, Currency::Ether] {
        assert_eq!(apply_currency(None, currency), None);
    }
    for format in [Format::String, Format::Hex, Format::Number] {
        assert_eq!(apply_format(None, format), None);
    }
}

#[test]
fn hex_of_known_gas_price() {
    assert_eq!(to_hex(&BigDecimal::from(20_000_000_000u64)).unwrap(), "0x4a817c800");
}

#[test]
fn twenty_fractional_digits_survive_ether() {
    let gwei = BigDecimal::from_str("1.00000000000000000001").unwrap();
    let ether = apply_currency(Some(gwei.clone()), Currency::Ether).unwrap();
    assert_eq!(
        apply_format(Some(ether.clone()), Format::String),
        Some(FormattedFee::Text("0.00000000100000000000000000001".to_string()))
    );
    assert_eq!(revert_currency(&ether, Currency::Ether), gwei);
}
