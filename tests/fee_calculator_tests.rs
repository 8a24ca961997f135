//! tests/fee_calculator_tests.rs
//!
//! GasFeeCalculator on top of a scripted NodeClient.

use bigdecimal::BigDecimal;
use parity_rpc_client::fees::{apply_currency, revert_currency};
use parity_rpc_client::rpc::MockTransport;
use parity_rpc_client::{Currency, Format, FormattedFee, GasFeeCalculator, NodeClient, Speed};
use serde_json::json;
use std::str::FromStr;

fn calculator(gas_price: &str, calls: usize) -> (GasFeeCalculator, MockTransport) {
    let mock = MockTransport::new();
    for _ in 0..calls {
        mock.push_result(json!(gas_price));
    }
    (GasFeeCalculator::new(NodeClient::new(mock.clone())), mock)
}

#[tokio::test]
async fn test_estimated_fee_reference_values() {
    let (calc, mock) = calculator("10", 2);
    assert_eq!(calc.estimated_fee(Some(Speed::Fastest)).await.as_deref(), Some("2100000"));
    assert_eq!(calc.estimated_fee(None).await.as_deref(), Some("210000"));
    assert_eq!(mock.methods(), vec!["eth_gasPrice", "eth_gasPrice"]);
}

#[tokio::test]
async fn test_hex_gas_price_from_node() {
    // 0x4a817c800 = 20_000_000_000
    let (calc, _mock) = calculator("0x4a817c800", 1);
    assert_eq!(
        calc.current_gas_price(Some(Speed::Average)).await.as_deref(),
        Some("30000000000")
    );
}

#[tokio::test]
async fn test_average_speed_on_fractional_price() {
    let (calc, _mock) = calculator("1.1", 1);
    // 1.1 * 1.5 * 21000, no float drift
    assert_eq!(calc.estimated_fee(Some(Speed::Average)).await.as_deref(), Some("34650"));
}

#[tokio::test]
async fn test_fee_formats() {
    let (calc, _mock) = calculator("10", 3);

    assert_eq!(
        calc.fee(Some(Speed::Fast), Currency::Gwei, Format::String).await,
        Some(FormattedFee::Text("1050000".to_string()))
    );
    assert_eq!(
        calc.fee(None, Currency::Gwei, Format::Hex).await,
        Some(FormattedFee::Hex("0x33450".to_string()))
    );
    let number = calc.fee(None, Currency::Ether, Format::Number).await.unwrap();
    assert_eq!(number.to_decimal().unwrap(), BigDecimal::from_str("0.00021").unwrap());
}

#[tokio::test]
async fn test_custom_gas_quantity() {
    let mock = MockTransport::new();
    mock.push_result(json!("2"));
    let calc = GasFeeCalculator::with_gas(NodeClient::new(mock), 100_000u32);
    assert_eq!(calc.estimated_fee(None).await.as_deref(), Some("200000"));
}

#[tokio::test]
async fn test_high_price_at_block_gas_limit() {
    // 320 gwei, fastest, 30M gas: 9.6e28 wei
    let mock = MockTransport::new();
    for _ in 0..4 {
        mock.push_result(json!("0x4a817c8000"));
    }
    let calc = GasFeeCalculator::with_gas(NodeClient::new(mock), 30_000_000u64);
    let fastest = Some(Speed::Fastest);

    assert_eq!(
        calc.fee(fastest, Currency::Gwei, Format::String).await,
        Some(FormattedFee::Text("96000000000000000000".to_string()))
    );
    assert_eq!(
        calc.fee(fastest, Currency::Ether, Format::String).await,
        Some(FormattedFee::Text("96000000000".to_string()))
    );
    assert_eq!(
        calc.fee(fastest, Currency::Wei, Format::String).await,
        Some(FormattedFee::Text("96000000000000000000000000000".to_string()))
    );
    assert_eq!(
        calc.fee(fastest, Currency::Wei, Format::Hex).await,
        Some(FormattedFee::Hex("0x1363156bbee3016d700000000".to_string()))
    );
}

#[test]
fn test_fine_gwei_fraction_converts_exactly() {
    let gwei = BigDecimal::from_str("1.00000000000000000001").unwrap();
    let ether = apply_currency(Some(gwei.clone()), Currency::Ether).unwrap();
    assert_eq!(ether, BigDecimal::from_str("0.00000000100000000000000000001").unwrap());
    assert_eq!(revert_currency(&ether, Currency::Ether), gwei);
}

#[tokio::test]
async fn test_node_failure_yields_none() {
    let mock = MockTransport::new();
    mock.push_failure("connection refused");
    mock.push_error(-32603, "internal error");
    let calc = GasFeeCalculator::new(NodeClient::new(mock));

    assert_eq!(calc.current_gas_price(Some(Speed::Fastest)).await, None);
    assert_eq!(calc.fee(Some(Speed::Fast), Currency::Wei, Format::String).await, None);
}

#[tokio::test]
async fn test_source_exposes_node_client() {
    let (calc, mock) = calculator("0x1", 1);
    assert_eq!(calc.source().get_gas_price().await.as_deref(), Some("0x1"));
    assert_eq!(mock.methods(), vec!["eth_gasPrice"]);
}
