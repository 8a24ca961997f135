use async_trait::async_trait;
use bigdecimal::BigDecimal;
use num_bigint::{BigInt, BigUint};
use tracing::debug;

use super::units::{
    apply_currency, apply_format, parse_quantity, to_plain, Currency, Format, FormattedFee, Speed,
};
use crate::core::config::{ClientConfig, DEFAULT_GAS};
use crate::core::errors::ClientError;
use crate::core::result_ext::ResultExt;
use crate::parity::NodeClient;

/// Anything that can report the node's current gas price.
#[async_trait]
pub trait GasPriceSource: Send + Sync {
    /// Raw price as reported (hex or decimal, treated as gwei).
    async fn gas_price(&self) -> Option<String>;
}

#[async_trait]
impl GasPriceSource for NodeClient {
    async fn gas_price(&self) -> Option<String> {
        self.get_gas_price().await
    }
}

/// Estimates transaction fees from the node's gas price and a fixed gas quantity.
#[derive(Debug, Clone)]
pub struct GasFeeCalculator<S = NodeClient> {
    source: S,
    gas: BigUint,
}

impl GasFeeCalculator<NodeClient> {
    pub fn from_config(config: &ClientConfig) -> Result<Self, ClientError> {
        let client = NodeClient::from_config(config)?;
        Ok(Self::with_gas(client, config.gas))
    }
}

impl<S: GasPriceSource> GasFeeCalculator<S> {
    /// Calculator for a plain value transfer (21000 gas).
    pub fn new(source: S) -> Self {
        Self::with_gas(source, DEFAULT_GAS)
    }

    /// Gas is a whole, non-negative unit count.
    pub fn with_gas(source: S, gas: impl Into<BigUint>) -> Self {
        Self { source, gas: gas.into() }
    }

    pub fn gas(&self) -> &BigUint {
        &self.gas
    }

    /// The node capability behind this calculator.
    pub fn source(&self) -> &S {
        &self.source
    }

    async fn gas_price_value(&self, speed: Option<Speed>) -> Option<BigDecimal> {
        let raw = self.source.gas_price().await?;
        let base = parse_quantity(&raw).ok_or_log("gas price")?;
        Some(base * Speed::multiplier_for(speed))
    }

    async fn estimated_fee_value(&self, speed: Option<Speed>) -> Option<BigDecimal> {
        let price = self.gas_price_value(speed).await?;
        let fee = &price * BigDecimal::from(BigInt::from(self.gas.clone()));
        debug!(price = %to_plain(&price), gas = %self.gas, fee = %to_plain(&fee), "estimated fee");
        Some(fee)
    }

    /// Gas price with the speed multiplier applied, as a decimal string.
    pub async fn current_gas_price(&self, speed: Option<Speed>) -> Option<String> {
        self.gas_price_value(speed).await.map(|p| to_plain(&p))
    }

    /// `price × gas` in gwei, as a decimal string.
    pub async fn estimated_fee(&self, speed: Option<Speed>) -> Option<String> {
        self.estimated_fee_value(speed).await.map(|f| to_plain(&f))
    }

    /// Estimated fee converted to `currency` and rendered as `format`.
    pub async fn fee(
        &self,
        speed: Option<Speed>,
        currency: Currency,
        format: Format,
    ) -> Option<FormattedFee> {
        let fee = self.estimated_fee_value(speed).await;
        apply_format(apply_currency(fee, currency), format)
    }
}
