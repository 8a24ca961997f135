//! # parity-rpc-client
//!
//! Thin JSON-RPC client for Parity/OpenEthereum nodes with account,
//! local-transaction and gas-fee helpers.
//!
//! ```no_run
//! use parity_rpc_client::{Currency, Format, GasFeeCalculator, NodeClient, Speed};
//!
//! # async fn run() -> Result<(), parity_rpc_client::ClientError> {
//! let client = NodeClient::connect("http://localhost:8545")?;
//! let balance = client.get_balance("0x00a329c0648769a73afac7f9381e08fb43dbea72").await;
//!
//! let fees = GasFeeCalculator::new(client);
//! let fee = fees.fee(Some(Speed::Fast), Currency::Ether, Format::String).await;
//! # let _ = (balance, fee);
//! # Ok(())
//! # }
//! ```

pub mod core;
pub mod fees;
pub mod logging;
pub mod parity;
pub mod rpc;

pub use crate::core::config::{ClientConfig, DEFAULT_GAS};
pub use crate::core::errors::ClientError;
pub use fees::{Currency, Format, FormattedFee, GasFeeCalculator, GasPriceSource, Speed};
pub use parity::{
    AccountEdit, AccountInfo, AccountList, GasEstimateRequest, LocalTransactions, NodeClient,
};
pub use rpc::{HttpTransport, RpcRequest, RpcResponse, Transport};
