pub mod client;
pub mod types;

pub use client::NodeClient;
pub use types::{AccountEdit, AccountInfo, AccountList, GasEstimateRequest, LocalTransactions};
