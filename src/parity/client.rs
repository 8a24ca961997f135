//! Parity/OpenEthereum node client
//!
//! Each operation maps to one JSON-RPC method (or a short sequence of them).
//! Failures of any kind are logged and reported as `None`; use
//! [`NodeClient::request`] when the underlying error is needed.

use serde::de::DeserializeOwned;
use serde_json::{json, Map, Value};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, info, warn};

use super::types::{AccountEdit, AccountInfo, AccountList, GasEstimateRequest, LocalTransactions};
use crate::core::config::ClientConfig;
use crate::core::errors::ClientError;
use crate::core::result_ext::ResultExt;
use crate::rpc::{HttpTransport, Transport};

#[derive(Clone)]
pub struct NodeClient {
    transport: Arc<dyn Transport>,
}

impl fmt::Debug for NodeClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeClient").finish_non_exhaustive()
    }
}

impl NodeClient {
    pub fn new(transport: impl Transport + 'static) -> Self {
        Self { transport: Arc::new(transport) }
    }

    pub fn with_transport(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// HTTP client for `endpoint` with the transport's default timeout.
    pub fn connect(endpoint: &str) -> Result<Self, ClientError> {
        Ok(Self::new(HttpTransport::new(endpoint)?))
    }

    pub fn from_config(config: &ClientConfig) -> Result<Self, ClientError> {
        config.validate()?;
        info!("Connecting to node: {} (timeout {}s)", config.endpoint, config.timeout_secs);
        Ok(Self::new(HttpTransport::with_timeout(&config.endpoint, config.timeout())?))
    }

    pub fn transport(&self) -> &Arc<dyn Transport> {
        &self.transport
    }

    /// Strict call: a JSON `null` result is `Ok(None)`, everything else is
    /// decoded into `R`.
    pub async fn request<R: DeserializeOwned>(
        &self,
        method: &str,
        params: Vec<Value>,
    ) -> Result<Option<R>, ClientError> {
        let value = self.transport.call(method, params).await?;
        if value.is_null() {
            return Ok(None);
        }
        Ok(Some(serde_json::from_value(value)?))
    }

    async fn fetch<R: DeserializeOwned>(&self, method: &str, params: Vec<Value>) -> Option<R> {
        self.request(method, params).await.ok_or_log(method).flatten()
    }

    // ---- accounts ----

    /// Bare addresses, or the detailed account map when `include_details` is set.
    pub async fn list_accounts(&self, include_details: bool) -> Option<AccountList> {
        if !include_details {
            return self.fetch("personal_listAccounts", vec![]).await.map(AccountList::Addresses);
        }

        let map: Map<String, Value> = self.fetch("parity_allAccountsInfo", vec![]).await?;
        let accounts = map
            .into_iter()
            .map(|(address, info)| {
                let info = serde_json::from_value::<AccountInfo>(info)
                    .unwrap_or_log(AccountInfo::default(), "parity_allAccountsInfo entry");
                (address, info)
            })
            .collect();
        Some(AccountList::Detailed(accounts))
    }

    /// Address of the first account whose display name equals `alias`.
    pub async fn find_account_by_alias(&self, alias: Option<&str>) -> Option<String> {
        let alias = alias.filter(|a| !a.is_empty())?;

        let found = match self.list_accounts(true).await? {
            AccountList::Detailed(accounts) => accounts
                .into_iter()
                .find(|(_, info)| info.name == alias)
                .map(|(address, _)| address),
            AccountList::Addresses(_) => None,
        };
        if found.is_none() {
            debug!(alias, "no account with this name");
        }
        found
    }

    pub async fn create_account(&self, password: &str) -> Option<String> {
        self.fetch("personal_newAccount", vec![json!(password)]).await
    }

    /// Renames the account and/or changes its password, in that order.
    ///
    /// `Some(false)` when the node rejects either change (the password change
    /// is then not attempted); `None` when a call fails outright.
    pub async fn edit_account(
        &self,
        address: &str,
        password: &str,
        edit: &AccountEdit,
    ) -> Option<bool> {
        if let Some(name) = &edit.name {
            let result: Option<Value> = self
                .request("parity_setAccountName", vec![json!(address), json!(name)])
                .await
                .ok_or_log("parity_setAccountName")?;
            if !is_truthy(result.as_ref()) {
                return Some(false);
            }
        }

        if let Some(new_password) = &edit.new_password {
            let result: Option<Value> = self
                .request(
                    "parity_changePassword",
                    vec![json!(address), json!(password), json!(new_password)],
                )
                .await
                .ok_or_log("parity_changePassword")?;
            if !is_truthy(result.as_ref()) {
                return Some(false);
            }
        }

        Some(true)
    }

    pub async fn delete_account(&self, address: &str, password: &str) -> Option<bool> {
        self.fetch("parity_killAccount", vec![json!(address), json!(password)]).await
    }

    // ---- local transaction pool ----

    pub async fn list_local_transaction_hashes(
        &self,
        include_details: bool,
    ) -> Option<LocalTransactions> {
        let map: Map<String, Value> = self.fetch("parity_localTransactions", vec![]).await?;
        if include_details {
            Some(LocalTransactions::Detailed(map))
        } else {
            Some(LocalTransactions::Hashes(map.into_iter().map(|(hash, _)| hash).collect()))
        }
    }

    pub async fn get_local_transaction(&self, hash: &str) -> Option<Value> {
        match self.list_local_transaction_hashes(true).await? {
            LocalTransactions::Detailed(map) => map.get(hash).cloned(),
            LocalTransactions::Hashes(_) => None,
        }
    }

    pub async fn list_queued_transactions(&self) -> Option<Value> {
        self.fetch("parity_allTransactions", vec![]).await
    }

    /// Removes every local transaction, one call each, in the order the
    /// node listed them. Returns the hashes that were actually removed.
    pub async fn remove_all_local_transactions(&self) -> Vec<String> {
        let hashes = self
            .list_local_transaction_hashes(false)
            .await
            .map(|txs| txs.hashes())
            .unwrap_or_log(Vec::new(), "parity_localTransactions");

        let mut removed = Vec::with_capacity(hashes.len());
        for hash in hashes {
            match self.remove_local_transaction(&hash).await {
                Some(true) => removed.push(hash),
                Some(false) => debug!(hash = %hash, "transaction was not removed"),
                None => warn!(hash = %hash, "skipping transaction after failed removal"),
            }
        }
        removed
    }

    /// `Some(true)` when the node returned the removed transaction.
    pub async fn remove_local_transaction(&self, hash: &str) -> Option<bool> {
        self.request::<Value>("parity_removeTransaction", vec![json!(hash)])
            .await
            .ok_or_log("parity_removeTransaction")
            .map(|removed| removed.is_some())
    }

    // ---- chain queries ----

    pub async fn estimate_gas(&self, call: &GasEstimateRequest) -> Option<String> {
        let call = serde_json::to_value(call).ok_or_log("eth_estimateGas")?;
        self.fetch("eth_estimateGas", vec![call]).await
    }

    /// Gas price exactly as the node reported it.
    pub async fn get_gas_price(&self) -> Option<String> {
        self.fetch("eth_gasPrice", vec![]).await
    }

    pub async fn get_balance(&self, address: &str) -> Option<String> {
        self.fetch("eth_getBalance", vec![json!(address)]).await
    }

    pub async fn sign_transaction(&self, transaction: &Value, password: &str) -> Option<Value> {
        self.fetch("personal_signTransaction", vec![transaction.clone(), json!(password)]).await
    }

    pub async fn send_raw_transaction(&self, raw: &str) -> Option<String> {
        self.fetch("eth_sendRawTransaction", vec![json!(raw)]).await
    }

    pub async fn get_transaction_count(&self, address: &str) -> Option<String> {
        self.fetch("eth_getTransactionCount", vec![json!(address)]).await
    }

    pub async fn get_transaction_receipt(&self, hash: &str) -> Option<Value> {
        self.fetch("eth_getTransactionReceipt", vec![json!(hash)]).await
    }

    pub async fn get_transaction(&self, hash: &str) -> Option<Value> {
        self.fetch("eth_getTransactionByHash", vec![json!(hash)]).await
    }

    pub async fn list_peers(&self) -> Option<Value> {
        self.fetch("parity_netPeers", vec![]).await
    }
}

fn is_truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().map_or(true, |f| f != 0.0),
        Some(Value::String(s)) => !s.is_empty(),
        Some(_) => true,
    }
}
