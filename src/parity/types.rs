use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Entry of `parity_allAccountsInfo`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct AccountInfo {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub meta: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
}

/// Accounts known to the node.
#[derive(Debug, Clone, PartialEq)]
pub enum AccountList {
    /// `personal_listAccounts`
    Addresses(Vec<String>),
    /// `parity_allAccountsInfo`, in the order the node reported them.
    Detailed(Vec<(String, AccountInfo)>),
}

impl AccountList {
    pub fn addresses(&self) -> Vec<&str> {
        match self {
            AccountList::Addresses(list) => list.iter().map(String::as_str).collect(),
            AccountList::Detailed(list) => list.iter().map(|(addr, _)| addr.as_str()).collect(),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            AccountList::Addresses(list) => list.len(),
            AccountList::Detailed(list) => list.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Optional changes for `edit_account`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AccountEdit {
    pub name: Option<String>,
    pub new_password: Option<String>,
}

impl AccountEdit {
    pub fn rename(name: impl Into<String>) -> Self {
        Self { name: Some(name.into()), new_password: None }
    }

    pub fn change_password(new_password: impl Into<String>) -> Self {
        Self { name: None, new_password: Some(new_password.into()) }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.new_password.is_none()
    }
}

/// Result of `parity_localTransactions`.
#[derive(Debug, Clone, PartialEq)]
pub enum LocalTransactions {
    Hashes(Vec<String>),
    Detailed(Map<String, Value>),
}

impl LocalTransactions {
    pub fn hashes(&self) -> Vec<String> {
        match self {
            LocalTransactions::Hashes(hashes) => hashes.clone(),
            LocalTransactions::Detailed(map) => map.keys().cloned().collect(),
        }
    }
}

/// Call object for `eth_estimateGas`. Unset fields are left out of the request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GasEstimateRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
    #[serde(default = "GasEstimateRequest::default_value")]
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
}

impl GasEstimateRequest {
    fn default_value() -> String {
        "0x0".to_string()
    }
}

impl Default for GasEstimateRequest {
    fn default() -> Self {
        Self { from: None, to: None, value: Self::default_value(), data: None }
    }
}
