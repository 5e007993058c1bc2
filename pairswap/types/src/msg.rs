use {
    crate::{ledger, pair, registry},
    serde::{Deserialize, Serialize},
};

/// A message to be executed by a contract.
///
/// A contract exposes one or more capabilities: every contract is a fungible
/// ledger; registries additionally index pairs, and pairs additionally provide
/// liquidity and swaps. A message addressed to a capability the contract
/// doesn't have is rejected.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ExecuteMsg {
    Ledger(ledger::ExecuteMsg),
    Registry(registry::ExecuteMsg),
    Pair(pair::ExecuteMsg),
}

impl From<ledger::ExecuteMsg> for ExecuteMsg {
    fn from(msg: ledger::ExecuteMsg) -> Self {
        Self::Ledger(msg)
    }
}

impl From<registry::ExecuteMsg> for ExecuteMsg {
    fn from(msg: registry::ExecuteMsg) -> Self {
        Self::Registry(msg)
    }
}

impl From<pair::ExecuteMsg> for ExecuteMsg {
    fn from(msg: pair::ExecuteMsg) -> Self {
        Self::Pair(msg)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum QueryMsg {
    Ledger(ledger::QueryMsg),
    Registry(registry::QueryMsg),
    Pair(pair::QueryMsg),
}

impl From<ledger::QueryMsg> for QueryMsg {
    fn from(msg: ledger::QueryMsg) -> Self {
        Self::Ledger(msg)
    }
}

impl From<registry::QueryMsg> for QueryMsg {
    fn from(msg: registry::QueryMsg) -> Self {
        Self::Registry(msg)
    }
}

impl From<pair::QueryMsg> for QueryMsg {
    fn from(msg: pair::QueryMsg) -> Self {
        Self::Pair(msg)
    }
}
