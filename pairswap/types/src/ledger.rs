use {
    crate::{Addr, Uint256},
    serde::{Deserialize, Serialize},
};

/// Human-facing description of a fungible token.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TokenMetadata {
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
}

impl TokenMetadata {
    pub fn new<N, S>(name: N, symbol: S, decimals: u8) -> Self
    where
        N: Into<String>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            symbol: symbol.into(),
            decimals,
        }
    }

    /// Metadata of the liquidity share token issued by every pair.
    pub fn lp_token() -> Self {
        Self::new("pair LP token", "PAIR", 18)
    }

    /// Metadata of the registry's own accounting token, in which staking
    /// rewards are paid.
    pub fn registry_token() -> Self {
        Self::new("MACToken", "MAC", 18)
    }
}

/// The fungible ledger surface, shared by plain tokens, registries (their
/// accounting token) and pairs (their LP token).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ExecuteMsg {
    /// Send tokens from the sender to `to`.
    Transfer { to: Addr, amount: Uint256 },
    /// Let `spender` move up to `amount` of the sender's tokens.
    Approve { spender: Addr, amount: Uint256 },
    /// Set an allowance on behalf of `owner`. Only the owner itself may do so.
    ApproveFor {
        owner: Addr,
        spender: Addr,
        amount: Uint256,
    },
    /// Move tokens from `from` to `to`, spending the sender's allowance.
    TransferFrom {
        from: Addr,
        to: Addr,
        amount: Uint256,
    },
    /// Create new tokens. Only the token's mint authority may do so.
    Mint { to: Addr, amount: Uint256 },
    /// Destroy tokens held by `from`. Only the token's mint authority may do so.
    Burn { from: Addr, amount: Uint256 },
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum QueryMsg {
    /// Query the token's name, symbol and decimals at once.
    /// Returns: `TokenMetadata`
    Metadata {},
    /// Returns: `String`
    Name {},
    /// Returns: `String`
    Symbol {},
    /// Returns: `u8`
    Decimals {},
    /// Returns: `Uint256`
    TotalSupply {},
    /// Returns: `Uint256`
    Balance { owner: Addr },
    /// Returns: `Uint256`
    Allowance { owner: Addr, spender: Addr },
}
