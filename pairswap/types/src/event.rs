use {
    crate::{Addr, Uint256},
    serde::{Deserialize, Serialize},
};

/// An event emitted by a contract during the execution of a message.
///
/// Events are notifications only: nothing in the state machine reads them
/// back. They're returned to the caller in the [`Response`](crate::Response).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Event {
    /// Tokens were moved from one holder to another. Mints have the zero
    /// address as sender; burns have it as recipient.
    Transfer(EvtTransfer),
    /// An allowance was set.
    Approval(EvtApproval),
    /// A registry created a new pair.
    PairCreated(EvtPairCreated),
    /// Liquidity was deposited into a pair.
    LiquidityAdded(EvtLiquidity),
    /// Liquidity was withdrawn from a pair.
    LiquidityRemoved(EvtLiquidity),
    /// A trader swapped one asset of a pair for the other.
    Swapped(EvtSwapped),
    /// An LP holder claimed their staking reward.
    RewardWithdrawn(EvtRewardWithdrawn),
}

impl Event {
    pub fn transfer(contract: Addr, from: Addr, to: Addr, amount: Uint256) -> Self {
        Self::Transfer(EvtTransfer {
            contract,
            from,
            to,
            amount,
        })
    }

    pub fn approval(contract: Addr, owner: Addr, spender: Addr, amount: Uint256) -> Self {
        Self::Approval(EvtApproval {
            contract,
            owner,
            spender,
            amount,
        })
    }

    pub fn as_transfer(&self) -> Option<&EvtTransfer> {
        match self {
            Event::Transfer(evt) => Some(evt),
            _ => None,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct EvtTransfer {
    pub contract: Addr,
    pub from: Addr,
    pub to: Addr,
    pub amount: Uint256,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct EvtApproval {
    pub contract: Addr,
    pub owner: Addr,
    pub spender: Addr,
    pub amount: Uint256,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct EvtPairCreated {
    pub registry: Addr,
    pub pair: Addr,
    pub asset0: Addr,
    pub asset1: Addr,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct EvtLiquidity {
    pub pair: Addr,
    pub provider: Addr,
    pub amount0: Uint256,
    pub amount1: Uint256,
    pub shares: Uint256,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct EvtSwapped {
    pub pair: Addr,
    pub trader: Addr,
    pub asset_in: Addr,
    pub amount_in: Uint256,
    pub asset_out: Addr,
    pub amount_out: Uint256,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct EvtRewardWithdrawn {
    pub pair: Addr,
    pub holder: Addr,
    pub amount: Uint256,
}
