use {
    crate::{Addr, StdError, StdResult, TokenMetadata, Uint256},
    serde::{Deserialize, Serialize},
};

/// Denominator of rates expressed in basis points.
pub const BPS_DENOMINATOR: u32 = 10_000;

/// Parameters every pair created by a registry is instantiated with.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct PairConfig {
    /// Portion of a swap's input retained by the pool, in basis points.
    pub swap_fee_rate_bps: u32,
    /// Staking reward paid per day, in basis points of the LP balance held.
    pub reward_rate_bps: u32,
    /// Metadata of the LP share token.
    pub lp_token: TokenMetadata,
}

impl Default for PairConfig {
    fn default() -> Self {
        Self {
            swap_fee_rate_bps: 30,
            reward_rate_bps: 1_000,
            lp_token: TokenMetadata::lp_token(),
        }
    }
}

impl PairConfig {
    pub fn validate(&self) -> StdResult<()> {
        if self.swap_fee_rate_bps >= BPS_DENOMINATOR {
            return Err(StdError::invalid_config(format!(
                "swap fee rate must be less than {BPS_DENOMINATOR} bps, got {}",
                self.swap_fee_rate_bps
            )));
        }

        Ok(())
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ExecuteMsg {
    /// Deposit both assets and receive LP shares.
    /// The sender must have approved the pair to spend both amounts.
    AddLiquidity { amount0: Uint256, amount1: Uint256 },
    /// Burn LP shares and receive the proportional share of both reserves.
    RemoveLiquidity { lp_amount: Uint256 },
    /// Swap an exact amount of one asset for the other.
    /// The sender must have approved the pair to spend `amount_in`.
    Swap { asset_in: Addr, amount_in: Uint256 },
    /// Claim the accrued staking reward, paid in the registry's token.
    Withdraw {},
    /// Send LP shares to another account. Same as a ledger transfer.
    SendLp { to: Addr, amount: Uint256 },
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum QueryMsg {
    /// Returns: `PairConfig`
    Config {},
    /// Returns: `AssetsResponse`
    Assets {},
    /// Returns: `ReservesResponse`
    Reserves {},
    /// Returns: `Uint256`
    Reserve0 {},
    /// Returns: `Uint256`
    Reserve1 {},
    /// The holder's claimable staking reward as of the current block time.
    /// Returns: `Uint256`
    AccruedReward { holder: Addr },
    /// Quote a swap against the current reserves without executing it.
    /// Returns: `SwapOutcome`
    SimulateSwap { asset_in: Addr, amount_in: Uint256 },
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssetsResponse {
    pub asset0: Addr,
    pub asset1: Addr,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReservesResponse {
    pub reserve0: Uint256,
    pub reserve1: Uint256,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwapOutcome {
    pub asset_out: Addr,
    pub amount_out: Uint256,
    /// Part of the input withheld as fee; stays in the pool.
    pub fee: Uint256,
}
