use {
    pairswap_ledger::LedgerError,
    pairswap_types::{Addr, MathError, StdError, Uint256},
};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PairError {
    #[error(transparent)]
    Std(#[from] StdError),

    #[error(transparent)]
    Math(#[from] MathError),

    #[error(transparent)]
    Ledger(#[from] LedgerError),

    #[error("invalid token address: {asset}")]
    InvalidAsset { asset: Addr },

    #[error("liquidity tokens = 0")]
    ZeroLiquidity,

    #[error(
        "x / y != dx / dy! deposit: {amount0}/{amount1}, reserves: {reserve0}/{reserve1}"
    )]
    RatioMismatch {
        amount0: Uint256,
        amount1: Uint256,
        reserve0: Uint256,
        reserve1: Uint256,
    },

    #[error("amount in = 0")]
    ZeroAmount,

    #[error("insufficient reserve! output: {amount_out}, reserve: {reserve}")]
    InsufficientReserve { amount_out: Uint256, reserve: Uint256 },

    #[error("zero tokens to withdraw")]
    ZeroWithdraw,

    #[error("reentrant call into pair {pair}")]
    Reentrancy { pair: Addr },
}

pub type PairResult<T> = Result<T, PairError>;
