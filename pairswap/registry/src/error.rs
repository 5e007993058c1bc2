use {
    pairswap_ledger::LedgerError,
    pairswap_pair::PairError,
    pairswap_types::{Addr, MathError, StdError},
};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error(transparent)]
    Std(#[from] StdError),

    #[error(transparent)]
    Math(#[from] MathError),

    #[error(transparent)]
    Ledger(#[from] LedgerError),

    #[error(transparent)]
    Pair(#[from] PairError),

    #[error("invalid token address: {asset}")]
    InvalidAsset { asset: Addr },

    #[error("pair already exists: {pair}")]
    PairExists { pair: Addr },
}

pub type RegistryResult<T> = Result<T, RegistryError>;
