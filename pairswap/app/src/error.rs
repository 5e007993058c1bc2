use {
    pairswap_ledger::LedgerError,
    pairswap_pair::PairError,
    pairswap_registry::RegistryError,
    pairswap_types::{Addr, StdError},
    thiserror::Error,
};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppError {
    #[error(transparent)]
    Std(#[from] StdError),

    #[error(transparent)]
    Ledger(#[from] LedgerError),

    #[error(transparent)]
    Pair(#[from] PairError),

    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error("failed to load config: {0}")]
    Config(String),

    #[error("contract not found: {address}")]
    ContractNotFound { address: Addr },

    #[error("contract {address} is a {kind} and doesn't accept this message")]
    UnsupportedMessage { address: Addr, kind: &'static str },

    #[error("account with address `{address}` already exists")]
    AccountExists { address: Addr },

    #[error("contract {sender} can't send a message on its own")]
    SenderIsContract { sender: Addr },

    #[error("max message depth exceeded")]
    ExceedMaxMessageDepth,

    #[error("transfer hook failed: {0}")]
    Hook(String),
}

pub type AppResult<T> = core::result::Result<T, AppError>;
