use pairswap_types::{Addr, MathError, Uint256};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LedgerError {
    #[error(transparent)]
    Math(#[from] MathError),

    #[error("not enough tokens! holder: {holder}, balance: {balance}, required: {required}")]
    InsufficientBalance {
        holder: Addr,
        balance: Uint256,
        required: Uint256,
    },

    #[error(
        "insufficient allowance! owner: {owner}, spender: {spender}, allowance: {allowance}, required: {required}"
    )]
    InsufficientAllowance {
        owner: Addr,
        spender: Addr,
        allowance: Uint256,
        required: Uint256,
    },

    #[error("sender is not authorized to {action} token {contract}! sender: {sender}")]
    Unauthorized {
        contract: Addr,
        sender: Addr,
        action: &'static str,
    },
}

pub type LedgerResult<T> = Result<T, LedgerError>;
