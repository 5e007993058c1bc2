use crate::MathError;

/// Errors that may arise from the basic types in this crate, independent of
/// which contract is executing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StdError {
    #[error(transparent)]
    Math(#[from] MathError),

    #[error("invalid address `{input}`: {reason}")]
    InvalidAddress { input: String, reason: String },

    #[error("invalid config: {reason}")]
    InvalidConfig { reason: String },

    #[error("failed to serialize! type: {ty}, reason: {reason}")]
    Serialize { ty: &'static str, reason: String },

    #[error("failed to deserialize! type: {ty}, reason: {reason}")]
    Deserialize { ty: &'static str, reason: String },
}

impl StdError {
    pub fn invalid_address<I, R>(input: I, reason: R) -> Self
    where
        I: ToString,
        R: ToString,
    {
        Self::InvalidAddress {
            input: input.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn invalid_config<R>(reason: R) -> Self
    where
        R: ToString,
    {
        Self::InvalidConfig {
            reason: reason.to_string(),
        }
    }

    pub fn serialize<T, R>(reason: R) -> Self
    where
        R: ToString,
    {
        Self::Serialize {
            ty: std::any::type_name::<T>(),
            reason: reason.to_string(),
        }
    }

    pub fn deserialize<T, R>(reason: R) -> Self
    where
        R: ToString,
    {
        Self::Deserialize {
            ty: std::any::type_name::<T>(),
            reason: reason.to_string(),
        }
    }
}

pub type StdResult<T> = Result<T, StdError>;
