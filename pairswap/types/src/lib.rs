mod address;
mod config;
mod error;
mod event;
pub mod ledger;
mod math;
mod msg;
pub mod pair;
pub mod registry;
mod response;
mod time;

pub use {
    address::*,
    config::*,
    error::*,
    event::*,
    ledger::TokenMetadata,
    math::*,
    msg::*,
    pair::{AssetsResponse, PairConfig, ReservesResponse, SwapOutcome, BPS_DENOMINATOR},
    registry::{PairKey, PairResponse},
    response::*,
    time::*,
};

/// A JSON value, as returned by queries and carried as response data.
pub type Json = serde_json::Value;

/// Serialize a value into [`Json`].
pub fn to_json_value<T>(value: &T) -> StdResult<Json>
where
    T: serde::Serialize,
{
    serde_json::to_value(value).map_err(StdError::serialize::<T, _>)
}

/// Deserialize a [`Json`] value into a typed value.
pub fn from_json_value<T>(value: Json) -> StdResult<T>
where
    T: serde::de::DeserializeOwned,
{
    serde_json::from_value(value).map_err(StdError::deserialize::<T, _>)
}
