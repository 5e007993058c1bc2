mod error;
mod pair;
mod query;
mod staking;
pub mod xyk;

pub use {error::*, pair::*, staking::*};
