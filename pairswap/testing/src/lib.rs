mod builder;
mod result;
mod suite;
mod tracing;

pub use {builder::*, result::*, suite::*, tracing::*};

use pairswap_types::Uint256;

/// Number of decimal places of every token in the test setup.
pub const DECIMALS: u32 = 18;

/// Convert a whole number of tokens into the smallest unit.
pub fn to_wei(amount: u128) -> Uint256 {
    Uint256::new(amount * 10_u128.pow(DECIMALS))
}
