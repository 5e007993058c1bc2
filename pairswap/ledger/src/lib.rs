mod error;
mod ledger;
mod query;

pub use {error::*, ledger::*};
