mod error;
mod query;
mod registry;

pub use {error::*, query::DEFAULT_PAGE_LIMIT, registry::*};
