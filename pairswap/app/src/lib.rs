mod app;
mod error;
mod hook;
mod query;
mod state;

pub use {app::*, error::*, hook::*, state::*};
