//! Route builders.

mod account;
mod common;

pub use account::account_routes;
pub use common::common_routes_with_ready;
