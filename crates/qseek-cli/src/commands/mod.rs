//! CLI command implementations.

pub mod classical;
pub mod common;
pub mod compare;
pub mod search;
pub mod store;
pub mod version;
