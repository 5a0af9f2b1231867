//! Shared helpers for the blob store workspace: logging setup, runtime
//! environment checks and the small wire types used by more than one crate.

pub mod types;
pub mod utils;
pub mod env;
