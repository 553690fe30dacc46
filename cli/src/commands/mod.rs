//! Command implementations

pub mod env;
