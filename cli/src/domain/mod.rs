//! Domain layer — pure business logic, types, and validation.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs`, `std::process`, or `std::net`.
//! All functions are synchronous and take data in, returning data out.

pub mod config;
pub mod error;
pub mod variable;

pub use config::FleetConfig;
pub use error::EnvError;
pub use variable::{
    DeletionOutcome, IdList, RemovalOutcome, RemovalReport, RemovalRequest, VariableId,
    confirmation_prompt, parse_id_list,
};
