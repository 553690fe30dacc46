//! Infrastructure layer — concrete implementations of application port traits.
//!
//! This module contains all I/O-performing code: config file access, the
//! terminal prompt, and HTTP calls to the fleet API.
//!
//! Imports from `crate::domain` and `crate::application::ports` are allowed.
//! Imports from `crate::commands` or `crate::output` are forbidden.

pub mod api;
pub mod config;
pub mod prompt;
pub mod session;
