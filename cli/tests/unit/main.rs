//! Unit tests for fleet CLI
//!
//! These tests use mocked dependencies and run fast without external I/O.

mod property_tests;
