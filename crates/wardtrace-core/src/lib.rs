//! Wardtrace Core - Domain models, ports, and configuration
//!
//! This crate contains the core domain types and port definitions for the
//! wardtrace system.

pub mod config;
pub mod error;
pub mod models;
pub mod ports;

pub use error::{Result, WardtraceError};
