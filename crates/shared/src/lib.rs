//! Shared types, errors, and configuration for Tessera.
//!
//! This crate provides common types used across all other crates:
//! - Typed IDs for type-safe references to listings and accounts
//! - Integer amount type for smallest-currency-unit funds
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::AppConfig;
pub use error::{AppError, AppResult};
