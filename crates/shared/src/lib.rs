//! Shared types and configuration for Minibank.
//!
//! This crate provides common types used across all other crates:
//! - Currency codes and locale identifiers
//! - Typed IDs for type-safe entity references
//! - Configuration management

pub mod config;
pub mod types;

pub use config::AppConfig;
