//! Sazón Core - Shared types library.
//!
//! This crate provides common types used across all Sazón components:
//! - `client` - API client and state stores
//! - `cli` - Command-line frontend
//!
//! # Architecture
//!
//! The core crate contains only types and validation - no I/O, no HTTP
//! clients, no async. This keeps it lightweight and allows it to be used
//! anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype IDs, wire types, and form validation

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
