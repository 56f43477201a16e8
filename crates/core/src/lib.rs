//! Vanakkam Core - Shared types library.
//!
//! This crate provides common types used across all Vanakkam client components:
//! - `client` - Intent classification, request routing, and error normalization
//! - `cli` - Command-line front end for the Vanakkam backend
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients. This keeps
//! it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - The intent tag, wire envelopes, and normalized error report

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
