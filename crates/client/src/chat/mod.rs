//! Transport client for the Vanakkam skill endpoints.
//!
//! A thin HTTP layer: one POST per call, no retries, no caching. Failures
//! surface as [`ChatError`] and are normalized into user-facing reports by
//! [`crate::report::normalize`] — callers of the [`crate::Dispatcher`] never
//! see a raw transport error.

mod client;
mod error;

pub use client::ChatClient;
pub use error::ChatError;
