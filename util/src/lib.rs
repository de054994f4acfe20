//! Defines one-off utility functions used throughout the oracle tooling
#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::missing_docs_in_private_items)]

#[cfg(feature = "errors")]
pub mod errors;
#[cfg(feature = "blockchain")]
pub mod on_chain;
#[cfg(feature = "telemetry")]
pub mod telemetry;
