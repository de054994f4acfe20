//! Provides a client for configuring and operating a Compound-style price
//! oracle contract, and the blockchain reads its configuration depends on.
//!
//! This contains abstractions for handling configuration details like RPC
//! endpoint, oracle address, etc.; resolving declared token configs into the
//! configs the contract expects; deploying the oracle; and calling functions
//! on it.

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::missing_docs_in_private_items)]

pub mod abi;
pub mod client;
pub mod conversion;
pub mod errors;
pub mod helpers;
pub mod resolution;
pub mod traits;
pub mod types;

pub use client::{OracleClient, OracleClientConfig};
pub use resolution::{create_config, create_configs};
