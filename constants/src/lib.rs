//! Defines system-wide constants for oracle deployment and configuration

#![deny(unsafe_code)]
#![deny(clippy::missing_docs_in_private_items)]
#![deny(missing_docs)]

use std::time::Duration;

// ---------------------
// | Transaction Gas |
// ---------------------

/// The numerator of the safety margin applied to gas estimates
///
/// Batch writes are submitted with a gas limit of 125% of the estimate
pub const GAS_LIMIT_MARGIN_NUMERATOR: u64 = 125;

/// The denominator of the safety margin applied to gas estimates
pub const GAS_LIMIT_MARGIN_DENOMINATOR: u64 = 100;

// ----------------------
// | Transaction Timing |
// ----------------------

/// The timeout for awaiting the receipt of a pending transaction
pub const TX_RECEIPT_TIMEOUT: Duration = Duration::from_secs(120);

/// The default interval at which to poll for pending transactions
pub const DEFAULT_BLOCK_POLLING_INTERVAL_MS: u64 = 1_000;

/// The number of confirmations awaited after deploying the oracle
pub const DEFAULT_DEPLOY_CONFIRMATIONS: u64 = 15;

// ---------------
// | Deployments |
// ---------------

/// The key under which oracle deployments are recorded in a deployments file
pub const ORACLE_CONTRACT_KEY: &str = "Oracle";

/// The default directory holding per-network deployments files
pub const DEFAULT_DEPLOYMENTS_DIR: &str = "./deployments";

/// The default network name, selects the deployments file to use
pub const DEFAULT_NETWORK: &str = "polygon";

// -----------------
// | Token Configs |
// -----------------

/// The largest number of decimals whose base unit still fits in a `uint256`
pub const MAX_TOKEN_DECIMALS: u8 = 77;
