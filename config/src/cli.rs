//! The oracle scripts' CLI and config definitions

use std::{path::PathBuf, time::Duration};

use alloy::signers::local::PrivateKeySigner;
use clap::{Parser, Subcommand};
use constants::{
    DEFAULT_BLOCK_POLLING_INTERVAL_MS, DEFAULT_DEPLOY_CONFIRMATIONS, DEFAULT_DEPLOYMENTS_DIR,
    DEFAULT_NETWORK,
};
use util::telemetry::LevelFilter;

use crate::network::NetworkConfig;

// -------
// | CLI |
// -------

/// Defines the oracle scripts' command line interface
#[derive(Debug, Parser)]
#[clap(author, about = "Deploy, configure and operate a price oracle", long_about = None)]
#[rustfmt::skip]
pub struct Cli {
    /// The command to run
    #[clap(subcommand)]
    pub command: Command,

    // ------------
    // | Network |
    // ------------

    /// The name of the network to operate on
    ///
    /// Selects the deployments file and the default network config file
    #[clap(long, value_parser, env = "NETWORK", default_value = DEFAULT_NETWORK, global = true)]
    pub network: String,
    /// The HTTP url of the RPC node to use
    #[clap(long, value_parser, env = "RPC_URL", default_value = "http://localhost:8545", global = true)]
    pub rpc_url: String,
    /// The private key of the account to sign transactions with
    ///
    /// Only required by commands that send transactions
    #[clap(long, value_parser, env = "PRIVATE_KEY", global = true)]
    pub private_key: Option<String>,
    /// The interval at which to poll for pending transactions, in milliseconds
    #[clap(long, value_parser, default_value_t = DEFAULT_BLOCK_POLLING_INTERVAL_MS, global = true)]
    pub block_polling_interval_ms: u64,

    // ---------
    // | Files |
    // ---------

    /// The network config file to read token configs from
    ///
    /// Defaults to `configs/<network>.toml`
    #[clap(long, value_parser, global = true)]
    pub config_file: Option<PathBuf>,
    /// The directory holding per-network deployments files
    #[clap(long, value_parser, default_value = DEFAULT_DEPLOYMENTS_DIR, global = true)]
    pub deployments_dir: PathBuf,

    // -------------
    // | Telemetry |
    // -------------

    /// The verbosity of the logs, one of `off`, `error`, `warn`, `info`, `debug`, `trace`
    #[clap(long, value_parser, default_value = "info", global = true)]
    pub log_level: String,
}

/// The commands the scripts can run
#[derive(Clone, Debug, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Deploy the oracle contract and record its address
    Deploy {
        /// The path of the oracle's compiled contract artifact
        #[clap(long, value_parser)]
        artifact: PathBuf,
        /// The number of confirmations to wait for after deploying
        #[clap(long, value_parser, default_value_t = DEFAULT_DEPLOY_CONFIRMATIONS)]
        confirmations: u64,
    },
    /// Resolve and register the configs of tokens not yet known to the oracle
    SetupConfigs,
    /// Register the underlying of cTokens not yet known to the oracle
    SetupCtokens,
    /// Refresh the oracle's stored prices of all configured tokens
    UpdatePrices,
    /// Print the oracle's configured token count and prices
    View,
}

// ----------
// | Config |
// ----------

/// Defines the configuration of a single script run
#[derive(Debug)]
pub struct ScriptConfig {
    /// The command to run
    pub command: Command,
    /// The name of the network to operate on
    pub network: String,
    /// The HTTP url of the RPC node to use
    pub rpc_url: String,
    /// The key of the account to sign transactions with
    pub private_key: Option<PrivateKeySigner>,
    /// The interval at which to poll for pending transactions
    pub block_polling_interval: Duration,
    /// The path of the network's deployments file
    pub deployments_path: PathBuf,
    /// The network's token and router configuration
    pub network_config: NetworkConfig,
    /// The verbosity of the logs
    pub log_level: LevelFilter,
}
