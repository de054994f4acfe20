//! Parsing logic for the scripts' config

use std::{
    fs,
    path::{Path, PathBuf},
    str::FromStr,
    time::Duration,
};

use alloy::signers::local::PrivateKeySigner;
use clap::Parser;
use util::{on_chain::deployments_file_path, telemetry::LevelFilter};

use crate::{Cli, NetworkConfig, ScriptConfig, validation::validate_network_config};

/// The directory holding network config files, relative to the working
/// directory
const NETWORK_CONFIGS_DIR: &str = "configs";
/// The extension of network config files
const NETWORK_CONFIG_EXTENSION: &str = "toml";

/// Parses command line args into the script config
pub fn parse_command_line_args() -> Result<ScriptConfig, String> {
    let cli = Cli::parse();
    parse_config_from_args(cli)
}

/// Parse the config from a set of command line arguments
///
/// Separating out this functionality allows us to easily inject custom args
/// apart from what is specified on the command line
pub fn parse_config_from_args(cli_args: Cli) -> Result<ScriptConfig, String> {
    let private_key = cli_args
        .private_key
        .as_deref()
        .map(PrivateKeySigner::from_str)
        .transpose()
        .map_err(|e| format!("invalid private key: {e}"))?;

    let log_level = LevelFilter::from_str(&cli_args.log_level)
        .map_err(|e| format!("invalid log level `{}`: {e}", cli_args.log_level))?;

    // Read the network's token configs
    let config_path =
        cli_args.config_file.unwrap_or_else(|| default_network_config_path(&cli_args.network));
    let network_config = parse_network_config_from_file(&config_path)?;

    let deployments_path = deployments_file_path(&cli_args.deployments_dir, &cli_args.network);
    Ok(ScriptConfig {
        command: cli_args.command,
        network: cli_args.network,
        rpc_url: cli_args.rpc_url,
        private_key,
        block_polling_interval: Duration::from_millis(cli_args.block_polling_interval_ms),
        deployments_path,
        network_config,
        log_level,
    })
}

/// The default location of a network's config file, `configs/<network>.toml`
pub fn default_network_config_path(network: &str) -> PathBuf {
    Path::new(NETWORK_CONFIGS_DIR).join(format!("{network}.{NETWORK_CONFIG_EXTENSION}"))
}

/// Parse and validate a network config from a TOML file
pub fn parse_network_config_from_file(path: &Path) -> Result<NetworkConfig, String> {
    let file_contents = fs::read_to_string(path)
        .map_err(|err| format!("could not read config file {}: {err}", path.display()))?;
    let config: NetworkConfig = toml::from_str(&file_contents)
        .map_err(|err| format!("could not parse config file {}: {err}", path.display()))?;

    validate_network_config(&config)?;
    Ok(config)
}

#[cfg(test)]
mod test {
    use std::fs::File;
    use std::io::Write;

    use alloy_primitives::{Address, address};
    use clap::Parser;
    use tempfile::{TempDir, tempdir};

    use super::*;
    use crate::Command;

    /// A well known development private key
    const DEV_PRIVATE_KEY: &str =
        "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

    /// A network config shaped like the Polygon one
    const NETWORK_CONFIG: &str = r#"
        base_asset = "0x0d500B1d8E8eF31E21C99d1Db9A6444d3ADf1270"
        base_asset_accessor = "WMATIC"
        uniswap_v2_router = "0xa5e0829caced8ffdd4de3c43696c57f7d7a678ff"
        base_price_decimals = 18
        default_twap_period = 3600
        ctokens = ["0x243415ce19991095b2105ba50d4cBa3D1de32695"]

        [[token_configs]]
        underlying = "0x0d500B1d8E8eF31E21C99d1Db9A6444d3ADf1270"
        price_source = "1"
        uniswap_market = "0x6e7a5FAFcec6BB1e78bAE2A1F0B612012BF14827"

        [[token_configs]]
        underlying = "0x2791Bca1f2de4661ED88A30C99A7a9449Aa84174"
        price_source = "0"

        [[token_configs]]
        underlying = "0xf2bB8cD51A4bdcf33f3a77E4cdCAbaAFcfa9ad5A"
        twap_period = 60
    "#;

    /// Write a config file into a temporary directory
    ///
    /// The dir must be returned so that it is not dropped
    fn write_config(contents: &str) -> (TempDir, PathBuf) {
        let dir = tempdir().unwrap();
        let path = dir.path().join("network.toml");
        let mut file = File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();

        (dir, path)
    }

    #[test]
    fn test_parse_network_config() {
        let (_dir, path) = write_config(NETWORK_CONFIG);
        let config = parse_network_config_from_file(&path).unwrap();

        assert_eq!(config.base_asset, address!("0x0d500B1d8E8eF31E21C99d1Db9A6444d3ADf1270"));
        assert_eq!(config.base_asset_accessor.as_deref(), Some("WMATIC"));
        assert_eq!(config.base_price_decimals, 18);
        assert_eq!(config.ctokens.len(), 1);
        assert_eq!(config.token_configs.len(), 3);

        // Optional fields are left unset rather than defaulted
        let wmatic = &config.token_configs[0];
        assert_eq!(wmatic.price_source.as_deref(), Some("1"));
        assert!(wmatic.uniswap_market.is_some());
        assert_eq!(config.token_configs[1].uniswap_market, None);
        assert_eq!(config.token_configs[2].price_source, None);
        assert_eq!(config.token_configs[2].twap_period, Some(60));

        let params = config.resolution_params();
        assert_eq!(params.router, config.uniswap_v2_router);
        assert_eq!(params.default_twap_period, 3600);
        let usdc = address!("0x2791Bca1f2de4661ED88A30C99A7a9449Aa84174");
        assert_eq!(config.underlyings()[1], usdc);
    }

    #[test]
    fn test_invalid_network_config() {
        let contents =
            NETWORK_CONFIG.replace("base_price_decimals = 18", "base_price_decimals = 78");
        let (_dir, path) = write_config(&contents);
        assert!(parse_network_config_from_file(&path).is_err());

        let (_dir, path) = write_config("base_asset = \"not an address\"");
        assert!(parse_network_config_from_file(&path).is_err());

        assert!(parse_network_config_from_file(Path::new("/nonexistent/config.toml")).is_err());
    }

    #[test]
    fn test_parse_config_from_args() {
        let (dir, path) = write_config(NETWORK_CONFIG);
        let cli = Cli::try_parse_from([
            "oracle-scripts",
            "--network",
            "polygon",
            "--rpc-url",
            "http://localhost:8545",
            "--private-key",
            DEV_PRIVATE_KEY,
            "--config-file",
            path.to_str().unwrap(),
            "--deployments-dir",
            dir.path().to_str().unwrap(),
            "--log-level",
            "debug",
            "update-prices",
        ])
        .unwrap();

        let config = parse_config_from_args(cli).unwrap();
        assert_eq!(config.command, Command::UpdatePrices);
        assert_eq!(config.log_level, LevelFilter::DEBUG);
        assert_eq!(config.deployments_path, dir.path().join("polygon.json"));

        let signer = config.private_key.unwrap();
        assert_eq!(signer.address(), address!("0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266"));
        assert_ne!(config.network_config.base_asset, Address::ZERO);
    }

    #[test]
    fn test_parse_deploy_command() {
        let (_dir, path) = write_config(NETWORK_CONFIG);
        let cli = Cli::try_parse_from([
            "oracle-scripts",
            "deploy",
            "--artifact",
            "artifacts/Oracle.json",
            "--config-file",
            path.to_str().unwrap(),
        ])
        .unwrap();

        let config = parse_config_from_args(cli).unwrap();
        match config.command {
            Command::Deploy { artifact, confirmations } => {
                assert_eq!(artifact, PathBuf::from("artifacts/Oracle.json"));
                assert_eq!(confirmations, constants::DEFAULT_DEPLOY_CONFIRMATIONS);
            },
            cmd => panic!("unexpected command: {cmd:?}"),
        }
    }

    #[test]
    fn test_invalid_cli_values() {
        let (_dir, path) = write_config(NETWORK_CONFIG);
        let path = path.to_str().unwrap();

        let cli = Cli::try_parse_from([
            "oracle-scripts",
            "--private-key",
            "0x1234",
            "--config-file",
            path,
            "view",
        ])
        .unwrap();
        assert!(parse_config_from_args(cli).is_err());

        let cli = Cli::try_parse_from([
            "oracle-scripts",
            "--log-level",
            "loud",
            "--config-file",
            path,
            "view",
        ])
        .unwrap();
        assert!(parse_config_from_args(cli).is_err());
    }

    #[test]
    fn test_default_network_config_path() {
        assert_eq!(default_network_config_path("polygon"), PathBuf::from("configs/polygon.toml"));
    }
}
