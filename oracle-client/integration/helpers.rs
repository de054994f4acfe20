//! Helpers for the oracle client integration tests

use std::time::Duration;

use alloy_primitives::address;
use oracle_client::{
    OracleClient, OracleClientConfig,
    types::{PriceSource, ResolutionParams, TokenConfigInput},
};

/// The env var holding the RPC url of the node to test against
const FORK_RPC_URL_ENV: &str = "FORK_RPC_URL";
/// The default TWAP period on Polygon, in seconds
const DEFAULT_TWAP_PERIOD: u64 = 3600;

/// Build a client without a signer that connects to the test node
pub fn read_only_client() -> eyre::Result<OracleClient> {
    let rpc_url = std::env::var(FORK_RPC_URL_ENV)
        .map_err(|_| eyre::eyre!("{FORK_RPC_URL_ENV} must be set to run integration tests"))?;

    let client = OracleClient::new(OracleClientConfig {
        rpc_url,
        private_key: None,
        block_polling_interval: Duration::from_millis(100),
    })?;
    Ok(client)
}

/// The resolution parameters of the QuickSwap deployment on Polygon
pub fn resolution_params() -> ResolutionParams {
    ResolutionParams {
        router: address!("0xa5e0829caced8ffdd4de3c43696c57f7d7a678ff"),
        base_asset_accessor: Some("WMATIC".to_string()),
        default_twap_period: DEFAULT_TWAP_PERIOD,
    }
}

/// The token declarations shipped for Polygon
pub fn polygon_tokens() -> Vec<TokenConfigInput> {
    let declare = |underlying, source: PriceSource| TokenConfigInput {
        underlying,
        price_source: Some(source.to_string()),
        ..Default::default()
    };

    let mut wmatic =
        declare(address!("0x0d500B1d8E8eF31E21C99d1Db9A6444d3ADf1270"), PriceSource::Uniswap);
    wmatic.uniswap_market = Some(address!("0x6e7a5FAFcec6BB1e78bAE2A1F0B612012BF14827"));

    vec![
        wmatic,
        declare(address!("0x2791Bca1f2de4661ED88A30C99A7a9449Aa84174"), PriceSource::FixedUsd),
        declare(address!("0xf2bB8cD51A4bdcf33f3a77E4cdCAbaAFcfa9ad5A"), PriceSource::Poster),
        declare(address!("0x914f9E5644d78fd287fF36081544FcCFbdF31CAE"), PriceSource::Poster),
    ]
}
