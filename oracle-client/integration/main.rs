//! Integration tests for the oracle client, run against a Polygon mainnet node
//! or a fork of one
//!
//! The node is addressed by the `FORK_RPC_URL` env var

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::missing_docs_in_private_items)]

mod helpers;

use alloy_primitives::{Address, U256, address};
use helpers::{polygon_tokens, read_only_client, resolution_params};
use oracle_client::{
    create_configs,
    traits::ChainReader,
    types::{PriceSource, TokenConfigInput},
};

/// The wrapped native asset on Polygon
const WMATIC: Address = address!("0x0d500B1d8E8eF31E21C99d1Db9A6444d3ADf1270");
/// The WMATIC/USDC QuickSwap pair
const WMATIC_USDC_PAIR: Address = address!("0x6e7a5FAFcec6BB1e78bAE2A1F0B612012BF14827");
/// USDC (PoS) on Polygon
const USDC: Address = address!("0x2791Bca1f2de4661ED88A30C99A7a9449Aa84174");

#[tokio::test]
async fn test_router_base_asset() -> eyre::Result<()> {
    let client = read_only_client()?;
    let params = resolution_params();

    let base = client.router_base_asset(params.router).await?;
    assert_eq!(base, WMATIC);
    Ok(())
}

#[tokio::test]
async fn test_resolve_polygon_configs() -> eyre::Result<()> {
    let client = read_only_client()?;
    let params = resolution_params();
    let tokens = polygon_tokens();

    let configs = create_configs(&client, &params, &tokens).await?;
    assert_eq!(configs.len(), tokens.len());

    // WMATIC is priced from its USDC pair, in which WMATIC is `token0`
    let wmatic = &configs[0];
    assert_eq!(wmatic.price_source, PriceSource::Uniswap);
    assert_eq!(wmatic.uniswap_market, WMATIC_USDC_PAIR);
    assert_eq!(wmatic.twap_period, U256::from(params.default_twap_period));
    assert!(!wmatic.is_uniswap_reversed);
    assert!(!wmatic.is_pair_with_stablecoin);
    assert_eq!(wmatic.base_unit, U256::from(10u64).pow(U256::from(18u64)));

    // USDC has a fixed price and six decimals
    let usdc = &configs[1];
    assert_eq!(usdc.price_source, PriceSource::FixedUsd);
    assert_eq!(usdc.base_unit, U256::from(1_000_000u64));
    assert_eq!(usdc.uniswap_market, Address::ZERO);

    // The remaining tokens are priced by a poster
    assert!(configs[2..].iter().all(|c| c.price_source == PriceSource::Poster));
    Ok(())
}

#[tokio::test]
async fn test_factory_lookup_matches_known_pair() -> eyre::Result<()> {
    let client = read_only_client()?;
    let params = resolution_params();

    let input = TokenConfigInput {
        underlying: USDC,
        price_source: Some(PriceSource::Uniswap.to_string()),
        ..Default::default()
    };
    let configs = create_configs(&client, &params, &[input]).await?;

    // WMATIC sorts before USDC, so USDC is `token1` and the pair is reversed
    assert_eq!(configs[0].uniswap_market, WMATIC_USDC_PAIR);
    assert!(configs[0].is_uniswap_reversed);
    assert!(!configs[0].is_pair_with_stablecoin);
    Ok(())
}
