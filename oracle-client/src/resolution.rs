//! Resolution of declared token configs into the configs submitted to the
//! oracle contract

use alloy_primitives::{Address, U256};
use tracing::{debug, instrument};
use util::on_chain::base_unit;

use crate::{
    errors::ConfigResolutionError,
    traits::ChainReader,
    types::{PriceSource, ResolutionParams, TokenConfig, TokenConfigInput},
};

/// Resolve the configs of all the given tokens, in order
///
/// Resolution stops at the first token that fails
pub async fn create_configs<R: ChainReader>(
    reader: &R,
    params: &ResolutionParams,
    tokens: &[TokenConfigInput],
) -> Result<Vec<TokenConfig>, ConfigResolutionError> {
    let mut configs = Vec::with_capacity(tokens.len());
    for token in tokens {
        configs.push(create_config(reader, params, token).await?);
    }

    Ok(configs)
}

/// Resolve the config of a single token
#[instrument(skip_all, err, fields(underlying = %token.underlying))]
pub async fn create_config<R: ChainReader>(
    reader: &R,
    params: &ResolutionParams,
    token: &TokenConfigInput,
) -> Result<TokenConfig, ConfigResolutionError> {
    let underlying = token.underlying;
    let decimals = reader.token_decimals(underlying).await?;
    let base_unit = base_unit(decimals)
        .map_err(|_| ConfigResolutionError::UnsupportedDecimals { token: underlying, decimals })?;

    let selector = token
        .price_source
        .as_deref()
        .filter(|s| !s.is_empty())
        .ok_or(ConfigResolutionError::MissingPriceSource(underlying))?;
    let price_source: PriceSource =
        selector.parse().map_err(|_| ConfigResolutionError::InvalidPriceSource(underlying))?;

    let mut config = TokenConfig::new(base_unit, price_source);
    match price_source {
        PriceSource::FixedUsd | PriceSource::Poster => {},
        PriceSource::Uniswap => resolve_uniswap_market(reader, params, token, &mut config).await?,
        PriceSource::ExternalOracle => {
            config.external_oracle = token
                .external_oracle
                .ok_or(ConfigResolutionError::MissingExternalOracle(underlying))?;
        },
    }

    debug!("resolved {price_source} config for {underlying}");
    Ok(config)
}

/// Fill in the Uniswap specific fields of a token config
async fn resolve_uniswap_market<R: ChainReader>(
    reader: &R,
    params: &ResolutionParams,
    token: &TokenConfigInput,
    config: &mut TokenConfig,
) -> Result<(), ConfigResolutionError> {
    let underlying = token.underlying;
    let twap_period = token.twap_period.unwrap_or(params.default_twap_period);
    config.twap_period = U256::from(twap_period);

    let base_asset = resolve_base_asset(reader, params).await?;
    let market = match token.uniswap_market {
        Some(market) => market,
        None => {
            let factory = reader.router_factory(params.router).await?;
            let pair = reader.factory_pair(factory, base_asset, underlying).await?;
            if pair == Address::ZERO {
                return Err(ConfigResolutionError::PairNotFound(underlying));
            }

            pair
        },
    };
    config.uniswap_market = market;

    let (token0, token1) = reader.pair_tokens(market).await?;
    config.is_uniswap_reversed = token1 == underlying;
    config.is_pair_with_stablecoin = base_asset != token0 && base_asset != token1;

    Ok(())
}

/// Get the router's base asset, falling back to the configured accessor when
/// the router does not implement `WETH()`
async fn resolve_base_asset<R: ChainReader>(
    reader: &R,
    params: &ResolutionParams,
) -> Result<Address, ConfigResolutionError> {
    let err = match reader.router_base_asset(params.router).await {
        Ok(base_asset) => return Ok(base_asset),
        Err(e) => e,
    };

    let accessor = params.base_asset_accessor.as_deref().ok_or_else(|| {
        ConfigResolutionError::MissingBaseAssetAccessor {
            router: params.router,
            cause: err.to_string(),
        }
    })?;

    debug!("`WETH()` failed on router {}, trying `{accessor}()`", params.router);
    let base_asset = reader.router_base_asset_by_name(params.router, accessor).await?;
    Ok(base_asset)
}

#[cfg(test)]
mod test {
    use std::collections::HashMap;

    use alloy_primitives::address;
    use async_trait::async_trait;

    use super::*;
    use crate::errors::OracleClientError;

    // -----------
    // | Fixture |
    // -----------

    /// The router used in tests
    const ROUTER: Address = address!("0xa5E0829CaCEd8fFDD4De3c43696c57F7D7A678ff");
    /// The factory used in tests
    const FACTORY: Address = address!("0x5757371414417b8C6CAad45bAeF941aBc7d3Ab32");
    /// The base asset used in tests
    const BASE: Address = address!("0x0d500B1d8E8eF31E21C99d1Db9A6444d3ADf1270");
    /// A stablecoin used in tests
    const USDC: Address = address!("0x2791Bca1f2de4661ED88A30C99A7a9449Aa84174");
    /// A token priced against the base asset in tests
    const TOKEN: Address = address!("0xf2bB8cD51A4bdcf33f3a77E4cdCAbaAFcfa9ad5A");
    /// A pair used in tests
    const PAIR: Address = address!("0x6e7a5FAFcec6BB1e78bAE2A1F0B612012BF14827");
    /// A pair quoting the test token against a stablecoin
    const STABLE_PAIR: Address = address!("0x0000000000000000000000000000000000005ab1");
    /// An external oracle used in tests
    const EXTERNAL_ORACLE: Address = address!("0xAB594600376Ec9fD91F8e885dADF0CE036862dE0");

    /// An in-memory chain used to drive config resolution
    #[derive(Default)]
    struct MockChain {
        /// The decimals of each token
        decimals: HashMap<Address, u8>,
        /// The router's `WETH()` value, `None` if the getter is not implemented
        weth: Option<Address>,
        /// Named base asset getters on the router
        named_getters: HashMap<String, Address>,
        /// Pairs known to the factory, keyed by unordered token pair
        pairs: HashMap<(Address, Address), Address>,
        /// The constituents of each pair
        pair_tokens: HashMap<Address, (Address, Address)>,
    }

    impl MockChain {
        /// A chain with a router, a factory, and a few tokens
        fn new() -> Self {
            let decimals = HashMap::from([(BASE, 18), (USDC, 6), (TOKEN, 18)]);
            Self { decimals, weth: Some(BASE), ..Default::default() }
        }

        /// Register a pair with the given token ordering
        fn with_pair(mut self, pair: Address, token0: Address, token1: Address) -> Self {
            self.pairs.insert(sort_tokens(token0, token1), pair);
            self.pair_tokens.insert(pair, (token0, token1));
            self
        }
    }

    /// Sort a pair of tokens the way a Uniswap factory does
    fn sort_tokens(a: Address, b: Address) -> (Address, Address) {
        if a < b { (a, b) } else { (b, a) }
    }

    #[async_trait]
    impl ChainReader for MockChain {
        async fn token_decimals(&self, token: Address) -> Result<u8, OracleClientError> {
            self.decimals.get(&token).copied().ok_or_else(|| OracleClientError::erc20("reverted"))
        }

        async fn router_base_asset(&self, router: Address) -> Result<Address, OracleClientError> {
            assert_eq!(router, ROUTER);
            self.weth.ok_or_else(|| OracleClientError::uniswap("execution reverted"))
        }

        async fn router_base_asset_by_name(
            &self,
            router: Address,
            accessor: &str,
        ) -> Result<Address, OracleClientError> {
            assert_eq!(router, ROUTER);
            self.named_getters
                .get(accessor)
                .copied()
                .ok_or_else(|| OracleClientError::uniswap("execution reverted"))
        }

        async fn router_factory(&self, router: Address) -> Result<Address, OracleClientError> {
            assert_eq!(router, ROUTER);
            Ok(FACTORY)
        }

        async fn factory_pair(
            &self,
            factory: Address,
            token_a: Address,
            token_b: Address,
        ) -> Result<Address, OracleClientError> {
            assert_eq!(factory, FACTORY);
            let key = sort_tokens(token_a, token_b);
            Ok(self.pairs.get(&key).copied().unwrap_or(Address::ZERO))
        }

        async fn pair_tokens(
            &self,
            pair: Address,
        ) -> Result<(Address, Address), OracleClientError> {
            self.pair_tokens
                .get(&pair)
                .copied()
                .ok_or_else(|| OracleClientError::uniswap("no code"))
        }
    }

    /// The resolution params used in tests
    fn params() -> ResolutionParams {
        ResolutionParams { router: ROUTER, base_asset_accessor: None, default_twap_period: 3600 }
    }

    /// A token declaration with the given selector
    fn token(underlying: Address, selector: &str) -> TokenConfigInput {
        TokenConfigInput {
            underlying,
            price_source: Some(selector.to_string()),
            ..Default::default()
        }
    }

    // ---------
    // | Tests |
    // ---------

    #[tokio::test]
    async fn test_fixed_usd_config() {
        let chain = MockChain::new();
        let config = create_config(&chain, &params(), &token(USDC, "0")).await.unwrap();

        assert_eq!(config.price_source, PriceSource::FixedUsd);
        assert_eq!(config.base_unit, U256::from(1_000_000u64));
        assert_eq!(config.twap_period, U256::ZERO);
        assert_eq!(config.uniswap_market, Address::ZERO);
        assert_eq!(config.external_oracle, Address::ZERO);
        assert!(!config.is_uniswap_reversed);
        assert!(!config.is_pair_with_stablecoin);
    }

    #[tokio::test]
    async fn test_poster_config() {
        let chain = MockChain::new();
        let config = create_config(&chain, &params(), &token(TOKEN, "3")).await.unwrap();

        assert_eq!(config, TokenConfig::new(base_unit(18).unwrap(), PriceSource::Poster));
    }

    #[tokio::test]
    async fn test_external_oracle_missing_address() {
        let chain = MockChain::new();
        let err = create_config(&chain, &params(), &token(TOKEN, "2")).await.unwrap_err();

        assert!(matches!(err, ConfigResolutionError::MissingExternalOracle(t) if t == TOKEN));
        assert!(err.to_string().contains(&TOKEN.to_string()));
    }

    #[tokio::test]
    async fn test_external_oracle_config() {
        let chain = MockChain::new();
        let mut input = token(TOKEN, "2");
        input.external_oracle = Some(EXTERNAL_ORACLE);

        let config = create_config(&chain, &params(), &input).await.unwrap();
        assert_eq!(config.external_oracle, EXTERNAL_ORACLE);
        assert_eq!(config.uniswap_market, Address::ZERO);
    }

    #[tokio::test]
    async fn test_uniswap_explicit_market() {
        let chain = MockChain::new().with_pair(PAIR, TOKEN, BASE);
        let mut input = token(TOKEN, "1");
        input.uniswap_market = Some(PAIR);

        let config = create_config(&chain, &params(), &input).await.unwrap();
        assert_eq!(config.uniswap_market, PAIR);
        assert_eq!(config.twap_period, U256::from(3600u64));
        assert!(!config.is_uniswap_reversed);
        assert!(!config.is_pair_with_stablecoin);
    }

    #[tokio::test]
    async fn test_uniswap_reversed_pair_from_factory() {
        let chain = MockChain::new().with_pair(PAIR, BASE, TOKEN);
        let mut input = token(TOKEN, "1");
        input.twap_period = Some(60);

        let config = create_config(&chain, &params(), &input).await.unwrap();
        assert_eq!(config.uniswap_market, PAIR);
        assert_eq!(config.twap_period, U256::from(60u64));
        assert!(config.is_uniswap_reversed);
        assert!(!config.is_pair_with_stablecoin);
    }

    #[tokio::test]
    async fn test_uniswap_stablecoin_pair() {
        let chain = MockChain::new().with_pair(STABLE_PAIR, TOKEN, USDC);
        let mut input = token(TOKEN, "1");
        input.uniswap_market = Some(STABLE_PAIR);

        let config = create_config(&chain, &params(), &input).await.unwrap();
        assert!(config.is_pair_with_stablecoin);
        assert!(!config.is_uniswap_reversed);
    }

    #[tokio::test]
    async fn test_uniswap_pair_not_found() {
        let chain = MockChain::new();
        let err = create_config(&chain, &params(), &token(TOKEN, "1")).await.unwrap_err();

        assert!(matches!(err, ConfigResolutionError::PairNotFound(t) if t == TOKEN));
        assert!(err.to_string().contains(&TOKEN.to_string()));
    }

    #[tokio::test]
    async fn test_uniswap_named_accessor_fallback() {
        let mut chain = MockChain::new().with_pair(PAIR, TOKEN, BASE);
        chain.weth = None;
        chain.named_getters.insert("WMATIC".to_string(), BASE);

        let mut params = params();
        params.base_asset_accessor = Some("WMATIC".to_string());

        let config = create_config(&chain, &params, &token(TOKEN, "1")).await.unwrap();
        assert_eq!(config.uniswap_market, PAIR);
        assert!(!config.is_pair_with_stablecoin);
    }

    #[tokio::test]
    async fn test_uniswap_no_fallback_configured() {
        let mut chain = MockChain::new().with_pair(PAIR, TOKEN, BASE);
        chain.weth = None;

        let err = create_config(&chain, &params(), &token(TOKEN, "1")).await.unwrap_err();
        assert!(matches!(
            err,
            ConfigResolutionError::MissingBaseAssetAccessor { router, .. } if router == ROUTER
        ));
    }

    #[tokio::test]
    async fn test_uniswap_failing_fallback_accessor() {
        let mut chain = MockChain::new().with_pair(PAIR, TOKEN, BASE);
        chain.weth = None;

        // The router implements neither `WETH()` nor the named getter
        let mut params = params();
        params.base_asset_accessor = Some("WAVAX".to_string());

        let err = create_config(&chain, &params, &token(TOKEN, "1")).await.unwrap_err();
        assert!(matches!(err, ConfigResolutionError::Client(OracleClientError::Uniswap(_))));
    }

    #[tokio::test]
    async fn test_invalid_price_source() {
        let chain = MockChain::new();
        let err = create_config(&chain, &params(), &token(TOKEN, "9")).await.unwrap_err();

        assert!(matches!(err, ConfigResolutionError::InvalidPriceSource(t) if t == TOKEN));
        assert!(err.to_string().contains(&TOKEN.to_string()));
    }

    #[tokio::test]
    async fn test_padded_price_source_is_invalid() {
        let chain = MockChain::new();
        let err = create_config(&chain, &params(), &token(TOKEN, " 1 ")).await.unwrap_err();

        assert!(matches!(err, ConfigResolutionError::InvalidPriceSource(t) if t == TOKEN));
    }

    #[tokio::test]
    async fn test_missing_price_source() {
        let chain = MockChain::new();
        let input = TokenConfigInput { underlying: TOKEN, ..Default::default() };
        let err = create_config(&chain, &params(), &input).await.unwrap_err();

        assert!(matches!(err, ConfigResolutionError::MissingPriceSource(t) if t == TOKEN));
    }

    #[tokio::test]
    async fn test_empty_price_source_is_missing() {
        let chain = MockChain::new();
        let err = create_config(&chain, &params(), &token(TOKEN, "")).await.unwrap_err();

        assert!(matches!(err, ConfigResolutionError::MissingPriceSource(t) if t == TOKEN));
    }

    #[tokio::test]
    async fn test_create_configs_preserves_order_and_stops_on_error() {
        let chain = MockChain::new().with_pair(PAIR, BASE, USDC);
        let mut base = token(BASE, "1");
        base.uniswap_market = Some(PAIR);
        let tokens = vec![base, token(USDC, "0"), token(TOKEN, "3")];

        let configs = create_configs(&chain, &params(), &tokens).await.unwrap();
        let sources: Vec<_> = configs.iter().map(|c| c.price_source).collect();
        assert_eq!(sources, vec![PriceSource::Uniswap, PriceSource::FixedUsd, PriceSource::Poster]);

        let bad = vec![token(USDC, "0"), token(TOKEN, "9"), token(BASE, "0")];
        let err = create_configs(&chain, &params(), &bad).await.unwrap_err();
        assert!(matches!(err, ConfigResolutionError::InvalidPriceSource(t) if t == TOKEN));
    }

    #[tokio::test]
    async fn test_unknown_token_propagates_client_error() {
        let chain = MockChain::new();
        let unknown = address!("0x0000000000000000000000000000000000000bad");
        let err = create_config(&chain, &params(), &token(unknown, "0")).await.unwrap_err();

        assert!(matches!(err, ConfigResolutionError::Client(OracleClientError::Erc20(_))));
    }
}
