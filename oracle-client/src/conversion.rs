//! Conversion from client types to their contract counterparts

use crate::{abi::IOracle, types::TokenConfig};

/// Convert a resolved token config into the contract's `TokenConfig` struct
pub fn to_contract_token_config(config: &TokenConfig) -> IOracle::TokenConfig {
    IOracle::TokenConfig {
        baseUnit: config.base_unit,
        twapPeriod: config.twap_period,
        priceSource: config.price_source.as_u8(),
        uniswapMarket: config.uniswap_market,
        isUniswapReversed: config.is_uniswap_reversed,
        isPairWithStablecoin: config.is_pair_with_stablecoin,
        externalOracle: config.external_oracle,
    }
}

#[cfg(test)]
mod test {
    use alloy_primitives::{U256, address};

    use super::*;
    use crate::types::PriceSource;

    #[test]
    fn test_token_config_conversion() {
        let market = address!("0x6e7a5FAFcec6BB1e78bAE2A1F0B612012BF14827");
        let base_unit = U256::from(10u64).pow(U256::from(18u64));
        let mut config = TokenConfig::new(base_unit, PriceSource::Uniswap);
        config.twap_period = U256::from(3600u64);
        config.uniswap_market = market;
        config.is_uniswap_reversed = true;

        let converted = to_contract_token_config(&config);
        assert_eq!(converted.baseUnit, config.base_unit);
        assert_eq!(converted.twapPeriod, U256::from(3600u64));
        assert_eq!(converted.priceSource, 1);
        assert_eq!(converted.uniswapMarket, market);
        assert!(converted.isUniswapReversed);
        assert!(!converted.isPairWithStablecoin);
        assert_eq!(converted.externalOracle, alloy_primitives::Address::ZERO);
    }
}
