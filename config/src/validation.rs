//! Config validation

use alloy_primitives::Address;
use constants::MAX_TOKEN_DECIMALS;

use crate::network::NetworkConfig;

/// Validate a parsed network config
pub fn validate_network_config(config: &NetworkConfig) -> Result<(), String> {
    if config.base_asset == Address::ZERO {
        return Err("`base_asset` must not be the zero address".to_string());
    }

    if config.uniswap_v2_router == Address::ZERO {
        return Err("`uniswap_v2_router` must not be the zero address".to_string());
    }

    if config.base_price_decimals > MAX_TOKEN_DECIMALS {
        return Err(format!("`base_price_decimals` must be at most {MAX_TOKEN_DECIMALS}"));
    }

    if config.default_twap_period == 0 {
        return Err("`default_twap_period` must be nonzero".to_string());
    }

    // The accessor is called by name, so it must be a valid solidity identifier
    if let Some(accessor) = &config.base_asset_accessor
        && !is_identifier(accessor)
    {
        return Err(format!("`base_asset_accessor` is not a valid identifier: {accessor}"));
    }

    Ok(())
}

/// Whether the given string is a valid solidity identifier
fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    let Some(first) = chars.next() else {
        return false;
    };

    let is_start = |c: char| c.is_ascii_alphabetic() || c == '_' || c == '$';
    is_start(first) && chars.all(|c| is_start(c) || c.is_ascii_digit())
}
