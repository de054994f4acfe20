//! Types describing per-token oracle configuration, both as declared by an
//! operator and as resolved for submission on-chain

use std::{fmt::Display, str::FromStr};

use alloy_primitives::{Address, U256};
use serde::{Deserialize, Serialize};

// ----------------
// | Price Source |
// ----------------

/// The origin of a token's price in the oracle contract
///
/// The discriminants match the contract's `PriceSource` enum
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum PriceSource {
    /// A fixed price of one unit of the base price currency
    FixedUsd = 0,
    /// A time-weighted average price read from a Uniswap v2 pair
    Uniswap = 1,
    /// A price read from an external oracle contract
    ExternalOracle = 2,
    /// A price pushed to the oracle by a poster
    Poster = 3,
}

impl PriceSource {
    /// The discriminant of the price source as understood by the contract
    pub fn as_u8(self) -> u8 {
        self as u8
    }
}

impl Display for PriceSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_u8())
    }
}

impl FromStr for PriceSource {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "0" => Ok(PriceSource::FixedUsd),
            "1" => Ok(PriceSource::Uniswap),
            "2" => Ok(PriceSource::ExternalOracle),
            "3" => Ok(PriceSource::Poster),
            _ => Err(format!("invalid price source: {s}")),
        }
    }
}

// ----------------
// | Declarations |
// ----------------

/// A token's configuration as declared in a network config
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenConfigInput {
    /// The token's address
    pub underlying: Address,
    /// The raw price source selector, e.g. `"1"` for a Uniswap TWAP
    ///
    /// Kept unparsed so that missing and invalid selectors are reported
    /// against the token when its config is resolved
    #[serde(default)]
    pub price_source: Option<String>,
    /// An explicit Uniswap pair to price against, skipping the factory lookup
    #[serde(default)]
    pub uniswap_market: Option<Address>,
    /// The external oracle to price with, required for external oracle tokens
    #[serde(default)]
    pub external_oracle: Option<Address>,
    /// A TWAP period overriding the network default, in seconds
    #[serde(default)]
    pub twap_period: Option<u64>,
}

/// The network-level parameters used when resolving token configs
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolutionParams {
    /// The Uniswap v2 router used to find the base asset and factory
    pub router: Address,
    /// The name of the router's base asset getter, tried when `WETH()` fails
    pub base_asset_accessor: Option<String>,
    /// The TWAP period used when a token does not override it, in seconds
    pub default_twap_period: u64,
}

// ------------
// | Resolved |
// ------------

/// A token's fully resolved oracle configuration
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TokenConfig {
    /// The token's smallest-unit scaling factor, `10^decimals`
    pub base_unit: U256,
    /// The TWAP averaging period in seconds, zero unless Uniswap priced
    pub twap_period: U256,
    /// The source of the token's price
    pub price_source: PriceSource,
    /// The Uniswap pair the token is priced against
    pub uniswap_market: Address,
    /// Whether the token is `token1` of its pair
    pub is_uniswap_reversed: bool,
    /// Whether the pair quotes the token against a stablecoin rather than the
    /// base asset
    pub is_pair_with_stablecoin: bool,
    /// The external oracle the token is priced by
    pub external_oracle: Address,
}

impl TokenConfig {
    /// Construct a config with all source-specific fields zeroed
    pub fn new(base_unit: U256, price_source: PriceSource) -> Self {
        Self {
            base_unit,
            twap_period: U256::ZERO,
            price_source,
            uniswap_market: Address::ZERO,
            is_uniswap_reversed: false,
            is_pair_with_stablecoin: false,
            external_oracle: Address::ZERO,
        }
    }
}
