//! The per-network configuration of the oracle: the base asset, the Uniswap
//! router, and the tokens and cTokens to register

use alloy_primitives::{Address, U256};
use oracle_client::types::{ResolutionParams, TokenConfigInput};
use serde::{Deserialize, Serialize};
use util::on_chain::base_unit;

/// A network's oracle configuration, as read from its TOML config file
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkConfig {
    /// The base asset prices are quoted against, the chain's wrapped native
    /// token
    pub base_asset: Address,
    /// The name of the router's base asset getter, used when the router does
    /// not implement `WETH()`
    #[serde(default)]
    pub base_asset_accessor: Option<String>,
    /// The Uniswap v2 router pairs are looked up through
    pub uniswap_v2_router: Address,
    /// The number of decimals of the prices the oracle reports
    pub base_price_decimals: u8,
    /// The TWAP period of Uniswap-priced tokens that do not set their own, in
    /// seconds
    pub default_twap_period: u64,
    /// The declared configs of the tokens the oracle prices
    #[serde(default)]
    pub token_configs: Vec<TokenConfigInput>,
    /// The cTokens whose underlyings are registered with the oracle
    #[serde(default)]
    pub ctokens: Vec<Address>,
}

impl NetworkConfig {
    /// The parameters used to resolve the network's token configs
    pub fn resolution_params(&self) -> ResolutionParams {
        ResolutionParams {
            router: self.uniswap_v2_router,
            base_asset_accessor: self.base_asset_accessor.clone(),
            default_twap_period: self.default_twap_period,
        }
    }

    /// The underlying addresses of the declared tokens, in declaration order
    pub fn underlyings(&self) -> Vec<Address> {
        self.token_configs.iter().map(|t| t.underlying).collect()
    }

    /// The oracle's base price unit, `10^base_price_decimals`
    pub fn base_price_unit(&self) -> Result<U256, String> {
        base_unit(self.base_price_decimals)
    }
}

