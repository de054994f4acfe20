//! Trait definitions for the read-only chain access used in config resolution

use alloy_primitives::Address;
use async_trait::async_trait;

use crate::errors::OracleClientError;

/// The `ChainReader` trait defines the contract reads needed to resolve a
/// token's oracle configuration
#[async_trait]
pub trait ChainReader: Send + Sync {
    /// Get the number of decimals of an erc20 token
    async fn token_decimals(&self, token: Address) -> Result<u8, OracleClientError>;

    /// Get the base asset of a router via its `WETH()` getter
    async fn router_base_asset(&self, router: Address) -> Result<Address, OracleClientError>;

    /// Get the base asset of a router via a getter with the given name
    ///
    /// Routers deployed on non-Ethereum chains often rename `WETH()` after
    /// the chain's wrapped native token, e.g. `WAVAX()`
    async fn router_base_asset_by_name(
        &self,
        router: Address,
        accessor: &str,
    ) -> Result<Address, OracleClientError>;

    /// Get the factory of a router
    async fn router_factory(&self, router: Address) -> Result<Address, OracleClientError>;

    /// Get the pair of two tokens from a factory, or the zero address if no
    /// such pair exists
    async fn factory_pair(
        &self,
        factory: Address,
        token_a: Address,
        token_b: Address,
    ) -> Result<Address, OracleClientError>;

    /// Get the `(token0, token1)` constituents of a pair
    async fn pair_tokens(&self, pair: Address) -> Result<(Address, Address), OracleClientError>;
}
