//! Reads of the token and Uniswap contracts an oracle configuration refers to

use alloy::{
    network::TransactionBuilder, providers::Provider, rpc::types::TransactionRequest,
};
use alloy_primitives::Address;
use alloy_sol_types::SolValue;
use async_trait::async_trait;

use super::OracleClient;
use crate::{
    abi::{ICErc20, IERC20, IUniswapV2Factory, IUniswapV2Pair, IUniswapV2Router},
    errors::OracleClientError,
    helpers::zero_arg_selector,
    traits::ChainReader,
};

impl OracleClient {
    // ---------
    // | ERC20 |
    // ---------

    /// Get the symbol of an erc20 token
    pub async fn token_symbol(&self, token: Address) -> Result<String, OracleClientError> {
        let erc20 = IERC20::new(token, self.provider());
        erc20.symbol().call().await.map_err(OracleClientError::erc20)
    }

    /// Get the underlying asset of a cToken from the cToken itself
    pub async fn ctoken_underlying(&self, ctoken: Address) -> Result<Address, OracleClientError> {
        let ctoken = ICErc20::new(ctoken, self.provider());
        ctoken.underlying().call().await.map_err(OracleClientError::erc20)
    }

    // -----------
    // | Uniswap |
    // -----------

    /// Call a zero-argument getter returning an address on the given contract
    ///
    /// Used for router accessors whose name is only known at runtime
    async fn call_address_getter(
        &self,
        contract: Address,
        getter: &str,
    ) -> Result<Address, OracleClientError> {
        let calldata = zero_arg_selector(getter);
        let tx = TransactionRequest::default().with_to(contract).with_input(calldata.to_vec());

        let retdata = self.provider().call(tx).await.map_err(OracleClientError::uniswap)?;
        let addr = Address::abi_decode(&retdata)?;
        Ok(addr)
    }
}

#[async_trait]
impl ChainReader for OracleClient {
    async fn token_decimals(&self, token: Address) -> Result<u8, OracleClientError> {
        let erc20 = IERC20::new(token, self.provider());
        erc20.decimals().call().await.map_err(OracleClientError::erc20)
    }

    async fn router_base_asset(&self, router: Address) -> Result<Address, OracleClientError> {
        let router = IUniswapV2Router::new(router, self.provider());
        router.WETH().call().await.map_err(OracleClientError::uniswap)
    }

    async fn router_base_asset_by_name(
        &self,
        router: Address,
        accessor: &str,
    ) -> Result<Address, OracleClientError> {
        self.call_address_getter(router, accessor).await
    }

    async fn router_factory(&self, router: Address) -> Result<Address, OracleClientError> {
        let router = IUniswapV2Router::new(router, self.provider());
        router.factory().call().await.map_err(OracleClientError::uniswap)
    }

    async fn factory_pair(
        &self,
        factory: Address,
        token_a: Address,
        token_b: Address,
    ) -> Result<Address, OracleClientError> {
        let factory = IUniswapV2Factory::new(factory, self.provider());
        factory.getPair(token_a, token_b).call().await.map_err(OracleClientError::uniswap)
    }

    async fn pair_tokens(&self, pair: Address) -> Result<(Address, Address), OracleClientError> {
        let pair = IUniswapV2Pair::new(pair, self.provider());
        let token0 = pair.token0().call().await.map_err(OracleClientError::uniswap)?;
        let token1 = pair.token1().call().await.map_err(OracleClientError::uniswap)?;
        Ok((token0, token1))
    }
}
