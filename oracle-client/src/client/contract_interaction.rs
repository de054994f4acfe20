//! Defines `OracleClient` helpers that allow for interacting with the oracle
//! contract

use alloy::rpc::types::TransactionReceipt;
use alloy_primitives::{Address, U256};
use itertools::Itertools;
use tracing::{info, instrument};

use super::OracleClient;
use crate::{conversion::to_contract_token_config, errors::OracleClientError, types::TokenConfig};

impl OracleClient {
    // -----------
    // | GETTERS |
    // -----------

    /// Check whether the oracle holds a configuration for the given underlying
    #[instrument(skip_all, err, fields(underlying = %underlying))]
    pub async fn config_exists(&self, underlying: Address) -> Result<bool, OracleClientError> {
        self.oracle()?
            .configExists(underlying)
            .call()
            .await
            .map_err(OracleClientError::contract_interaction)
    }

    /// Get the underlying asset the oracle has registered for a cToken
    ///
    /// Returns the zero address if the cToken is not registered
    #[instrument(skip_all, err, fields(ctoken = %ctoken))]
    pub async fn underlying_for_ctoken(
        &self,
        ctoken: Address,
    ) -> Result<Address, OracleClientError> {
        self.oracle()?
            .underlyings(ctoken)
            .call()
            .await
            .map_err(OracleClientError::contract_interaction)
    }

    /// Get the last price the oracle stored for an underlying
    #[instrument(skip_all, err, fields(underlying = %underlying))]
    pub async fn price(&self, underlying: Address) -> Result<U256, OracleClientError> {
        self.oracle()?
            .price(underlying)
            .call()
            .await
            .map_err(OracleClientError::contract_interaction)
    }

    /// Get the number of tokens configured in the oracle
    #[instrument(skip_all, err)]
    pub async fn num_tokens(&self) -> Result<U256, OracleClientError> {
        self.oracle()?.numTokens().call().await.map_err(OracleClientError::contract_interaction)
    }

    // -----------
    // | SETTERS |
    // -----------

    /// Register price configurations for a batch of underlyings
    ///
    /// Submitted with a gas limit padded above the node's estimate
    #[instrument(skip_all, err, fields(num_tokens = underlyings.len()))]
    pub async fn set_configs(
        &self,
        underlyings: &[Address],
        configs: &[TokenConfig],
    ) -> Result<TransactionReceipt, OracleClientError> {
        if underlyings.len() != configs.len() {
            return Err(OracleClientError::LengthMismatch(underlyings.len(), configs.len()));
        }

        let contract_configs = configs.iter().map(to_contract_token_config).collect_vec();
        let oracle = self.oracle()?;
        let call = oracle._setConfigs(underlyings.to_vec(), contract_configs);
        let receipt = self.send_tx_with_gas_margin(call).await?;

        info!("`_setConfigs` tx hash: {:#x}", receipt.transaction_hash);
        Ok(receipt)
    }

    /// Register the underlying asset of each cToken in a batch
    #[instrument(skip_all, err, fields(num_ctokens = ctokens.len()))]
    pub async fn set_underlying_for_ctokens(
        &self,
        ctokens: &[Address],
        underlyings: &[Address],
    ) -> Result<TransactionReceipt, OracleClientError> {
        if ctokens.len() != underlyings.len() {
            return Err(OracleClientError::LengthMismatch(ctokens.len(), underlyings.len()));
        }

        let oracle = self.oracle()?;
        let call = oracle._setUnderlyingForCTokens(ctokens.to_vec(), underlyings.to_vec());
        let receipt = self.send_tx(call).await?;

        info!("`_setUnderlyingForCTokens` tx hash: {:#x}", receipt.transaction_hash);
        Ok(receipt)
    }

    /// Refresh the stored prices of a batch of underlyings
    ///
    /// Submitted with a gas limit padded above the node's estimate
    #[instrument(skip_all, err, fields(num_tokens = underlyings.len()))]
    pub async fn update_prices(
        &self,
        underlyings: &[Address],
    ) -> Result<TransactionReceipt, OracleClientError> {
        let oracle = self.oracle()?;
        let call = oracle.updatePrices(underlyings.to_vec());
        let receipt = self.send_tx_with_gas_margin(call).await?;

        info!("`updatePrices` tx hash: {:#x}", receipt.transaction_hash);
        Ok(receipt)
    }
}
