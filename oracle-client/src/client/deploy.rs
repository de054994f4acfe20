//! Deployment of the oracle contract

use alloy::{network::TransactionBuilder, providers::Provider, rpc::types::TransactionRequest};
use alloy_primitives::{Address, BlockNumber, Bytes, TxHash, U256};
use alloy_sol_types::SolValue;
use constants::TX_RECEIPT_TIMEOUT;
use tracing::{info, instrument};

use super::OracleClient;
use crate::{errors::OracleClientError, helpers::parse_artifact_bytecode};

/// A freshly mined oracle deployment
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OracleDeployment {
    /// The address of the deployed oracle
    pub address: Address,
    /// The hash of the deployment transaction
    pub tx_hash: TxHash,
    /// The block the deployment transaction was mined in
    pub block_number: BlockNumber,
}

/// Build the creation code of the oracle: the contract bytecode followed by
/// the abi-encoded constructor arguments `(baseAsset, basePriceUnit)`
pub fn oracle_creation_code(bytecode: &Bytes, base_asset: Address, base_price_unit: U256) -> Bytes {
    let ctor_args = (base_asset, base_price_unit).abi_encode_params();
    let mut code = bytecode.to_vec();
    code.extend_from_slice(&ctor_args);
    code.into()
}

/// The block at which a transaction mined in `mined_at` has the given number
/// of confirmations, counting the inclusion block as the first
pub fn confirmation_block(mined_at: BlockNumber, confirmations: u64) -> BlockNumber {
    mined_at.saturating_add(confirmations.saturating_sub(1))
}

impl OracleClient {
    /// Deploy the oracle contract from a compiled artifact's JSON, returning
    /// as soon as the deployment transaction is mined
    ///
    /// On success the client is pointed at the new deployment
    #[instrument(skip_all, err, fields(base_asset = %base_asset))]
    pub async fn deploy_oracle(
        &mut self,
        artifact: &str,
        base_asset: Address,
        base_price_unit: U256,
    ) -> Result<OracleDeployment, OracleClientError> {
        let from = self.signer_address()?;
        let bytecode = parse_artifact_bytecode(artifact)?;
        let code = oracle_creation_code(&bytecode, base_asset, base_price_unit);

        let tx = TransactionRequest::default().with_from(from).with_deploy_code(code);
        let pending_tx = self
            .provider()
            .send_transaction(tx)
            .await
            .map_err(OracleClientError::deployment)?;

        info!("Oracle deployment tx hash: {:#x}", pending_tx.tx_hash());
        let receipt = pending_tx
            .with_timeout(Some(TX_RECEIPT_TIMEOUT))
            .get_receipt()
            .await
            .map_err(OracleClientError::deployment)?;

        if !receipt.status() {
            let error_msg =
                format!("deployment tx ({:#x}) failed with status 0", receipt.transaction_hash);
            return Err(OracleClientError::deployment(error_msg));
        }

        let address = receipt
            .contract_address
            .ok_or_else(|| OracleClientError::deployment("receipt has no contract address"))?;
        let block_number = receipt
            .block_number
            .ok_or_else(|| OracleClientError::deployment("receipt has no block number"))?;
        info!("Oracle deployed at {address:#x} in block {block_number}");

        self.set_oracle(address);
        Ok(OracleDeployment { address, tx_hash: receipt.transaction_hash, block_number })
    }

    /// Wait until a transaction mined in the given block has the requested
    /// number of confirmations
    ///
    /// No timeout is applied, the wait lasts as long as the chain takes to
    /// produce the blocks
    #[instrument(skip(self), err)]
    pub async fn wait_for_confirmations(
        &self,
        mined_at: BlockNumber,
        confirmations: u64,
    ) -> Result<(), OracleClientError> {
        let target = confirmation_block(mined_at, confirmations);
        loop {
            let current = self.block_number().await?;
            if current >= target {
                info!("Reached {confirmations} confirmations at block {current}");
                return Ok(());
            }

            // Sleep and poll again
            tokio::time::sleep(self.block_polling_interval).await;
        }
    }
}

#[cfg(test)]
mod test {
    use std::time::Duration;

    use alloy_primitives::address;

    use super::*;
    use crate::OracleClientConfig;

    #[test]
    fn test_creation_code_appends_ctor_args() {
        let bytecode = Bytes::from(vec![0x60, 0x80]);
        let base_asset = address!("0x0d500B1d8E8eF31E21C99d1Db9A6444d3ADf1270");
        let unit = U256::from(10u64).pow(U256::from(18u64));

        let code = oracle_creation_code(&bytecode, base_asset, unit);
        assert_eq!(code.len(), 2 + 64);
        assert_eq!(&code[..2], &[0x60, 0x80]);

        // Each argument occupies a full word
        assert_eq!(&code[2 + 12..2 + 32], base_asset.as_slice());
        assert_eq!(U256::from_be_slice(&code[2 + 32..]), unit);
    }

    #[test]
    fn test_confirmation_block_counts_inclusion_block() {
        assert_eq!(confirmation_block(100, 1), 100);
        assert_eq!(confirmation_block(100, 15), 114);

        // Zero confirmations are satisfied by the inclusion block itself
        assert_eq!(confirmation_block(100, 0), 100);
        assert_eq!(confirmation_block(u64::MAX, 3), u64::MAX);
    }

    #[tokio::test]
    async fn test_deploy_requires_signer() {
        let config = OracleClientConfig {
            rpc_url: "http://localhost:8545".to_string(),
            private_key: None,
            block_polling_interval: Duration::from_millis(10),
        };
        let mut client = OracleClient::new(config).unwrap();

        let err = client.deploy_oracle("{}", Address::ZERO, U256::from(1u64)).await.unwrap_err();
        assert!(matches!(err, OracleClientError::SignerRequired));
        assert!(client.oracle().is_err());
    }
}
