//! The definition of the oracle client, which holds the configuration
//! details, along with a lower-level handle for the oracle smart contract

use std::time::Duration;

use alloy::{
    contract::Error as ContractError,
    providers::{
        DynProvider, Provider, ProviderBuilder,
        fillers::{BlobGasFiller, ChainIdFiller, GasFiller},
    },
    rpc::types::TransactionReceipt,
    signers::local::PrivateKeySigner,
    transports::{TransportError, http::reqwest::Url},
};
use alloy_contract::{CallBuilder, CallDecoder};
use alloy_primitives::{Address, BlockNumber};
use constants::TX_RECEIPT_TIMEOUT;
use tracing::info;
use util::err_str;

use crate::{
    abi::IOracle::IOracleInstance,
    errors::{OracleClientConfigError, OracleClientError},
    helpers::pad_gas_estimate,
};

mod chain_reads;
mod contract_interaction;
mod deploy;

pub use deploy::OracleDeployment;

/// A type alias for the RPC client, which is an alloy provider stack that
/// optionally includes a signer derived from a raw private key, and connects to
/// the RPC endpoint over HTTP.
pub type OracleProvider = DynProvider;
/// An oracle call builder type
pub type OracleCallBuilder<'a, C> = CallBuilder<&'a DynProvider, C>;

/// A configuration struct for the oracle client, consists of an endpoint for
/// setting up an RPC client, and an optional private key for signing
/// transactions.
pub struct OracleClientConfig {
    /// HTTP-addressable RPC endpoint for the client to connect to
    pub rpc_url: String,
    /// The private key of the account to use for signing transactions
    ///
    /// Read-only usage of the client does not require a key
    pub private_key: Option<PrivateKeySigner>,
    /// The interval at which to poll for pending transactions
    pub block_polling_interval: Duration,
}

impl OracleClientConfig {
    /// Constructs an RPC client from the configuration, capable of signing
    /// transactions if a private key is configured
    fn get_provider(&self) -> Result<OracleProvider, OracleClientConfigError> {
        let url = Url::parse(&self.rpc_url)
            .map_err(err_str!(OracleClientConfigError::RpcClientInitialization))?;

        let provider = match self.private_key.clone() {
            Some(key) => DynProvider::new(
                ProviderBuilder::new()
                    .disable_recommended_fillers()
                    .with_simple_nonce_management()
                    .filler(ChainIdFiller::default())
                    .filler(GasFiller)
                    .filler(BlobGasFiller::default())
                    .wallet(key)
                    .connect_http(url),
            ),
            None => DynProvider::new(
                ProviderBuilder::new().disable_recommended_fillers().connect_http(url),
            ),
        };
        provider.client().set_poll_interval(self.block_polling_interval);

        Ok(provider)
    }
}

/// The oracle client, which provides a higher-level interface to the oracle
/// contract and the token and Uniswap contracts its configuration refers to
#[derive(Clone)]
pub struct OracleClient {
    /// The RPC provider
    provider: OracleProvider,
    /// The oracle contract instance, if an oracle address has been set
    oracle: Option<IOracleInstance<OracleProvider>>,
    /// The address of the signing account, if one is configured
    signer: Option<Address>,
    /// The interval at which to poll the chain while waiting on it
    block_polling_interval: Duration,
}

impl OracleClient {
    /// Constructs a new oracle client from the given configuration
    #[allow(clippy::needless_pass_by_value)]
    pub fn new(config: OracleClientConfig) -> Result<Self, OracleClientError> {
        let provider = config.get_provider()?;
        let signer = config.private_key.as_ref().map(PrivateKeySigner::address);
        let block_polling_interval = config.block_polling_interval;
        Ok(Self { provider, oracle: None, signer, block_polling_interval })
    }

    /// Point the client at a deployed oracle contract
    pub fn with_oracle(mut self, oracle_addr: Address) -> Self {
        self.set_oracle(oracle_addr);
        self
    }

    /// Set the oracle contract the client interacts with
    pub fn set_oracle(&mut self, oracle_addr: Address) {
        self.oracle = Some(IOracleInstance::new(oracle_addr, self.provider.clone()));
    }

    /// Get the oracle contract instance
    pub fn oracle(&self) -> Result<&IOracleInstance<OracleProvider>, OracleClientError> {
        self.oracle.as_ref().ok_or(OracleClientError::OracleNotConfigured)
    }

    /// Get a reference to the underlying RPC client
    pub fn provider(&self) -> &OracleProvider {
        &self.provider
    }

    /// Get the address of the signing account
    pub fn signer_address(&self) -> Result<Address, OracleClientError> {
        self.signer.ok_or(OracleClientError::SignerRequired)
    }

    /// Get the current block number
    pub async fn block_number(&self) -> Result<BlockNumber, OracleClientError> {
        self.provider().get_block_number().await.map_err(OracleClientError::rpc)
    }

    // ----------------
    // | Transactions |
    // ----------------

    /// Send a transaction with a gas limit padded above the node's estimate,
    /// and return the receipt
    pub(crate) async fn send_tx_with_gas_margin<'a, C>(
        &self,
        tx: OracleCallBuilder<'a, C>,
    ) -> Result<TransactionReceipt, OracleClientError>
    where
        C: CallDecoder + Send + Sync,
    {
        let estimate = tx.estimate_gas().await.map_err(Self::decode_contract_error)?;
        let gas_limit = pad_gas_estimate(estimate);
        info!("Estimated gas: {estimate}, submitting with limit: {gas_limit}");

        self.send_tx(tx.gas(gas_limit)).await
    }

    /// Send a transaction and return the receipt
    pub(crate) async fn send_tx<'a, C>(
        &self,
        tx: OracleCallBuilder<'a, C>,
    ) -> Result<TransactionReceipt, OracleClientError>
    where
        C: CallDecoder + Send + Sync,
    {
        self.signer_address()?;
        let pending_tx = tx.send().await.map_err(Self::decode_contract_error)?;

        info!("Pending tx hash: {:#x}", pending_tx.tx_hash());
        let receipt = pending_tx
            .with_timeout(Some(TX_RECEIPT_TIMEOUT))
            .get_receipt()
            .await
            .map_err(OracleClientError::contract_interaction)?;

        // Check for failure
        if !receipt.status() {
            let error_msg = format!("tx ({:#x}) failed with status 0", receipt.transaction_hash);
            return Err(OracleClientError::contract_interaction(error_msg));
        }

        Ok(receipt)
    }

    /// Convert a contract error into a client error, surfacing the node's
    /// revert message and data where present
    fn decode_contract_error(err: ContractError) -> OracleClientError {
        match err {
            ContractError::TransportError(TransportError::ErrorResp(err_payload)) => {
                let msg = err_payload.message;
                let data = err_payload.data.map(|d| d.to_string()).unwrap_or_default();
                OracleClientError::contract_interaction(format!("{msg} (data = {data})"))
            },
            e => OracleClientError::contract_interaction(e),
        }
    }
}
