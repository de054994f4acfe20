//! Possible errors thrown by the oracle client

use alloy_primitives::Address;
use alloy_sol_types::Error as SolError;

/// The error type returned by the oracle client interface
#[derive(Clone, Debug, thiserror::Error)]
pub enum OracleClientError {
    /// Error thrown when the oracle client configuration fails
    #[error("oracle client configuration error: {0}")]
    Config(#[from] OracleClientConfigError),
    /// Error thrown when a contract call fails
    #[error("contract interaction error: {0}")]
    ContractInteraction(String),
    /// Error thrown when a contract deployment fails
    #[error("deployment error: {0}")]
    Deployment(String),
    /// An error interacting with an erc20 or cToken contract
    #[error("ERC20 error: {0}")]
    Erc20(String),
    /// Error thrown when two batch arguments differ in length
    #[error("length mismatch: {0} != {1}")]
    LengthMismatch(usize, usize),
    /// Error thrown when an oracle method is called before an oracle address
    /// has been set on the client
    #[error("no oracle address configured")]
    OracleNotConfigured,
    /// An error interacting with the lower level rpc client
    #[error("RPC error: {0}")]
    Rpc(String),
    /// Error thrown when serializing/deserializing calldata/retdata
    #[error("serialization error: {0}")]
    Serde(String),
    /// Error thrown when a transaction is attempted without a signer
    #[error("a private key is required to send transactions")]
    SignerRequired,
    /// An error interacting with a Uniswap v2 router, factory or pair
    #[error("uniswap error: {0}")]
    Uniswap(String),
}

impl OracleClientError {
    /// Create a new contract interaction error
    #[allow(clippy::needless_pass_by_value)]
    pub fn contract_interaction<T: ToString>(msg: T) -> Self {
        Self::ContractInteraction(msg.to_string())
    }

    /// Create a new deployment error
    #[allow(clippy::needless_pass_by_value)]
    pub fn deployment<T: ToString>(msg: T) -> Self {
        Self::Deployment(msg.to_string())
    }

    /// Create a new erc20 error
    #[allow(clippy::needless_pass_by_value)]
    pub fn erc20<T: ToString>(msg: T) -> Self {
        Self::Erc20(msg.to_string())
    }

    /// Create a new RPC error
    #[allow(clippy::needless_pass_by_value)]
    pub fn rpc<T: ToString>(msg: T) -> Self {
        Self::Rpc(msg.to_string())
    }

    /// Create a new serialization error
    #[allow(clippy::needless_pass_by_value)]
    pub fn serde<T: ToString>(msg: T) -> Self {
        Self::Serde(msg.to_string())
    }

    /// Create a new uniswap error
    #[allow(clippy::needless_pass_by_value)]
    pub fn uniswap<T: ToString>(msg: T) -> Self {
        Self::Uniswap(msg.to_string())
    }
}

impl From<SolError> for OracleClientError {
    fn from(e: SolError) -> Self {
        Self::serde(e)
    }
}

/// The error type returned by the oracle client configuration interface
#[derive(Clone, Debug, thiserror::Error)]
pub enum OracleClientConfigError {
    /// Error thrown when the RPC client fails to initialize
    #[error("RPC client initialization error: {0}")]
    RpcClientInitialization(String),
    /// Error thrown when a contract artifact can't be parsed
    #[error("artifact parsing error: {0}")]
    ArtifactParsing(String),
}

/// Errors raised while resolving the on-chain configuration of a token
///
/// Every variant that concerns a single token names that token's address
#[derive(Clone, Debug, thiserror::Error)]
pub enum ConfigResolutionError {
    /// The token has no price source selector
    #[error("priceSource not specified for {0}")]
    MissingPriceSource(Address),
    /// The token's price source selector is not one of the known values
    #[error("invalid priceSource for {0}")]
    InvalidPriceSource(Address),
    /// The token is priced by an external oracle but no oracle was given
    #[error("externalOracle not provided for {0}")]
    MissingExternalOracle(Address),
    /// No Uniswap pair exists between the token and the base asset
    #[error("pair not found for {0}")]
    PairNotFound(Address),
    /// The token reports more decimals than a `uint256` base unit can hold
    #[error("unsupported decimals ({decimals}) for {token}")]
    UnsupportedDecimals {
        /// The token
        token: Address,
        /// The decimals reported by the token
        decimals: u8,
    },
    /// The router does not implement `WETH()` and no fallback accessor is
    /// configured
    #[error("router {router} has no WETH() accessor and no fallback is configured: {cause}")]
    MissingBaseAssetAccessor {
        /// The router address
        router: Address,
        /// The error returned by the `WETH()` call
        cause: String,
    },
    /// A lower level client error
    #[error(transparent)]
    Client(#[from] OracleClientError),
}
