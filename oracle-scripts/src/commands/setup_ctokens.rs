//! Registers the underlyings of cTokens the oracle does not yet know

use alloy_primitives::Address;
use config::NetworkConfig;
use eyre::Result;
use oracle_client::{OracleClient, errors::OracleClientError};
use tracing::info;

/// Register the underlying of every declared cToken the oracle has no
/// underlying for
pub(super) async fn run(client: &OracleClient, network_config: &NetworkConfig) -> Result<()> {
    info!("Found {} cToken configs", network_config.ctokens.len());

    let mut ctokens = Vec::new();
    let mut underlyings = Vec::new();
    for ctoken in network_config.ctokens.iter().copied() {
        if client.underlying_for_ctoken(ctoken).await? != Address::ZERO {
            continue;
        }

        ctokens.push(ctoken);
        underlyings.push(client.ctoken_underlying(ctoken).await?);
    }

    if ctokens.len() != underlyings.len() {
        return Err(OracleClientError::LengthMismatch(ctokens.len(), underlyings.len()).into());
    }

    if ctokens.is_empty() {
        info!("No cToken configs found to be added");
        return Ok(());
    }

    info!("Setting the underlying of {} cTokens", ctokens.len());
    let receipt = client.set_underlying_for_ctokens(&ctokens, &underlyings).await?;
    info!("cToken configs set in tx: {:#x}", receipt.transaction_hash);

    Ok(())
}
