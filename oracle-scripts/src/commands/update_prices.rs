//! Refreshes the oracle's stored prices

use config::NetworkConfig;
use eyre::Result;
use oracle_client::OracleClient;
use tracing::info;

/// Update the prices of every declared token in a single transaction
pub(super) async fn run(client: &OracleClient, network_config: &NetworkConfig) -> Result<()> {
    let updater = client.signer_address()?;
    info!("Updater: {updater:#x}");

    let underlyings = network_config.underlyings();
    info!("Updating the prices of {} tokens", underlyings.len());
    let receipt = client.update_prices(&underlyings).await?;
    info!("Prices updated in tx: {:#x}", receipt.transaction_hash);

    Ok(())
}
