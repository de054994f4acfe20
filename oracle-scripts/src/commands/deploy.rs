//! Deploys the oracle and records its address in the deployments file

use std::{fs, path::Path};

use alloy_primitives::Address;
use config::ScriptConfig;
use constants::ORACLE_CONTRACT_KEY;
use eyre::{Result, WrapErr, eyre};
use oracle_client::OracleClient;
use tracing::info;
use util::on_chain::Deployments;

/// Deploy the oracle from the given artifact, quoting prices against the
/// network's base asset
///
/// The address is written to the deployments file as soon as the deployment
/// is mined, before waiting for the remaining confirmations
pub(super) async fn run(
    mut client: OracleClient,
    config: &ScriptConfig,
    artifact: &Path,
    confirmations: u64,
) -> Result<()> {
    let deployer = client.signer_address()?;
    info!("Deployer: {deployer:#x}");

    let artifact_json = fs::read_to_string(artifact)
        .wrap_err_with(|| format!("could not read artifact {}", artifact.display()))?;
    let mut deployments = Deployments::load_or_default(&config.deployments_path)?;

    let network_config = &config.network_config;
    let base_price_unit = network_config.base_price_unit().map_err(|e| eyre!(e))?;
    let deployment = client
        .deploy_oracle(&artifact_json, network_config.base_asset, base_price_unit)
        .await?;

    record_deployment(&mut deployments, &config.deployments_path, deployment.address)?;
    info!(
        "{ORACLE_CONTRACT_KEY} deployed to {:#x}, recorded in {}",
        deployment.address,
        config.deployments_path.display()
    );

    info!("Waiting for {confirmations} confirmations");
    client.wait_for_confirmations(deployment.block_number, confirmations).await?;

    Ok(())
}

/// Append a new oracle address to the deployments and persist them
fn record_deployment(
    deployments: &mut Deployments,
    deployments_path: &Path,
    oracle_addr: Address,
) -> Result<()> {
    deployments.record(ORACLE_CONTRACT_KEY, oracle_addr);
    deployments.save(deployments_path)
}
