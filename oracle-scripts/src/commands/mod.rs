//! The commands the scripts run, one per module

mod deploy;
mod setup_configs;
mod setup_ctokens;
mod update_prices;
mod view;

use config::{Command, ScriptConfig};
use constants::ORACLE_CONTRACT_KEY;
use eyre::Result;
use oracle_client::{OracleClient, OracleClientConfig};
use tracing::info;
use util::on_chain::parse_addr_from_deployments_file;

/// Run the configured command to completion
pub async fn run(config: ScriptConfig) -> Result<()> {
    let client = OracleClient::new(OracleClientConfig {
        rpc_url: config.rpc_url.clone(),
        private_key: config.private_key.clone(),
        block_polling_interval: config.block_polling_interval,
    })?;

    let network_config = &config.network_config;
    match &config.command {
        Command::Deploy { artifact, confirmations } => {
            deploy::run(client, &config, artifact, *confirmations).await
        },
        Command::SetupConfigs => {
            let client = attach_oracle(client, &config)?;
            setup_configs::run(&client, network_config).await
        },
        Command::SetupCtokens => {
            let client = attach_oracle(client, &config)?;
            setup_ctokens::run(&client, network_config).await
        },
        Command::UpdatePrices => {
            let client = attach_oracle(client, &config)?;
            update_prices::run(&client, network_config).await
        },
        Command::View => {
            let client = attach_oracle(client, &config)?;
            view::run(&client, network_config).await
        },
    }
}

/// Point the client at the latest oracle deployment on the network
fn attach_oracle(client: OracleClient, config: &ScriptConfig) -> Result<OracleClient> {
    let oracle_addr =
        parse_addr_from_deployments_file(&config.deployments_path, ORACLE_CONTRACT_KEY)?;
    info!("Using oracle at {oracle_addr:#x} on {}", config.network);

    Ok(client.with_oracle(oracle_addr))
}
