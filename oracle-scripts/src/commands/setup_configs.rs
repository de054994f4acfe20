//! Registers the configs of tokens the oracle does not yet price

use alloy_primitives::Address;
use config::NetworkConfig;
use eyre::Result;
use oracle_client::{OracleClient, create_configs, types::TokenConfig};
use tracing::info;

/// Resolve every declared token config and register those the oracle does
/// not already hold
pub(super) async fn run(client: &OracleClient, network_config: &NetworkConfig) -> Result<()> {
    info!("Found {} token configs", network_config.token_configs.len());

    let params = network_config.resolution_params();
    let configs = create_configs(client, &params, &network_config.token_configs).await?;

    let underlyings = network_config.underlyings();
    let mut exists = Vec::with_capacity(underlyings.len());
    for underlying in underlyings.iter() {
        exists.push(client.config_exists(*underlying).await?);
    }

    let (new_underlyings, new_configs) = select_unconfigured(&underlyings, configs, &exists);
    if new_underlyings.is_empty() {
        info!("No configs found to be added");
        return Ok(());
    }

    info!("Setting {} token configs", new_underlyings.len());
    let receipt = client.set_configs(&new_underlyings, &new_configs).await?;
    info!("Configs set in tx: {:#x}", receipt.transaction_hash);

    Ok(())
}

/// Keep the tokens whose configs do not already exist on the oracle, in order
fn select_unconfigured(
    underlyings: &[Address],
    configs: Vec<TokenConfig>,
    exists: &[bool],
) -> (Vec<Address>, Vec<TokenConfig>) {
    underlyings
        .iter()
        .copied()
        .zip(configs)
        .zip(exists)
        .filter(|(_, exists)| !**exists)
        .map(|(token, _)| token)
        .unzip()
}

#[cfg(test)]
mod test {
    use alloy_primitives::{U256, address};
    use oracle_client::types::PriceSource;

    use super::*;

    #[test]
    fn test_select_unconfigured() {
        let tokens = [
            address!("0x0000000000000000000000000000000000000001"),
            address!("0x0000000000000000000000000000000000000002"),
            address!("0x0000000000000000000000000000000000000003"),
        ];
        let configs = vec![
            TokenConfig::new(U256::from(1u64), PriceSource::FixedUsd),
            TokenConfig::new(U256::from(2u64), PriceSource::Poster),
            TokenConfig::new(U256::from(3u64), PriceSource::Poster),
        ];

        let (underlyings, selected) =
            select_unconfigured(&tokens, configs.clone(), &[false, true, false]);
        assert_eq!(underlyings, vec![tokens[0], tokens[2]]);
        assert_eq!(selected, vec![configs[0].clone(), configs[2].clone()]);
    }

    #[test]
    fn test_select_unconfigured_all_existing() {
        let tokens = [address!("0x0000000000000000000000000000000000000001")];
        let configs = vec![TokenConfig::new(U256::from(1u64), PriceSource::FixedUsd)];

        let (underlyings, selected) = select_unconfigured(&tokens, configs, &[true]);
        assert!(underlyings.is_empty());
        assert!(selected.is_empty());
    }
}
