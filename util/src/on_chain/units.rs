//! Conversions between human readable decimal amounts and their on-chain
//! integer representation

use alloy::primitives::{
    U256,
    utils::{format_units, parse_units},
};

use crate::raw_err_str;

/// Convert a decimal string into its integer representation at the given
/// number of decimals
///
/// e.g. `num_to_wei("1.5", 6) == 1_500_000`
pub fn num_to_wei(num: &str, decimals: u8) -> Result<U256, String> {
    let parsed = parse_units(num, decimals)
        .map_err(raw_err_str!("could not parse {num} at {decimals} decimals: {}"))?;
    Ok(parsed.get_absolute())
}

/// Convert an integer amount at the given number of decimals into a decimal
/// string
pub fn wei_to_num(amount: U256, decimals: u8) -> Result<String, String> {
    format_units(amount, decimals)
        .map_err(raw_err_str!("could not format {amount} at {decimals} decimals: {}"))
}

/// The smallest-unit scaling factor of a token with the given decimals, i.e.
/// `10^decimals`
pub fn base_unit(decimals: u8) -> Result<U256, String> {
    num_to_wei("1", decimals)
}
