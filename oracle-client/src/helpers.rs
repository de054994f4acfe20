//! Various helpers for oracle client execution

use alloy_primitives::{Bytes, Selector, keccak256};
use constants::{GAS_LIMIT_MARGIN_DENOMINATOR, GAS_LIMIT_MARGIN_NUMERATOR};
use serde_json::Value;

use crate::errors::OracleClientConfigError;

/// Pad a gas estimate by the configured safety margin, rounding up
pub fn pad_gas_estimate(estimate: u64) -> u64 {
    estimate.saturating_mul(GAS_LIMIT_MARGIN_NUMERATOR).div_ceil(GAS_LIMIT_MARGIN_DENOMINATOR)
}

/// Compute the selector of a zero-argument function with the given name
pub fn zero_arg_selector(name: &str) -> Selector {
    let signature = format!("{name}()");
    Selector::from_slice(&keccak256(signature.as_bytes())[..4])
}

/// Parse the creation bytecode from a compiled contract artifact
///
/// Both hardhat artifacts (`"bytecode": "0x..."`) and foundry artifacts
/// (`"bytecode": { "object": "0x..." }`) are supported
pub fn parse_artifact_bytecode(artifact: &str) -> Result<Bytes, OracleClientConfigError> {
    let parsed: Value = serde_json::from_str(artifact)
        .map_err(|e| OracleClientConfigError::ArtifactParsing(e.to_string()))?;

    let bytecode = match &parsed["bytecode"] {
        Value::String(code) => code.as_str(),
        Value::Object(obj) => obj.get("object").and_then(Value::as_str).unwrap_or_default(),
        _ => "",
    };

    let code = bytecode.strip_prefix("0x").unwrap_or(bytecode);
    if code.is_empty() {
        return Err(OracleClientConfigError::ArtifactParsing(
            "artifact contains no creation bytecode".to_string(),
        ));
    }

    code.parse::<Bytes>().map_err(|e| OracleClientConfigError::ArtifactParsing(e.to_string()))
}
