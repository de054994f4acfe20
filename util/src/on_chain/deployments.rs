//! Helpers for the per-network deployments file
//!
//! A deployments file maps a contract name to the ordered list of addresses at
//! which that contract has been deployed, e.g.
//!
//! ```json
//! {
//!   "Oracle": ["0x...", "0x..."]
//! }
//! ```
//!
//! Only the most recent entry for a contract is ever used

use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

use alloy::primitives::Address;
use eyre::{Result, WrapErr, eyre};
use serde::{Deserialize, Serialize};

/// The file extension of a deployments file
const DEPLOYMENTS_FILE_EXTENSION: &str = "json";

/// Get the path of the deployments file for a given network
pub fn deployments_file_path<P: AsRef<Path>>(dir: P, network: &str) -> PathBuf {
    dir.as_ref().join(format!("{network}.{DEPLOYMENTS_FILE_EXTENSION}"))
}

/// Parse the most recently deployed address of a contract from a deployments
/// file
pub fn parse_addr_from_deployments_file<P: AsRef<Path>>(
    file_path: P,
    contract_key: &str,
) -> Result<Address> {
    Deployments::load(file_path)?.latest(contract_key)
}

/// The contents of a deployments file
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Deployments {
    /// The historical deployments of each contract, oldest first
    contracts: BTreeMap<String, Vec<Address>>,
}

impl Deployments {
    /// Read a deployments file, failing if it does not exist
    pub fn load<P: AsRef<Path>>(file_path: P) -> Result<Self> {
        let path = file_path.as_ref();
        let contents = fs::read_to_string(path)
            .wrap_err_with(|| format!("could not read deployments file {}", path.display()))?;

        serde_json::from_str(&contents)
            .wrap_err_with(|| format!("could not parse deployments file {}", path.display()))
    }

    /// Read a deployments file, returning an empty set of deployments if the
    /// file does not exist yet
    pub fn load_or_default<P: AsRef<Path>>(file_path: P) -> Result<Self> {
        if !file_path.as_ref().exists() {
            return Ok(Self::default());
        }

        Self::load(file_path)
    }

    /// Write the deployments back to the given file, creating its parent
    /// directory if necessary
    pub fn save<P: AsRef<Path>>(&self, file_path: P) -> Result<()> {
        let path = file_path.as_ref();
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let serialized = serde_json::to_string_pretty(self)?;
        fs::write(path, serialized)
            .wrap_err_with(|| format!("could not write deployments file {}", path.display()))
    }

    /// Get the most recent deployment of the given contract
    pub fn latest(&self, contract_key: &str) -> Result<Address> {
        self.contracts
            .get(contract_key)
            .and_then(|addrs| addrs.last())
            .copied()
            .ok_or_else(|| eyre!("no {contract_key} deployment found in deployments file"))
    }

    /// Record a new deployment of the given contract
    pub fn record(&mut self, contract_key: &str, addr: Address) {
        self.contracts.entry(contract_key.to_string()).or_default().push(addr);
    }
}
