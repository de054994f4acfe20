//! Utils relating to on-chain interaction

pub mod deployments;
pub mod units;

pub use deployments::{Deployments, deployments_file_path, parse_addr_from_deployments_file};
pub use units::{base_unit, num_to_wei, wei_to_num};
