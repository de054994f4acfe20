//! Groups configurations used by the oracle scripts

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::missing_docs_in_private_items)]

mod cli;
mod network;
mod parsing;
mod validation;

pub use cli::{Cli, Command, ScriptConfig};
pub use network::NetworkConfig;
pub use parsing::{
    default_network_config_path, parse_command_line_args, parse_config_from_args,
    parse_network_config_from_file,
};
pub use validation::validate_network_config;
