//! Command line scripts that deploy, configure and operate a price oracle

#![deny(missing_docs)]
#![deny(clippy::missing_docs_in_private_items)]
#![deny(unsafe_code)]
#![deny(clippy::needless_pass_by_ref_mut)]

mod commands;

use config::parse_command_line_args;
use eyre::{Result, eyre};
use tracing::error;
use util::telemetry::setup_compact_logger;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Parse CLI & config
    let config = parse_command_line_args().map_err(|e| eyre!(e))?;
    setup_compact_logger(config.log_level);

    if let Err(e) = commands::run(config).await {
        error!("{e:#}");
        return Err(e);
    }

    Ok(())
}
