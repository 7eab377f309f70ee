use std::fs::File;

use anyhow::{Context, Result};
use cinema_tickets::bin_utils::Service;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let mut args = std::env::args().skip(1);
    let account_id = args
        .next()
        .context("Expected an account id as the first argument")?;
    let filename = args
        .next()
        .context("Expected a file name as the second argument")?;
    let file = File::open(&filename).with_context(|| format!("Failed to open `{filename}`"))?;

    let service = Service {
        // a malformed id is treated as missing and rejected by the purchase
        account_id: account_id.parse().ok(),
        input: file,
        output: &mut std::io::stdout(),
    };
    service.run()?;
    Ok(())
}
