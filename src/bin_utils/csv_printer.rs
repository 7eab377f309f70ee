use std::io::Write;

use crate::purchase::AccountId;
use csv::Writer;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct Outcome {
    pub account: Option<AccountId>,
    pub amount: u64,
    pub seats: u64,
}

pub fn print_outcome<W>(output: &mut W, outcome: Outcome) -> anyhow::Result<()>
where
    W: Write,
{
    let mut writer = Writer::from_writer(output);
    if let Err(err) = writer.serialize(outcome) {
        anyhow::bail!("Failed to write to CSV: {err}")
    }
    // Ensure all data is flushed to the output
    if let Err(err) = writer.flush() {
        anyhow::bail!("Failed to flush CSV writer: {err}")
    }
    Ok(())
}
