//! This module could be a separate crate on its own, to bootstrap [`crate`] within binary
//! but for simplicity purposes, I include this module directly in the library.

use std::io::{Read, Write};

use crate::{
    purchase::{AccountId, PurchaseOutcome},
    service::{TicketService, gateway_ticket_service::GatewayTicketService},
};
use anyhow::{Context, Result};
use csv_parser::CsvTicketRequestParser;
use csv_printer::{Outcome, print_outcome};
use logging_gateway::{LoggingPaymentCharger, LoggingSeatReserver};
pub mod csv_parser;
pub mod csv_printer;
pub mod logging_gateway;

pub struct Service<'w, R, W: 'w> {
    pub account_id: Option<AccountId>,
    pub input: R,
    pub output: &'w mut W,
}

impl<'w, R, W> Service<'w, R, W>
where
    R: Read,
    W: Write + 'w,
{
    pub fn run(self) -> Result<PurchaseOutcome> {
        let mut requests = Vec::new();
        for (line, row) in CsvTicketRequestParser::new(self.input) {
            let request = row.with_context(|| format!("Invalid ticket request at line {line}"))?;
            requests.push(Some(request));
        }

        let service = GatewayTicketService::new(LoggingPaymentCharger, LoggingSeatReserver);
        let outcome = service
            .purchase_tickets(self.account_id, &requests)
            .context("Purchase rejected")?;

        print_outcome(
            self.output,
            Outcome {
                account: self.account_id,
                amount: outcome.total_amount,
                seats: outcome.total_seats,
            },
        )?;
        Ok(outcome)
    }
}
