use tracing::info;

use crate::{
    gateway::{PaymentCharger, SeatReserver},
    purchase::AccountId,
};

/// Stand-in payment gateway for local runs, it only logs the charge.
#[derive(Debug, Default)]
pub struct LoggingPaymentCharger;

impl PaymentCharger for LoggingPaymentCharger {
    fn charge(&self, account_id: AccountId, amount: u64) -> anyhow::Result<()> {
        info!(account_id, amount, "Payment charged");
        Ok(())
    }
}

/// Stand-in seat booking for local runs, it only logs the reservation.
#[derive(Debug, Default)]
pub struct LoggingSeatReserver;

impl SeatReserver for LoggingSeatReserver {
    fn reserve(&self, account_id: AccountId, seats: u64) -> anyhow::Result<()> {
        info!(account_id, seats, "Seats reserved");
        Ok(())
    }
}
