use tracing::{debug, info, warn};

use crate::{
    gateway::{PaymentCharger, SeatReserver},
    purchase::{AccountId, PurchaseCommand, PurchaseOutcome},
    ticket::TicketRequest,
};

use super::{PurchaseError, TicketService};

pub struct GatewayTicketService<P, S> {
    payment: P,
    reservation: S,
}

impl<P, S> GatewayTicketService<P, S>
where
    P: PaymentCharger,
    S: SeatReserver,
{
    pub fn new(payment: P, reservation: S) -> Self {
        Self {
            payment,
            reservation,
        }
    }
}

impl<P, S> TicketService for GatewayTicketService<P, S>
where
    P: PaymentCharger,
    S: SeatReserver,
{
    fn purchase_tickets(
        &self,
        account_id: Option<AccountId>,
        requests: &[Option<TicketRequest>],
    ) -> Result<PurchaseOutcome, PurchaseError> {
        let cmd = PurchaseCommand::parse(account_id, requests).inspect_err(|err| {
            warn!(?account_id, %err, "Purchase rejected");
        })?;
        debug!(account_id = cmd.account_id(), counts = ?cmd.counts(), "Purchase validated");

        let outcome = cmd.outcome();
        // payment goes first, seats are never reserved for an unpaid purchase
        self.payment
            .charge(cmd.account_id(), outcome.total_amount)
            .map_err(PurchaseError::Payment)?;
        self.reservation
            .reserve(cmd.account_id(), outcome.total_seats)
            .map_err(PurchaseError::Reservation)?;

        info!(
            account_id = cmd.account_id(),
            amount = outcome.total_amount,
            seats = outcome.total_seats,
            "Tickets purchased"
        );
        Ok(outcome)
    }
}
