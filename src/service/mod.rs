use thiserror::Error;

use crate::{
    purchase::{AccountId, InvalidPurchase, PurchaseOutcome},
    ticket::TicketRequest,
};

pub mod gateway_ticket_service;

#[derive(Debug, Error)]
pub enum PurchaseError {
    #[error(transparent)]
    Invalid(#[from] InvalidPurchase),
    #[error(transparent)]
    Payment(anyhow::Error),
    #[error(transparent)]
    Reservation(anyhow::Error),
}

pub trait TicketService {
    fn purchase_tickets(
        &self,
        account_id: Option<AccountId>,
        requests: &[Option<TicketRequest>],
    ) -> Result<PurchaseOutcome, PurchaseError>;
}
