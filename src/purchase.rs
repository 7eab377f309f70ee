use thiserror::Error;

use crate::ticket::{TicketCategory, TicketRequest};

pub type AccountId = i64;

pub const MAX_TICKETS_PER_PURCHASE: u64 = 25;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InvalidPurchase {
    #[error("Account id is required")]
    AccountIdRequired,
    #[error("Account id must be greater than zero, got {account_id}")]
    NonPositiveAccountId { account_id: AccountId },
    #[error("At least one ticket request is required")]
    NoTicketRequests,
    #[error("Ticket request at position {index} is missing")]
    MissingTicketRequest { index: usize },
    #[error("Quantity is required for {category:?} tickets")]
    QuantityRequired { category: TicketCategory },
    #[error("Quantity must not be negative for {category:?} tickets, got {quantity}")]
    NegativeQuantity {
        category: TicketCategory,
        quantity: i64,
    },
    #[error("At least one adult ticket must be purchased")]
    AdultTicketRequired,
    #[error("Cannot purchase {total} tickets at once, the limit is {max}")]
    TooManyTickets { total: u64, max: u64 },
    #[error("{infants} infant tickets require at least as many adult tickets, got {adults}")]
    TooManyInfants { infants: u64, adults: u64 },
}

/// Ticket quantities accumulated per category.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TicketCounts {
    adults: u64,
    children: u64,
    infants: u64,
}

impl TicketCounts {
    pub fn add(&mut self, category: TicketCategory, quantity: u64) {
        let count = self.get_mut(category);
        // anything this large is rejected by the per-purchase limit anyway
        *count = count.saturating_add(quantity);
    }

    pub fn get(&self, category: TicketCategory) -> u64 {
        match category {
            TicketCategory::Adult => self.adults,
            TicketCategory::Child => self.children,
            TicketCategory::Infant => self.infants,
        }
    }

    fn get_mut(&mut self, category: TicketCategory) -> &mut u64 {
        match category {
            TicketCategory::Adult => &mut self.adults,
            TicketCategory::Child => &mut self.children,
            TicketCategory::Infant => &mut self.infants,
        }
    }

    pub fn total(&self) -> u64 {
        TicketCategory::ALL
            .iter()
            .fold(0u64, |acc, c| acc.saturating_add(self.get(*c)))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PurchaseOutcome {
    pub total_amount: u64,
    pub total_seats: u64,
}

/// Purchase that passed every business rule. Only created by [`PurchaseCommand::parse`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PurchaseCommand {
    account_id: AccountId,
    counts: TicketCounts,
}

impl PurchaseCommand {
    pub fn parse(
        account_id: Option<AccountId>,
        requests: &[Option<TicketRequest>],
    ) -> Result<Self, InvalidPurchase> {
        let account_id = Self::parse_account_id(account_id)?;
        let counts = Self::parse_requests(requests)?;

        let adults = counts.get(TicketCategory::Adult);
        if adults == 0 {
            return Err(InvalidPurchase::AdultTicketRequired);
        }
        let total = counts.total();
        if total > MAX_TICKETS_PER_PURCHASE {
            return Err(InvalidPurchase::TooManyTickets {
                total,
                max: MAX_TICKETS_PER_PURCHASE,
            });
        }
        let infants = counts.get(TicketCategory::Infant);
        if infants > adults {
            return Err(InvalidPurchase::TooManyInfants { infants, adults });
        }

        Ok(Self { account_id, counts })
    }

    fn parse_account_id(account_id: Option<AccountId>) -> Result<AccountId, InvalidPurchase> {
        let Some(account_id) = account_id else {
            return Err(InvalidPurchase::AccountIdRequired);
        };
        if account_id > 0 {
            Ok(account_id)
        } else {
            Err(InvalidPurchase::NonPositiveAccountId { account_id })
        }
    }

    fn parse_requests(requests: &[Option<TicketRequest>]) -> Result<TicketCounts, InvalidPurchase> {
        if requests.is_empty() {
            return Err(InvalidPurchase::NoTicketRequests);
        }
        let mut counts = TicketCounts::default();
        for (index, request) in requests.iter().enumerate() {
            let Some(TicketRequest { category, quantity }) = *request else {
                return Err(InvalidPurchase::MissingTicketRequest { index });
            };
            let Some(quantity) = quantity else {
                return Err(InvalidPurchase::QuantityRequired { category });
            };
            match u64::try_from(quantity) {
                Ok(quantity) => counts.add(category, quantity),
                Err(_) => return Err(InvalidPurchase::NegativeQuantity { category, quantity }),
            }
        }
        Ok(counts)
    }

    pub fn account_id(&self) -> AccountId {
        self.account_id
    }

    pub fn counts(&self) -> &TicketCounts {
        &self.counts
    }

    pub fn outcome(&self) -> PurchaseOutcome {
        TicketCategory::ALL.iter().fold(
            PurchaseOutcome {
                total_amount: 0,
                total_seats: 0,
            },
            |mut outcome, category| {
                let count = self.counts.get(*category);
                outcome.total_amount += count * category.price();
                if category.occupies_seat() {
                    outcome.total_seats += count;
                }
                outcome
            },
        )
    }
}
