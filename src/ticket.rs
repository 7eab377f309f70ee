use serde::Deserialize;

#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TicketCategory {
    Adult,
    Child,
    Infant,
}

impl TicketCategory {
    pub const ALL: [TicketCategory; 3] = [Self::Adult, Self::Child, Self::Infant];

    pub fn price(self) -> u64 {
        match self {
            TicketCategory::Adult => 25,
            TicketCategory::Child => 15,
            // infants sit on an adult's lap
            TicketCategory::Infant => 0,
        }
    }

    pub fn occupies_seat(self) -> bool {
        match self {
            TicketCategory::Adult | TicketCategory::Child => true,
            TicketCategory::Infant => false,
        }
    }
}

/// Request for some quantity of tickets of a single category.
/// Quantity stays unchecked until the whole purchase is parsed.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
pub struct TicketRequest {
    #[serde(rename = "type")]
    pub category: TicketCategory,
    pub quantity: Option<i64>,
}

impl TicketRequest {
    pub fn new(category: TicketCategory, quantity: i64) -> Self {
        Self {
            category,
            quantity: Some(quantity),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prices_and_seats() {
        assert_eq!(TicketCategory::Adult.price(), 25);
        assert_eq!(TicketCategory::Child.price(), 15);
        assert_eq!(TicketCategory::Infant.price(), 0);

        assert!(TicketCategory::Adult.occupies_seat());
        assert!(TicketCategory::Child.occupies_seat());
        assert!(!TicketCategory::Infant.occupies_seat());
    }

    #[test]
    fn new_request_has_quantity() {
        let req = TicketRequest::new(TicketCategory::Child, 4);
        assert_eq!(req.category, TicketCategory::Child);
        assert_eq!(req.quantity, Some(4));
    }
}
