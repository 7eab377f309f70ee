/// Ticket categories with their prices and seat rules.
pub mod ticket;

/// Validation of a whole purchase request and the resulting totals.
/// A request is parsed into a [`purchase::PurchaseCommand`] only when every rule holds.
pub mod purchase;

/// Interfaces of the external payment and seat reservation systems.
pub mod gateway;

/// Ticket service interface, plus implementation backed by [`gateway`].
/// Coordinates purchase validation and the calls to external systems.
pub mod service;

/// Ideally, this module should exist in its own crate, as a way to
/// bootstrap core logic. However, I want to use it for integration test
/// so I put it here.
pub mod bin_utils;
