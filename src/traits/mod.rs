//! Core traits for the burn tracker

pub mod supply_provider;
pub mod transfer_source;
pub mod event_handler;

// Re-export for convenience
pub use supply_provider::TokenSupplyProvider;
pub use transfer_source::TransferSource;
pub use event_handler::BurnEventHandler;
