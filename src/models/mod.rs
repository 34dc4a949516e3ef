//! Data models for the burn tracker

pub mod burn;
pub mod transfer;

// Re-export for convenience
pub use burn::BurnReport;
pub use transfer::TransferEvent;
