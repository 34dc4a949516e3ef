//! Burn detection and supply reporting

pub mod burn_tracker;

pub use burn_tracker::BurnTracker;
