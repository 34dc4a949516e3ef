use async_trait::async_trait;
use tracing::{error, info};

use crate::models::burn::BurnReport;
use crate::traits::event_handler::BurnEventHandler;

/// Console logging event handler
pub struct ConsoleEventHandler;

impl ConsoleEventHandler {
    /// Create a new console event handler
    pub fn new() -> Self {
        Self
    }
}

impl Default for ConsoleEventHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BurnEventHandler for ConsoleEventHandler {
    async fn handle_burn(&self, report: &BurnReport) {
        info!("{}", "=".repeat(80));
        info!("🔥 BURN DETECTED");
        info!("{}", "-".repeat(80));
        info!("  Burned:             {} tokens", report.burned_amount);
        info!("  Total Supply:       {:.2}", report.total_supply);
        info!("  Burnt Till Now:     {:.2} ({}%)", report.burnt_tokens, report.percent_burnt_display());
        info!("  Circulating Supply: {}", report.circulating_supply_display());
        if let Some(hash) = &report.transaction_hash {
            info!("  Transaction:        {}", hash);
        }
        info!("{}", "=".repeat(80));
    }

    async fn handle_error(&self, error: &anyhow::Error) {
        error!("Burn tracker error: {:#}", error);
    }
}
