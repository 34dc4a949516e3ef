use std::sync::Arc;

use alloy::primitives::{Address, U256};
use tokio::sync::mpsc::UnboundedReceiver;
use tracing::{debug, error, info, warn};

use crate::models::{burn::BurnReport, transfer::TransferEvent};
use crate::traits::{event_handler::BurnEventHandler, supply_provider::TokenSupplyProvider};
use crate::utils::helper::{to_decimal_string, to_token_amount};

/// Watches transfers for burns and reports the updated supply
pub struct BurnTracker {
    burn_address: Address,
    token_decimals: u8,
    supply_provider: Arc<dyn TokenSupplyProvider>,
    event_handler: Arc<dyn BurnEventHandler>,
}

impl BurnTracker {
    /// Create a new burn tracker
    pub fn new(
        burn_address: Address,
        token_decimals: u8,
        supply_provider: Arc<dyn TokenSupplyProvider>,
        event_handler: Arc<dyn BurnEventHandler>,
    ) -> Self {
        Self {
            burn_address,
            token_decimals,
            supply_provider,
            event_handler,
        }
    }

    /// Check whether a transfer is a burn
    pub fn is_burn(&self, event: &TransferEvent) -> bool {
        event.is_to(&self.burn_address)
    }

    /// Balance held at the burn address; errors count as zero
    async fn fetch_burnt_tokens(&self) -> U256 {
        match self.supply_provider.balance_of(self.burn_address).await {
            Ok(balance) => balance,
            Err(e) => {
                error!(error = %e, "Error fetching burnt tokens");
                U256::ZERO
            }
        }
    }

    /// Fetch supply figures and compute the report for a burn
    pub async fn build_report(&self, event: &TransferEvent) -> anyhow::Result<BurnReport> {
        let burned_amount = to_decimal_string(event.value, self.token_decimals)?;

        let total_supply = self.supply_provider.total_supply().await?;
        let burnt_tokens = self.fetch_burnt_tokens().await;

        let report = BurnReport::new(
            burned_amount,
            to_token_amount(total_supply, self.token_decimals)?,
            to_token_amount(burnt_tokens, self.token_decimals)?,
        )
        .with_transaction_hash(event.transaction_hash);

        Ok(report)
    }

    /// Handle a single transfer to completion
    pub async fn process_transfer(&self, event: TransferEvent) {
        if !self.is_burn(&event) {
            debug!(to = %event.to, "ignoring non-burn transfer");
            return;
        }

        info!(
            from = %event.from,
            value = %event.value,
            block = ?event.block_number,
            "burn transfer detected"
        );

        match self.build_report(&event).await {
            Ok(report) => self.event_handler.handle_burn(&report).await,
            Err(e) => {
                warn!(error = %e, "failed to build burn report");
                self.event_handler.handle_error(&e).await;
            }
        }
    }

    /// Consume transfers one at a time until the channel closes
    pub async fn run(&self, mut receiver: UnboundedReceiver<TransferEvent>) {
        info!(burn_address = %self.burn_address, "🔥 Listening for burn transactions...");

        while let Some(event) = receiver.recv().await {
            self.process_transfer(event).await;
        }

        warn!("transfer stream closed, burn tracker stopping");
    }
}
