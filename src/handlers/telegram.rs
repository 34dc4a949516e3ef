use alloy::primitives::Address;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tracing::{info, warn};

use crate::models::burn::BurnReport;
use crate::telegram_notifier::TelegramNotifier;
use crate::traits::event_handler::BurnEventHandler;

/// Format the start/stop message posted when lifecycle notifications are on
pub fn format_lifecycle_message(
    title: &str,
    timestamp: DateTime<Utc>,
    contract_address: &Address,
    burn_address: &Address,
) -> String {
    format!(
        "{}\n\n\
         ⏰ *Time:* {} UTC\n\
         📜 *Contract:* `{}`\n\
         🗑 *Burn Address:* `{}`",
        title,
        timestamp.format("%Y-%m-%d %H:%M:%S"),
        contract_address,
        burn_address
    )
}

/// Posts the burn animation with the report caption
pub struct TelegramEventHandler {
    notifier: TelegramNotifier,
}

impl TelegramEventHandler {
    /// Create a new Telegram event handler
    pub fn new(notifier: TelegramNotifier) -> Self {
        Self { notifier }
    }
}

#[async_trait]
impl BurnEventHandler for TelegramEventHandler {
    async fn handle_burn(&self, report: &BurnReport) {
        match self.notifier.send_animation(&report.format_caption()).await {
            Ok(()) => info!(chat_id = %self.notifier.chat_id(), "Sent burn alert"),
            Err(e) => warn!(error = %e, "Failed to send GIF"),
        }
    }

    // Errors stay in the logs; the channel only gets burn alerts.
    async fn handle_error(&self, _error: &anyhow::Error) {}
}
