use async_trait::async_trait;

use crate::models::burn::BurnReport;

/// Handler for burn events
#[async_trait]
pub trait BurnEventHandler: Send + Sync {
    /// Handle a computed burn report
    async fn handle_burn(&self, report: &BurnReport);

    /// Handle an error raised while processing a burn
    async fn handle_error(&self, error: &anyhow::Error);
}
