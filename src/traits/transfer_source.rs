use async_trait::async_trait;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;

use crate::models::transfer::TransferEvent;

/// Stream of `Transfer` events from the watched contract
#[async_trait]
pub trait TransferSource: Send + Sync {
    /// Subscribe and forward every decoded transfer into `sender`.
    ///
    /// The returned task finishes when the subscription ends. Dropping the
    /// sender at that point closes the consumer side.
    async fn start(&self, sender: UnboundedSender<TransferEvent>) -> anyhow::Result<JoinHandle<()>>;
}
