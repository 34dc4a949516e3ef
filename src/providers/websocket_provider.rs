//! `Transfer` log subscription over a WebSocket RPC endpoint.

use alloy::eips::BlockNumberOrTag;
use alloy::primitives::Address;
use alloy::providers::{DynProvider, Provider, ProviderBuilder, WsConnect};
use alloy::rpc::types::{Filter, Log};
use alloy::sol_types::SolEvent;
use async_trait::async_trait;
use futures_util::stream::StreamExt;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tracing::{debug, error, info, warn};

use crate::models::transfer::TransferEvent;
use crate::providers::abi::IERC20;
use crate::traits::transfer_source::TransferSource;

/// Connect to a WebSocket RPC node.
///
/// The returned provider is shared by the log subscription and the
/// contract reads, so the process holds a single connection.
pub async fn connect_ws(url: &str) -> anyhow::Result<DynProvider> {
  let provider = ProviderBuilder::new()
    .connect_ws(WsConnect::new(url))
    .await
    .map_err(|e| anyhow::anyhow!("Failed to connect to WebSocket {}: {}", url, e))?;

  Ok(provider.erased())
}

/// Decode a raw log into a transfer event
pub fn decode_transfer(log: &Log) -> anyhow::Result<TransferEvent> {
  let decoded = log.log_decode::<IERC20::Transfer>()?;
  let transfer = decoded.inner.data;

  Ok(TransferEvent {
    from: transfer.from,
    to: transfer.to,
    value: transfer.value,
    block_number: log.block_number,
    transaction_hash: log.transaction_hash,
  })
}

pub struct WebSocketTransferSource {
  provider: DynProvider,
  contract_address: Address,
}

impl WebSocketTransferSource {
  pub fn new(provider: DynProvider, contract_address: Address) -> Self {
    Self { provider, contract_address }
  }

  /// Filter selecting `Transfer` logs of the watched contract from the
  /// latest block onwards
  pub fn transfer_filter(&self) -> Filter {
    Filter::new()
      .address(self.contract_address)
      .event_signature(IERC20::Transfer::SIGNATURE_HASH)
      .from_block(BlockNumberOrTag::Latest)
  }
}

#[async_trait]
impl TransferSource for WebSocketTransferSource {
  async fn start(
    &self,
    sender: UnboundedSender<TransferEvent>,
  ) -> anyhow::Result<JoinHandle<()>> {
    let filter = self.transfer_filter();
    let subscription = self.provider.subscribe_logs(&filter).await?;
    let mut stream = subscription.into_stream();

    info!(contract = %self.contract_address, "subscribed to Transfer events");

    let handle = tokio::spawn(async move {
      while let Some(log) = stream.next().await {
        match decode_transfer(&log) {
          Ok(event) => {
            debug!(
              from = %event.from,
              to = %event.to,
              value = %event.value,
              block = ?event.block_number,
              "transfer received"
            );
            if sender.send(event).is_err() {
              warn!("transfer consumer dropped, stopping subscription");
              return;
            }
          }
          Err(e) => {
            warn!(error = %e, "failed to decode Transfer log");
          }
        }
      }

      // No reconnect: the stream is gone for good.
      error!("Transfer subscription ended");
    });

    Ok(handle)
  }
}
