use std::sync::Arc;

use burn_tracker::handlers::format_lifecycle_message;
use burn_tracker::utils::redact_url;
use burn_tracker::{
  connect_ws, BurnBotConfig, BurnTracker, CompositeEventHandler,
  ConsoleEventHandler, RpcSupplyProvider, TelegramEventHandler,
  TelegramNotifier, TransferSource, WebSocketTransferSource,
};
use tokio::sync::mpsc::unbounded_channel;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

fn lifecycle_message(title: &str, config: &BurnBotConfig) -> String {
  format_lifecycle_message(
    title,
    chrono::Utc::now(),
    &config.contract_address,
    &config.burn_address,
  )
}

async fn run() -> anyhow::Result<()> {
  let config = BurnBotConfig::from_env()?;

  info!("Initializing burn tracker v{}...", burn_tracker::VERSION);
  info!("RPC URL: {}", redact_url(&config.ws_rpc_url));
  info!("Contract Address: {}", config.contract_address);
  info!("Burn Address: {}", config.burn_address);

  let provider = connect_ws(&config.ws_rpc_url).await?;
  let supply_provider =
    Arc::new(RpcSupplyProvider::new(config.contract_address, provider.clone()));
  let transfer_source =
    WebSocketTransferSource::new(provider, config.contract_address);

  let notifier = TelegramNotifier::new(
    config.bot_token.clone(),
    config.chat_id.clone(),
    config.animation_path.clone(),
  )
  .with_api_url(config.telegram_api_url.clone());

  if !notifier.animation_path().exists() {
    warn!(
      path = %notifier.animation_path().display(),
      "burn animation not found, alerts will fail until it exists"
    );
  }

  let mut handlers = CompositeEventHandler::new();
  handlers.add_handler(Arc::new(ConsoleEventHandler::new()));
  handlers.add_handler(Arc::new(TelegramEventHandler::new(notifier.clone())));

  let tracker = BurnTracker::new(
    config.burn_address,
    config.token_decimals,
    supply_provider,
    Arc::new(handlers),
  );

  let (sender, receiver) = unbounded_channel();
  let subscription = transfer_source.start(sender).await?;

  info!("🔥 Burn transaction bot is live...");

  if config.notify_lifecycle {
    let message = lifecycle_message("🔥 *Burn Tracker Started*", &config);
    if let Err(e) = notifier.send_message(&message).await {
      warn!(error = %e, "Failed to send start notification");
    }
  }

  tokio::select! {
    _ = tracker.run(receiver) => {
      error!("Transfer subscription lost, no reconnect is attempted");
    }
    result = tokio::signal::ctrl_c() => {
      if let Err(e) = result {
        error!(error = %e, "Failed to listen for Ctrl+C");
      }
    }
  }

  subscription.abort();

  if config.notify_lifecycle {
    let message = lifecycle_message("🛑 *Burn Tracker Stopped*", &config);
    if let Err(e) = notifier.send_message(&message).await {
      warn!(error = %e, "Failed to send stop notification");
    }
  }

  info!("Shutting down...");

  Ok(())
}

fn main() -> anyhow::Result<()> {
  dotenvy::dotenv().ok();

  // Initialize logging
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    )
    .with_level(true)
    .with_target(false)
    .with_file(true)
    .with_line_number(true)
    .init();

  tokio::runtime::Runtime::new()?.block_on(run())
}
