//! Burn Tracker Library
//!
//! Watches an ERC-20 contract for transfers to a burn address and posts
//! the updated supply figures to a Telegram chat.

// Public modules - these are the API surface
pub mod config;
pub mod models;
pub mod traits;
pub mod providers;
pub mod handlers;
pub mod tracker;
pub mod utils;
pub mod telegram_notifier;

// Re-export commonly used items for easier access
pub use config::{BurnBotConfig, ConfigError};
pub use models::{burn::BurnReport, transfer::TransferEvent};
pub use traits::{
    supply_provider::TokenSupplyProvider,
    transfer_source::TransferSource,
    event_handler::BurnEventHandler,
};
pub use providers::{
    rpc_provider::RpcSupplyProvider,
    websocket_provider::{connect_ws, WebSocketTransferSource},
};
pub use handlers::{
    console::ConsoleEventHandler,
    telegram::TelegramEventHandler,
    composite::CompositeEventHandler,
};
pub use telegram_notifier::{TelegramError, TelegramNotifier};
pub use tracker::burn_tracker::BurnTracker;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
