//! Event handlers for burn reports

pub mod console;
pub mod telegram;
pub mod composite;

// Re-export for convenience
pub use console::ConsoleEventHandler;
pub use telegram::{format_lifecycle_message, TelegramEventHandler};
pub use composite::CompositeEventHandler;
