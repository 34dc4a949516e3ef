//! Chain providers for contract reads and transfer subscriptions

pub mod abi;
pub mod rpc_provider;
pub mod websocket_provider;

// Re-export for convenience
pub use rpc_provider::RpcSupplyProvider;
pub use websocket_provider::{connect_ws, WebSocketTransferSource};
