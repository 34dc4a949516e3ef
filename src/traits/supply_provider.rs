use alloy::primitives::{Address, U256};
use async_trait::async_trait;

/// Read-only access to the token contract's supply figures
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TokenSupplyProvider: Send + Sync {
    /// Fetch the aggregate token supply in base units
    async fn total_supply(&self) -> anyhow::Result<U256>;

    /// Fetch the balance held by `account` in base units
    async fn balance_of(&self, account: Address) -> anyhow::Result<U256>;
}
