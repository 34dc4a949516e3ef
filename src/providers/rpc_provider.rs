use alloy::primitives::{Address, U256};
use alloy::providers::DynProvider;
use anyhow::Context;
use async_trait::async_trait;
use tracing::debug;

use crate::providers::abi::IERC20::{self, IERC20Instance};
use crate::traits::supply_provider::TokenSupplyProvider;

/// Contract-call based supply provider
pub struct RpcSupplyProvider {
    contract: IERC20Instance<DynProvider>,
}

impl RpcSupplyProvider {
    /// Create a supply provider for the token at `contract_address`
    pub fn new(contract_address: Address, provider: DynProvider) -> Self {
        Self {
            contract: IERC20::new(contract_address, provider),
        }
    }
}

#[async_trait]
impl TokenSupplyProvider for RpcSupplyProvider {
    async fn total_supply(&self) -> anyhow::Result<U256> {
        let supply = self
            .contract
            .totalSupply()
            .call()
            .await
            .context("totalSupply call failed")?;
        debug!(total_supply = %supply, "fetched total supply");
        Ok(supply)
    }

    async fn balance_of(&self, account: Address) -> anyhow::Result<U256> {
        let balance = self
            .contract
            .balanceOf(account)
            .call()
            .await
            .with_context(|| format!("balanceOf({}) call failed", account))?;
        debug!(account = %account, balance = %balance, "fetched balance");
        Ok(balance)
    }
}
