use alloy::primitives::{Address, B256, U256};

/// A decoded ERC-20 `Transfer` log
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferEvent {
    pub from: Address,
    pub to: Address,
    /// Amount in base units
    pub value: U256,
    pub block_number: Option<u64>,
    pub transaction_hash: Option<B256>,
}

impl TransferEvent {
    /// Create a transfer event without block metadata
    pub fn new(from: Address, to: Address, value: U256) -> Self {
        Self {
            from,
            to,
            value,
            block_number: None,
            transaction_hash: None,
        }
    }

    /// Check whether the transfer is directed at `address`
    pub fn is_to(&self, address: &Address) -> bool {
        self.to == *address
    }
}
