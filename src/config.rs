//! Environment configuration, read once at startup.

use std::fmt;
use std::path::PathBuf;

use alloy::primitives::Address;
use thiserror::Error;

use crate::telegram_notifier::DEFAULT_API_URL;
use crate::utils::helper::{parse_address, redact_url};

pub const DEFAULT_ANIMATION_PATH: &str = "./burn.gif";
pub const DEFAULT_TOKEN_DECIMALS: u8 = 18;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required env var: {0}")]
    MissingEnv(String),
    #[error("invalid address in {var}: {value}")]
    InvalidAddress { var: String, value: String },
    #[error("invalid value in {var}: {value}")]
    InvalidValue { var: String, value: String },
}

#[derive(Clone)]
pub struct BurnBotConfig {
    /// WebSocket endpoint of the node
    pub ws_rpc_url: String,
    pub contract_address: Address,
    pub burn_address: Address,
    pub bot_token: String,
    pub chat_id: String,
    pub animation_path: PathBuf,
    /// Base-unit scale of the token (18 for wei-style tokens)
    pub token_decimals: u8,
    pub telegram_api_url: String,
    /// Post start and stop messages to the chat
    pub notify_lifecycle: bool,
}

impl BurnBotConfig {
    /// Read configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let required = |key: &str| get(key).ok_or_else(|| ConfigError::MissingEnv(key.to_string()));
        let address = |key: &str| -> Result<Address, ConfigError> {
            let value = required(key)?;
            parse_address(&value).map_err(|_| ConfigError::InvalidAddress {
                var: key.to_string(),
                value,
            })
        };

        let token_decimals = match get("TOKEN_DECIMALS") {
            Some(value) => value
                .trim()
                .parse::<u8>()
                .ok()
                .filter(|d| *d <= 77)
                .ok_or(ConfigError::InvalidValue {
                    var: "TOKEN_DECIMALS".to_string(),
                    value,
                })?,
            None => DEFAULT_TOKEN_DECIMALS,
        };

        let notify_lifecycle = match get("NOTIFY_LIFECYCLE") {
            Some(value) => match value.trim().to_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => true,
                "0" | "false" | "no" | "off" => false,
                _ => {
                    return Err(ConfigError::InvalidValue {
                        var: "NOTIFY_LIFECYCLE".to_string(),
                        value,
                    })
                }
            },
            None => false,
        };

        Ok(Self {
            ws_rpc_url: required("WS_RPC_URL")?,
            contract_address: address("CONTRACT_ADDRESS")?,
            burn_address: address("BURN_ADDRESS")?,
            bot_token: required("BOT_TOKEN")?,
            chat_id: required("CHAT_ID")?,
            animation_path: get("BURN_ANIMATION_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_ANIMATION_PATH)),
            token_decimals,
            telegram_api_url: get("TELEGRAM_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            notify_lifecycle,
        })
    }
}

impl fmt::Debug for BurnBotConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BurnBotConfig")
            .field("ws_rpc_url", &redact_url(&self.ws_rpc_url))
            .field("contract_address", &self.contract_address)
            .field("burn_address", &self.burn_address)
            .field("bot_token", &"[REDACTED]")
            .field("chat_id", &self.chat_id)
            .field("animation_path", &self.animation_path)
            .field("token_decimals", &self.token_decimals)
            .field("telegram_api_url", &self.telegram_api_url)
            .field("notify_lifecycle", &self.notify_lifecycle)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn base_env() -> HashMap<&'static str, String> {
        HashMap::from([
            ("WS_RPC_URL", "wss://node.example/ws".to_string()),
            ("CONTRACT_ADDRESS", "0x1111111111111111111111111111111111111111".to_string()),
            ("BURN_ADDRESS", "0x000000000000000000000000000000000000dead".to_string()),
            ("BOT_TOKEN", "123:abc".to_string()),
            ("CHAT_ID", "-100123".to_string()),
        ])
    }

    fn load(env: &HashMap<&'static str, String>) -> Result<BurnBotConfig, ConfigError> {
        BurnBotConfig::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn reads_required_values_and_defaults() {
        let config = load(&base_env()).unwrap();
        assert_eq!(config.ws_rpc_url, "wss://node.example/ws");
        assert_eq!(config.chat_id, "-100123");
        assert_eq!(config.animation_path, PathBuf::from(DEFAULT_ANIMATION_PATH));
        assert_eq!(config.token_decimals, 18);
        assert_eq!(config.telegram_api_url, DEFAULT_API_URL);
        assert!(!config.notify_lifecycle);
    }

    #[test]
    fn missing_value_is_reported_by_name() {
        let mut env = base_env();
        env.remove("BOT_TOKEN");
        match load(&env) {
            Err(ConfigError::MissingEnv(var)) => assert_eq!(var, "BOT_TOKEN"),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn blank_value_counts_as_missing() {
        let mut env = base_env();
        env.insert("CHAT_ID", "   ".to_string());
        assert!(matches!(load(&env), Err(ConfigError::MissingEnv(_))));
    }

    #[test]
    fn bad_address_is_rejected() {
        let mut env = base_env();
        env.insert("BURN_ADDRESS", "0xnope".to_string());
        match load(&env) {
            Err(ConfigError::InvalidAddress { var, .. }) => assert_eq!(var, "BURN_ADDRESS"),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn optional_values_override_defaults() {
        let mut env = base_env();
        env.insert("TOKEN_DECIMALS", "9".to_string());
        env.insert("BURN_ANIMATION_PATH", "/srv/fire.gif".to_string());
        env.insert("NOTIFY_LIFECYCLE", "true".to_string());
        env.insert("TELEGRAM_API_URL", "http://localhost:8081".to_string());

        let config = load(&env).unwrap();
        assert_eq!(config.token_decimals, 9);
        assert_eq!(config.animation_path, PathBuf::from("/srv/fire.gif"));
        assert!(config.notify_lifecycle);
        assert_eq!(config.telegram_api_url, "http://localhost:8081");
    }

    #[test]
    fn out_of_range_decimals_are_rejected() {
        let mut env = base_env();
        env.insert("TOKEN_DECIMALS", "78".to_string());
        assert!(matches!(load(&env), Err(ConfigError::InvalidValue { .. })));
    }

    #[test]
    fn unknown_lifecycle_flag_is_rejected() {
        let mut env = base_env();
        env.insert("NOTIFY_LIFECYCLE", "maybe".to_string());
        match load(&env) {
            Err(ConfigError::InvalidValue { var, value }) => {
                assert_eq!(var, "NOTIFY_LIFECYCLE");
                assert_eq!(value, "maybe");
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn lifecycle_flag_accepts_common_spellings() {
        for (raw, expected) in [("1", true), ("YES", true), ("off", false), ("False", false)] {
            let mut env = base_env();
            env.insert("NOTIFY_LIFECYCLE", raw.to_string());
            assert_eq!(load(&env).unwrap().notify_lifecycle, expected, "value {}", raw);
        }
    }

    #[test]
    fn debug_redacts_bot_token() {
        let mut env = base_env();
        env.insert("WS_RPC_URL", "wss://mainnet.infura.io/ws/v3/projectkey".to_string());
        let rendered = format!("{:?}", load(&env).unwrap());
        assert!(!rendered.contains("123:abc"));
        assert!(!rendered.contains("projectkey"));
    }
}
