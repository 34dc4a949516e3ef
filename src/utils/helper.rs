use std::str::FromStr;

use alloy::primitives::utils::format_units;
use alloy::primitives::{Address, U256};
use reqwest::Url;
use rust_decimal::{Decimal, RoundingStrategy};

/// Parse an address from string, with better error messages
pub fn parse_address(s: &str) -> anyhow::Result<Address> {
    Address::from_str(s.trim()).map_err(|e| anyhow::anyhow!("Invalid address {}: {}", s, e))
}

/// Format base units as a decimal string, dropping trailing fractional zeros
/// (`1500000000000000000` with 18 decimals becomes `1.5`).
pub fn to_decimal_string(value: U256, decimals: u8) -> anyhow::Result<String> {
    let formatted = format_units(value, decimals)
        .map_err(|e| anyhow::anyhow!("Cannot format {} with {} decimals: {}", value, decimals, e))?;

    if !formatted.contains('.') {
        return Ok(formatted);
    }
    Ok(formatted.trim_end_matches('0').trim_end_matches('.').to_string())
}

/// Convert base units to a floating point token amount
pub fn to_token_amount(value: U256, decimals: u8) -> anyhow::Result<f64> {
    let s = to_decimal_string(value, decimals)?;
    s.parse::<f64>()
        .map_err(|e| anyhow::anyhow!("Cannot parse token amount {}: {}", s, e))
}

/// Format a float with `places` decimals, rounding exact ties away from zero
/// the way JavaScript's `toFixed` does (`1000.125` becomes `1000.13`).
pub fn to_fixed(value: f64, places: u32) -> String {
    match Decimal::from_f64_retain(value) {
        Some(exact) => {
            let mut rounded =
                exact.round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero);
            rounded.rescale(places);
            rounded.to_string()
        }
        // NaN, infinities and magnitudes beyond Decimal's range
        None => format!("{:.*}", places as usize, value),
    }
}

/// Strip credentials, path and query from an endpoint URL before logging it.
/// Hosted RPC URLs carry the project key in the path.
pub fn redact_url(url: &str) -> String {
    match Url::parse(url) {
        Ok(parsed) => match (parsed.host_str(), parsed.port()) {
            (Some(host), Some(port)) => format!("{}://{}:{}", parsed.scheme(), host, port),
            (Some(host), None) => format!("{}://{}", parsed.scheme(), host),
            (None, _) => format!("{}://[redacted]", parsed.scheme()),
        },
        Err(_) => "[invalid url]".to_string(),
    }
}
