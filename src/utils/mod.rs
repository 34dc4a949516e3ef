//! Small formatting and parsing helpers

pub mod helper;

pub use helper::{parse_address, redact_url, to_decimal_string, to_fixed, to_token_amount};
