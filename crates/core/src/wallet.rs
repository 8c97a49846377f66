//! Wallet address parsing.
//!
//! Identity is carried as a bare EVM address (`0x` + 40 hex digits). Addresses
//! are case-insensitive on chain, so they are stored lowercase; the checksum
//! casing a wallet displays is not verified.

use crate::error::CoreError;

/// Number of hex digits after the `0x` prefix.
pub const ADDRESS_HEX_LEN: usize = 40;

/// Validate and normalise a wallet address to its lowercase form.
pub fn normalize_wallet_address(raw: &str) -> Result<String, CoreError> {
    let trimmed = raw.trim();
    let hex = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .ok_or_else(|| invalid(trimmed))?;

    if hex.len() != ADDRESS_HEX_LEN || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(invalid(trimmed));
    }

    Ok(format!("0x{}", hex.to_ascii_lowercase()))
}

fn invalid(raw: &str) -> CoreError {
    CoreError::Unauthorized(format!(
        "Invalid wallet address '{raw}'. Expected 0x followed by {ADDRESS_HEX_LEN} hex digits"
    ))
}
