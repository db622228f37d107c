//! Seed derivation.
//!
//! The chain is `secret + date -> daily seed -> user seed -> u64`. Each step is
//! an HMAC-SHA256 keyed by the previous value, so deriving a user's seed only
//! needs the daily digest, never the root secret.

use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::types::error::SeedingError;
use crate::types::identifiers::{CalendarDate, SeedHex, UserId};

type HmacSha256 = Hmac<Sha256>;

/// Hex characters consumed by [`seed_to_u64`].
const U64_HEX_LEN: usize = 16;

fn hmac_hex(key: &[u8], message: &[u8]) -> Result<SeedHex, SeedingError> {
    let mut mac = HmacSha256::new_from_slice(key)
        .map_err(|e| SeedingError::Configuration(format!("HMAC key rejected: {e}")))?;
    mac.update(message);
    Ok(SeedHex::from_digest(&mac.finalize().into_bytes()))
}

/// `HMAC-SHA256(key = secret, message = date)`, hex encoded.
pub fn derive_daily_seed(secret: &str, date: &CalendarDate) -> Result<SeedHex, SeedingError> {
    if secret.is_empty() {
        return Err(SeedingError::Configuration("seed secret is empty".into()));
    }
    let message = date.to_string();
    hmac_hex(secret.as_bytes(), message.as_bytes())
}

/// `HMAC-SHA256(key = daily seed hex, message = user id)`, hex encoded.
///
/// The key is the hex text of the daily digest, not its raw bytes.
pub fn derive_user_seed(daily_seed: &SeedHex, user: &UserId) -> Result<SeedHex, SeedingError> {
    hmac_hex(daily_seed.as_str().as_bytes(), user.as_str().as_bytes())
}

/// Read the first 16 hex characters as a big-endian `u64`.
pub fn seed_to_u64(seed: &SeedHex) -> Result<u64, SeedingError> {
    let prefix = seed
        .as_str()
        .get(..U64_HEX_LEN)
        .filter(|p| p.bytes().all(|b| b.is_ascii_hexdigit()))
        .ok_or_else(|| {
            SeedingError::validation(
                "seedHex",
                format!("need at least {U64_HEX_LEN} hex characters"),
            )
        })?;

    u64::from_str_radix(prefix, 16)
        .map_err(|e| SeedingError::validation("seedHex", e.to_string()))
}
