use anyhow::{anyhow, Result};
use hmac::{Hmac, Mac};
use sha2::{Digest, Sha256};

use crate::report::ZERO_ADDRESS;

type HmacSha256 = Hmac<Sha256>;

/// Connected-wallet handle for the gateway session. The secret signs
/// write payloads; it never appears in logs (the logging layer redacts
/// `wallet_secret` and `signature` fields).
#[derive(Clone)]
pub struct Wallet {
    address: Option<String>,
    secret: Option<String>,
}

impl Wallet {
    pub fn new(address: Option<String>, secret: Option<String>) -> Self {
        Self { address, secret }
    }

    pub fn is_connected(&self) -> bool {
        matches!(&self.address, Some(a) if !a.is_empty() && a != ZERO_ADDRESS)
    }

    pub fn address(&self) -> Result<&str> {
        self.address
            .as_deref()
            .filter(|a| !a.is_empty() && *a != ZERO_ADDRESS)
            .ok_or_else(|| anyhow!("wallet not connected"))
    }

    /// HMAC-SHA256 over the serialized payload, hex-encoded.
    pub fn sign_payload(&self, payload: &str) -> Result<String> {
        let secret = self.secret.as_ref().ok_or_else(|| anyhow!("missing WALLET_SECRET"))?;
        let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
            .map_err(|e| anyhow!("HMAC error: {}", e))?;
        mac.update(payload.as_bytes());
        Ok(hex::encode(mac.finalize().into_bytes()))
    }
}

/// Deterministic 0x-prefixed transaction hash for a signed payload.
pub fn tx_hash(payload: &str, signature: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(payload.as_bytes());
    hasher.update(signature.as_bytes());
    format!("0x{}", hex::encode(hasher.finalize()))
}
