//! Encrypted-field handling for contract submissions.
//!
//! Encryption is simulated: an `Euint32` carries its plaintext and the
//! content envelope is base64. The range checks and error surface are the
//! real contract preconditions, so swapping in an actual FHE backend only
//! changes the interior of this module.

use anyhow::{anyhow, bail, Result};
use base64::{engine::general_purpose::STANDARD, Engine as _};

use crate::validate;

/// Simulated euint32 ciphertext handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Euint32(u32);

impl Euint32 {
    fn as_euint32(value: u32) -> Self {
        Self(value)
    }

    pub fn decrypt(&self) -> u32 {
        self.0
    }
}

pub fn encrypt_severity(severity: u32) -> Result<Euint32> {
    if !validate::validate_severity(severity) {
        bail!("severity must be between 1 and 5");
    }
    Ok(Euint32::as_euint32(severity))
}

pub fn encrypt_category(category: u32) -> Result<Euint32> {
    if !validate::validate_category(category) {
        bail!("category must be between 1 and 10");
    }
    Ok(Euint32::as_euint32(category))
}

pub fn encrypt_priority(priority: u32) -> Result<Euint32> {
    if !validate::validate_priority(priority) {
        bail!("priority must be between 1 and 5");
    }
    Ok(Euint32::as_euint32(priority))
}

pub fn encrypt_status(status: u32) -> Result<Euint32> {
    if !validate::validate_status(status) {
        bail!("status must be between 1 and 5");
    }
    Ok(Euint32::as_euint32(status))
}

pub fn encrypt_action_type(action_type: u32) -> Result<Euint32> {
    if !validate::validate_action_type(action_type) {
        bail!("action type must be between 1 and 10");
    }
    Ok(Euint32::as_euint32(action_type))
}

pub fn encrypt_access_level(access_level: u32) -> Result<Euint32> {
    if !validate::validate_access_level(access_level) {
        bail!("access level must be between 1 and 5");
    }
    Ok(Euint32::as_euint32(access_level))
}

pub fn decrypt_severity(encrypted: &Euint32) -> u32 {
    encrypted.decrypt()
}

pub fn decrypt_category(encrypted: &Euint32) -> u32 {
    encrypted.decrypt()
}

pub fn decrypt_priority(encrypted: &Euint32) -> u32 {
    encrypted.decrypt()
}

pub fn decrypt_status(encrypted: &Euint32) -> u32 {
    encrypted.decrypt()
}

pub fn decrypt_action_type(encrypted: &Euint32) -> u32 {
    encrypted.decrypt()
}

pub fn decrypt_access_level(encrypted: &Euint32) -> u32 {
    encrypted.decrypt()
}

/// Encrypt a report content envelope for off-chain storage.
pub fn encrypt_report_content(content: &str) -> String {
    STANDARD.encode(content.as_bytes())
}

/// Decrypt an encoded content envelope. Malformed input maps to a single
/// generic error so callers never leak partial plaintext details.
pub fn decrypt_report_content(encrypted: &str) -> Result<String> {
    let bytes = STANDARD
        .decode(encrypted)
        .map_err(|_| anyhow!("failed to decrypt report content"))?;
    String::from_utf8(bytes).map_err(|_| anyhow!("failed to decrypt report content"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encrypt_severity_bounds() {
        assert!(encrypt_severity(0).is_err());
        for v in 1..=5 {
            let e = encrypt_severity(v).unwrap();
            assert_eq!(decrypt_severity(&e), v);
        }
        let err = encrypt_severity(6).unwrap_err();
        assert!(err.to_string().contains("between 1 and 5"));
    }

    #[test]
    fn test_encrypt_category_bounds() {
        assert!(encrypt_category(0).is_err());
        for v in 1..=10 {
            let e = encrypt_category(v).unwrap();
            assert_eq!(decrypt_category(&e), v);
        }
        assert!(encrypt_category(11).is_err());
    }

    #[test]
    fn test_encrypt_remaining_fields() {
        assert_eq!(decrypt_priority(&encrypt_priority(3).unwrap()), 3);
        assert_eq!(decrypt_status(&encrypt_status(5).unwrap()), 5);
        assert_eq!(decrypt_action_type(&encrypt_action_type(10).unwrap()), 10);
        assert_eq!(decrypt_access_level(&encrypt_access_level(1).unwrap()), 1);
        assert!(encrypt_priority(6).is_err());
        assert!(encrypt_status(0).is_err());
        assert!(encrypt_action_type(11).is_err());
        assert!(encrypt_access_level(6).is_err());
    }

    #[test]
    fn test_content_round_trip() {
        let samples = [
            "",
            "plain ascii",
            "{\"title\":\"t\",\"description\":\"d\"}",
            "unicode: Привет 世界 🚨",
            "newlines\nand\ttabs",
        ];
        for s in samples {
            let enc = encrypt_report_content(s);
            assert_eq!(decrypt_report_content(&enc).unwrap(), s, "round trip for {:?}", s);
        }
    }

    #[test]
    fn test_decrypt_rejects_malformed() {
        let err = decrypt_report_content("not!!valid@@base64").unwrap_err();
        assert_eq!(err.to_string(), "failed to decrypt report content");

        // Valid base64 of invalid UTF-8 also maps to the generic error.
        let bad_utf8 = STANDARD.encode([0xff, 0xfe, 0xfd]);
        let err = decrypt_report_content(&bad_utf8).unwrap_err();
        assert_eq!(err.to_string(), "failed to decrypt report content");
    }

    #[test]
    fn test_ciphertext_is_opaque_but_stable() {
        let a = encrypt_severity(4).unwrap();
        let b = encrypt_severity(4).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, encrypt_severity(5).unwrap());
    }
}
