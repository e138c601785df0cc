//! Report submission pipeline: draft → encrypted envelope → content hash
//! → contract call. Any failure surfaces to the caller; there is no
//! retry — the member resubmits.

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::contract::{ContractClient, SubmitCall, TxReceipt};
use crate::fhe::{encrypt_category, encrypt_report_content, encrypt_severity};
use crate::logging::log_tx;
use crate::reputation::calculate_deadline;
use crate::validate::validate_content_hash;
use crate::wallet::Wallet;

pub const DEFAULT_DEADLINE_DAYS: u64 = 30;

/// Unencrypted form input.
#[derive(Debug, Clone)]
pub struct ReportDraft {
    pub title: String,
    pub description: String,
    pub evidence: String,
    pub severity: u32,
    pub category: u32,
    /// Days until the investigation deadline; defaults to 30.
    pub deadline_days: Option<u64>,
}

/// The envelope that gets encrypted and content-addressed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportContent {
    pub title: String,
    pub description: String,
    pub evidence: String,
    pub timestamp: u64,
    pub reporter: String,
}

/// Everything needed for the contract call, already validated.
#[derive(Debug, Clone)]
pub struct PreparedReport {
    pub call: SubmitCall,
    pub encrypted_content: String,
}

/// "Qm" + the first 44 hex chars of the ciphertext's SHA-256 digest.
pub fn derive_content_hash(encrypted_content: &str) -> String {
    let digest = Sha256::digest(encrypted_content.as_bytes());
    let hex_digest = hex::encode(digest);
    format!("Qm{}", &hex_digest[..44])
}

/// Validate and assemble a draft into contract-call arguments.
pub fn prepare(draft: &ReportDraft, reporter: &str, now_ts: u64) -> Result<PreparedReport> {
    if draft.title.trim().is_empty() {
        bail!("report title is required");
    }
    if draft.description.trim().is_empty() {
        bail!("report description is required");
    }

    // Range errors here carry the field name; fail before any encoding.
    let severity = encrypt_severity(draft.severity)?;
    let category = encrypt_category(draft.category)?;

    let content = ReportContent {
        title: draft.title.clone(),
        description: draft.description.clone(),
        evidence: draft.evidence.clone(),
        timestamp: now_ts,
        reporter: reporter.to_string(),
    };
    let encrypted_content = encrypt_report_content(&serde_json::to_string(&content)?);

    let content_hash = derive_content_hash(&encrypted_content);
    if !validate_content_hash(&content_hash) {
        bail!("invalid report hash generated");
    }

    let days = draft.deadline_days.unwrap_or(DEFAULT_DEADLINE_DAYS);
    let deadline = calculate_deadline(now_ts, days);

    Ok(PreparedReport {
        call: SubmitCall { severity, category, content_hash, deadline },
        encrypted_content,
    })
}

/// Full pipeline: wallet check, prepare, submit. The encrypted envelope
/// is dropped after hashing — only the hash goes on chain.
pub async fn submit(
    contract: &(dyn ContractClient + Send + Sync),
    wallet: &Wallet,
    draft: &ReportDraft,
    now_ts: u64,
) -> Result<TxReceipt> {
    let reporter = wallet.address()?;
    let prepared = prepare(draft, reporter, now_ts)?;
    let receipt = contract.submit_report(prepared.call).await?;
    log_tx("submitWhistleblowerReport", &receipt.tx_hash, &receipt.status);
    Ok(receipt)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fhe::decrypt_report_content;

    const NOW: u64 = 1_700_000_000;
    const REPORTER: &str = "0x1111111111111111111111111111111111111111";

    fn make_draft() -> ReportDraft {
        ReportDraft {
            title: "Treasury irregularity".to_string(),
            description: "Recurring transfers to an unlisted address".to_string(),
            evidence: "tx 0xabc..., multisig log excerpt".to_string(),
            severity: 4,
            category: 1,
            deadline_days: None,
        }
    }

    #[test]
    fn test_prepare_defaults_thirty_day_deadline() {
        let p = prepare(&make_draft(), REPORTER, NOW).unwrap();
        assert_eq!(p.call.deadline, NOW + 30 * 86_400);
    }

    #[test]
    fn test_prepare_honors_explicit_deadline() {
        let draft = ReportDraft { deadline_days: Some(7), ..make_draft() };
        let p = prepare(&draft, REPORTER, NOW).unwrap();
        assert_eq!(p.call.deadline, NOW + 7 * 86_400);
    }

    #[test]
    fn test_prepare_rejects_out_of_range_fields() {
        let draft = ReportDraft { severity: 6, ..make_draft() };
        let err = prepare(&draft, REPORTER, NOW).unwrap_err();
        assert!(err.to_string().contains("severity"));

        let draft = ReportDraft { category: 0, ..make_draft() };
        let err = prepare(&draft, REPORTER, NOW).unwrap_err();
        assert!(err.to_string().contains("category"));
    }

    #[test]
    fn test_prepare_rejects_empty_fields() {
        let draft = ReportDraft { title: "  ".to_string(), ..make_draft() };
        assert!(prepare(&draft, REPORTER, NOW).is_err());

        let draft = ReportDraft { description: String::new(), ..make_draft() };
        assert!(prepare(&draft, REPORTER, NOW).is_err());
    }

    #[test]
    fn test_content_hash_shape() {
        let p = prepare(&make_draft(), REPORTER, NOW).unwrap();
        assert!(validate_content_hash(&p.call.content_hash));
        assert_eq!(p.call.content_hash.len(), 46);
        // Deterministic for identical input
        let again = prepare(&make_draft(), REPORTER, NOW).unwrap();
        assert_eq!(p.call.content_hash, again.call.content_hash);
    }

    #[test]
    fn test_envelope_round_trips() {
        let p = prepare(&make_draft(), REPORTER, NOW).unwrap();
        let plain = decrypt_report_content(&p.encrypted_content).unwrap();
        let content: ReportContent = serde_json::from_str(&plain).unwrap();
        assert_eq!(content.title, "Treasury irregularity");
        assert_eq!(content.reporter, REPORTER);
        assert_eq!(content.timestamp, NOW);
    }

    #[tokio::test]
    async fn test_submit_requires_connected_wallet() {
        let mock = crate::contract::mock::MockContract::new(crate::state::test_config());
        let wallet = Wallet::new(None, None);
        let err = submit(&mock, &wallet, &make_draft(), NOW).await.unwrap_err();
        assert_eq!(err.to_string(), "wallet not connected");
        // Nothing reached the contract
        assert_eq!(mock.total_reports().await.unwrap(), 12);
    }

    #[tokio::test]
    async fn test_submit_end_to_end_against_mock() {
        let mock = crate::contract::mock::MockContract::new(crate::state::test_config());
        let wallet = Wallet::new(Some(REPORTER.to_string()), Some("secret".to_string()));
        let receipt = submit(&mock, &wallet, &make_draft(), NOW).await.unwrap();
        assert_eq!(receipt.status, "confirmed");
        assert_eq!(mock.total_reports().await.unwrap(), 13);
    }
}
