//! Stand-in contract backend with synthesized state.
//!
//! Reads produce records with uniformly random field values inside each
//! field's valid range; only the record counts are stable. Writes bump
//! the relevant counter and mint a synthetic receipt. This is the default
//! backend so every binary runs without a gateway.

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use rand::distributions::Alphanumeric;
use rand::Rng;
use std::sync::Mutex;

use crate::report::{Investigation, Report, ZERO_ADDRESS};
use crate::state::{now_ts, Config};

use super::{ContractClient, SubmitCall, TxReceipt};

const HEX_CHARS: &[u8] = b"0123456789abcdef";
const DAY_SECS: u64 = 24 * 60 * 60;

struct Counters {
    reports: u64,
    investigations: u64,
    actions: u64,
}

pub struct MockContract {
    counters: Mutex<Counters>,
}

impl MockContract {
    pub fn new(cfg: Config) -> Self {
        Self {
            counters: Mutex::new(Counters {
                reports: cfg.mock_reports,
                investigations: cfg.mock_investigations,
                actions: cfg.mock_actions,
            }),
        }
    }

    fn counters(&self) -> std::sync::MutexGuard<'_, Counters> {
        self.counters.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn receipt() -> TxReceipt {
        TxReceipt {
            tx_hash: mock_tx_hash(),
            status: "confirmed".to_string(),
        }
    }
}

/// "Qm" + 44 alphanumeric characters, shaped like a CIDv0 body.
pub fn mock_content_hash() -> String {
    let body: String = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(44)
        .map(char::from)
        .collect();
    format!("Qm{}", body)
}

/// "0x" + 40 lowercase hex characters.
pub fn mock_address() -> String {
    let mut rng = rand::thread_rng();
    let body: String = (0..40)
        .map(|_| HEX_CHARS[rng.gen_range(0..HEX_CHARS.len())] as char)
        .collect();
    format!("0x{}", body)
}

fn mock_tx_hash() -> String {
    let mut rng = rand::thread_rng();
    let body: String = (0..64)
        .map(|_| HEX_CHARS[rng.gen_range(0..HEX_CHARS.len())] as char)
        .collect();
    format!("0x{}", body)
}

/// Synthesize one report. Submitted within the last 30 days, deadline
/// within the next 30, roughly half verified and half unassigned.
pub fn mock_report(id: u64, now: u64) -> Report {
    let mut rng = rand::thread_rng();
    Report {
        id,
        severity: rng.gen_range(1..=5),
        category: rng.gen_range(1..=10),
        verified: rng.gen_bool(0.5),
        processed: rng.gen_bool(0.7),
        content_hash: mock_content_hash(),
        reporter: mock_address(),
        investigator: if rng.gen_bool(0.5) { mock_address() } else { ZERO_ADDRESS.to_string() },
        submitted_at: now.saturating_sub(rng.gen_range(0..30 * DAY_SECS)),
        deadline: now + rng.gen_range(0..30 * DAY_SECS),
    }
}

/// Synthesize one investigation referencing some report below `report_count`.
pub fn mock_investigation(id: u64, report_count: u64, now: u64) -> Investigation {
    let mut rng = rand::thread_rng();
    Investigation {
        id,
        report_id: rng.gen_range(0..report_count.max(1)),
        status: rng.gen_range(1..=5),
        priority: rng.gen_range(1..=5),
        active: rng.gen_bool(0.7),
        findings_hash: if rng.gen_bool(0.5) { mock_content_hash() } else { String::new() },
        investigator: mock_address(),
        started_at: now.saturating_sub(rng.gen_range(0..7 * DAY_SECS)),
        ended_at: now + rng.gen_range(0..30 * DAY_SECS),
    }
}

#[async_trait]
impl ContractClient for MockContract {
    async fn total_reports(&self) -> Result<u64> {
        Ok(self.counters().reports)
    }

    async fn total_investigations(&self) -> Result<u64> {
        Ok(self.counters().investigations)
    }

    async fn total_actions(&self) -> Result<u64> {
        Ok(self.counters().actions)
    }

    async fn report(&self, id: u64) -> Result<Report> {
        let total = self.counters().reports;
        if id >= total {
            return Err(anyhow!("report {} out of range (total {})", id, total));
        }
        Ok(mock_report(id, now_ts()))
    }

    async fn investigation(&self, id: u64) -> Result<Investigation> {
        let (total, reports) = {
            let c = self.counters();
            (c.investigations, c.reports)
        };
        if id >= total {
            return Err(anyhow!("investigation {} out of range (total {})", id, total));
        }
        Ok(mock_investigation(id, reports, now_ts()))
    }

    async fn member_reputation(&self, _member: &str) -> Result<u32> {
        Ok(rand::thread_rng().gen_range(0..=1000))
    }

    async fn investigator_rating(&self, _investigator: &str) -> Result<u32> {
        Ok(rand::thread_rng().gen_range(1..=5))
    }

    async fn is_verified_member(&self, _member: &str) -> Result<bool> {
        Ok(rand::thread_rng().gen_bool(0.5))
    }

    async fn submit_report(&self, _call: SubmitCall) -> Result<TxReceipt> {
        self.counters().reports += 1;
        Ok(Self::receipt())
    }

    async fn start_investigation(&self, report_id: u64, _priority: crate::fhe::Euint32) -> Result<TxReceipt> {
        let mut c = self.counters();
        if report_id >= c.reports {
            return Err(anyhow!("report {} out of range (total {})", report_id, c.reports));
        }
        c.investigations += 1;
        Ok(Self::receipt())
    }

    async fn update_investigation_status(
        &self,
        investigation_id: u64,
        _status: crate::fhe::Euint32,
    ) -> Result<TxReceipt> {
        let total = self.counters().investigations;
        if investigation_id >= total {
            return Err(anyhow!("investigation {} out of range (total {})", investigation_id, total));
        }
        Ok(Self::receipt())
    }

    async fn execute_compliance_action(
        &self,
        investigation_id: u64,
        _action_type: crate::fhe::Euint32,
        _details_hash: &str,
    ) -> Result<TxReceipt> {
        let mut c = self.counters();
        if investigation_id >= c.investigations {
            return Err(anyhow!("investigation {} out of range (total {})", investigation_id, c.investigations));
        }
        c.actions += 1;
        Ok(Self::receipt())
    }

    async fn verify_report(&self, report_id: u64, _verified: bool) -> Result<TxReceipt> {
        let total = self.counters().reports;
        if report_id >= total {
            return Err(anyhow!("report {} out of range (total {})", report_id, total));
        }
        Ok(Self::receipt())
    }

    async fn update_investigator_rating(
        &self,
        _investigator: &str,
        _rating: crate::fhe::Euint32,
    ) -> Result<TxReceipt> {
        Ok(Self::receipt())
    }

    async fn add_dao_member(&self, _member: &str, _access_level: crate::fhe::Euint32) -> Result<TxReceipt> {
        Ok(Self::receipt())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate;

    const NOW: u64 = 1_700_000_000;

    #[test]
    fn test_mock_report_fields_in_range() {
        for id in 0..200 {
            let r = mock_report(id, NOW);
            assert_eq!(r.id, id);
            assert!(validate::validate_severity(r.severity), "severity {}", r.severity);
            assert!(validate::validate_category(r.category), "category {}", r.category);
            assert!(validate::validate_content_hash(&r.content_hash));
            assert_eq!(r.content_hash.len(), 46);
            assert!(r.reporter.starts_with("0x") && r.reporter.len() == 42);
            assert!(r.submitted_at <= NOW);
            assert!(r.deadline >= NOW);
        }
    }

    #[test]
    fn test_mock_investigation_fields_in_range() {
        for id in 0..200 {
            let inv = mock_investigation(id, 12, NOW);
            assert_eq!(inv.id, id);
            assert!(inv.report_id < 12);
            assert!(validate::validate_status(inv.status));
            assert!(validate::validate_priority(inv.priority));
            assert!(inv.findings_hash.is_empty() || validate::validate_content_hash(&inv.findings_hash));
            assert!(inv.investigator.starts_with("0x"));
            assert!(inv.started_at <= NOW);
        }
    }

    #[test]
    fn test_mock_investigation_handles_empty_report_set() {
        let inv = mock_investigation(0, 0, NOW);
        assert_eq!(inv.report_id, 0);
    }

    #[test]
    fn test_mock_address_shape() {
        for _ in 0..50 {
            let a = mock_address();
            assert_eq!(a.len(), 42);
            assert!(a.starts_with("0x"));
            assert!(a[2..].chars().all(|c| c.is_ascii_hexdigit()));
        }
    }

    #[tokio::test]
    async fn test_totals_and_range_errors() {
        let mock = MockContract::new(crate::state::test_config());
        assert_eq!(mock.total_reports().await.unwrap(), 12);
        assert_eq!(mock.total_investigations().await.unwrap(), 6);
        assert_eq!(mock.total_actions().await.unwrap(), 4);

        assert!(mock.report(11).await.is_ok());
        let err = mock.report(12).await.unwrap_err();
        assert!(err.to_string().contains("out of range"));
        assert!(mock.investigation(6).await.is_err());
    }

    #[tokio::test]
    async fn test_writes_bump_counters() {
        let mock = MockContract::new(crate::state::test_config());
        let call = SubmitCall {
            severity: crate::fhe::encrypt_severity(3).unwrap(),
            category: crate::fhe::encrypt_category(2).unwrap(),
            content_hash: mock_content_hash(),
            deadline: NOW + DAY_SECS,
        };
        let receipt = mock.submit_report(call).await.unwrap();
        assert!(receipt.tx_hash.starts_with("0x"));
        assert_eq!(receipt.tx_hash.len(), 66);
        assert_eq!(receipt.status, "confirmed");
        assert_eq!(mock.total_reports().await.unwrap(), 13);

        let priority = crate::fhe::encrypt_priority(4).unwrap();
        mock.start_investigation(0, priority).await.unwrap();
        assert_eq!(mock.total_investigations().await.unwrap(), 7);

        let action = crate::fhe::encrypt_action_type(1).unwrap();
        mock.execute_compliance_action(0, action, "QmDetails").await.unwrap();
        assert_eq!(mock.total_actions().await.unwrap(), 5);
    }

    #[tokio::test]
    async fn test_member_reads_in_range() {
        let mock = MockContract::new(crate::state::test_config());
        for _ in 0..50 {
            let rep = mock.member_reputation("0xabc").await.unwrap();
            assert!(rep <= 1000);
            let rating = mock.investigator_rating("0xabc").await.unwrap();
            assert!((1..=5).contains(&rating));
        }
    }
}
