//! Compliance-officer inbox: load contract snapshots and derive the view
//! the UI renders.

use anyhow::Result;

use crate::contract::ContractClient;
use crate::logging::{json_log, obj, v_str};
use crate::report::{Investigation, Report, ReportStatus};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InboxStats {
    pub total_reports: u64,
    pub active_investigations: u64,
    pub resolved_reports: usize,
    pub pending_reports: usize,
    pub overdue_reports: usize,
}

#[derive(Default)]
pub struct Inbox {
    pub reports: Vec<Report>,
    pub investigations: Vec<Investigation>,
}

impl Inbox {
    pub fn new(reports: Vec<Report>, investigations: Vec<Investigation>) -> Self {
        Self { reports, investigations }
    }

    pub fn stats(&self, now_ts: u64) -> InboxStats {
        InboxStats {
            total_reports: self.reports.len() as u64,
            active_investigations: self.investigations.iter().filter(|i| i.active).count() as u64,
            resolved_reports: self.reports.iter().filter(|r| r.processed).count(),
            pending_reports: self
                .reports
                .iter()
                .filter(|r| r.status() == ReportStatus::Pending)
                .count(),
            overdue_reports: self.reports.iter().filter(|r| r.is_overdue(now_ts)).count(),
        }
    }

    pub fn overdue(&self, now_ts: u64) -> Vec<&Report> {
        self.reports.iter().filter(|r| r.is_overdue(now_ts)).collect()
    }

    pub fn unassigned_pending(&self) -> Vec<&Report> {
        self.reports
            .iter()
            .filter(|r| r.status() == ReportStatus::Pending)
            .collect()
    }

    /// Display order: highest severity first, then newest first.
    pub fn sorted_for_display(&self) -> Vec<&Report> {
        let mut rows: Vec<&Report> = self.reports.iter().collect();
        rows.sort_by(|a, b| {
            b.severity
                .cmp(&a.severity)
                .then(b.submitted_at.cmp(&a.submitted_at))
        });
        rows
    }

    pub fn investigations_for(&self, report_id: u64) -> Vec<&Investigation> {
        self.investigations.iter().filter(|i| i.report_id == report_id).collect()
    }
}

/// Fetch totals then every record by id. A single failed record is
/// logged and skipped rather than failing the whole load, matching how
/// the inbox treats partial remote state.
pub async fn load(contract: &(dyn ContractClient + Send + Sync)) -> Result<Inbox> {
    let total_reports = contract.total_reports().await?;
    let total_investigations = contract.total_investigations().await?;

    let mut reports = Vec::with_capacity(total_reports as usize);
    for id in 0..total_reports {
        match contract.report(id).await {
            Ok(r) => reports.push(r),
            Err(e) => json_log(
                "inbox",
                obj(&[
                    ("event", v_str("report_load_failed")),
                    ("report_id", serde_json::json!(id)),
                    ("error", v_str(&e.to_string())),
                ]),
            ),
        }
    }

    let mut investigations = Vec::with_capacity(total_investigations as usize);
    for id in 0..total_investigations {
        match contract.investigation(id).await {
            Ok(i) => investigations.push(i),
            Err(e) => json_log(
                "inbox",
                obj(&[
                    ("event", v_str("investigation_load_failed")),
                    ("investigation_id", serde_json::json!(id)),
                    ("error", v_str(&e.to_string())),
                ]),
            ),
        }
    }

    Ok(Inbox::new(reports, investigations))
}
