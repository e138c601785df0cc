//! Contract record snapshots and their display derivations.
//!
//! `Report` and `Investigation` are read-only views of remote state,
//! refreshed on each poll. They carry no identity beyond their id and no
//! local lifecycle.

use serde::{Deserialize, Serialize};

use crate::reputation::is_deadline_passed;

pub const ZERO_ADDRESS: &str = "0x0000000000000000000000000000000000000000";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    pub id: u64,
    pub severity: u32,
    pub category: u32,
    pub verified: bool,
    pub processed: bool,
    pub content_hash: String,
    pub reporter: String,
    /// Zero address while unassigned.
    pub investigator: String,
    pub submitted_at: u64,
    pub deadline: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Investigation {
    pub id: u64,
    pub report_id: u64,
    pub status: u32,
    pub priority: u32,
    pub active: bool,
    /// Empty until findings are filed.
    pub findings_hash: String,
    pub investigator: String,
    pub started_at: u64,
    pub ended_at: u64,
}

/// Workflow position derived from the processed flag and assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportStatus {
    Pending,
    Reviewing,
    Resolved,
}

impl ReportStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportStatus::Pending => "pending",
            ReportStatus::Reviewing => "reviewing",
            ReportStatus::Resolved => "resolved",
        }
    }
}

/// Triage bucket derived from severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriorityBucket {
    Low,
    Medium,
    High,
}

impl PriorityBucket {
    pub fn from_severity(severity: u32) -> Self {
        match severity {
            4 | 5 => PriorityBucket::High,
            3 => PriorityBucket::Medium,
            _ => PriorityBucket::Low,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PriorityBucket::Low => "low",
            PriorityBucket::Medium => "medium",
            PriorityBucket::High => "high",
        }
    }
}

impl Report {
    pub fn has_investigator(&self) -> bool {
        !self.investigator.is_empty() && self.investigator != ZERO_ADDRESS
    }

    pub fn status(&self) -> ReportStatus {
        if self.processed {
            ReportStatus::Resolved
        } else if self.has_investigator() {
            ReportStatus::Reviewing
        } else {
            ReportStatus::Pending
        }
    }

    pub fn priority(&self) -> PriorityBucket {
        PriorityBucket::from_severity(self.severity)
    }

    /// Overdue = deadline passed while still unprocessed.
    pub fn is_overdue(&self, now_ts: u64) -> bool {
        !self.processed && is_deadline_passed(self.deadline, now_ts)
    }
}

impl Investigation {
    pub fn has_findings(&self) -> bool {
        !self.findings_hash.is_empty()
    }

    pub fn is_completed(&self) -> bool {
        self.status == 5
    }
}

pub fn category_label(category: u32) -> &'static str {
    match category {
        1 => "Financial Misconduct",
        2 => "Governance Violation",
        3 => "Security Breach",
        4 => "Code of Conduct",
        5 => "Resource Misuse",
        6 => "Conflict of Interest",
        7 => "Data Privacy",
        8 => "Regulatory Non-compliance",
        9 => "Internal Fraud",
        10 => "Other",
        _ => "Unknown Category",
    }
}

pub fn severity_label(severity: u32) -> &'static str {
    match severity {
        1 => "Low - Minor Issue",
        2 => "Medium - Moderate Concern",
        3 => "High - Serious Issue",
        4 => "Critical - Major Violation",
        5 => "Emergency - Immediate Action Required",
        _ => "Unknown",
    }
}

pub fn investigation_status_label(status: u32) -> &'static str {
    match status {
        1 => "Started",
        2 => "In Progress",
        3 => "Under Review",
        4 => "Pending Action",
        5 => "Completed",
        _ => "Unknown",
    }
}

pub fn action_type_label(action_type: u32) -> &'static str {
    match action_type {
        1 => "Warning",
        2 => "Suspension",
        3 => "Removal",
        4 => "Legal Action",
        5 => "Policy Update",
        6 => "Training Required",
        7 => "Audit Initiated",
        8 => "Compensation Adjustment",
        9 => "Governance Change",
        10 => "Other",
        _ => "Unknown",
    }
}

#[cfg(test)]
pub fn make_report(id: u64, now: u64) -> Report {
    Report {
        id,
        severity: 3,
        category: 1,
        verified: false,
        processed: false,
        content_hash: "QmYwAPJzv5CZsnA625s3Xf2nemtYgPpHdWEz79ojWnPbdG".to_string(),
        reporter: "0x1111111111111111111111111111111111111111".to_string(),
        investigator: ZERO_ADDRESS.to_string(),
        submitted_at: now.saturating_sub(3600),
        deadline: now + 86_400,
    }
}
