use crate::inbox::Inbox;
use crate::reputation::is_deadline_passed;

#[derive(Debug, Clone)]
pub enum InboxEvent {
    OverdueReport { report_id: u64, deadline: u64 },
    EmergencyReport { report_id: u64, severity: u32 },
    UnassignedBacklog { count: usize },
    StalledInvestigation { investigation_id: u64, ended_at: u64 },
}

/// One pass over the inbox, emitting anything an officer should look at
/// this poll. Pure derivation; the caller decides what to do with it.
pub fn scan(inbox: &Inbox, now_ts: u64, backlog_threshold: usize) -> Vec<InboxEvent> {
    let mut out = Vec::new();

    for report in &inbox.reports {
        if report.is_overdue(now_ts) {
            out.push(InboxEvent::OverdueReport {
                report_id: report.id,
                deadline: report.deadline,
            });
        }
        if report.severity == 5 && !report.processed {
            out.push(InboxEvent::EmergencyReport {
                report_id: report.id,
                severity: report.severity,
            });
        }
    }

    let unassigned = inbox.unassigned_pending().len();
    if unassigned >= backlog_threshold {
        out.push(InboxEvent::UnassignedBacklog { count: unassigned });
    }

    for inv in &inbox.investigations {
        if inv.active && is_deadline_passed(inv.ended_at, now_ts) {
            out.push(InboxEvent::StalledInvestigation {
                investigation_id: inv.id,
                ended_at: inv.ended_at,
            });
        }
    }

    out
}
