//! One-shot inbox dump for a compliance officer terminal.

use anyhow::Result;

use whistlevault::contract::ContractKind;
use whistlevault::format::{format_address, format_date_short, investigation_code, report_code};
use whistlevault::inbox;
use whistlevault::report::{category_label, investigation_status_label, severity_label};
use whistlevault::state::{now_ts, Config};

#[tokio::main]
async fn main() -> Result<()> {
    let cfg = Config::from_env();
    let contract = ContractKind::from_env().build(cfg)?;
    let now = now_ts();

    let view = inbox::load(contract.as_ref()).await?;
    let stats = view.stats(now);

    println!(
        "Reports: {}  Active investigations: {}  Resolved: {}  Overdue: {}",
        stats.total_reports, stats.active_investigations, stats.resolved_reports, stats.overdue_reports
    );
    println!();

    for report in view.sorted_for_display() {
        let overdue = if report.is_overdue(now) { " OVERDUE" } else { "" };
        let verified = if report.verified { " [verified]" } else { "" };
        println!(
            "{} {:9} {:8} {} | {} | by {}{}{}",
            report_code(report.id),
            report.status().as_str(),
            report.priority().as_str(),
            format_date_short(report.submitted_at),
            category_label(report.category),
            format_address(&report.reporter),
            verified,
            overdue,
        );
        println!(
            "        severity: {} | deadline {} | hash {}",
            severity_label(report.severity),
            format_date_short(report.deadline),
            report.content_hash,
        );
        for inv in view.investigations_for(report.id) {
            println!(
                "        {} {} ({}) investigator {}",
                investigation_code(inv.id),
                investigation_status_label(inv.status),
                if inv.active { "active" } else { "closed" },
                format_address(&inv.investigator),
            );
        }
    }

    Ok(())
}
