//! One-shot report submission.
//!
//! Usage: submit_report <severity 1-5> <category 1-10> <title> <description> [evidence]
//! Wallet and contract settings come from the environment (WALLET_ADDRESS,
//! WALLET_SECRET, CONTRACT_MODE, RPC_BASE, CONTRACT_ADDRESS, DEADLINE_DAYS).

use anyhow::{anyhow, Result};

use whistlevault::access;
use whistlevault::contract::{ContractClient, ContractKind};
use whistlevault::logging::log_access_check;
use whistlevault::report::{category_label, severity_label};
use whistlevault::state::{now_ts, Config};
use whistlevault::submit::{submit, ReportDraft};

#[tokio::main]
async fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 5 {
        eprintln!("usage: submit_report <severity 1-5> <category 1-10> <title> <description> [evidence]");
        std::process::exit(2);
    }

    let severity: u32 = args[1].parse().map_err(|_| anyhow!("severity must be a number"))?;
    let category: u32 = args[2].parse().map_err(|_| anyhow!("category must be a number"))?;
    let draft = ReportDraft {
        title: args[3].clone(),
        description: args[4].clone(),
        evidence: args.get(5).cloned().unwrap_or_default(),
        severity,
        category,
        deadline_days: std::env::var("DEADLINE_DAYS").ok().and_then(|v| v.parse().ok()),
    };

    let cfg = Config::from_env();
    let contract = ContractKind::from_env().build(cfg.clone())?;
    let wallet = cfg.wallet();

    // Advisory only: the contract is the enforcer, but a sub-threshold
    // submission is going to revert, so say so up front.
    if let Ok(reputation) = contract.member_reputation(wallet.address()?).await {
        let eligible = access::can_submit_report(reputation);
        log_access_check("can_submit_report", eligible, reputation, access::MIN_REPUTATION_FOR_REPORT);
        if !eligible {
            eprintln!(
                "warning: reputation {} is below the submission threshold {}",
                reputation,
                access::MIN_REPUTATION_FOR_REPORT
            );
        }
    }

    println!(
        "Submitting {} / {} report: {}",
        severity_label(severity),
        category_label(category),
        draft.title
    );

    let receipt = submit(contract.as_ref(), &wallet, &draft, now_ts()).await?;
    println!("tx {} ({})", receipt.tx_hash, receipt.status);
    Ok(())
}
