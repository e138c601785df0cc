use anyhow::Result;
use serde_json::json;
use tokio::time::{sleep, Duration};

use whistlevault::contract::ContractKind;
use whistlevault::inbox;
use whistlevault::logging::{json_log, log_inbox_summary, obj, v_str};
use whistlevault::monitor;
use whistlevault::state::{now_ts, Config};

#[tokio::main]
async fn main() -> Result<()> {
    let cfg = Config::from_env();
    let kind = ContractKind::from_env();
    let contract = kind.build(cfg.clone())?;
    let wallet = cfg.wallet();

    json_log(
        "system",
        obj(&[
            ("event", v_str("startup")),
            ("mode", v_str(&format!("{:?}", kind).to_lowercase())),
            ("contract", v_str(&cfg.contract_address)),
            ("wallet_connected", json!(wallet.is_connected())),
            ("poll_secs", json!(cfg.poll_secs)),
        ]),
    );

    loop {
        let start = now_ts();

        let total_actions = contract.total_actions().await.unwrap_or(0);
        let view = match inbox::load(contract.as_ref()).await {
            Ok(view) => view,
            Err(e) => {
                // A failed poll is logged and retried at the next boundary;
                // nothing is cached or recovered in between.
                json_log(
                    "contract",
                    obj(&[("event", v_str("poll_failed")), ("error", v_str(&e.to_string()))]),
                );
                sleep(Duration::from_secs(cfg.sleep_until_next_poll(start))).await;
                continue;
            }
        };

        let stats = view.stats(start);
        log_inbox_summary(
            stats.total_reports,
            stats.active_investigations,
            stats.resolved_reports,
            stats.pending_reports,
            stats.overdue_reports,
        );
        json_log(
            "contract",
            obj(&[("event", v_str("totals")), ("total_actions", json!(total_actions))]),
        );

        for evt in monitor::scan(&view, start, cfg.backlog_threshold) {
            json_log(
                "monitor",
                obj(&[("event", v_str(&format!("{:?}", evt)))]),
            );
        }

        let sleep_for = cfg.sleep_until_next_poll(start);
        sleep(Duration::from_secs(sleep_for)).await;
    }
}
