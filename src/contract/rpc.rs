//! HTTP gateway backend for the deployed contract.
//!
//! The gateway fronts the chain node: reads are plain `{method, params}`
//! envelopes, writes additionally carry the sender address and an
//! HMAC-signed copy of the envelope. Large numerics arrive as decimal
//! strings, small ones as JSON numbers.

use anyhow::{anyhow, Result};
use reqwest::Client;
use serde::Deserialize;
use serde_json::{json, Value};
use url::Url;

use crate::logging::log_contract_call;
use crate::report::{Investigation, Report};
use crate::state::{now_ts, Config};
use crate::wallet::Wallet;

use super::{ContractClient, SubmitCall, TxReceipt};

pub struct RpcContract {
    client: Client,
    base: Url,
    contract_address: String,
    wallet: Wallet,
}

impl RpcContract {
    pub fn new(cfg: Config) -> Result<Self> {
        let base = Url::parse(&cfg.rpc_base).map_err(|e| anyhow!("invalid RPC_BASE: {}", e))?;
        Ok(Self {
            client: Client::new(),
            base,
            contract_address: cfg.contract_address.clone(),
            wallet: cfg.wallet(),
        })
    }

    fn endpoint(&self) -> Result<Url> {
        self.base.join("rpc").map_err(|e| anyhow!("invalid RPC endpoint: {}", e))
    }

    async fn call(&self, method: &str, params: Vec<Value>) -> Result<Value> {
        let body = json!({
            "contract": self.contract_address,
            "method": method,
            "params": params,
        });
        self.post(method, body).await
    }

    async fn send(&self, method: &str, params: Vec<Value>) -> Result<TxReceipt> {
        let sender = self.wallet.address()?.to_string();
        let mut body = json!({
            "contract": self.contract_address,
            "method": method,
            "params": params,
            "sender": sender,
            "ts": now_ts(),
        });
        let signature = self.wallet.sign_payload(&body.to_string())?;
        body["signature"] = json!(signature);
        let result = self.post(method, body).await?;
        let row: TxReceiptRow = serde_json::from_value(result)
            .map_err(|e| anyhow!("{} receipt parse failed: {}", method, e))?;
        Ok(TxReceipt { tx_hash: row.tx_hash, status: row.status })
    }

    async fn post(&self, method: &str, body: Value) -> Result<Value> {
        let resp = self.client.post(self.endpoint()?).json(&body).send().await?;
        let status = resp.status();
        let text = resp.text().await?;

        if !status.is_success() {
            let err: GatewayError = serde_json::from_str(&text)
                .unwrap_or(GatewayError { code: -1, msg: text.clone() });
            log_contract_call(method, "error", &err.msg);
            return Err(anyhow!("{} failed: {} - {}", method, err.code, err.msg));
        }
        log_contract_call(method, "ok", "");

        let envelope: Value = serde_json::from_str(&text)?;
        envelope
            .get("result")
            .cloned()
            .ok_or_else(|| anyhow!("{} returned no result", method))
    }
}

#[derive(Deserialize, Debug)]
struct GatewayError {
    code: i64,
    msg: String,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct TxReceiptRow {
    tx_hash: String,
    status: String,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct ReportRow {
    id: Value,
    severity: u32,
    category: u32,
    is_verified: bool,
    is_processed: bool,
    report_hash: String,
    reporter: String,
    assigned_investigator: String,
    timestamp: Value,
    deadline: Value,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct InvestigationRow {
    id: Value,
    report_id: Value,
    status: u32,
    priority: u32,
    is_active: bool,
    #[serde(default)]
    findings_hash: String,
    investigator: String,
    start_time: Value,
    end_time: Value,
}

/// uint256 values arrive either as JSON numbers or decimal strings.
fn as_u64(v: &Value) -> u64 {
    v.as_u64()
        .or_else(|| v.as_str().and_then(|s| s.parse().ok()))
        .unwrap_or(0)
}

impl From<ReportRow> for Report {
    fn from(row: ReportRow) -> Self {
        Report {
            id: as_u64(&row.id),
            severity: row.severity,
            category: row.category,
            verified: row.is_verified,
            processed: row.is_processed,
            content_hash: row.report_hash,
            reporter: row.reporter,
            investigator: row.assigned_investigator,
            submitted_at: as_u64(&row.timestamp),
            deadline: as_u64(&row.deadline),
        }
    }
}

impl From<InvestigationRow> for Investigation {
    fn from(row: InvestigationRow) -> Self {
        Investigation {
            id: as_u64(&row.id),
            report_id: as_u64(&row.report_id),
            status: row.status,
            priority: row.priority,
            active: row.is_active,
            findings_hash: row.findings_hash,
            investigator: row.investigator,
            started_at: as_u64(&row.start_time),
            ended_at: as_u64(&row.end_time),
        }
    }
}

#[async_trait::async_trait]
impl ContractClient for RpcContract {
    async fn total_reports(&self) -> Result<u64> {
        Ok(as_u64(&self.call("getTotalReports", vec![]).await?))
    }

    async fn total_investigations(&self) -> Result<u64> {
        Ok(as_u64(&self.call("getTotalInvestigations", vec![]).await?))
    }

    async fn total_actions(&self) -> Result<u64> {
        Ok(as_u64(&self.call("getTotalActions", vec![]).await?))
    }

    async fn report(&self, id: u64) -> Result<Report> {
        let result = self.call("getReport", vec![json!(id)]).await?;
        let row: ReportRow = serde_json::from_value(result)
            .map_err(|e| anyhow!("getReport parse failed: {}", e))?;
        Ok(row.into())
    }

    async fn investigation(&self, id: u64) -> Result<Investigation> {
        let result = self.call("getInvestigation", vec![json!(id)]).await?;
        let row: InvestigationRow = serde_json::from_value(result)
            .map_err(|e| anyhow!("getInvestigation parse failed: {}", e))?;
        Ok(row.into())
    }

    async fn member_reputation(&self, member: &str) -> Result<u32> {
        let result = self.call("getMemberReputation", vec![json!(member)]).await?;
        Ok(as_u64(&result) as u32)
    }

    async fn investigator_rating(&self, investigator: &str) -> Result<u32> {
        let result = self.call("getInvestigatorRating", vec![json!(investigator)]).await?;
        Ok(as_u64(&result) as u32)
    }

    async fn is_verified_member(&self, member: &str) -> Result<bool> {
        let result = self.call("isVerifiedMember", vec![json!(member)]).await?;
        Ok(result.as_bool().unwrap_or(false))
    }

    async fn submit_report(&self, call: SubmitCall) -> Result<TxReceipt> {
        self.send(
            "submitWhistleblowerReport",
            vec![
                json!(call.severity.decrypt()),
                json!(call.category.decrypt()),
                json!(call.content_hash),
                json!(call.deadline),
            ],
        )
        .await
    }

    async fn start_investigation(&self, report_id: u64, priority: crate::fhe::Euint32) -> Result<TxReceipt> {
        self.send("startInvestigation", vec![json!(report_id), json!(priority.decrypt())]).await
    }

    async fn update_investigation_status(
        &self,
        investigation_id: u64,
        status: crate::fhe::Euint32,
    ) -> Result<TxReceipt> {
        self.send(
            "updateInvestigationStatus",
            vec![json!(investigation_id), json!(status.decrypt())],
        )
        .await
    }

    async fn execute_compliance_action(
        &self,
        investigation_id: u64,
        action_type: crate::fhe::Euint32,
        details_hash: &str,
    ) -> Result<TxReceipt> {
        self.send(
            "executeComplianceAction",
            vec![json!(investigation_id), json!(action_type.decrypt()), json!(details_hash)],
        )
        .await
    }

    async fn verify_report(&self, report_id: u64, verified: bool) -> Result<TxReceipt> {
        self.send("verifyReport", vec![json!(report_id), json!(verified)]).await
    }

    async fn update_investigator_rating(
        &self,
        investigator: &str,
        rating: crate::fhe::Euint32,
    ) -> Result<TxReceipt> {
        self.send("updateInvestigatorRating", vec![json!(investigator), json!(rating.decrypt())]).await
    }

    async fn add_dao_member(&self, member: &str, access_level: crate::fhe::Euint32) -> Result<TxReceipt> {
        self.send("addDAOMember", vec![json!(member), json!(access_level.decrypt())]).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_u64_accepts_numbers_and_strings() {
        assert_eq!(as_u64(&json!(42)), 42);
        assert_eq!(as_u64(&json!("42")), 42);
        assert_eq!(as_u64(&json!("1700000000")), 1_700_000_000);
        assert_eq!(as_u64(&json!("not a number")), 0);
        assert_eq!(as_u64(&json!(null)), 0);
    }

    #[test]
    fn test_report_row_maps_to_report() {
        let row: ReportRow = serde_json::from_value(json!({
            "id": "3",
            "severity": 4,
            "category": 9,
            "isVerified": true,
            "isProcessed": false,
            "reportHash": "QmYwAPJzv5CZsnA625s3Xf2nemtYgPpHdWEz79ojWnPbdG",
            "reporter": "0x1111111111111111111111111111111111111111",
            "assignedInvestigator": "0x0000000000000000000000000000000000000000",
            "timestamp": "1700000000",
            "deadline": 1702592000u64,
        }))
        .unwrap();
        let report: Report = row.into();
        assert_eq!(report.id, 3);
        assert_eq!(report.severity, 4);
        assert!(report.verified);
        assert!(!report.processed);
        assert!(!report.has_investigator());
        assert_eq!(report.submitted_at, 1_700_000_000);
        assert_eq!(report.deadline, 1_702_592_000);
    }

    #[test]
    fn test_investigation_row_defaults_findings() {
        let row: InvestigationRow = serde_json::from_value(json!({
            "id": 1,
            "reportId": "0",
            "status": 2,
            "priority": 5,
            "isActive": true,
            "investigator": "0x2222222222222222222222222222222222222222",
            "startTime": 1700000000u64,
            "endTime": "1702592000",
        }))
        .unwrap();
        let inv: Investigation = row.into();
        assert_eq!(inv.id, 1);
        assert!(inv.active);
        assert!(!inv.has_findings());
        assert_eq!(inv.ended_at, 1_702_592_000);
    }

    #[test]
    fn test_new_rejects_bad_base_url() {
        let cfg = Config {
            rpc_base: "not a url".to_string(),
            ..crate::state::test_config()
        };
        assert!(RpcContract::new(cfg).is_err());
    }

    #[test]
    fn test_gateway_error_parse() {
        let err: GatewayError = serde_json::from_str("{\"code\":-32000,\"msg\":\"execution reverted\"}").unwrap();
        assert_eq!(err.code, -32000);
        assert_eq!(err.msg, "execution reverted");
    }
}
