use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::fhe::Euint32;
use crate::report::{Investigation, Report};
use crate::state::Config;

pub mod mock;
pub mod rpc;

#[derive(Clone, Copy, Debug)]
pub enum ContractKind {
    Mock,
    Rpc,
}

impl ContractKind {
    pub fn from_env() -> Self {
        match std::env::var("CONTRACT_MODE").unwrap_or_else(|_| "mock".to_string()).as_str() {
            "rpc" => ContractKind::Rpc,
            _ => ContractKind::Mock,
        }
    }

    pub fn build(self, cfg: Config) -> Result<Box<dyn ContractClient + Send + Sync>> {
        match self {
            ContractKind::Mock => Ok(Box::new(mock::MockContract::new(cfg))),
            ContractKind::Rpc => Ok(Box::new(rpc::RpcContract::new(cfg)?)),
        }
    }
}

/// Acknowledgement for a submitted transaction. Failures are surfaced as
/// errors; there is no local retry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TxReceipt {
    pub tx_hash: String,
    pub status: String,
}

/// Arguments for `submitWhistleblowerReport`.
#[derive(Debug, Clone)]
pub struct SubmitCall {
    pub severity: Euint32,
    pub category: Euint32,
    pub content_hash: String,
    pub deadline: u64,
}

/// The contract ABI surface the client consumes. Reads return snapshot
/// value types; writes return a receipt.
#[async_trait]
pub trait ContractClient {
    async fn total_reports(&self) -> Result<u64>;
    async fn total_investigations(&self) -> Result<u64>;
    async fn total_actions(&self) -> Result<u64>;
    async fn report(&self, id: u64) -> Result<Report>;
    async fn investigation(&self, id: u64) -> Result<Investigation>;
    async fn member_reputation(&self, member: &str) -> Result<u32>;
    async fn investigator_rating(&self, investigator: &str) -> Result<u32>;
    async fn is_verified_member(&self, member: &str) -> Result<bool>;

    async fn submit_report(&self, call: SubmitCall) -> Result<TxReceipt>;
    async fn start_investigation(&self, report_id: u64, priority: Euint32) -> Result<TxReceipt>;
    async fn update_investigation_status(&self, investigation_id: u64, status: Euint32) -> Result<TxReceipt>;
    async fn execute_compliance_action(
        &self,
        investigation_id: u64,
        action_type: Euint32,
        details_hash: &str,
    ) -> Result<TxReceipt>;
    async fn verify_report(&self, report_id: u64, verified: bool) -> Result<TxReceipt>;
    async fn update_investigator_rating(&self, investigator: &str, rating: Euint32) -> Result<TxReceipt>;
    async fn add_dao_member(&self, member: &str, access_level: Euint32) -> Result<TxReceipt>;
}
