use crate::wallet::Wallet;

#[derive(Clone)]
pub struct Config {
    pub rpc_base: String,
    pub contract_address: String,
    pub wallet_address: Option<String>,
    pub wallet_secret: Option<String>,
    pub poll_secs: u64,
    pub deadline_days: u64,
    pub backlog_threshold: usize,
    pub mock_reports: u64,
    pub mock_investigations: u64,
    pub mock_actions: u64,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            rpc_base: std::env::var("RPC_BASE").unwrap_or_else(|_| "http://127.0.0.1:8545".to_string()),
            contract_address: std::env::var("CONTRACT_ADDRESS").unwrap_or_else(|_| crate::report::ZERO_ADDRESS.to_string()),
            wallet_address: std::env::var("WALLET_ADDRESS").ok(),
            wallet_secret: std::env::var("WALLET_SECRET").ok(),
            poll_secs: std::env::var("POLL_SECS").ok().and_then(|v| v.parse().ok()).unwrap_or(60),
            deadline_days: std::env::var("DEADLINE_DAYS").ok().and_then(|v| v.parse().ok()).unwrap_or(30),
            backlog_threshold: std::env::var("BACKLOG_THRESHOLD").ok().and_then(|v| v.parse().ok()).unwrap_or(5),
            mock_reports: std::env::var("MOCK_REPORTS").ok().and_then(|v| v.parse().ok()).unwrap_or(12),
            mock_investigations: std::env::var("MOCK_INVESTIGATIONS").ok().and_then(|v| v.parse().ok()).unwrap_or(6),
            mock_actions: std::env::var("MOCK_ACTIONS").ok().and_then(|v| v.parse().ok()).unwrap_or(4),
        }
    }

    pub fn wallet(&self) -> Wallet {
        Wallet::new(self.wallet_address.clone(), self.wallet_secret.clone())
    }

    pub fn sleep_until_next_poll(&self, now_ts: u64) -> u64 {
        let next = ((now_ts / self.poll_secs) + 1) * self.poll_secs;
        next.saturating_sub(now_ts)
    }
}

pub fn now_ts() -> u64 {
    chrono::Utc::now().timestamp() as u64
}

#[cfg(test)]
pub fn test_config() -> Config {
    Config {
        rpc_base: "http://127.0.0.1:8545".to_string(),
        contract_address: crate::report::ZERO_ADDRESS.to_string(),
        wallet_address: None,
        wallet_secret: None,
        poll_secs: 60,
        deadline_days: 30,
        backlog_threshold: 5,
        mock_reports: 12,
        mock_investigations: 6,
        mock_actions: 4,
    }
}
