//! Display helpers for inbox rendering.

use chrono::{TimeZone, Utc};

/// Full UTC rendering, e.g. "2024-03-01 14:30:05 UTC".
pub fn format_timestamp(ts: u64) -> String {
    match Utc.timestamp_opt(ts as i64, 0).single() {
        Some(dt) => dt.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
        None => format!("@{}", ts),
    }
}

/// Compact rendering for list rows, e.g. "Mar 01 14:30".
pub fn format_date_short(ts: u64) -> String {
    match Utc.timestamp_opt(ts as i64, 0).single() {
        Some(dt) => dt.format("%b %d %H:%M").to_string(),
        None => format!("@{}", ts),
    }
}

/// "0x1234...abcd" truncation; short strings pass through untouched.
pub fn format_address(address: &str) -> String {
    if address.len() <= 10 {
        return address.to_string();
    }
    format!("{}...{}", &address[..6], &address[address.len() - 4..])
}

/// Zero-padded report code, e.g. "RPT-007".
pub fn report_code(id: u64) -> String {
    format!("RPT-{:03}", id)
}

/// Zero-padded investigation code, e.g. "INV-012".
pub fn investigation_code(id: u64) -> String {
    format!("INV-{:03}", id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_timestamp() {
        // 2023-11-14 22:13:20 UTC
        assert_eq!(format_timestamp(1_700_000_000), "2023-11-14 22:13:20 UTC");
        assert_eq!(format_timestamp(0), "1970-01-01 00:00:00 UTC");
    }

    #[test]
    fn test_format_date_short() {
        assert_eq!(format_date_short(1_700_000_000), "Nov 14 22:13");
    }

    #[test]
    fn test_format_address() {
        let addr = "0x52908400098527886E0F7030069857D2E4169EE7";
        assert_eq!(format_address(addr), "0x5290...9EE7");
        // Too short to truncate
        assert_eq!(format_address("0x1234"), "0x1234");
        assert_eq!(format_address(""), "");
    }

    #[test]
    fn test_record_codes() {
        assert_eq!(report_code(0), "RPT-000");
        assert_eq!(report_code(7), "RPT-007");
        assert_eq!(report_code(42), "RPT-042");
        assert_eq!(report_code(1234), "RPT-1234");
        assert_eq!(investigation_code(3), "INV-003");
    }
}
