//! Access gates for DAO member actions.
//!
//! Advisory booleans only: the contract enforces the real permissions,
//! these mirror its thresholds so the client can gate inputs up front.

pub const MIN_REPUTATION_FOR_REPORT: u32 = 100;
pub const INVESTIGATE_ACCESS_LEVEL: u32 = 3;
pub const EXECUTE_ACTIONS_ACCESS_LEVEL: u32 = 4;
pub const MANAGE_MEMBERS_ACCESS_LEVEL: u32 = 5;

pub fn has_access_level(user_access_level: u32, required_level: u32) -> bool {
    user_access_level >= required_level
}

pub fn can_submit_report(reputation: u32) -> bool {
    reputation >= MIN_REPUTATION_FOR_REPORT
}

pub fn can_investigate(access_level: u32) -> bool {
    has_access_level(access_level, INVESTIGATE_ACCESS_LEVEL)
}

pub fn can_execute_actions(access_level: u32) -> bool {
    has_access_level(access_level, EXECUTE_ACTIONS_ACCESS_LEVEL)
}

pub fn can_manage_members(access_level: u32) -> bool {
    has_access_level(access_level, MANAGE_MEMBERS_ACCESS_LEVEL)
}
