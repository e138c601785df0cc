//! Range predicates for the numeric fields the contract stores encrypted.
//!
//! Each field lives in a closed range; everything here is a pure boolean
//! check used to gate form input before the encryption constructors run
//! the same checks with a descriptive error.

pub const SEVERITY_MIN: u32 = 1;
pub const SEVERITY_MAX: u32 = 5;
pub const CATEGORY_MIN: u32 = 1;
pub const CATEGORY_MAX: u32 = 10;
pub const PRIORITY_MIN: u32 = 1;
pub const PRIORITY_MAX: u32 = 5;
pub const STATUS_MIN: u32 = 1;
pub const STATUS_MAX: u32 = 5;
pub const ACTION_TYPE_MIN: u32 = 1;
pub const ACTION_TYPE_MAX: u32 = 10;
pub const ACCESS_LEVEL_MIN: u32 = 1;
pub const ACCESS_LEVEL_MAX: u32 = 5;

pub fn validate_severity(severity: u32) -> bool {
    (SEVERITY_MIN..=SEVERITY_MAX).contains(&severity)
}

pub fn validate_category(category: u32) -> bool {
    (CATEGORY_MIN..=CATEGORY_MAX).contains(&category)
}

pub fn validate_priority(priority: u32) -> bool {
    (PRIORITY_MIN..=PRIORITY_MAX).contains(&priority)
}

pub fn validate_status(status: u32) -> bool {
    (STATUS_MIN..=STATUS_MAX).contains(&status)
}

pub fn validate_action_type(action_type: u32) -> bool {
    (ACTION_TYPE_MIN..=ACTION_TYPE_MAX).contains(&action_type)
}

pub fn validate_access_level(access_level: u32) -> bool {
    (ACCESS_LEVEL_MIN..=ACCESS_LEVEL_MAX).contains(&access_level)
}

/// Content hashes reference off-chain storage and must carry a CID prefix
/// (v0 "Qm" or v1 "bafy"). Only the prefix is checked; the body is opaque.
pub fn validate_content_hash(hash: &str) -> bool {
    hash.starts_with("Qm") || hash.starts_with("bafy")
}
