//! whistlevault: client-side logic for a DAO whistleblowing contract.
//!
//! The crate is the derivation layer a front-end consults: field
//! validators, reputation and deadline rules, access gates, the simulated
//! encryption envelope, inbox derivation, and a contract client seam with
//! a mock backend for running without a gateway.

pub mod access;
pub mod contract;
pub mod fhe;
pub mod format;
pub mod inbox;
pub mod logging;
pub mod monitor;
pub mod report;
pub mod reputation;
pub mod state;
pub mod submit;
pub mod validate;
pub mod wallet;
