//! Top-level routed pages.

pub mod dashboard;
pub mod login;
pub mod register;
