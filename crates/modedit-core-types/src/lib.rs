//! Core types shared across modedit crates
//!
//! - **Correlation types**: RequestId for tying log lines and error bodies
//!   to a single API call
//! - **Schema constants**: Canonical field keys and event names

pub mod correlation;
pub mod schema;

pub use correlation::RequestId;
