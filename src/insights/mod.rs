//! Topology insights
//!
//! Importance scoring, rule-based risk analysis and report generation

pub mod importance;
pub mod report;
pub mod security;

pub use importance::*;
pub use report::*;
pub use security::*;
