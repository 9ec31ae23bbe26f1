//! netviz-core — Network Topology Layout & Risk Analysis
//!
//! This crate computes a visual and risk-scored model of a network
//! neighborhood:
//! - Force-directed 2-D layout of nodes and connections
//! - Per-node structural importance scoring
//! - Rule-based security risk scoring with findings and recommendations
//! - Human-readable topology reports
//! - TTL-based in-memory caching of computed bundles
//!
//! Discovery, rendering and routing are owned by the embedding
//! application; this crate consumes node/connection lists and returns
//! positioned graphs and reports.

pub mod cache;
pub mod config;
pub mod insights;
pub mod layout;
pub mod logging;
pub mod models;
pub mod workflow;

pub use cache::{Clock, SystemClock, TopologyCache};
pub use insights::{
    importance_score, ImportanceClass, RiskFinding, SecurityAnalysis, Severity, TopologyReport,
};
pub use layout::style::EdgeStyle;
pub use layout::{compute_layout, LayoutOptions, LayoutResult, PositionedNode, StyledEdge};
pub use models::{
    ConnectionStatus, NetworkConnection, NetworkNode, NodeType, PerformanceMetrics, Point,
    RiskLevel,
};
pub use workflow::{analyze_topology, analyze_topology_cached, TopologyAnalysis};
