//! Data models for the Network Topology Analyzer

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Categorical node type supplied by topology discovery
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeType {
    Target,
    Router,
    Server,
    Internet,
    Device,
    Mobile,
    Database,
    Cloud,
    Firewall,
    LoadBalancer,
}

impl NodeType {
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeType::Target => "target",
            NodeType::Router => "router",
            NodeType::Server => "server",
            NodeType::Internet => "internet",
            NodeType::Device => "device",
            NodeType::Mobile => "mobile",
            NodeType::Database => "database",
            NodeType::Cloud => "cloud",
            NodeType::Firewall => "firewall",
            NodeType::LoadBalancer => "load_balancer",
        }
    }
}

/// Risk classification assigned by the caller's discovery layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Critical,
    High,
    Medium,
    Low,
    Unknown,
}

/// Connection state as last observed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConnectionStatus {
    Active,
    Inactive,
    Timeout,
    Blocked,
    Threat,
}

/// Optional runtime metrics attached to a node
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PerformanceMetrics {
    /// CPU utilization percentage (0-100)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpu: Option<f32>,
    /// Observed bandwidth in Mbps
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bandwidth: Option<f32>,
    /// Memory utilization percentage (0-100)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memory: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uptime_seconds: Option<u64>,
}

/// 2-D canvas coordinate
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A discovered host in the investigated neighborhood.
///
/// Immutable input to this crate; the layout engine attaches positions in
/// its own output type rather than mutating the node.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkNode {
    pub id: String,
    pub ip: String,
    pub label: String,
    #[serde(rename = "type")]
    pub node_type: NodeType,
    pub risk: RiskLevel,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ports: Vec<u16>,
    /// Number of active threats reported against this node
    #[serde(skip_serializing_if = "Option::is_none")]
    pub threats: Option<u32>,
    /// Degree hint from the discovery layer (not derived from the edge list)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connections: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub performance: Option<PerformanceMetrics>,
    /// Optional position hint; the layout engine ignores it today
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Point>,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub metadata: HashMap<String, String>,
}

impl NetworkNode {
    /// Canonical minimal constructor to avoid field drift across call-sites.
    pub fn new(
        id: impl Into<String>,
        ip: impl Into<String>,
        label: impl Into<String>,
        node_type: NodeType,
    ) -> Self {
        Self {
            id: id.into(),
            ip: ip.into(),
            label: label.into(),
            node_type,
            risk: RiskLevel::Unknown,
            ports: Vec::new(),
            threats: None,
            connections: None,
            performance: None,
            location: None,
            metadata: HashMap::new(),
        }
    }
}

/// An observed connection between two hosts, keyed by endpoint IPs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkConnection {
    pub source_ip: String,
    pub dest_ip: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_port: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dest_port: Option<u16>,
    /// Protocol name, e.g. HTTP, HTTPS, SSH, DNS, MySQL
    pub protocol: String,
    pub status: ConnectionStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bandwidth: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latency_ms: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bytes: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub packets: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
}

impl NetworkConnection {
    /// Canonical minimal constructor to avoid field drift across call-sites.
    pub fn new(
        source_ip: impl Into<String>,
        dest_ip: impl Into<String>,
        protocol: impl Into<String>,
        status: ConnectionStatus,
    ) -> Self {
        Self {
            source_ip: source_ip.into(),
            dest_ip: dest_ip.into(),
            source_port: None,
            dest_port: None,
            protocol: protocol.into(),
            status,
            bandwidth: None,
            latency_ms: None,
            bytes: None,
            packets: None,
            duration_ms: None,
            timestamp: None,
        }
    }
}
