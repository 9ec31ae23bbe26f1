//! Node importance scoring
//!
//! Heuristic weighting of how structurally critical a node is within
//! the topology. Pure arithmetic, no failure modes.

use crate::config::{
    BANDWIDTH_HEAVY_THRESHOLD, CPU_HOT_THRESHOLD, CRITICAL_PORT_MAX, IMPORTANCE_HIGH_THRESHOLD,
    IMPORTANCE_MAX,
};
use crate::models::{NetworkNode, NodeType};
use serde::{Deserialize, Serialize};

/// Importance class attached to positioned nodes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImportanceClass {
    High,
    Normal,
}

impl ImportanceClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            ImportanceClass::High => "high",
            ImportanceClass::Normal => "normal",
        }
    }

    /// Classify a raw importance score
    pub fn from_score(score: u16) -> Self {
        if score > IMPORTANCE_HIGH_THRESHOLD {
            ImportanceClass::High
        } else {
            ImportanceClass::Normal
        }
    }
}

/// Calculate the importance score for a node (0-200)
///
/// Sums a base weight for the node type, threat count, connection degree
/// (capped), privileged-port exposure, and load indicators.
pub fn importance_score(node: &NetworkNode) -> u16 {
    let mut score: u32 = match node.node_type {
        NodeType::Target => 100,
        NodeType::Firewall => 80,
        NodeType::Router => 70,
        NodeType::LoadBalancer => 60,
        NodeType::Server => 50,
        NodeType::Database => 45,
        _ => 0,
    };

    score += node.threats.unwrap_or(0) * 15;
    score += (node.connections.unwrap_or(0) * 3).min(30);

    let critical_ports = node.ports.iter().filter(|p| **p < CRITICAL_PORT_MAX).count();
    score += critical_ports as u32 * 10;

    if let Some(perf) = &node.performance {
        if perf.cpu.is_some_and(|cpu| cpu > CPU_HOT_THRESHOLD) {
            score += 20;
        }
        if perf
            .bandwidth
            .is_some_and(|bw| bw > BANDWIDTH_HEAVY_THRESHOLD)
        {
            score += 15;
        }
    }

    score.min(IMPORTANCE_MAX as u32) as u16
}
