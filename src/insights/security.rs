//! Security risk analysis
//!
//! Scores aggregate topology risk on a 0-100 scale and emits ordered,
//! severity-tagged findings with remediation advice. Each deduction is a
//! named rule in an ordered table so rules can be tested in isolation.

use crate::config::{CPU_HOT_THRESHOLD, CRITICAL_PORT_MAX, INSECURE_PROTOCOLS};
use crate::models::{NetworkConnection, NetworkNode, NodeType};
use serde::{Deserialize, Serialize};

/// Severity level for a risk finding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Critical,
    High,
    Medium,
    Low,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Critical => "CRITICAL",
            Severity::High => "HIGH",
            Severity::Medium => "MEDIUM",
            Severity::Low => "LOW",
        }
    }
}

/// A severity-tagged reason contributing to a lowered score
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskFinding {
    pub level: Severity,
    pub description: String,
}

/// Aggregate security assessment of a topology
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecurityAnalysis {
    /// Security score (0-100, higher = safer)
    pub score: u8,
    /// Findings in rule-evaluation order, not severity order
    pub risks: Vec<RiskFinding>,
    pub recommendations: Vec<String>,
}

/// Result of one rule firing against the topology
struct RuleHit {
    penalty: u32,
    severity: Severity,
    description: String,
    recommendations: Vec<String>,
}

/// A single deduction rule. Rules are independent and additive; the
/// aggregator applies them in table order.
struct RiskRule {
    id: &'static str,
    eval: fn(&[NetworkNode], &[NetworkConnection]) -> Option<RuleHit>,
}

const RULES: &[RiskRule] = &[
    RiskRule {
        id: "threatened-nodes",
        eval: threatened_nodes,
    },
    RiskRule {
        id: "critical-ports",
        eval: critical_port_exposure,
    },
    RiskRule {
        id: "insecure-protocols",
        eval: insecure_protocols,
    },
    RiskRule {
        id: "missing-firewall",
        eval: missing_firewall,
    },
    RiskRule {
        id: "cpu-saturation",
        eval: cpu_saturation,
    },
];

fn threatened_nodes(nodes: &[NetworkNode], _: &[NetworkConnection]) -> Option<RuleHit> {
    let count = nodes
        .iter()
        .filter(|n| n.threats.unwrap_or(0) > 0)
        .count();
    if count == 0 {
        return None;
    }
    Some(RuleHit {
        penalty: 15 * count as u32,
        severity: if count > 3 {
            Severity::Critical
        } else {
            Severity::High
        },
        description: format!("{} node(s) reporting active threats", count),
        recommendations: vec![
            "Isolate hosts with active threats and run incident response".to_string(),
        ],
    })
}

fn critical_port_exposure(nodes: &[NetworkNode], _: &[NetworkConnection]) -> Option<RuleHit> {
    let total: usize = nodes
        .iter()
        .map(|n| n.ports.iter().filter(|p| **p < CRITICAL_PORT_MAX).count())
        .sum();
    if total <= 5 {
        return None;
    }
    Some(RuleHit {
        penalty: 5 * total as u32,
        severity: Severity::Medium,
        description: format!("{} open ports below 1024 across the topology", total),
        recommendations: vec![
            "Close unused well-known ports or restrict them behind a firewall".to_string(),
        ],
    })
}

fn insecure_protocols(_: &[NetworkNode], connections: &[NetworkConnection]) -> Option<RuleHit> {
    let count = connections
        .iter()
        .filter(|c| INSECURE_PROTOCOLS.contains(&c.protocol.to_uppercase().as_str()))
        .count();
    if count == 0 {
        return None;
    }
    Some(RuleHit {
        penalty: 8 * count as u32,
        severity: Severity::Medium,
        description: format!("{} connection(s) using insecure protocols", count),
        recommendations: vec![
            "Replace HTTP, FTP and Telnet with HTTPS, SFTP and SSH".to_string(),
        ],
    })
}

fn missing_firewall(nodes: &[NetworkNode], _: &[NetworkConnection]) -> Option<RuleHit> {
    if nodes.iter().any(|n| n.node_type == NodeType::Firewall) {
        return None;
    }
    Some(RuleHit {
        penalty: 20,
        severity: Severity::High,
        description: "No firewall present in the topology".to_string(),
        recommendations: vec!["Deploy a firewall at the network perimeter".to_string()],
    })
}

fn cpu_saturation(nodes: &[NetworkNode], _: &[NetworkConnection]) -> Option<RuleHit> {
    let count = nodes
        .iter()
        .filter(|n| {
            n.performance
                .as_ref()
                .and_then(|p| p.cpu)
                .is_some_and(|cpu| cpu > CPU_HOT_THRESHOLD)
        })
        .count();
    if count == 0 {
        return None;
    }
    Some(RuleHit {
        penalty: 10 * count as u32,
        severity: Severity::Medium,
        description: format!("{} node(s) running above 80% CPU", count),
        recommendations: vec![
            "Investigate CPU saturation; overloaded hosts drop security telemetry".to_string(),
        ],
    })
}

impl SecurityAnalysis {
    /// Evaluate all deduction rules against the topology.
    ///
    /// The score starts at 100 and only decreases; it is floored at 0.
    pub fn analyze(nodes: &[NetworkNode], connections: &[NetworkConnection]) -> Self {
        let mut score: i64 = 100;
        let mut risks = Vec::new();
        let mut recommendations = Vec::new();

        for rule in RULES {
            if let Some(hit) = (rule.eval)(nodes, connections) {
                tracing::trace!(rule = rule.id, penalty = hit.penalty, "risk rule fired");
                score -= hit.penalty as i64;
                risks.push(RiskFinding {
                    level: hit.severity,
                    description: hit.description,
                });
                recommendations.extend(hit.recommendations);
            }
        }

        Self {
            score: score.clamp(0, 100) as u8,
            risks,
            recommendations,
        }
    }
}
