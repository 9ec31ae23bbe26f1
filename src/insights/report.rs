//! Report generation
//!
//! Turns a completed security analysis into human-readable summary and
//! detail text for the presentation layer. Pure and infallible.

use crate::insights::security::{SecurityAnalysis, Severity};
use crate::models::{ConnectionStatus, NetworkConnection, NetworkNode};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Narrative report over one topology analysis
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopologyReport {
    /// One-line overview: node count, connection count, security score
    pub summary: String,
    pub infrastructure: String,
    pub security: String,
    pub performance: String,
    /// Semicolon-joined remediation advice
    pub recommendations: String,
}

impl TopologyReport {
    /// Compose the report from the original inputs and the finished analysis.
    pub fn generate(
        nodes: &[NetworkNode],
        connections: &[NetworkConnection],
        analysis: &SecurityAnalysis,
    ) -> Self {
        let summary = format!(
            "Analyzed {} nodes and {} connections; security score {}/100",
            nodes.len(),
            connections.len(),
            analysis.score
        );

        let distinct_types: HashSet<&str> =
            nodes.iter().map(|n| n.node_type.as_str()).collect();
        let infrastructure = format!(
            "{} nodes across {} device types",
            nodes.len(),
            distinct_types.len()
        );

        let severe = analysis
            .risks
            .iter()
            .filter(|r| matches!(r.level, Severity::Critical | Severity::High))
            .count();
        let security = format!(
            "{} risk finding(s), {} high or critical",
            analysis.risks.len(),
            severe
        );

        let performance = performance_line(nodes, connections);
        let recommendations = analysis.recommendations.join("; ");

        Self {
            summary,
            infrastructure,
            security,
            performance,
            recommendations,
        }
    }
}

fn performance_line(nodes: &[NetworkNode], connections: &[NetworkConnection]) -> String {
    let cpu_samples: Vec<f32> = nodes
        .iter()
        .filter_map(|n| n.performance.as_ref().and_then(|p| p.cpu))
        .collect();
    let mean_cpu = if cpu_samples.is_empty() {
        0.0
    } else {
        cpu_samples.iter().sum::<f32>() / cpu_samples.len() as f32
    };

    let active_pct = if connections.is_empty() {
        0.0
    } else {
        let active = connections
            .iter()
            .filter(|c| c.status == ConnectionStatus::Active)
            .count();
        active as f32 / connections.len() as f32 * 100.0
    };

    format!(
        "Average CPU {:.1}%; {:.0}% of connections active",
        mean_cpu, active_pct
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{NodeType, PerformanceMetrics};

    #[test]
    fn report_counts_nodes_and_types() {
        let nodes = vec![
            NetworkNode::new("a", "10.0.0.1", "a", NodeType::Router),
            NetworkNode::new("b", "10.0.0.2", "b", NodeType::Server),
            NetworkNode::new("c", "10.0.0.3", "c", NodeType::Server),
        ];
        let analysis = SecurityAnalysis::analyze(&nodes, &[]);
        let report = TopologyReport::generate(&nodes, &[], &analysis);

        assert!(report.summary.contains("3 nodes"));
        assert!(report.infrastructure.contains("2 device types"));
        assert!(report.security.contains("1 risk finding(s)"));
    }

    #[test]
    fn performance_line_averages_cpu_and_active_share() {
        let mut a = NetworkNode::new("a", "10.0.0.1", "a", NodeType::Server);
        a.performance = Some(PerformanceMetrics {
            cpu: Some(40.0),
            ..Default::default()
        });
        let mut b = NetworkNode::new("b", "10.0.0.2", "b", NodeType::Server);
        b.performance = Some(PerformanceMetrics {
            cpu: Some(60.0),
            ..Default::default()
        });
        let conns = vec![
            NetworkConnection::new("10.0.0.1", "10.0.0.2", "HTTPS", ConnectionStatus::Active),
            NetworkConnection::new("10.0.0.2", "10.0.0.1", "SSH", ConnectionStatus::Inactive),
        ];

        let line = performance_line(&[a, b], &conns);
        assert!(line.contains("50.0%"));
        assert!(line.contains("50% of connections active"));
    }

    #[test]
    fn empty_topology_report_does_not_panic() {
        let analysis = SecurityAnalysis::analyze(&[], &[]);
        let report = TopologyReport::generate(&[], &[], &analysis);
        assert!(report.summary.contains("0 nodes"));
        assert!(report.performance.contains("0.0%"));
        assert!(report.recommendations.contains("firewall"));
    }
}
