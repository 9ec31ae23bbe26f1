//! Topology analysis workflow
//!
//! Composes layout, risk analysis and report generation into one bundle,
//! optionally memoized through the topology cache.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::cache::TopologyCache;
use crate::insights::{SecurityAnalysis, TopologyReport};
use crate::layout::{compute_layout, LayoutOptions, LayoutResult};
use crate::models::{NetworkConnection, NetworkNode};

/// Complete analysis bundle for one topology snapshot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopologyAnalysis {
    pub layout: LayoutResult,
    pub security: SecurityAnalysis,
    pub report: TopologyReport,
    pub generated_at: DateTime<Utc>,
}

/// Run the full pipeline: layout, then risk scoring, then the report.
pub fn analyze_topology(
    nodes: &[NetworkNode],
    connections: &[NetworkConnection],
    options: &LayoutOptions,
) -> TopologyAnalysis {
    let started = Instant::now();
    tracing::debug!(
        nodes = nodes.len(),
        connections = connections.len(),
        "starting topology analysis"
    );

    let layout = compute_layout(nodes, connections, options);
    let security = SecurityAnalysis::analyze(nodes, connections);
    let report = TopologyReport::generate(nodes, connections, &security);

    tracing::info!(
        score = security.score,
        risks = security.risks.len(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "topology analysis complete"
    );

    TopologyAnalysis {
        layout,
        security,
        report,
        generated_at: Utc::now(),
    }
}

/// Memoized variant: returns a cached bundle when one is still live for
/// `key`, otherwise computes and stores a fresh one.
pub fn analyze_topology_cached(
    cache: &mut TopologyCache<TopologyAnalysis>,
    key: &str,
    nodes: &[NetworkNode],
    connections: &[NetworkConnection],
    options: &LayoutOptions,
) -> TopologyAnalysis {
    if let Some(hit) = cache.get(key) {
        tracing::debug!(key, "topology cache hit");
        return hit.clone();
    }

    let analysis = analyze_topology(nodes, connections, options);
    cache.set(key, analysis.clone());
    analysis
}
