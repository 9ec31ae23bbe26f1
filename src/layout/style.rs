//! Edge style derivation
//!
//! Maps connection status, protocol and bandwidth onto render attributes
//! for the consuming graph surface. Deterministic, no randomness.

use crate::config::{ANIMATED_BANDWIDTH, ENCRYPTED_PROTOCOLS, MAX_EDGE_WIDTH};
use crate::models::{ConnectionStatus, NetworkConnection};
use serde::{Deserialize, Serialize};

const COLOR_THREAT: &str = "#ef4444";
const COLOR_ENCRYPTED: &str = "#22c55e";
const COLOR_PLAINTEXT: &str = "#3b82f6";
const COLOR_BLOCKED: &str = "#f97316";
const COLOR_IDLE: &str = "#9ca3af";

/// Render attributes for one edge
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EdgeStyle {
    pub color: String,
    pub width: f64,
    pub dashed: bool,
    pub arrow_color: String,
}

impl EdgeStyle {
    fn solid(color: &str, width: f64) -> Self {
        Self {
            color: color.to_string(),
            width,
            dashed: false,
            arrow_color: color.to_string(),
        }
    }

    fn dashed(color: &str, width: f64) -> Self {
        Self {
            dashed: true,
            ..Self::solid(color, width)
        }
    }

    /// Derive the style for a connection from its status, protocol and
    /// bandwidth.
    pub fn derive(conn: &NetworkConnection) -> Self {
        match conn.status {
            ConnectionStatus::Threat => Self::dashed(COLOR_THREAT, 3.0),
            ConnectionStatus::Active => {
                let color = if is_encrypted(&conn.protocol) {
                    COLOR_ENCRYPTED
                } else {
                    COLOR_PLAINTEXT
                };
                let width = (1.0 + conn.bandwidth.unwrap_or(0.0) as f64 / 100.0)
                    .min(MAX_EDGE_WIDTH);
                Self::solid(color, width)
            }
            ConnectionStatus::Blocked => Self::dashed(COLOR_BLOCKED, 2.0),
            ConnectionStatus::Inactive => Self::dashed(COLOR_IDLE, 1.0),
            ConnectionStatus::Timeout => Self::solid(COLOR_IDLE, 1.0),
        }
    }
}

/// High-traffic active edges are flagged for animation by the renderer
pub fn is_animated(conn: &NetworkConnection) -> bool {
    conn.status == ConnectionStatus::Active
        && conn.bandwidth.is_some_and(|bw| bw > ANIMATED_BANDWIDTH)
}

fn is_encrypted(protocol: &str) -> bool {
    ENCRYPTED_PROTOCOLS.contains(&protocol.to_uppercase().as_str())
}
