//! Force-directed layout engine
//!
//! Places topology nodes on a bounded canvas using a Coulomb/Hooke
//! simulation: all node pairs repel, connected nodes attract, and an
//! optional center node stays pinned at canvas center. Positions are a
//! visual heuristic, not a physical model.

pub mod style;

use crate::config::{
    CANVAS_MARGIN, DAMPING, DEFAULT_ATTRACTION, DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_WIDTH,
    DEFAULT_ITERATIONS, DEFAULT_REPULSION, MIN_DISTANCE, NODE_ANCHOR,
};
use crate::insights::importance::{importance_score, ImportanceClass};
use crate::models::{NetworkConnection, NetworkNode, Point};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use style::{is_animated, EdgeStyle};

/// Layout tuning parameters. All fields have defaults; `seed` pins the
/// initial random placement for reproducible output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutOptions {
    pub width: f64,
    pub height: f64,
    /// IP of the node to pin at canvas center
    pub center_ip: Option<String>,
    pub iterations: u32,
    pub repulsion: f64,
    pub attraction: f64,
    pub seed: Option<u64>,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            width: DEFAULT_CANVAS_WIDTH,
            height: DEFAULT_CANVAS_HEIGHT,
            center_ip: None,
            iterations: DEFAULT_ITERATIONS,
            repulsion: DEFAULT_REPULSION,
            attraction: DEFAULT_ATTRACTION,
            seed: None,
        }
    }
}

/// A node with its computed canvas position and importance class
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PositionedNode {
    pub id: String,
    /// Top-left anchor position; the node's visual center sits on the
    /// computed simulation point
    pub position: Point,
    pub importance: ImportanceClass,
    pub node: NetworkNode,
}

/// A render-ready edge between two positioned nodes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StyledEdge {
    pub id: String,
    pub source: String,
    pub target: String,
    /// `protocol:port`, or just the protocol when no port is known
    pub label: String,
    pub style: EdgeStyle,
    pub animated: bool,
}

/// Output of one layout run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutResult {
    pub nodes: Vec<PositionedNode>,
    pub edges: Vec<StyledEdge>,
}

/// Run the force simulation and produce positioned nodes and styled edges.
///
/// Connections whose endpoints are not in the node list exert no force and
/// are excluded from the edge list. With zero iterations nodes remain at
/// their initial random positions.
pub fn compute_layout(
    nodes: &[NetworkNode],
    connections: &[NetworkConnection],
    options: &LayoutOptions,
) -> LayoutResult {
    let mut rng: StdRng = match options.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let index: HashMap<&str, usize> = nodes
        .iter()
        .enumerate()
        .map(|(i, n)| (n.ip.as_str(), i))
        .collect();
    let center_idx = options
        .center_ip
        .as_deref()
        .and_then(|ip| index.get(ip).copied());
    let center = Point::new(options.width / 2.0, options.height / 2.0);

    // Clamp bounds collapse to a single line on canvases narrower than
    // twice the margin; degenerate options must not panic
    let clamp_max_x = (options.width - CANVAS_MARGIN).max(CANVAS_MARGIN);
    let clamp_max_y = (options.height - CANVAS_MARGIN).max(CANVAS_MARGIN);

    // Initial placement: random across the canvas, center node pinned
    let mut positions: Vec<Point> = nodes
        .iter()
        .enumerate()
        .map(|(i, _)| {
            if Some(i) == center_idx {
                center
            } else {
                Point::new(
                    random_coord(&mut rng, options.width),
                    random_coord(&mut rng, options.height),
                )
            }
        })
        .collect();
    let mut velocities = vec![Point::default(); nodes.len()];

    for _ in 0..options.iterations {
        for v in velocities.iter_mut() {
            *v = Point::default();
        }

        // Coulomb repulsion between every unordered pair
        for i in 0..positions.len() {
            for j in (i + 1)..positions.len() {
                let dx = positions[j].x - positions[i].x;
                let dy = positions[j].y - positions[i].y;
                let dist = (dx * dx + dy * dy).sqrt().max(MIN_DISTANCE);
                let force = options.repulsion / (dist * dist);
                let fx = dx / dist * force;
                let fy = dy / dist * force;
                velocities[i].x -= fx;
                velocities[i].y -= fy;
                velocities[j].x += fx;
                velocities[j].y += fy;
            }
        }

        // Hooke attraction along each connection; dangling endpoints skipped
        for conn in connections {
            let (Some(&a), Some(&b)) = (
                index.get(conn.source_ip.as_str()),
                index.get(conn.dest_ip.as_str()),
            ) else {
                continue;
            };
            let dx = positions[b].x - positions[a].x;
            let dy = positions[b].y - positions[a].y;
            let fx = dx * options.attraction;
            let fy = dy * options.attraction;
            velocities[a].x += fx;
            velocities[a].y += fy;
            velocities[b].x -= fx;
            velocities[b].y -= fy;
        }

        // Damp, integrate, then re-pin the center and clamp to the canvas
        for i in 0..positions.len() {
            velocities[i].x *= DAMPING;
            velocities[i].y *= DAMPING;
            positions[i].x += velocities[i].x;
            positions[i].y += velocities[i].y;
        }
        if let Some(c) = center_idx {
            positions[c] = center;
        }
        for (i, pos) in positions.iter_mut().enumerate() {
            if Some(i) != center_idx {
                pos.x = pos.x.clamp(CANVAS_MARGIN, clamp_max_x);
                pos.y = pos.y.clamp(CANVAS_MARGIN, clamp_max_y);
            }
        }
    }

    let positioned: Vec<PositionedNode> = nodes
        .iter()
        .zip(&positions)
        .map(|(node, pos)| PositionedNode {
            id: node.id.clone(),
            position: Point::new(pos.x - NODE_ANCHOR, pos.y - NODE_ANCHOR),
            importance: ImportanceClass::from_score(importance_score(node)),
            node: node.clone(),
        })
        .collect();

    let edges: Vec<StyledEdge> = connections
        .iter()
        .enumerate()
        .filter(|(_, c)| {
            index.contains_key(c.source_ip.as_str()) && index.contains_key(c.dest_ip.as_str())
        })
        .map(|(i, c)| StyledEdge {
            id: format!("e{}-{}-{}", i, c.source_ip, c.dest_ip),
            source: c.source_ip.clone(),
            target: c.dest_ip.clone(),
            label: match c.dest_port {
                Some(port) => format!("{}:{}", c.protocol, port),
                None => c.protocol.clone(),
            },
            style: EdgeStyle::derive(c),
            animated: is_animated(c),
        })
        .collect();

    tracing::debug!(
        nodes = positioned.len(),
        edges = edges.len(),
        iterations = options.iterations,
        "layout computed"
    );

    LayoutResult {
        nodes: positioned,
        edges,
    }
}

/// Random coordinate within `[0, extent)`; a non-positive extent is an
/// empty sampling range and maps to 0
fn random_coord(rng: &mut StdRng, extent: f64) -> f64 {
    if extent > 0.0 {
        rng.gen_range(0.0..extent)
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ConnectionStatus, NodeType};

    fn node(ip: &str, node_type: NodeType) -> NetworkNode {
        NetworkNode::new(ip, ip, ip, node_type)
    }

    fn seeded_options(center_ip: Option<&str>) -> LayoutOptions {
        LayoutOptions {
            center_ip: center_ip.map(String::from),
            seed: Some(42),
            ..Default::default()
        }
    }

    #[test]
    fn center_node_stays_pinned_at_canvas_center() {
        let nodes = vec![
            node("10.0.0.1", NodeType::Target),
            node("10.0.0.2", NodeType::Server),
            node("10.0.0.3", NodeType::Device),
        ];
        let conns = vec![NetworkConnection::new(
            "10.0.0.1",
            "10.0.0.2",
            "HTTPS",
            ConnectionStatus::Active,
        )];
        let options = seeded_options(Some("10.0.0.1"));
        let result = compute_layout(&nodes, &conns, &options);

        let center = result.nodes.iter().find(|n| n.id == "10.0.0.1").unwrap();
        assert_eq!(center.position.x, options.width / 2.0 - NODE_ANCHOR);
        assert_eq!(center.position.y, options.height / 2.0 - NODE_ANCHOR);
    }

    #[test]
    fn all_nodes_end_inside_the_margins() {
        let nodes: Vec<NetworkNode> = (1..=12)
            .map(|i| node(&format!("10.0.0.{}", i), NodeType::Device))
            .collect();
        let options = seeded_options(None);
        let result = compute_layout(&nodes, &[], &options);

        for positioned in &result.nodes {
            let x = positioned.position.x + NODE_ANCHOR;
            let y = positioned.position.y + NODE_ANCHOR;
            assert!((CANVAS_MARGIN..=options.width - CANVAS_MARGIN).contains(&x));
            assert!((CANVAS_MARGIN..=options.height - CANVAS_MARGIN).contains(&y));
        }
    }

    #[test]
    fn same_seed_gives_identical_layout() {
        let nodes = vec![
            node("10.0.0.1", NodeType::Router),
            node("10.0.0.2", NodeType::Server),
            node("10.0.0.3", NodeType::Device),
        ];
        let conns = vec![NetworkConnection::new(
            "10.0.0.2",
            "10.0.0.3",
            "SSH",
            ConnectionStatus::Active,
        )];
        let options = seeded_options(None);

        let first = compute_layout(&nodes, &conns, &options);
        let second = compute_layout(&nodes, &conns, &options);
        for (a, b) in first.nodes.iter().zip(&second.nodes) {
            assert_eq!(a.position, b.position);
        }
    }

    #[test]
    fn dangling_connection_is_excluded_without_panic() {
        let nodes = vec![node("10.0.0.1", NodeType::Server)];
        let conns = vec![
            NetworkConnection::new("10.0.0.1", "10.9.9.9", "HTTP", ConnectionStatus::Active),
        ];
        let result = compute_layout(&nodes, &conns, &seeded_options(None));
        assert!(result.edges.is_empty());
        assert_eq!(result.nodes.len(), 1);
    }

    #[test]
    fn empty_topology_yields_empty_layout() {
        let result = compute_layout(&[], &[], &seeded_options(Some("10.0.0.1")));
        assert!(result.nodes.is_empty());
        assert!(result.edges.is_empty());
    }

    #[test]
    fn zero_iterations_leaves_nodes_at_initial_positions() {
        let nodes = vec![node("10.0.0.1", NodeType::Device)];
        let options = LayoutOptions {
            iterations: 0,
            seed: Some(7),
            ..Default::default()
        };
        let result = compute_layout(&nodes, &[], &options);
        // No clamping pass ran; position is whatever the RNG produced
        let raw = Point::new(
            result.nodes[0].position.x + NODE_ANCHOR,
            result.nodes[0].position.y + NODE_ANCHOR,
        );
        assert!((0.0..options.width).contains(&raw.x));
        assert!((0.0..options.height).contains(&raw.y));
    }

    #[test]
    fn canvas_narrower_than_margins_does_not_panic() {
        let nodes = vec![
            node("10.0.0.1", NodeType::Server),
            node("10.0.0.2", NodeType::Device),
        ];
        let options = LayoutOptions {
            width: 80.0,
            height: 80.0,
            iterations: 1,
            seed: Some(3),
            ..Default::default()
        };
        let result = compute_layout(&nodes, &[], &options);

        // Both clamp bounds collapse onto the margin line
        for positioned in &result.nodes {
            assert_eq!(positioned.position.x + NODE_ANCHOR, CANVAS_MARGIN);
            assert_eq!(positioned.position.y + NODE_ANCHOR, CANVAS_MARGIN);
        }
    }

    #[test]
    fn zero_sized_canvas_does_not_panic() {
        let nodes = vec![
            node("10.0.0.1", NodeType::Server),
            node("10.0.0.2", NodeType::Device),
        ];
        let options = LayoutOptions {
            width: 0.0,
            height: 0.0,
            center_ip: Some("10.0.0.1".to_string()),
            seed: Some(3),
            ..Default::default()
        };
        let result = compute_layout(&nodes, &[], &options);

        assert_eq!(result.nodes.len(), 2);
        for positioned in &result.nodes {
            assert!(positioned.position.x.is_finite());
            assert!(positioned.position.y.is_finite());
        }
    }

    #[test]
    fn important_nodes_are_annotated_high() {
        let nodes = vec![
            node("10.0.0.1", NodeType::Target),
            node("10.0.0.2", NodeType::Mobile),
        ];
        let result = compute_layout(&nodes, &[], &seeded_options(None));
        let by_ip: HashMap<&str, ImportanceClass> = result
            .nodes
            .iter()
            .map(|n| (n.node.ip.as_str(), n.importance))
            .collect();
        assert_eq!(by_ip["10.0.0.1"], ImportanceClass::High);
        assert_eq!(by_ip["10.0.0.2"], ImportanceClass::Normal);
    }

    #[test]
    fn edge_labels_carry_protocol_and_port() {
        let nodes = vec![
            node("10.0.0.1", NodeType::Server),
            node("10.0.0.2", NodeType::Device),
        ];
        let mut conn =
            NetworkConnection::new("10.0.0.1", "10.0.0.2", "MySQL", ConnectionStatus::Active);
        conn.dest_port = Some(3306);
        let result = compute_layout(&nodes, &[conn], &seeded_options(None));
        assert_eq!(result.edges[0].label, "MySQL:3306");
    }
}
