//! Tuning constants for the topology analyzer

// ====== Layout Engine Configuration ======

/// Default canvas width in pixels
pub const DEFAULT_CANVAS_WIDTH: f64 = 800.0;

/// Default canvas height in pixels
pub const DEFAULT_CANVAS_HEIGHT: f64 = 600.0;

/// Default number of simulation iterations
pub const DEFAULT_ITERATIONS: u32 = 100;

/// Default Coulomb repulsion constant
pub const DEFAULT_REPULSION: f64 = 6000.0;

/// Default Hooke attraction constant
pub const DEFAULT_ATTRACTION: f64 = 0.001;

/// Velocity damping applied each iteration
pub const DAMPING: f64 = 0.9;

/// Minimum margin from canvas edges for non-center nodes
pub const CANVAS_MARGIN: f64 = 50.0;

/// Half of the rendered node size; emitted positions are offset by this
/// so the node's visual anchor sits on the computed point
pub const NODE_ANCHOR: f64 = 25.0;

/// Distance floor to avoid division by zero in the repulsion pass
pub const MIN_DISTANCE: f64 = 1.0;

// ====== Edge Styling ======

/// Bandwidth above which an active edge is marked animated
pub const ANIMATED_BANDWIDTH: f32 = 50.0;

/// Maximum rendered edge width
pub const MAX_EDGE_WIDTH: f64 = 3.0;

/// Protocols treated as encrypted when coloring active edges
pub const ENCRYPTED_PROTOCOLS: &[&str] = &["HTTPS", "SSH", "SFTP", "FTPS", "TLS"];

// ====== Scoring Configuration ======

/// Importance score above which a node is classed as high importance
pub const IMPORTANCE_HIGH_THRESHOLD: u16 = 50;

/// Upper bound on the importance score
pub const IMPORTANCE_MAX: u16 = 200;

/// Ports below this number count as critical ("well-known") ports
pub const CRITICAL_PORT_MAX: u16 = 1024;

/// Protocols that trigger the insecure-protocol deduction
pub const INSECURE_PROTOCOLS: &[&str] = &["HTTP", "FTP", "TELNET"];

/// CPU percentage above which a node counts as overloaded
pub const CPU_HOT_THRESHOLD: f32 = 80.0;

/// Bandwidth above which a node gains importance weight
pub const BANDWIDTH_HEAVY_THRESHOLD: f32 = 100.0;

// ====== Cache Configuration ======

/// Default cache entry time-to-live (5 minutes)
pub const DEFAULT_CACHE_TTL_MS: u64 = 300_000;
