//! Movement and smoothing constants - all tunable values in one place

// Grid scale
pub const DEFAULT_HEX_SIZE: f32 = 10.0;

// Per-turn movement budget (hex-cell units, 1 cell = 1 unit)
pub const DEFAULT_MAX_MOVEMENT_PER_TURN: f32 = 5.0;

// Execution speed (world units per second along the smoothed curve)
pub const DEFAULT_MOVEMENT_SPEED: f32 = 30.0;

// Fraction of the per-turn budget that, once consumed, ends the turn
pub const END_TURN_BUDGET_FRACTION: f32 = 0.95;

// Waypoint generation
pub const DEFAULT_WAYPOINT_TENSION: f32 = 0.25;
pub const DEFAULT_INTERPOLATION_LAYERS: u32 = 2;
// Consecutive path directions within this cosine are treated as one straight run (~5 degrees)
pub const STRAIGHT_PATH_COS_TOLERANCE: f32 = 0.996;

// String pulling
pub const STRING_PULL_MAX_ITERATIONS: u32 = 10;
pub const STRING_PULL_CONVERGENCE_THRESHOLD: f32 = 0.5;
pub const STRING_PULL_RETRY_FRACTIONS: [f32; 4] = [0.75, 0.5, 0.25, 0.1];

// Curve smoothing
pub const DEFAULT_SMOOTHING_ITERATIONS: u32 = 2;

// Execution thresholds
pub const DEFAULT_ARRIVAL_DISTANCE_THRESHOLD: f32 = 0.5;
pub const DEFAULT_NEAR_FINISH_PROGRESS: f32 = 0.99;

// Numeric guard for degenerate segments and normalization
pub const GEOM_EPSILON: f32 = 1e-4;
