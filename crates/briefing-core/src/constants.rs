//! Board constants and tuning parameters.

// --- Scale ---

/// Map pixels per kilometer. Background images are authored to this scale.
pub const PIXELS_PER_KM: f64 = 2.14;

/// Kilometers per nautical mile.
pub const KM_PER_NM: f64 = 1.852;

/// Seconds per hour (knots are nautical miles per hour).
pub const SECS_PER_HOUR: f64 = 3600.0;

// --- Path drawing ---

/// Minimum distance (pixels) between accepted control points.
pub const MIN_POINT_DISTANCE: f64 = 20.0;

/// Largest step a smoothed sample may add, as a multiple of `MIN_POINT_DISTANCE`.
pub const SMOOTH_MAX_STEP_FACTOR: f64 = 2.0;

// --- Curve fitting ---

/// Ramer–Douglas–Peucker tolerance in pixels.
pub const SIMPLIFY_TOLERANCE: f64 = 10.0;

/// Upper bound on control points fed to the spline after simplification.
pub const SIMPLIFY_MAX_POINTS: usize = 20;

/// Growth factor applied to the tolerance while the simplified path is too long.
pub const SIMPLIFY_TOLERANCE_GROWTH: f64 = 1.5;

/// Spline tension. 0 is a pure Catmull-Rom curve, 1 collapses to straight segments.
pub const CURVE_TENSION: f64 = 0.001;

/// Samples in the arc-length lookup table.
pub const CURVE_ARC_DIVISIONS: usize = 300;

/// A path needs more than this many control points before it moves its object.
pub const MIN_TRAJECTORY_POINTS: usize = 2;

// --- Formations ---

/// Spacing between formation members in pixels.
pub const WINGMAN_STD_DISTANCE: f64 = 32.0;

/// Angular offset of an echelon wingman from the lead's heading (radians, 135°).
pub const WINGMAN_STD_ANGLE: f64 = std::f64::consts::PI - std::f64::consts::FRAC_PI_4;

/// Most wingmen a single lead can have.
pub const MAX_WINGMEN: u32 = 8;

// --- Identity ---

/// Length of a generated object id (base-36 characters).
pub const OBJECT_ID_LEN: usize = 8;

// --- Camera ---

/// Zoom factor of a scenario without a stored camera.
pub const DEFAULT_ZOOM: f64 = 1.0;
