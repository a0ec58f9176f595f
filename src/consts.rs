// Runtime parameters
pub const CANVAS_WIDTH: usize = 500;
pub const CANVAS_HEIGHT: usize = 600;
pub const OUT_FILE: &'static str = "./out.ppm";

// Floating point comparisons
pub const FEQ_EPSILON: f64 = 0.0001;

// Tolerance for intersection branching: near-zero quadratic discriminants
// are treated as exactly zero, and rays this close to parallel with a
// disk's plane miss it.
pub const INTERSECT_EPSILON: f64 = 1e-10;

// Offset along the surface normal for shadow ray origins, preventing a
// surface from shadowing itself ("acne").
pub const SHADOW_BIAS: f64 = 0.001;
