//! Shared tolerance policy for every approximate comparison in the crate.
//!
//! All public angles are expressed in degrees.

/// Near-zero threshold: orthogonality checks, singular determinant detection,
/// degenerate-length detection and component snapping.
pub const EPSILON: f32 = 1e-6;

/// Default tolerance for component-wise approximate equality.
pub const APPROX_EPSILON: f32 = 1e-5;

/// Dot-product threshold above which two unit quaternions are considered the
/// same rotation.
pub const DOT_ONE_THRESHOLD: f32 = 0.9999;

/// Named tolerance comparison. Exact `==` on floats is never used for
/// tolerance equality.
#[must_use]
pub fn approx_eq(a: f32, b: f32, epsilon: f32) -> bool {
    (a - b).abs() < epsilon
}

/// Snaps values with magnitude below [`EPSILON`] to exactly zero.
#[must_use]
pub fn snap_to_zero(value: f32) -> f32 {
    if value.abs() < EPSILON {
        0.0
    } else {
        value
    }
}
