// Scalar helpers for the character integrator

/// Sign of `value` as -1, 0 or 1 (zero stays zero, unlike `f32::signum`)
pub fn sign(value: f32) -> f32 {
    if value > 0.0 {
        1.0
    } else if value < 0.0 {
        -1.0
    } else {
        0.0
    }
}

/// Clamp the magnitude of `value` to `limit`, keeping its sign
pub fn clamp_magnitude(value: f32, limit: f32) -> f32 {
    if value.abs() > limit {
        sign(value) * limit
    } else {
        value
    }
}
