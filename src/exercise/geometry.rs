//! Joint angle geometry
//!
//! The angle at a joint is measured between the two bone rays leaving it,
//! from atan2 bearings in frame-pixel space.

/// Rays shorter than this are treated as degenerate
const MIN_RAY_LENGTH: f32 = 1e-4;

/// Angle at vertex `b` formed by rays `b->a` and `b->c`, in degrees [0, 180].
///
/// Returns `None` when either ray is degenerate (coincident points); the
/// frame cannot be evaluated and callers must skip it rather than read zero.
pub fn angle_between(a: (f32, f32), b: (f32, f32), c: (f32, f32)) -> Option<f32> {
    let ba = (a.0 - b.0, a.1 - b.1);
    let bc = (c.0 - b.0, c.1 - b.1);

    if ray_length(ba) < MIN_RAY_LENGTH || ray_length(bc) < MIN_RAY_LENGTH {
        return None;
    }

    let radians = bc.1.atan2(bc.0) - ba.1.atan2(ba.0);
    let mut angle = radians.to_degrees().abs();
    if angle > 180.0 {
        angle = 360.0 - angle;
    }

    Some(angle)
}

/// Midpoint of two points
pub fn midpoint(a: (f32, f32), b: (f32, f32)) -> (f32, f32) {
    ((a.0 + b.0) / 2.0, (a.1 + b.1) / 2.0)
}

fn ray_length(v: (f32, f32)) -> f32 {
    (v.0 * v.0 + v.1 * v.1).sqrt()
}
