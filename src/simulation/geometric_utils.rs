//! Geometric helpers for the unit-square simulation space.

use ndarray::Array1;
use std::f32::consts::{PI, TAU};

/// Reflects a position back into the unit square, flipping the matching
/// velocity component once per crossed edge.
///
/// Returns `true` when any component was reflected.
pub fn reflect_unit_mut(pos: &mut Array1<f32>, vel: &mut Array1<f32>) -> bool {
    let mut reflected = false;
    for axis in 0..2 {
        if pos[axis] < 0.0 {
            pos[axis] = -pos[axis];
            vel[axis] = -vel[axis];
            reflected = true;
        } else if pos[axis] > 1.0 {
            pos[axis] = 2.0 - pos[axis];
            vel[axis] = -vel[axis];
            reflected = true;
        }
        // a step longer than the square itself still has to land inside
        pos[axis] = pos[axis].clamp(0.0, 1.0);
    }
    reflected
}

/// Squared Euclidean distance between two 2D points.
pub fn distance_sq(a: &Array1<f32>, b: &Array1<f32>) -> f32 {
    let dx = a[0] - b[0];
    let dy = a[1] - b[1];
    dx * dx + dy * dy
}

/// Wraps an angle into `(-PI, PI]`.
pub fn wrap_angle(angle: f32) -> f32 {
    let wrapped = (angle + PI).rem_euclid(TAU) - PI;
    if wrapped <= -PI { wrapped + TAU } else { wrapped }
}

/// Moves `current` toward `target` by `rate` of the shortest angular error.
pub fn approach_angle(current: f32, target: f32, rate: f32) -> f32 {
    wrap_angle(current + wrap_angle(target - current) * rate)
}
