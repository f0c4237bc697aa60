//! Named grid directions and transforms over them.
//!
//! Directions are plain `IntVec2` values in screen coordinates, `y` grows
//! downwards so north is `(0, -1)`. The transforms only recognize the nine
//! canonical constants; any other vector, like `(2, 0)`, is not a direction
//! as far as they are concerned.

use crate::{v2, IntVec2, RngExt};

pub const NONE: IntVec2 = v2(0, 0);
pub const N: IntVec2 = v2(0, -1);
pub const NE: IntVec2 = v2(1, -1);
pub const E: IntVec2 = v2(1, 0);
pub const SE: IntVec2 = v2(1, 1);
pub const S: IntVec2 = v2(0, 1);
pub const SW: IntVec2 = v2(-1, 1);
pub const W: IntVec2 = v2(-1, 0);
pub const NW: IntVec2 = v2(-1, -1);

/// 4 directions, clock face order.
pub const DIR_4: [IntVec2; 4] = [N, E, S, W];

/// Diagonal directions, clock face order.
pub const DIAGONALS: [IntVec2; 4] = [NE, SE, SW, NW];

/// 8 directions, clock face order.
pub const DIR_8: [IntVec2; 8] = [N, NE, E, SE, S, SW, W, NW];

/// 8 directions followed by `NONE`.
pub const DIR_9: [IntVec2; 9] = [N, NE, E, SE, S, SW, W, NW, NONE];

pub const UPPER: [IntVec2; 3] = [NW, N, NE];
pub const LOWER: [IntVec2; 3] = [SW, S, SE];
pub const LEFTWARD: [IntVec2; 3] = [NW, W, SW];
pub const RIGHTWARD: [IntVec2; 3] = [NE, E, SE];
pub const HORIZONTAL: [IntVec2; 2] = [W, E];
pub const VERTICAL: [IntVec2; 2] = [N, S];

/// Whether `d` is one of the nine direction constants.
pub fn is_canonical(d: IntVec2) -> bool {
    DIR_9.contains(&d)
}

/// Mirror a direction across the horizontal axis, north becomes south.
///
/// Non-canonical vectors are returned unchanged.
pub fn flip_vertical(d: IntVec2) -> IntVec2 {
    match d {
        N => S,
        S => N,
        NE => SE,
        SE => NE,
        NW => SW,
        SW => NW,
        _ => d,
    }
}

/// Mirror a direction across the vertical axis, east becomes west.
///
/// Non-canonical vectors are returned unchanged.
pub fn flip_horizontal(d: IntVec2) -> IntVec2 {
    match d {
        E => W,
        W => E,
        NE => NW,
        NW => NE,
        SE => SW,
        SW => SE,
        _ => d,
    }
}

/// Opposite direction.
///
/// Non-canonical vectors map to `NONE`.
///
/// ```
/// # use gridkit::{dir, v2};
/// assert_eq!(dir::reverse(dir::NE), dir::SW);
/// assert_eq!(dir::reverse(v2(2, 0)), dir::NONE);
/// ```
pub fn reverse(d: IntVec2) -> IntVec2 {
    if is_canonical(d) { -d } else { NONE }
}

/// Turn a direction clockwise by `eighths` of a full turn, negative values
/// turn counterclockwise.
///
/// `NONE` and non-canonical vectors are returned unchanged.
pub fn rotate_clockwise(d: IntVec2, eighths: i32) -> IntVec2 {
    match DIR_8.iter().position(|&a| a == d) {
        Some(i) => DIR_8[(i as i32 + eighths).rem_euclid(8) as usize],
        None => d,
    }
}

/// Direction of a single step from `a` towards `b`.
pub fn movement_direction(a: IntVec2, b: IntVec2) -> IntVec2 {
    (b - a).signum()
}

/// Pick a random direction from a set, `NONE` if the set is empty.
pub fn random_pick(rng: &mut impl RngExt, set: &[IntVec2]) -> IntVec2 {
    rng.pick(set).copied().unwrap_or(NONE)
}

/// Return the directions of a set in random order.
pub fn shuffled(rng: &mut impl RngExt, set: &[IntVec2]) -> Vec<IntVec2> {
    rng.shuffled(set.iter().copied())
}
