//! Attack animation timing and the lunge curve.
//!
//! The attacker's visual position leaves its cell, accelerates toward the
//! defender up to [`LUNGE_REACH`] of the separation at the midpoint, and
//! eases back. Damage lands exactly once, on the first tick past
//! [`STRIKE_POINT`].
//!
//! All times are milliseconds, matching the `dt` the embedding loop feeds
//! to `Battle::update`.

use crate::core::{Coord, Vec2};

/// Length of one attack animation.
pub const ATTACK_ANIMATION_MS: f32 = 300.0;

/// Rest between consecutive attack events (and before the first).
pub const ATTACK_DELAY_MS: f32 = 100.0;

/// Progress fraction past which the damage applies.
pub const STRIKE_POINT: f32 = 0.5;

/// How far toward the defender the attacker travels at the midpoint, as a
/// fraction of the attacker-defender separation.
pub const LUNGE_REACH: f32 = 0.75;

/// Displacement fraction toward the defender at animation progress `p`.
///
/// Hyperbolic ease: slow start, fastest at the moment of impact, mirrored
/// on the way back. 0 at `p = 0`, [`LUNGE_REACH`] at the midpoint, 0 again
/// at `p = 1`. Progress past 1 (a coarse final tick) clamps to 0 rather
/// than overshooting behind the attacker.
#[must_use]
pub fn lunge_travel(p: f32) -> f32 {
    if p <= STRIKE_POINT {
        LUNGE_REACH * (1.0 / (1.0 - p) - 1.0)
    } else {
        (LUNGE_REACH * (1.0 / p - 1.0)).max(0.0)
    }
}

/// The attacker's visual position at progress `p` of a lunge from
/// `attacker` toward `defender`.
#[must_use]
pub fn lunge_pos(attacker: Coord, defender: Coord, p: f32) -> Vec2 {
    attacker
        .as_vec2()
        .lerp(defender.as_vec2(), lunge_travel(p))
}
