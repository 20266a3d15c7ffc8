//! Combat: the attack queue and its timed resolution.
//!
//! After every committed move the board is scanned for adjacency between
//! the mover's side and the opposing side, producing an ordered queue of
//! [`AttackEvent`]s. The queue then drains strictly one event at a time:
//! each event animates the attacker lunging at the defender, applies damage
//! exactly once at the animation midpoint, removes the defender from the
//! board if it died, and rests briefly before the next event.
//!
//! - [`event`]: the event record and the adjacency scan
//! - [`animation`]: timing constants and the lunge displacement curve
//! - [`resolver`]: the per-tick drain state machine

pub mod animation;
pub mod event;
pub mod resolver;

pub use animation::{
    lunge_pos, lunge_travel, ATTACK_ANIMATION_MS, ATTACK_DELAY_MS, LUNGE_REACH, STRIKE_POINT,
};
pub use event::{build_attack_queue, AttackEvent};
pub use resolver::{ActiveAttack, CombatState, CombatStatus};
