//! Events generated during a simulation step.
//!
//! These are consumed by the game layer for logging, sound, and effects.
//! They are cosmetic: dropping them does not change the battle outcome.

use crate::battle::BattleResult;
use crate::catalog::Ability;
use crate::unit::UnitId;

/// A basic attack landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttackEvent {
    /// Unit performing the attack.
    pub attacker: UnitId,
    /// Unit that took the hit.
    pub target: UnitId,
    /// Final damage after crit and defense.
    pub damage: u32,
    /// Whether the crit roll succeeded.
    pub crit: bool,
}

/// A special ability was cast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CastEvent {
    /// Unit that cast.
    pub caster: UnitId,
    /// The ability that went off.
    pub ability: Ability,
}

/// A unit's HP reached zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeathEvent {
    /// Unit that died.
    pub unit: UnitId,
    /// Unit responsible for the kill.
    pub killer: UnitId,
}

/// Everything that happened in one call to [`crate::battle::Battle::step`].
#[derive(Debug, Clone, Default)]
pub struct StepEvents {
    /// Basic attacks resolved this step.
    pub attacks: Vec<AttackEvent>,
    /// Abilities cast this step.
    pub casts: Vec<CastEvent>,
    /// Units that died this step.
    pub deaths: Vec<DeathEvent>,
    /// Set on the step the battle terminates; `None` before and after.
    pub ended: Option<BattleResult>,
}

impl StepEvents {
    /// Whether nothing of note happened.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.attacks.is_empty()
            && self.casts.is_empty()
            && self.deaths.is_empty()
            && self.ended.is_none()
    }
}
