//! The fixed-tick combat loop.
//!
//! A [`Battle`] owns both teams for its whole lifetime and advances them
//! with [`Battle::step`]. Each step processes every living unit in
//! player-team-then-enemy-team slot order; a unit processed later in the
//! tick already observes damage dealt earlier in the same tick. This
//! sequential mutation is deliberate and load-bearing for outcome parity -
//! do not "fix" it with a start-of-tick snapshot.
//!
//! # Determinism
//!
//! - No floating-point math (fixed-point via [`Fixed`])
//! - All randomness drawn from the battle's seeded [`BattleRng`]
//! - Fixed iteration order (slot order, player side first)
//!
//! Same teams, same seed, same `dt` sequence → same outcome.

use serde::{Deserialize, Serialize};

use crate::catalog::Ability;
use crate::events::{AttackEvent, CastEvent, DeathEvent, StepEvents};
use crate::math::{Fixed, Vec2Fixed};
use crate::rng::BattleRng;
use crate::unit::{
    basic_attack_damage, DamagePopup, Side, Unit, UnitId, MANA_PER_ATTACK, POPUP_CRIT_COLOR,
    POPUP_NORMAL_COLOR,
};

// Board slot geometry, in world units.
const PLAYER_COLUMN_X: i64 = 400;
const ENEMY_COLUMN_X: i64 = 800;
const FRONT_ROW_Y: i64 = 300;
const SLOT_SPACING: i64 = 100;

/// Vertical offset of damage popups above the struck unit.
const POPUP_RAISE: i64 = 40;

/// Upper bound on a single step's `dt`, in seconds.
///
/// A stalled host loop can hand over a huge `dt`; clamping bounds the
/// movement/damage burst of one step.
fn step_cap() -> Fixed {
    Fixed::ONE / Fixed::from_num(10)
}

/// Terminal outcome of a battle, produced exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BattleResult {
    /// The player's team eliminated the enemy team.
    PlayerWin,
    /// The enemy team eliminated the player's team.
    EnemyWin,
}

impl BattleResult {
    /// The side that won.
    #[must_use]
    pub const fn winning_side(self) -> Side {
        match self {
            BattleResult::PlayerWin => Side::Player,
            BattleResult::EnemyWin => Side::Enemy,
        }
    }
}

/// The combat simulation for a single battle.
#[derive(Debug, Clone)]
pub struct Battle {
    /// All units, player slots first then enemy slots. Never grows or
    /// shrinks mid-battle; the dead stay with `hp == 0`.
    units: Vec<Unit>,
    rng: BattleRng,
    result: Option<BattleResult>,
    elapsed: Fixed,
}

impl Battle {
    /// Set up a battle from two rosters and a seed.
    ///
    /// Units get their battle ids and fixed board slot positions here:
    /// the player column at x=400, the enemy column at x=800, rows from
    /// y=300 at 100-unit spacing.
    #[must_use]
    pub fn new(player: Vec<Unit>, enemy: Vec<Unit>, seed: u64) -> Self {
        let mut units = Vec::with_capacity(player.len() + enemy.len());

        for (slot, mut unit) in player.into_iter().enumerate() {
            unit.side = Side::Player;
            unit.position = slot_position(PLAYER_COLUMN_X, slot);
            units.push(unit);
        }
        for (slot, mut unit) in enemy.into_iter().enumerate() {
            unit.side = Side::Enemy;
            unit.position = slot_position(ENEMY_COLUMN_X, slot);
            units.push(unit);
        }

        for (index, unit) in units.iter_mut().enumerate() {
            unit.id = index as UnitId;
            unit.target = None;
        }

        tracing::debug!(units = units.len(), seed, "battle set up");

        Self {
            units,
            rng: BattleRng::new(seed),
            result: None,
            elapsed: Fixed::ZERO,
        }
    }

    /// All units in processing order (player slots first).
    #[must_use]
    pub fn units(&self) -> &[Unit] {
        &self.units
    }

    /// Look up a unit by its battle id.
    #[must_use]
    pub fn unit(&self, id: UnitId) -> Option<&Unit> {
        self.units.get(id as usize)
    }

    /// Whether a terminal result has been produced.
    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.result.is_some()
    }

    /// The terminal result, once a side has no living units.
    #[must_use]
    pub const fn winner(&self) -> Option<BattleResult> {
        self.result
    }

    /// Simulated seconds elapsed so far.
    #[must_use]
    pub const fn elapsed(&self) -> Fixed {
        self.elapsed
    }

    /// Mutable unit access for the presentation adapter (popup lifecycle)
    /// and in-crate tests. Not part of the public surface: outside callers
    /// only ever read.
    pub(crate) fn units_mut(&mut self) -> &mut [Unit] {
        &mut self.units
    }

    /// Advance the simulation by `dt` seconds (clamped to 0.1 s).
    ///
    /// Per living unit, in order: target validation, facing, cast-timer
    /// decay, then either a movement step (out of range) or attack-timer
    /// accumulation with an attack/cast resolution when it fills. After the
    /// full pass the termination check runs. A no-op once the battle is
    /// over.
    pub fn step(&mut self, dt: Fixed) -> StepEvents {
        let mut events = StepEvents::default();
        if self.result.is_some() {
            return events;
        }

        let dt = dt.clamp(Fixed::ZERO, step_cap());

        for index in 0..self.units.len() {
            if !self.units[index].is_alive() {
                continue;
            }

            self.validate_target(index);
            let Some(target_id) = self.units[index].target else {
                // No living opponent; idle until the termination check.
                continue;
            };
            let target_index = target_id as usize;
            let target_pos = self.units[target_index].position;

            self.units[index].facing_right = target_pos.x > self.units[index].position.x;
            self.units[index].tick_cast(dt);

            // Squared-distance comparison keeps the inclusive range
            // boundary exact (no sqrt rounding).
            let dist_sq = self.units[index].position.distance_squared(target_pos);
            let range = self.units[index].attack_range;
            if dist_sq > range * range {
                self.units[index].move_towards(target_pos, dt);
                continue;
            }

            // In range (boundary inclusive): accumulate toward the next swing.
            self.units[index].attack_timer += dt;
            if self.units[index].attack_timer >= self.units[index].attack_interval() {
                self.units[index].attack_timer = Fixed::ZERO;
                if self.units[index].mana_full() {
                    self.cast(index, &mut events);
                } else {
                    self.basic_attack(index, target_index, &mut events);
                }
            }
        }

        self.elapsed += dt;

        // Enemy side is checked first: a double-KO tick resolves as a
        // player win. Documented priority rule, kept for outcome parity.
        if !self.side_alive(Side::Enemy) {
            self.finish(BattleResult::PlayerWin, &mut events);
        } else if !self.side_alive(Side::Player) {
            self.finish(BattleResult::EnemyWin, &mut events);
        }

        events
    }

    /// Re-acquire the unit's target if it has none or it died.
    fn validate_target(&mut self, index: usize) {
        let needs_target = match self.units[index].target {
            None => true,
            Some(id) => !self.units[id as usize].is_alive(),
        };
        if needs_target {
            self.units[index].target = self.closest_opponent(index);
        }
    }

    /// Closest living unit on the opposing side, ties to the first in
    /// team order.
    fn closest_opponent(&self, index: usize) -> Option<UnitId> {
        let unit = &self.units[index];
        let opposing = unit.side.opponent();
        let mut best: Option<(UnitId, Fixed)> = None;

        for other in &self.units {
            if other.side != opposing || !other.is_alive() {
                continue;
            }
            let dist_sq = unit.position.distance_squared(other.position);
            match best {
                None => best = Some((other.id, dist_sq)),
                Some((_, best_dist)) if dist_sq < best_dist => {
                    best = Some((other.id, dist_sq));
                }
                _ => {}
            }
        }

        best.map(|(id, _)| id)
    }

    /// Resolve one basic attack from `attacker` into `target`.
    fn basic_attack(&mut self, attacker: usize, target: usize, events: &mut StepEvents) {
        if !self.units[target].is_alive() {
            return;
        }

        let crit = self.rng.chance(self.units[attacker].crit_chance);
        let damage = basic_attack_damage(
            self.units[attacker].attack,
            crit,
            self.units[target].defense,
        );

        self.units[target].take_damage(damage);

        let struck_pos = self.units[target].position;
        self.units[target].push_popup(DamagePopup {
            text: damage.to_string(),
            color: if crit { POPUP_CRIT_COLOR } else { POPUP_NORMAL_COLOR },
            position: Vec2Fixed::new(struck_pos.x, struck_pos.y - Fixed::from_num(POPUP_RAISE)),
            remaining: Fixed::ONE,
        });

        self.units[attacker].gain_mana(MANA_PER_ATTACK);

        let attacker_id = self.units[attacker].id;
        let target_id = self.units[target].id;
        tracing::debug!(
            attacker = %self.units[attacker].name,
            target = %self.units[target].name,
            damage,
            crit,
            "basic attack"
        );
        events.attacks.push(AttackEvent {
            attacker: attacker_id,
            target: target_id,
            damage,
            crit,
        });

        if !self.units[target].is_alive() {
            events.deaths.push(DeathEvent {
                unit: target_id,
                killer: attacker_id,
            });
            // Force re-acquisition next tick.
            self.units[attacker].target = None;
        }
    }

    /// Cast the unit's special ability. Ability damage is magic damage:
    /// it bypasses defense entirely.
    fn cast(&mut self, caster: usize, events: &mut StepEvents) {
        self.units[caster].cast_timer = Fixed::ONE;

        let ability = self.units[caster].ability;
        let caster_id = self.units[caster].id;
        tracing::debug!(caster = %self.units[caster].name, ?ability, "cast");

        match ability {
            Ability::Bolt { damage } => {
                if let Some(target_id) = self.units[caster].target {
                    let target = target_id as usize;
                    if self.units[target].is_alive() {
                        self.units[target].take_damage(damage);
                        if !self.units[target].is_alive() {
                            events.deaths.push(DeathEvent {
                                unit: target_id,
                                killer: caster_id,
                            });
                        }
                    }
                }
            }
            Ability::Nova { damage, radius } => {
                let center = self.units[caster].position;
                let opposing = self.units[caster].side.opponent();
                for index in 0..self.units.len() {
                    if self.units[index].side != opposing || !self.units[index].is_alive() {
                        continue;
                    }
                    // Strict boundary: exactly at the radius is out.
                    if center.distance_squared(self.units[index].position) < radius * radius {
                        self.units[index].take_damage(damage);
                        if !self.units[index].is_alive() {
                            events.deaths.push(DeathEvent {
                                unit: self.units[index].id,
                                killer: caster_id,
                            });
                        }
                    }
                }
            }
            Ability::Mend { heal } => {
                self.units[caster].heal(heal);
            }
        }

        self.units[caster].mana = 0;
        events.casts.push(CastEvent {
            caster: caster_id,
            ability,
        });
    }

    fn side_alive(&self, side: Side) -> bool {
        self.units.iter().any(|u| u.side == side && u.is_alive())
    }

    fn finish(&mut self, result: BattleResult, events: &mut StepEvents) {
        tracing::info!(?result, elapsed = ?self.elapsed, "battle ended");
        self.result = Some(result);
        events.ended = Some(result);
    }
}

fn slot_position(column: i64, slot: usize) -> Vec2Fixed {
    Vec2Fixed::new(
        Fixed::from_num(column),
        Fixed::from_num(FRONT_ROW_Y + SLOT_SPACING * slot as i64),
    )
}
