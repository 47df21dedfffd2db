//! Battle-time unit state and self-contained behaviors.
//!
//! A [`Unit`] is created by the roster builder from a template plus an
//! upgrade level, mutated every tick by the battle loop, and discarded at
//! battle end. Units reference their target by [`UnitId`], never by owning
//! pointer; liveness is re-validated by the battle each tick.

use serde::{Deserialize, Serialize};

use crate::catalog::{Ability, Color};
use crate::math::{fixed_serde, Fixed, Vec2Fixed};

/// Unique identifier of a unit within one battle (its slot in the battle's
/// unit list).
pub type UnitId = u32;

/// Which team a unit fights for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// The controlling player's team.
    Player,
    /// The opposing team.
    Enemy,
}

impl Side {
    /// The opposing side.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Side::Player => Side::Enemy,
            Side::Enemy => Side::Player,
        }
    }
}

/// Minimum damage floor - basic attacks always deal at least 1 damage.
pub const MIN_DAMAGE: u32 = 1;

/// Mana gained by the attacker per basic attack landed.
pub const MANA_PER_ATTACK: u32 = 10;

/// Upper bound on transient damage popups kept per unit; oldest dropped.
pub const MAX_POPUPS: usize = 16;

/// Popup color for critical strikes.
pub const POPUP_CRIT_COLOR: Color = Color::new(255, 0, 0);

/// Popup color for normal hits.
pub const POPUP_NORMAL_COLOR: Color = Color::new(255, 255, 0);

/// Transient floating damage-number record, attached to the unit that took
/// the hit. Lifetime and position are advanced by the presentation adapter,
/// not the simulation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DamagePopup {
    /// Rendered text (the damage amount).
    pub text: String,
    /// Display color (crit red / normal yellow).
    pub color: Color,
    /// World position; drifts upward over time.
    pub position: Vec2Fixed,
    /// Seconds of display time left.
    #[serde(with = "fixed_serde")]
    pub remaining: Fixed,
}

/// A single combatant: scaled stats plus per-battle mutable state.
///
/// Invariants upheld by the mutators below: `hp <= max_hp`,
/// `mana <= mana_max`, `level` in 1..=3, `attack_speed > 0`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Unit {
    /// Identifier within the battle; assigned by [`crate::battle::Battle::new`].
    pub id: UnitId,
    /// Archetype name.
    pub name: String,
    /// Team membership.
    pub side: Side,
    /// Upgrade level (1-3) from merging duplicates.
    pub level: u8,

    /// Attack damage, level scaling applied.
    pub attack: u32,
    /// Flat damage reduction against incoming basic attacks.
    pub defense: u32,
    /// Critical strike probability in `[0, 1]`.
    #[serde(with = "fixed_serde")]
    pub crit_chance: Fixed,

    /// Current hit points; 0 means dead.
    pub hp: u32,
    /// Hit point cap.
    pub max_hp: u32,
    /// Current mana.
    pub mana: u32,
    /// Mana required to cast.
    pub mana_max: u32,

    /// Attacks per second.
    #[serde(with = "fixed_serde")]
    pub attack_speed: Fixed,
    /// Attack range in world units (inclusive boundary).
    #[serde(with = "fixed_serde")]
    pub attack_range: Fixed,
    /// Movement speed in world units per second.
    #[serde(with = "fixed_serde")]
    pub move_speed: Fixed,

    /// Continuous world position.
    pub position: Vec2Fixed,
    /// Current target, if any. Never a dead or self reference once
    /// re-acquisition has run for the tick.
    pub target: Option<UnitId>,
    /// Accumulated time toward the next attack, in seconds.
    #[serde(with = "fixed_serde")]
    pub attack_timer: Fixed,
    /// Remaining cast-animation time; purely visual.
    #[serde(with = "fixed_serde")]
    pub cast_timer: Fixed,
    /// Cosmetic orientation flag.
    pub facing_right: bool,

    /// Display color from the template.
    pub color: Color,
    /// Special ability cast at full mana.
    pub ability: Ability,
    /// Bounded list of transient damage popups.
    pub popups: Vec<DamagePopup>,
}

impl Unit {
    /// Whether the unit is still fighting.
    #[must_use]
    pub const fn is_alive(&self) -> bool {
        self.hp > 0
    }

    /// Whether the cast animation is running.
    #[must_use]
    pub fn is_casting(&self) -> bool {
        self.cast_timer > Fixed::ZERO
    }

    /// Whether mana has reached the cast threshold.
    #[must_use]
    pub const fn mana_full(&self) -> bool {
        self.mana >= self.mana_max
    }

    /// Seconds required between attacks.
    #[must_use]
    pub fn attack_interval(&self) -> Fixed {
        Fixed::ONE / self.attack_speed
    }

    /// Apply damage, clamping HP at zero.
    pub fn take_damage(&mut self, amount: u32) {
        self.hp = self.hp.saturating_sub(amount);
    }

    /// Heal, clamping at max HP.
    pub fn heal(&mut self, amount: u32) {
        self.hp = self.hp.saturating_add(amount).min(self.max_hp);
    }

    /// Gain mana, clamping at the cap. Idempotent at the cap.
    pub fn gain_mana(&mut self, amount: u32) {
        self.mana = self.mana.saturating_add(amount).min(self.mana_max);
    }

    /// Decay the cast-animation timer by `dt`, clamping at zero.
    pub fn tick_cast(&mut self, dt: Fixed) {
        if self.cast_timer > Fixed::ZERO {
            self.cast_timer = (self.cast_timer - dt).max(Fixed::ZERO);
        }
    }

    /// Take one movement step toward `target` at [`Unit::move_speed`].
    ///
    /// The step is clamped to the remaining distance so the unit arrives
    /// exactly instead of oscillating around the target. A zero-length
    /// direction (target at identical position) is a no-op rather than a
    /// division error.
    pub fn move_towards(&mut self, target: Vec2Fixed, dt: Fixed) {
        let dist = self.position.distance(target);
        if dist == Fixed::ZERO {
            return;
        }

        let step = self.move_speed * dt;
        if step >= dist {
            self.position = target;
            return;
        }

        let direction = (target - self.position).normalize();
        self.position = self.position + direction.scaled(step);
    }

    /// Attach a damage popup, dropping the oldest past [`MAX_POPUPS`].
    pub fn push_popup(&mut self, popup: DamagePopup) {
        if self.popups.len() == MAX_POPUPS {
            self.popups.remove(0);
        }
        self.popups.push(popup);
    }
}

/// Resolve the damage of one basic attack.
///
/// `attack × (2 on crit) − defense`, floored at [`MIN_DAMAGE`] - never zero
/// or negative, even against overwhelming defense.
#[must_use]
pub fn basic_attack_damage(attack: u32, crit: bool, defense: u32) -> u32 {
    let raw = if crit { attack * 2 } else { attack };
    raw.saturating_sub(defense).max(MIN_DAMAGE)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_unit() -> Unit {
        Unit {
            id: 0,
            name: "Dummy".to_string(),
            side: Side::Player,
            level: 1,
            attack: 10,
            defense: 0,
            crit_chance: Fixed::ZERO,
            hp: 100,
            max_hp: 100,
            mana: 0,
            mana_max: 50,
            attack_speed: Fixed::ONE,
            attack_range: Fixed::from_num(80),
            move_speed: Fixed::from_num(100),
            position: Vec2Fixed::ZERO,
            target: None,
            attack_timer: Fixed::ZERO,
            cast_timer: Fixed::ZERO,
            facing_right: true,
            color: Color::new(128, 128, 128),
            ability: Ability::Mend { heal: 50 },
            popups: Vec::new(),
        }
    }

    #[test]
    fn damage_floor_never_zero() {
        // attack 10 into defense 50 still lands exactly 1
        assert_eq!(basic_attack_damage(10, false, 50), 1);
        assert_eq!(basic_attack_damage(10, true, 50), 1);
        assert_eq!(basic_attack_damage(0, false, 0), 1);
    }

    #[test]
    fn crit_doubles_before_defense() {
        assert_eq!(basic_attack_damage(50, false, 10), 40);
        assert_eq!(basic_attack_damage(50, true, 10), 90);
    }

    #[test]
    fn mana_gain_idempotent_at_cap() {
        let mut unit = test_unit();
        unit.mana = unit.mana_max;
        unit.gain_mana(MANA_PER_ATTACK);
        assert_eq!(unit.mana, unit.mana_max);
    }

    #[test]
    fn mana_gain_clamps() {
        let mut unit = test_unit();
        unit.mana = 45;
        unit.gain_mana(MANA_PER_ATTACK);
        assert_eq!(unit.mana, 50);
    }

    #[test]
    fn take_damage_clamps_at_zero() {
        let mut unit = test_unit();
        unit.take_damage(9999);
        assert_eq!(unit.hp, 0);
        assert!(!unit.is_alive());
    }

    #[test]
    fn heal_clamps_at_max() {
        let mut unit = test_unit();
        unit.hp = 80;
        unit.heal(500);
        assert_eq!(unit.hp, unit.max_hp);
    }

    #[test]
    fn move_towards_clamps_at_target() {
        let mut unit = test_unit();
        let target = Vec2Fixed::new(Fixed::from_num(100), Fixed::ZERO);
        // speed 100, dt 1 → one full step lands exactly on the target
        unit.move_towards(target, Fixed::ONE);
        assert_eq!(unit.position, target);
        // another step stays put (degenerate zero-length direction)
        unit.move_towards(target, Fixed::ONE);
        assert_eq!(unit.position, target);
    }

    #[test]
    fn move_towards_partial_step() {
        let mut unit = test_unit();
        let target = Vec2Fixed::new(Fixed::from_num(100), Fixed::ZERO);
        let dt = Fixed::from_num(0.25);
        unit.move_towards(target, dt);
        let epsilon = Fixed::from_num(0.01);
        assert!((unit.position.x - Fixed::from_num(25)).abs() < epsilon);
        assert_eq!(unit.position.y, Fixed::ZERO);
    }

    #[test]
    fn popup_list_bounded() {
        let mut unit = test_unit();
        for i in 0..MAX_POPUPS + 4 {
            unit.push_popup(DamagePopup {
                text: i.to_string(),
                color: POPUP_NORMAL_COLOR,
                position: Vec2Fixed::ZERO,
                remaining: Fixed::ONE,
            });
        }
        assert_eq!(unit.popups.len(), MAX_POPUPS);
        // oldest entries were dropped
        assert_eq!(unit.popups[0].text, "4");
    }

    #[test]
    fn cast_timer_decays_to_zero() {
        let mut unit = test_unit();
        unit.cast_timer = Fixed::ONE;
        unit.tick_cast(Fixed::from_num(0.6));
        assert!(unit.is_casting());
        unit.tick_cast(Fixed::from_num(0.6));
        assert!(!unit.is_casting());
        assert_eq!(unit.cast_timer, Fixed::ZERO);
    }
}
