//! Read-only snapshots and popup lifecycle for the presentation layer.
//!
//! The presentation adapter reads unit state after each tick and owns the
//! cosmetic popup side channel: it decrements lifetimes, removes expired
//! entries, and drifts positions upward for the floating effect. Nothing
//! here affects the simulation outcome.

use crate::battle::Battle;
use crate::catalog::Color;
use crate::math::{Fixed, Vec2Fixed};
use crate::unit::{DamagePopup, Side, UnitId};

/// Upward drift speed of damage popups, in world units per second.
/// (Half a unit per frame at 60 Hz.)
fn popup_drift() -> Fixed {
    Fixed::from_num(30)
}

/// Display snapshot of one living unit.
#[derive(Debug, Clone)]
pub struct UnitView {
    /// Battle id.
    pub id: UnitId,
    /// Archetype name.
    pub name: String,
    /// Team membership.
    pub side: Side,
    /// Upgrade level.
    pub level: u8,
    /// World position.
    pub position: Vec2Fixed,
    /// Current HP.
    pub hp: u32,
    /// HP cap.
    pub max_hp: u32,
    /// Current mana.
    pub mana: u32,
    /// Mana cap.
    pub mana_max: u32,
    /// Display color.
    pub color: Color,
    /// Whether the cast animation is running.
    pub casting: bool,
    /// Cosmetic orientation.
    pub facing_right: bool,
    /// Pending damage popups.
    pub popups: Vec<DamagePopup>,
}

/// Snapshot every living unit for display. Dead units are not rendered.
#[must_use]
pub fn snapshot(battle: &Battle) -> Vec<UnitView> {
    battle
        .units()
        .iter()
        .filter(|unit| unit.is_alive())
        .map(|unit| UnitView {
            id: unit.id,
            name: unit.name.clone(),
            side: unit.side,
            level: unit.level,
            position: unit.position,
            hp: unit.hp,
            max_hp: unit.max_hp,
            mana: unit.mana,
            mana_max: unit.mana_max,
            color: unit.color,
            casting: unit.is_casting(),
            facing_right: unit.facing_right,
            popups: unit.popups.clone(),
        })
        .collect()
}

/// Advance the popup side channel by `dt` seconds.
///
/// Each popup on a living unit drifts upward and loses lifetime; expired
/// entries are removed. Popups on dead units are left alone - the unit is
/// no longer rendered, so neither are they.
pub fn advance_popups(battle: &mut Battle, dt: Fixed) {
    let drift = popup_drift() * dt;
    for unit in battle.units_mut() {
        if !unit.is_alive() {
            continue;
        }
        unit.popups.retain_mut(|popup| {
            popup.position.y -= drift;
            popup.remaining -= dt;
            popup.remaining > Fixed::ZERO
        });
    }
}
