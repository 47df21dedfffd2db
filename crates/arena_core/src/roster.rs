//! Roster assembly: descriptor ⊕ template merge and encounter generation.
//!
//! Converts externally supplied unit descriptors (board state carried over
//! from the shop) plus the canonical template catalog into fully-populated
//! battle units. The merge is an explicit, typed function with a fixed
//! per-field override table - no attribute probing.

use serde::{Deserialize, Serialize};

use crate::catalog::{Catalog, UnitTemplate};
use crate::error::ArenaError;
use crate::math::{Fixed, Vec2Fixed};
use crate::rng::BattleRng;
use crate::unit::{Side, Unit};

/// Movement speed shared by every unit, in world units per second.
const MOVE_SPEED: i64 = 100;

/// Externally supplied unit descriptor.
///
/// Only the name is required; the optional fields carry shop-state overrides.
/// Per-field merge table:
///
/// | field                          | source                        |
/// |--------------------------------|-------------------------------|
/// | hp / attack / defense          | descriptor, else template     |
/// | max_hp                         | descriptor, else scaled hp    |
/// | level                          | descriptor, else 1            |
/// | crit, mana, speed, range, etc. | always template               |
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitDescriptor {
    /// Template name to look up in the catalog.
    pub name: String,
    /// Carried-over base HP.
    #[serde(default)]
    pub hp: Option<u32>,
    /// Carried-over base attack.
    #[serde(default)]
    pub attack: Option<u32>,
    /// Carried-over defense.
    #[serde(default)]
    pub defense: Option<u32>,
    /// Carried-over HP cap (already scaled); overrides level scaling of hp.
    #[serde(default)]
    pub max_hp: Option<u32>,
    /// Upgrade level from merging duplicates; clamped to 1..=3.
    #[serde(default)]
    pub level: Option<u8>,
}

impl UnitDescriptor {
    /// A bare descriptor carrying only a template name.
    #[must_use]
    pub fn named(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Self::default()
        }
    }
}

/// Result of assembling one team.
///
/// Descriptors naming unknown templates are dropped, not fatal: the battle
/// proceeds with the remaining units and the diagnostics are carried here.
#[derive(Debug)]
pub struct BuiltTeam {
    /// Battle-ready units in descriptor order.
    pub units: Vec<Unit>,
    /// One [`ArenaError::TemplateNotFound`] per dropped descriptor.
    pub dropped: Vec<ArenaError>,
}

/// Apply the upgrade-level multiplier to a base stat.
///
/// ×1.6 at level 2 and ×2.5 at level 3, expressed as the exact integer
/// fractions 8/5 and 5/2 so the result matches truncating arithmetic.
#[must_use]
pub fn apply_level_scaling(value: u32, level: u8) -> u32 {
    match level {
        0 | 1 => value,
        2 => value * 8 / 5,
        _ => value * 5 / 2,
    }
}

/// Assemble a team from descriptors against the catalog.
///
/// Inputs are never mutated. Unknown template names are dropped with a
/// warning and surfaced in [`BuiltTeam::dropped`].
#[must_use]
pub fn build_team(descriptors: &[UnitDescriptor], catalog: &Catalog, side: Side) -> BuiltTeam {
    let mut units = Vec::with_capacity(descriptors.len());
    let mut dropped = Vec::new();

    for descriptor in descriptors {
        let Some(template) = catalog.find(&descriptor.name) else {
            tracing::warn!(
                name = %descriptor.name,
                "descriptor references unknown template, dropping unit"
            );
            dropped.push(ArenaError::TemplateNotFound {
                name: descriptor.name.clone(),
            });
            continue;
        };

        units.push(instantiate(descriptor, template, side));
    }

    BuiltTeam { units, dropped }
}

/// Merge one descriptor with its template into a battle unit.
fn instantiate(descriptor: &UnitDescriptor, template: &UnitTemplate, side: Side) -> Unit {
    let level = descriptor.level.unwrap_or(1).clamp(1, 3);

    let base_hp = descriptor.hp.unwrap_or(template.hp);
    let base_attack = descriptor.attack.unwrap_or(template.attack);
    // Defense is not rescaled by the level step
    let defense = descriptor.defense.unwrap_or(template.defense);

    let scaled_hp = apply_level_scaling(base_hp, level);
    let attack = apply_level_scaling(base_attack, level);

    let max_hp = descriptor.max_hp.unwrap_or(scaled_hp);

    Unit {
        id: 0, // assigned by Battle::new
        name: template.name.clone(),
        side,
        level,
        attack,
        defense,
        crit_chance: template.crit_chance,
        hp: max_hp,
        max_hp,
        mana: template.mana_start.min(template.mana_max),
        mana_max: template.mana_max,
        attack_speed: template.attack_speed,
        attack_range: template.attack_range,
        move_speed: Fixed::from_num(MOVE_SPEED),
        position: Vec2Fixed::ZERO,
        target: None,
        attack_timer: Fixed::ZERO,
        cast_timer: Fixed::ZERO,
        facing_right: true,
        color: template.color,
        ability: template.ability,
        popups: Vec::new(),
    }
}

/// Probability that a generated enemy arrives upgraded to level 2.
fn upgrade_chance() -> Fixed {
    Fixed::ONE / Fixed::from_num(10)
}

/// Draw an enemy encounter from the catalog.
///
/// Picks `count` templates uniformly; each independently has a 10% chance
/// of arriving at upgrade level 2 (with defense pre-scaled, matching how
/// upgraded enemies are rolled outside the roster merge).
#[must_use]
pub fn generate_encounter(
    catalog: &Catalog,
    count: usize,
    rng: &mut BattleRng,
) -> Vec<UnitDescriptor> {
    if catalog.is_empty() {
        return Vec::new();
    }

    (0..count)
        .map(|_| {
            let template = &catalog.templates()[rng.pick(catalog.len())];
            if rng.chance(upgrade_chance()) {
                tracing::debug!(name = %template.name, "generated upgraded enemy");
                UnitDescriptor {
                    name: template.name.clone(),
                    defense: Some(template.defense * 8 / 5),
                    level: Some(2),
                    ..UnitDescriptor::default()
                }
            } else {
                UnitDescriptor::named(&template.name)
            }
        })
        .collect()
}
