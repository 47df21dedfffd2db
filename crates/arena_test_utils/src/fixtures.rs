//! Test fixtures and helpers.
//!
//! Pre-built templates and descriptors for consistent testing.

use arena_core::catalog::{Ability, Color, UnitTemplate};
use arena_core::roster::UnitDescriptor;
use fixed::types::I32F32;

/// Create a fixed-point number from an integer.
#[must_use]
pub fn fixed(n: i32) -> I32F32 {
    I32F32::from_num(n)
}

/// Create a fixed-point number from a float (for tests only).
///
/// Note: In real simulation code, never use floats.
/// This is only for convenient test setup.
#[must_use]
pub fn fixed_f(n: f64) -> I32F32 {
    I32F32::from_num(n)
}

/// A crit-free melee template with a mana pool too deep to ever cast.
///
/// Duels between these units resolve through basic attacks alone, which
/// keeps assertions about damage arithmetic exact.
#[must_use]
pub fn template(name: &str) -> UnitTemplate {
    UnitTemplate {
        name: name.to_string(),
        hp: 100,
        attack: 10,
        defense: 0,
        crit_chance: I32F32::ZERO,
        mana_max: 1_000_000,
        mana_start: 0,
        attack_speed: I32F32::ONE,
        attack_range: fixed(80),
        color: Color::new(128, 128, 128),
        ability: Ability::Mend { heal: 50 },
    }
}

/// A bare descriptor carrying only a template name.
#[must_use]
pub fn descriptor(name: &str) -> UnitDescriptor {
    UnitDescriptor::named(name)
}
