//! Data-driven unit template definitions.
//!
//! Templates are the immutable archetype data a battle-time [`crate::unit::Unit`]
//! is derived from. The catalog is built once at process start and never
//! mutated. This module contains no IO - it only defines data types and the
//! built-in roster; file loading is handled by the headless crate.

use serde::{Deserialize, Serialize};

use crate::math::{fixed_serde, Fixed};

/// Display color for a unit archetype.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Color {
    /// Create a color from RGB channels.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Special ability cast when a unit's mana reaches its cap.
///
/// This is a closed variant set: adding an archetype with a new ability
/// shape means adding a variant here, not touching the simulator loop.
/// Ability damage is magic damage - it ignores defense entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Ability {
    /// Fixed magic burst to the caster's current target.
    Bolt {
        /// Damage applied to the target.
        damage: u32,
    },
    /// Fixed damage to every living enemy strictly within a radius of the caster.
    Nova {
        /// Damage applied to each enemy in the area.
        damage: u32,
        /// Area radius in world units (exclusive boundary).
        #[serde(with = "fixed_serde")]
        radius: Fixed,
    },
    /// Self-heal, clamped to max HP.
    Mend {
        /// HP restored to the caster.
        heal: u32,
    },
}

/// Canonical, immutable definition of a unit archetype.
///
/// # Example RON
///
/// Fixed-point fields serialize as raw bits (value × 2³²).
///
/// ```ron
/// UnitTemplate(
///     name: "Garen",
///     hp: 650,
///     attack: 50,
///     defense: 10,
///     crit_chance: 429496730,       // 0.1
///     mana_max: 100,
///     mana_start: 0,
///     attack_speed: 2576980378,     // 0.6 attacks/second
///     attack_range: 343597383680,   // 80.0
///     color: (r: 0, g: 0, b: 200),
///     ability: Nova(damage: 100, radius: 644245094400),  // 150.0
/// )
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitTemplate {
    /// Unique name, used as the lookup key.
    pub name: String,

    /// Base hit points at level 1.
    pub hp: u32,

    /// Base attack damage at level 1.
    pub attack: u32,

    /// Flat damage reduction applied to incoming basic attacks.
    #[serde(default)]
    pub defense: u32,

    /// Critical strike probability in `[0, 1]`.
    #[serde(with = "fixed_serde")]
    pub crit_chance: Fixed,

    /// Mana required to cast the special ability.
    pub mana_max: u32,

    /// Mana the unit enters battle with.
    #[serde(default)]
    pub mana_start: u32,

    /// Attacks per second. Must be positive.
    #[serde(with = "fixed_serde")]
    pub attack_speed: Fixed,

    /// Attack range in world units (inclusive boundary).
    #[serde(with = "fixed_serde")]
    pub attack_range: Fixed,

    /// Display color.
    pub color: Color,

    /// Special ability cast at full mana.
    pub ability: Ability,
}

/// The template catalog: archetype name → definition.
///
/// Lookup is a linear scan; catalogs are a handful of entries.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    templates: Vec<UnitTemplate>,
}

impl Catalog {
    /// Build a catalog from a list of templates.
    #[must_use]
    pub fn new(templates: Vec<UnitTemplate>) -> Self {
        Self { templates }
    }

    /// Find a template by name.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&UnitTemplate> {
        self.templates.iter().find(|t| t.name == name)
    }

    /// All templates in catalog order.
    #[must_use]
    pub fn templates(&self) -> &[UnitTemplate] {
        &self.templates
    }

    /// Number of templates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// Check if the catalog has no templates.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

// Range bands in world units.
const R_MELEE: i64 = 80;
const R_RANGED: i64 = 300;
const R_SNIPER: i64 = 500;

/// The built-in seven-archetype catalog.
///
/// Stats are externally supplied balance data; this crate is not the
/// balancing authority.
#[must_use]
pub fn builtin_catalog() -> Catalog {
    let melee = Fixed::from_num(R_MELEE);
    let ranged = Fixed::from_num(R_RANGED);
    let sniper = Fixed::from_num(R_SNIPER);

    Catalog::new(vec![
        UnitTemplate {
            name: "Garen".to_string(),
            hp: 650,
            attack: 50,
            defense: 10,
            crit_chance: Fixed::from_num(0.1),
            mana_max: 100,
            mana_start: 0,
            attack_speed: Fixed::from_num(0.6),
            attack_range: melee,
            color: Color::new(0, 0, 200),
            ability: Ability::Nova {
                damage: 100,
                radius: Fixed::from_num(150),
            },
        },
        UnitTemplate {
            name: "Vi".to_string(),
            hp: 600,
            attack: 60,
            defense: 8,
            crit_chance: Fixed::from_num(0.1),
            mana_max: 80,
            mana_start: 0,
            attack_speed: Fixed::from_num(0.7),
            attack_range: melee,
            color: Color::new(200, 0, 200),
            ability: Ability::Mend { heal: 50 },
        },
        UnitTemplate {
            name: "Ahri".to_string(),
            hp: 500,
            attack: 40,
            defense: 5,
            crit_chance: Fixed::from_num(0.2),
            mana_max: 70,
            mana_start: 10,
            attack_speed: Fixed::from_num(0.75),
            attack_range: ranged,
            color: Color::new(255, 105, 180),
            ability: Ability::Bolt { damage: 150 },
        },
        UnitTemplate {
            name: "Ezreal".to_string(),
            hp: 500,
            attack: 45,
            defense: 4,
            crit_chance: Fixed::from_num(0.25),
            mana_max: 60,
            mana_start: 0,
            attack_speed: Fixed::from_num(0.8),
            attack_range: sniper,
            color: Color::new(255, 255, 0),
            ability: Ability::Mend { heal: 50 },
        },
        UnitTemplate {
            name: "Aurelion".to_string(),
            hp: 700,
            attack: 30,
            defense: 5,
            crit_chance: Fixed::from_num(0.2),
            mana_max: 120,
            mana_start: 40,
            attack_speed: Fixed::from_num(0.65),
            attack_range: ranged,
            color: Color::new(0, 0, 100),
            ability: Ability::Mend { heal: 50 },
        },
        UnitTemplate {
            name: "Riven".to_string(),
            hp: 550,
            attack: 55,
            defense: 8,
            crit_chance: Fixed::from_num(0.15),
            mana_max: 100,
            mana_start: 0,
            attack_speed: Fixed::from_num(0.7),
            attack_range: melee,
            color: Color::new(200, 100, 100),
            ability: Ability::Mend { heal: 50 },
        },
        UnitTemplate {
            name: "Shen".to_string(),
            hp: 700,
            attack: 45,
            defense: 12,
            crit_chance: Fixed::from_num(0.1),
            mana_max: 100,
            mana_start: 50,
            attack_speed: Fixed::from_num(0.65),
            attack_range: melee,
            color: Color::new(100, 0, 200),
            ability: Ability::Mend { heal: 50 },
        },
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_lookup() {
        let catalog = builtin_catalog();
        assert_eq!(catalog.len(), 7);

        let garen = catalog.find("Garen").expect("Garen in builtin catalog");
        assert_eq!(garen.hp, 650);
        assert_eq!(garen.defense, 10);
        assert!(matches!(garen.ability, Ability::Nova { damage: 100, .. }));

        let ahri = catalog.find("Ahri").expect("Ahri in builtin catalog");
        assert!(matches!(ahri.ability, Ability::Bolt { damage: 150 }));
        assert_eq!(ahri.mana_start, 10);
    }

    #[test]
    fn find_missing_returns_none() {
        let catalog = builtin_catalog();
        assert!(catalog.find("Teemo").is_none());
    }

    #[test]
    fn builtin_names_unique() {
        let catalog = builtin_catalog();
        for (i, a) in catalog.templates().iter().enumerate() {
            for b in &catalog.templates()[i + 1..] {
                assert_ne!(a.name, b.name);
            }
        }
    }

    #[test]
    fn builtin_attack_speeds_positive() {
        // attack_interval divides by attack_speed; the data must never be zero
        for t in builtin_catalog().templates() {
            assert!(t.attack_speed > Fixed::ZERO, "{} has zero attack speed", t.name);
        }
    }

    #[test]
    fn template_ron_roundtrip() {
        let catalog = builtin_catalog();
        let garen = catalog.find("Garen").unwrap();
        let text = ron::to_string(garen).expect("serialize template");
        let back: UnitTemplate = ron::from_str(&text).expect("parse template");
        assert_eq!(&back, garen);
    }
}
