//! # Arena Core
//!
//! Deterministic combat resolution core for the auto-battler.
//!
//! This crate contains **only** deterministic logic:
//! - No rendering
//! - No IO
//! - No system randomness (crit rolls come from a seeded PRNG)
//! - No floating-point math (uses fixed-point)
//!
//! This separation enables:
//! - Headless battle runs for CI and balance testing
//! - Reproducible outcomes for a given seed within a run
//! - Property-based testing of the simulation invariants
//!
//! ## Crate Structure
//!
//! - [`catalog`] - Immutable unit template definitions
//! - [`unit`] - Battle-time unit state and behaviors
//! - [`roster`] - Descriptor-to-unit merge and encounter generation
//! - [`battle`] - The fixed-tick combat loop
//! - [`events`] - Per-step event stream for the presentation layer
//! - [`view`] - Read-only snapshots and popup lifecycle
//! - [`math`] - Fixed-point math utilities

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic)]

pub mod battle;
pub mod catalog;
pub mod error;
pub mod events;
pub mod math;
pub mod rng;
pub mod roster;
pub mod unit;
pub mod view;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::battle::{Battle, BattleResult};
    pub use crate::catalog::{builtin_catalog, Ability, Catalog, Color, UnitTemplate};
    pub use crate::error::{ArenaError, Result};
    pub use crate::events::{AttackEvent, CastEvent, DeathEvent, StepEvents};
    pub use crate::math::{Fixed, Vec2Fixed};
    pub use crate::rng::BattleRng;
    pub use crate::roster::{build_team, generate_encounter, BuiltTeam, UnitDescriptor};
    pub use crate::unit::{Side, Unit, UnitId};
    pub use crate::view::{snapshot, UnitView};
}
