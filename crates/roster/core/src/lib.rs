//! Deterministic roster stat engine shared across frontends.
//!
//! `roster-core` defines the canonical rules for derived character stats:
//! the immutable character catalog, the pure stat calculator, and the
//! [`planner::Planner`] facade that presentation layers call into. All
//! arithmetic is exact integer arithmetic, so any two callers computing the
//! same selection get bit-identical results.
pub mod catalog;
pub mod planner;
pub mod stats;

pub use catalog::{Catalog, CatalogError, Category, CharacterRecord};
pub use planner::Planner;
pub use stats::{
    AgilityToggles, EquipmentSeries, EquipmentSlot, LimitBreak, ModifierError, ModifierSelection,
    StatBlock, StatKey, apply_agility_multipliers, compute, compute_additive,
};
