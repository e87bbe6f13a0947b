//! Stat system - the pure calculation pipeline.
//!
//! The pipeline has two phases, applied in a fixed order:
//!
//! ```text
//! [ Percentage accumulation (limit break + trait/jewel slots) ]
//!      ↓
//! [ Base scaling (ceiling) ]
//!      ↓
//! [ Equipment flat bonuses (slot base + series) ]
//!      ↓
//! [ Agility multiplier finishing pass (optional) ]
//! ```
//!
//! ## Principles
//!
//! 1. **Pure**: no I/O, no randomness, no shared mutable state
//! 2. **Exact**: integer rational arithmetic only, ceiling rounds toward +inf
//! 3. **Total**: every structurally valid selection produces a result
//!
//! The additive phase (percentages + flats) is shared by both calculator
//! variants; the agility finishing pass is an independent extension step and
//! can be applied or skipped without touching the additive logic.

pub mod calculator;
pub mod equipment;
pub mod key;
pub mod modifiers;

pub use calculator::{apply_agility_multipliers, compute, compute_additive};
pub use equipment::{EquipmentSeries, EquipmentSlot};
pub use key::{StatBlock, StatKey};
pub use modifiers::{AgilityToggles, LimitBreak, ModifierError, ModifierSelection};
