//! Player-selected modifiers for a single calculation request.
//!
//! A [`ModifierSelection`] is constructed per request and never persisted.
//! Every field is a closed enum, bool, or validated newtype, so once a
//! selection exists the calculator cannot fail on it.

use super::equipment::{EquipmentSeries, EquipmentSlot};
use super::key::StatKey;

/// A validated limit-break level (0..=5).
///
/// Each level grants +5% to str/int/vit (never agi). The constructor rejects
/// out-of-range levels so downstream computation stays total.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LimitBreak(u8);

impl LimitBreak {
    /// Maximum limit-break level.
    pub const MAX: u8 = 5;

    /// Level 0 (no limit break).
    pub const fn none() -> Self {
        Self(0)
    }

    /// Create a limit break at the given level.
    pub fn new(level: u8) -> Result<Self, ModifierError> {
        if level > Self::MAX {
            return Err(ModifierError::InvalidLimitBreak { level });
        }
        Ok(Self(level))
    }

    /// The level as a plain integer.
    pub const fn level(&self) -> u8 {
        self.0
    }
}

/// Errors raised while constructing a modifier selection.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ModifierError {
    /// Limit-break level outside 0..=5.
    #[error("invalid limit break level {level}, maximum is 5")]
    InvalidLimitBreak { level: u8 },
}

/// Toggleable multiplicative agility bonuses.
///
/// Applied as a single finishing pass after all additive computation:
/// dash 1/2 and ambush are ×1.15 each, mastery is ×1.12, and the ceiling is
/// taken once over the whole product.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgilityToggles {
    pub dash1: bool,
    pub dash2: bool,
    pub ambush: bool,
    pub mastery: bool,
}

impl AgilityToggles {
    /// No toggles active (×1.0 overall).
    pub const fn none() -> Self {
        Self {
            dash1: false,
            dash2: false,
            ambush: false,
            mastery: false,
        }
    }

    /// True if no toggle is active.
    pub const fn is_empty(&self) -> bool {
        !(self.dash1 || self.dash2 || self.ambush || self.mastery)
    }
}

/// The full set of player-selected modifiers for one calculation.
///
/// Equipment slots borrow series from whatever series table the caller holds;
/// `None` means the slot is empty and grants no bonus at all.
#[derive(Clone, Copy, Debug, Default)]
pub struct ModifierSelection<'a> {
    /// Limit-break level, +5% per level to str/int/vit.
    pub limit_break: LimitBreak,

    /// Trait slot: +7% to the named stat (agi allowed).
    pub trait_stat: Option<StatKey>,

    /// First jewel slot: +7% to the named stat.
    pub jewel1: Option<StatKey>,

    /// Second jewel slot: +7% to the named stat.
    pub jewel2: Option<StatKey>,

    /// Head slot series (slot base: int +80).
    pub head: Option<&'a EquipmentSeries>,

    /// Body slot series (slot base: vit +110).
    pub body: Option<&'a EquipmentSeries>,

    /// Legs slot series (slot base: str +80).
    pub legs: Option<&'a EquipmentSeries>,

    /// Agility multiplier toggles for the finishing pass.
    pub agility: AgilityToggles,
}

impl<'a> ModifierSelection<'a> {
    /// An empty selection: computes base stats unchanged.
    pub fn none() -> Self {
        Self::default()
    }

    /// The three percentage slots (trait, jewel 1, jewel 2) in order.
    pub const fn percent_slots(&self) -> [Option<StatKey>; 3] {
        [self.trait_stat, self.jewel1, self.jewel2]
    }

    /// The three equipment slots with their selected series, in order.
    pub const fn gear(&self) -> [(EquipmentSlot, Option<&'a EquipmentSeries>); 3] {
        [
            (EquipmentSlot::Head, self.head),
            (EquipmentSlot::Body, self.body),
            (EquipmentSlot::Legs, self.legs),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn limit_break_accepts_levels_up_to_five() {
        for level in 0..=LimitBreak::MAX {
            assert_eq!(LimitBreak::new(level).unwrap().level(), level);
        }
    }

    #[test]
    fn limit_break_rejects_out_of_range_levels() {
        assert_eq!(
            LimitBreak::new(6),
            Err(ModifierError::InvalidLimitBreak { level: 6 })
        );
    }

    #[test]
    fn empty_selection_has_no_active_modifiers() {
        let selection = ModifierSelection::none();
        assert_eq!(selection.limit_break.level(), 0);
        assert_eq!(selection.percent_slots(), [None, None, None]);
        assert!(selection.agility.is_empty());
        for (_, series) in selection.gear() {
            assert!(series.is_none());
        }
    }
}
