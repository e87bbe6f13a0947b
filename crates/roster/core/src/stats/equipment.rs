//! Equipment slots and series bonuses.
//!
//! Equipping *any* series in a slot grants that slot's fixed base bonus; the
//! chosen series then adds its own flat bonus map on top. An empty slot
//! (`None` in [`ModifierSelection`](super::ModifierSelection)) grants neither.

use super::key::StatKey;

/// The three equipment slots.
///
/// Each slot carries a fixed flat bonus that is granted for merely equipping
/// any series in it, independent of which series was chosen.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum EquipmentSlot {
    Head,
    Body,
    Legs,
}

impl EquipmentSlot {
    /// The fixed flat bonus granted by equipping any series in this slot.
    pub const fn base_bonus(&self) -> (StatKey, u32) {
        match self {
            EquipmentSlot::Head => (StatKey::Int, 80),
            EquipmentSlot::Body => (StatKey::Vit, 110),
            EquipmentSlot::Legs => (StatKey::Str, 80),
        }
    }
}

/// A named equipment series: a bundle of flat stat bonuses.
///
/// Series bonuses are additive and applied after base scaling. A series
/// usually targets a single stat (e.g. サイバー grants str +40), but the
/// representation allows any subset of stats.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EquipmentSeries {
    /// Unique display name of the series.
    pub name: String,
    /// Flat bonus per targeted stat.
    pub bonuses: Vec<(StatKey, u32)>,
}

impl EquipmentSeries {
    /// Create a series granting a single-stat flat bonus.
    pub fn single(name: impl Into<String>, stat: StatKey, amount: u32) -> Self {
        Self {
            name: name.into(),
            bonuses: vec![(stat, amount)],
        }
    }

    /// Total flat bonus this series grants to a stat.
    pub fn bonus(&self, key: StatKey) -> u32 {
        self.bonuses
            .iter()
            .filter(|(stat, _)| *stat == key)
            .map(|(_, amount)| amount)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slot_base_bonuses_are_fixed() {
        assert_eq!(EquipmentSlot::Head.base_bonus(), (StatKey::Int, 80));
        assert_eq!(EquipmentSlot::Body.base_bonus(), (StatKey::Vit, 110));
        assert_eq!(EquipmentSlot::Legs.base_bonus(), (StatKey::Str, 80));
    }

    #[test]
    fn series_bonus_only_targets_named_stats() {
        let series = EquipmentSeries::single("サイバー", StatKey::Str, 40);
        assert_eq!(series.bonus(StatKey::Str), 40);
        assert_eq!(series.bonus(StatKey::Int), 0);
    }
}
