//! Stat keys and stat blocks.
//!
//! [`StatKey`] names one of the four tunable dimensions; [`StatBlock`] holds a
//! concrete value for each of them. The same block type is used for base
//! attributes and for calculation results.

/// The four tunable stat dimensions.
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
pub enum StatKey {
    /// Strength (筋力)
    Str,
    /// Intelligence (知性)
    Int,
    /// Vitality (根性)
    Vit,
    /// Agility (素早さ)
    Agi,
}

/// A value for each of the four stats.
///
/// Used both for a character's base attributes and for the final computed
/// result. Values are non-negative by construction (`u32`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatBlock {
    pub str: u32,
    pub int: u32,
    pub vit: u32,
    pub agi: u32,
}

impl StatBlock {
    /// Create a new stat block with the given values.
    pub const fn new(str: u32, int: u32, vit: u32, agi: u32) -> Self {
        Self { str, int, vit, agi }
    }

    /// Get the value for a stat key.
    pub const fn get(&self, key: StatKey) -> u32 {
        match key {
            StatKey::Str => self.str,
            StatKey::Int => self.int,
            StatKey::Vit => self.vit,
            StatKey::Agi => self.agi,
        }
    }

    /// Get a mutable reference to the value for a stat key.
    pub fn get_mut(&mut self, key: StatKey) -> &mut u32 {
        match key {
            StatKey::Str => &mut self.str,
            StatKey::Int => &mut self.int,
            StatKey::Vit => &mut self.vit,
            StatKey::Agi => &mut self.agi,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn keys_round_trip_through_strings() {
        for key in StatKey::iter() {
            let parsed = StatKey::from_str(key.as_ref()).unwrap();
            assert_eq!(parsed, key);
        }
        assert_eq!(StatKey::from_str("AGI").unwrap(), StatKey::Agi);
    }

    #[test]
    fn block_accessors_cover_every_key() {
        let mut block = StatBlock::new(1, 2, 3, 4);
        assert_eq!(block.get(StatKey::Str), 1);
        assert_eq!(block.get(StatKey::Agi), 4);

        *block.get_mut(StatKey::Vit) += 10;
        assert_eq!(block.vit, 13);
    }
}
