//! Stat calculator - the pure (base, modifiers) → final-stats transform.
//!
//! Pipeline, in fixed order:
//!
//! 1. Percentage accumulation: +5% per limit-break level on str/int/vit,
//!    +7% per trait/jewel slot on whichever stat the slot names (agi allowed).
//! 2. Base scaling: `ceil(base × (1 + percent))`, always ceiling.
//! 3. Equipment flats: slot base bonus plus series bonus for each occupied slot.
//! 4. Agility finishing pass: one ceiling over the product of the active
//!    multipliers (×1.15 dash 1, ×1.15 dash 2, ×1.15 ambush, ×1.12 mastery).
//!
//! All arithmetic is exact: percentages are integer percent points and the
//! multiplier chain is a rational number (products of 115 and 112 over powers
//! of 100), so the ceiling matches the real-valued result bit-for-bit.
//!
//! The additive phase (steps 1-3) is [`compute_additive`]; the finishing pass
//! is [`apply_agility_multipliers`]; [`compute`] chains both.

use strum::IntoEnumIterator;

use super::key::{StatBlock, StatKey};
use super::modifiers::{AgilityToggles, ModifierSelection};

/// Percent points granted to str/int/vit per limit-break level.
const LIMIT_BREAK_PERCENT: u64 = 5;

/// Percent points granted by each trait/jewel slot to its named stat.
const SLOT_PERCENT: u64 = 7;

/// Dash and ambush multiplier, as a fraction over 100 (×1.15).
const DASH_NUMERATOR: u64 = 115;

/// Mastery multiplier, as a fraction over 100 (×1.12).
const MASTERY_NUMERATOR: u64 = 112;

/// Ceiling of `value × (100 + percent) / 100` in exact integer arithmetic.
fn scale_ceil(value: u32, percent: u64) -> u32 {
    let scaled = u64::from(value) * (100 + percent);
    // Ceiling division; a no-op whenever the product is already a multiple
    // of 100 (including percent == 0).
    scaled.div_ceil(100) as u32
}

/// Additive phase: percentage scaling plus equipment flat bonuses.
///
/// This is the complete "basic" calculator variant; it never touches the
/// agility multiplier toggles.
pub fn compute_additive(base: &StatBlock, mods: &ModifierSelection<'_>) -> StatBlock {
    let mut out = StatBlock::default();

    // Steps 1-2: accumulate percent points per stat, then scale with ceiling.
    for key in StatKey::iter() {
        let mut percent = 0u64;
        if key != StatKey::Agi {
            percent += LIMIT_BREAK_PERCENT * u64::from(mods.limit_break.level());
        }
        for slot in mods.percent_slots() {
            if slot == Some(key) {
                percent += SLOT_PERCENT;
            }
        }
        *out.get_mut(key) = scale_ceil(base.get(key), percent);
    }

    // Step 3: flat bonuses, applied after rounding. An occupied slot grants
    // its fixed base bonus and the chosen series bonus; an empty slot grants
    // neither.
    for (slot, series) in mods.gear() {
        if let Some(series) = series {
            let (stat, amount) = slot.base_bonus();
            *out.get_mut(stat) += amount;
            for &(stat, amount) in &series.bonuses {
                *out.get_mut(stat) += amount;
            }
        }
    }

    out
}

/// Agility finishing pass: `ceil(agi × product of active multipliers)`.
///
/// The ceiling is applied once, to the full product, not per multiplier.
/// With no toggles active this is the identity.
pub fn apply_agility_multipliers(agi: u32, toggles: &AgilityToggles) -> u32 {
    let mut numerator = 1u64;
    let mut denominator = 1u64;

    for active in [toggles.dash1, toggles.dash2, toggles.ambush] {
        if active {
            numerator *= DASH_NUMERATOR;
            denominator *= 100;
        }
    }
    if toggles.mastery {
        numerator *= MASTERY_NUMERATOR;
        denominator *= 100;
    }

    (u64::from(agi) * numerator).div_ceil(denominator) as u32
}

/// Full calculator: additive phase followed by the agility finishing pass.
pub fn compute(base: &StatBlock, mods: &ModifierSelection<'_>) -> StatBlock {
    let mut out = compute_additive(base, mods);
    out.agi = apply_agility_multipliers(out.agi, &mods.agility);
    out
}
