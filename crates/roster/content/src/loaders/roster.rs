//! Character roster loader.
//!
//! Loads roster records from RON files and checks the integrity rules the
//! catalog relies on (positive base stats; duplicate names are rejected later
//! by `Catalog::new`).

use std::path::Path;

use roster_core::CharacterRecord;

use crate::loaders::{LoadResult, read_file};

/// Loader for the character roster from RON files.
pub struct RosterLoader;

impl RosterLoader {
    /// Load roster records from a RON file.
    ///
    /// RON format: `Vec<CharacterRecord>`
    pub fn load(path: &Path) -> LoadResult<Vec<CharacterRecord>> {
        let content = read_file(path)?;
        Self::from_str(&content)
    }

    /// Parse roster records from RON text.
    pub fn from_str(content: &str) -> LoadResult<Vec<CharacterRecord>> {
        let records: Vec<CharacterRecord> = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse roster RON: {}", e))?;

        for record in &records {
            for (label, value) in [
                ("str", record.base.str),
                ("int", record.base.int),
                ("vit", record.base.vit),
                ("agi", record.base.agi),
            ] {
                if value == 0 {
                    anyhow::bail!(
                        "Invalid roster entry '{}': base {} must be positive",
                        record.name,
                        label
                    );
                }
            }
        }

        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster_core::Category;

    const SAMPLE: &str = r#"[
        (category: Heart, name: "秋山 駿", base: (str: 437, int: 627, vit: 437, agi: 603)),
        (category: Body, name: "桐生 一馬", base: (str: 542, int: 486, vit: 652, agi: 419)),
    ]"#;

    #[test]
    fn parses_well_formed_roster() {
        let records = RosterLoader::from_str(SAMPLE).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].category, Category::Heart);
        assert_eq!(records[1].base.agi, 419);
    }

    #[test]
    fn rejects_zero_base_stats() {
        let bad = r#"[(category: Body, name: "x", base: (str: 0, int: 1, vit: 1, agi: 1))]"#;
        let err = RosterLoader::from_str(bad).unwrap_err();
        assert!(err.to_string().contains("must be positive"));
    }

    #[test]
    fn rejects_malformed_ron() {
        assert!(RosterLoader::from_str("not ron at all").is_err());
    }
}
