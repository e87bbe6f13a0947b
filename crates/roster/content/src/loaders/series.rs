//! Equipment series loader.
//!
//! Loads equipment series bundles from RON files. Series names must be
//! unique within one table since the UI selects them by name.

use std::collections::BTreeSet;
use std::path::Path;

use roster_core::EquipmentSeries;

use crate::loaders::{LoadResult, read_file};

/// Loader for the equipment series table from RON files.
pub struct SeriesLoader;

impl SeriesLoader {
    /// Load equipment series from a RON file.
    ///
    /// RON format: `Vec<EquipmentSeries>`
    pub fn load(path: &Path) -> LoadResult<Vec<EquipmentSeries>> {
        let content = read_file(path)?;
        Self::from_str(&content)
    }

    /// Parse equipment series from RON text.
    pub fn from_str(content: &str) -> LoadResult<Vec<EquipmentSeries>> {
        let series: Vec<EquipmentSeries> = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse series RON: {}", e))?;

        let mut seen = BTreeSet::new();
        for entry in &series {
            if !seen.insert(entry.name.as_str()) {
                anyhow::bail!("Duplicate series name '{}'", entry.name);
            }
        }

        Ok(series)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster_core::StatKey;

    const SAMPLE: &str = r#"[
        (name: "サイバー", bonuses: [(Str, 40)]),
        (name: "司祭", bonuses: [(Int, 40)]),
    ]"#;

    #[test]
    fn parses_well_formed_series_table() {
        let series = SeriesLoader::from_str(SAMPLE).unwrap();
        assert_eq!(series.len(), 2);
        assert_eq!(series[0].bonus(StatKey::Str), 40);
    }

    #[test]
    fn rejects_duplicate_series_names() {
        let bad = r#"[
            (name: "サイバー", bonuses: [(Str, 40)]),
            (name: "サイバー", bonuses: [(Int, 40)]),
        ]"#;
        let err = SeriesLoader::from_str(bad).unwrap_err();
        assert!(err.to_string().contains("Duplicate series name"));
    }
}
