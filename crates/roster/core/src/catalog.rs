//! Character catalog - the immutable roster.
//!
//! The catalog is constructed once at process start from a static table (or a
//! data file via `roster-content` loaders) and never mutated afterward. It is
//! `Send + Sync` by construction, so any number of threads may look up
//! characters concurrently without coordination.

use std::collections::BTreeMap;

use crate::stats::StatBlock;

/// Roster category tag for a character.
///
/// The original data tags characters with a single kanji (心/技/体); both the
/// English names and the kanji parse via `FromStr`.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::EnumString,
    strum::EnumIter,
    strum::Display,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
pub enum Category {
    /// Heart (心)
    #[strum(to_string = "heart", serialize = "心")]
    Heart,
    /// Technique (技)
    #[strum(to_string = "technique", serialize = "技")]
    Technique,
    /// Body (体)
    #[strum(to_string = "body", serialize = "体")]
    Body,
}

/// One immutable roster entry: category, unique name, base attributes.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CharacterRecord {
    pub category: Category,
    pub name: String,
    pub base: StatBlock,
}

impl CharacterRecord {
    /// Create a new record.
    pub fn new(category: Category, name: impl Into<String>, base: StatBlock) -> Self {
        Self {
            category,
            name: name.into(),
            base,
        }
    }
}

/// Catalog lookup and construction errors.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CatalogError {
    /// The requested character name is not in the catalog.
    #[error("unknown character '{0}'")]
    UnknownCharacter(String),

    /// Two records with the same name were supplied at construction.
    #[error("duplicate character name '{0}' in catalog")]
    DuplicateName(String),
}

/// The immutable character catalog.
///
/// Records keep their declaration order, which is the order [`Catalog::names`]
/// reports; lookups go through a name index.
#[derive(Clone, Debug)]
pub struct Catalog {
    records: Vec<CharacterRecord>,
    index: BTreeMap<String, usize>,
}

impl Catalog {
    /// Build a catalog from records, rejecting duplicate names.
    pub fn new(
        records: impl IntoIterator<Item = CharacterRecord>,
    ) -> Result<Self, CatalogError> {
        let records: Vec<CharacterRecord> = records.into_iter().collect();
        let mut index = BTreeMap::new();
        for (position, record) in records.iter().enumerate() {
            if index.insert(record.name.clone(), position).is_some() {
                return Err(CatalogError::DuplicateName(record.name.clone()));
            }
        }
        Ok(Self { records, index })
    }

    /// Look up a character's record by name.
    pub fn get(&self, name: &str) -> Result<&CharacterRecord, CatalogError> {
        self.index
            .get(name)
            .map(|&position| &self.records[position])
            .ok_or_else(|| CatalogError::UnknownCharacter(name.to_string()))
    }

    /// All character names, optionally restricted to one category.
    ///
    /// Names come back in catalog declaration order.
    pub fn names(&self, filter: Option<Category>) -> impl Iterator<Item = &str> {
        self.records
            .iter()
            .filter(move |record| filter.is_none_or(|category| record.category == category))
            .map(|record| record.name.as_str())
    }

    /// Names matching a substring query, sorted lexicographically.
    ///
    /// This mirrors the search box of the planning UI: filter by category
    /// first, sort, then keep names containing the query.
    pub fn names_matching(&self, filter: Option<Category>, query: &str) -> Vec<&str> {
        let mut names: Vec<&str> = self.names(filter).collect();
        names.sort_unstable();
        if !query.is_empty() {
            names.retain(|name| name.contains(query));
        }
        names
    }

    /// Iterate over all records in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &CharacterRecord> {
        self.records.iter()
    }

    /// Number of characters in the catalog.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True if the catalog holds no characters.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn sample() -> Vec<CharacterRecord> {
        vec![
            CharacterRecord::new(Category::Body, "桐生 一馬", StatBlock::new(542, 486, 652, 419)),
            CharacterRecord::new(Category::Heart, "真島 吾朗", StatBlock::new(431, 658, 431, 511)),
            CharacterRecord::new(Category::Technique, "伊達 真", StatBlock::new(517, 450, 511, 560)),
        ]
    }

    #[test]
    fn lookup_returns_the_declared_record() {
        let catalog = Catalog::new(sample()).unwrap();
        let record = catalog.get("桐生 一馬").unwrap();
        assert_eq!(record.category, Category::Body);
        assert_eq!(record.base.vit, 652);
    }

    #[test]
    fn unknown_name_is_an_error() {
        let catalog = Catalog::new(sample()).unwrap();
        assert_eq!(
            catalog.get("謎の男"),
            Err(CatalogError::UnknownCharacter("謎の男".to_string()))
        );
    }

    #[test]
    fn duplicate_names_are_rejected_at_construction() {
        let mut records = sample();
        records.push(records[0].clone());
        assert_eq!(
            Catalog::new(records).unwrap_err(),
            CatalogError::DuplicateName("桐生 一馬".to_string())
        );
    }

    #[test]
    fn names_keep_declaration_order() {
        let catalog = Catalog::new(sample()).unwrap();
        let names: Vec<&str> = catalog.names(None).collect();
        assert_eq!(names, ["桐生 一馬", "真島 吾朗", "伊達 真"]);
    }

    #[test]
    fn category_filter_restricts_names() {
        let catalog = Catalog::new(sample()).unwrap();
        let names: Vec<&str> = catalog.names(Some(Category::Heart)).collect();
        assert_eq!(names, ["真島 吾朗"]);
    }

    #[test]
    fn substring_search_is_sorted_and_filtered() {
        let catalog = Catalog::new(sample()).unwrap();
        assert_eq!(catalog.names_matching(None, "一馬"), ["桐生 一馬"]);
        assert!(catalog.names_matching(None, "存在しない").is_empty());
        assert_eq!(catalog.names_matching(None, "").len(), 3);
    }

    #[test]
    fn categories_parse_from_kanji_and_english() {
        assert_eq!(Category::from_str("心").unwrap(), Category::Heart);
        assert_eq!(Category::from_str("技").unwrap(), Category::Technique);
        assert_eq!(Category::from_str("body").unwrap(), Category::Body);
    }
}
