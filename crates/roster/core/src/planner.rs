//! Planner facade - the two operations exposed to presentation layers.
//!
//! A [`Planner`] owns the immutable catalog and answers the only two requests
//! the UI needs: name listings for selection controls, and stat computation
//! for a chosen character and modifier selection.

use crate::catalog::{Catalog, CatalogError, Category};
use crate::stats::{self, ModifierSelection, StatBlock};

/// Facade over the catalog and the stat calculator.
///
/// Computation is pure and the catalog is read-only, so a planner can be
/// shared freely across threads.
#[derive(Clone, Debug)]
pub struct Planner {
    catalog: Catalog,
}

impl Planner {
    /// Create a planner over a catalog.
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }

    /// The underlying catalog.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Character names in declaration order, optionally filtered by category.
    pub fn names(&self, filter: Option<Category>) -> impl Iterator<Item = &str> {
        self.catalog.names(filter)
    }

    /// Sorted names matching a substring query.
    pub fn names_matching(&self, filter: Option<Category>, query: &str) -> Vec<&str> {
        self.catalog.names_matching(filter, query)
    }

    /// Compute final stats for a character with the full pipeline
    /// (additive phase plus agility finishing pass).
    ///
    /// Fails with [`CatalogError::UnknownCharacter`] if the name is absent;
    /// no other failure is possible for a structurally valid selection.
    pub fn compute(
        &self,
        name: &str,
        mods: &ModifierSelection<'_>,
    ) -> Result<StatBlock, CatalogError> {
        let record = self.catalog.get(name)?;
        Ok(stats::compute(&record.base, mods))
    }

    /// Compute final stats with the additive phase only, ignoring the
    /// agility multiplier toggles (the basic calculator variant).
    pub fn compute_additive(
        &self,
        name: &str,
        mods: &ModifierSelection<'_>,
    ) -> Result<StatBlock, CatalogError> {
        let record = self.catalog.get(name)?;
        Ok(stats::compute_additive(&record.base, mods))
    }
}
