//! CatalogStore trait definition.
//!
//! Abstracts catalog persistence so the server and tests can run against
//! any backend; `SqliteCatalogStore` is the only production implementation.

use super::models::{CatalogEntry, LanguageFilter, UpdateOutcome, ValidatedEntry};
use anyhow::Result;

pub trait CatalogStore: Send + Sync {
    /// Every entry matching the filters, ordered by collection then id.
    fn list_entries(
        &self,
        language: LanguageFilter,
        music: Option<bool>,
    ) -> Result<Vec<CatalogEntry>>;

    /// Sorted distinct non-empty collection names matching the filters.
    fn list_collections(
        &self,
        language: LanguageFilter,
        music: Option<bool>,
    ) -> Result<Vec<String>>;

    /// Single entry lookup by id.
    fn get_entry(&self, id: i64) -> Result<Option<CatalogEntry>>;

    /// Insert a validated entry, returning it with its assigned id.
    fn insert_entry(&self, entry: &ValidatedEntry) -> Result<CatalogEntry>;

    /// Full-replace update. Distinguishes a missing row from a row whose
    /// stored values already equal the submitted ones.
    fn update_entry(&self, id: i64, entry: &ValidatedEntry) -> Result<UpdateOutcome>;

    /// Number of entries in the catalog (startup logging).
    fn entries_count(&self) -> usize;
}
