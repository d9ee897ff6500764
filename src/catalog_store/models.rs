//! Catalog models for the video catalog store.

use serde::{Deserialize, Serialize};

/// Content language of a catalog entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Language {
    #[serde(rename = "ES")]
    Es,
    #[serde(rename = "EN")]
    En,
}

impl Language {
    /// Convert from database string representation.
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "ES" => Some(Language::Es),
            "EN" => Some(Language::En),
            _ => None,
        }
    }

    /// Convert to database string representation.
    pub fn to_db_str(&self) -> &'static str {
        match self {
            Language::Es => "ES",
            Language::En => "EN",
        }
    }
}

/// Language predicate accepted by the listing endpoints.
///
/// `all` is the wire value for "no restriction".
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LanguageFilter {
    All,
    Only(Language),
}

impl LanguageFilter {
    /// Parse a query-string value. `None` means the value is not one of
    /// `ES`, `EN` or `all` and the request must be rejected.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "all" => Some(LanguageFilter::All),
            other => Language::from_db_str(other).map(LanguageFilter::Only),
        }
    }

    pub fn as_wire_str(&self) -> &'static str {
        match self {
            LanguageFilter::All => "all",
            LanguageFilter::Only(language) => language.to_db_str(),
        }
    }
}

impl Default for LanguageFilter {
    fn default() -> Self {
        LanguageFilter::All
    }
}

/// Parse the `music` query parameter. Accepts `true`/`false`/`1`/`0`
/// case-insensitively; anything else is a rejection, not an empty result.
pub fn parse_music_filter(s: &str) -> Option<bool> {
    match s.to_lowercase().as_str() {
        "true" | "1" => Some(true),
        "false" | "0" => Some(false),
        _ => None,
    }
}

/// A persisted catalog entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub id: i64,
    pub url: String,
    pub cover: String,
    pub collection: String,
    pub language: Language,
    pub title: Option<String>,
    pub description: String,
    pub tags: String,
    pub music: bool,
    pub album: String,
    pub audience: String,
}

/// Raw insert/update request body, before validation.
///
/// `music` stays numeric on the wire: clients submit the strict 0/1 flag
/// and anything else is a validation error rather than a coercion.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct CatalogEntryDraft {
    pub url: Option<String>,
    pub cover: Option<String>,
    pub collection: Option<String>,
    pub language: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub tags: Option<String>,
    pub music: Option<i64>,
    pub album: Option<String>,
    pub audience: Option<String>,
}

/// A draft that passed validation: mandatory fields present, strings
/// trimmed, enums decoded, optionals defaulted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidatedEntry {
    pub url: String,
    pub cover: String,
    pub collection: String,
    pub language: Language,
    pub title: Option<String>,
    pub description: String,
    pub tags: String,
    pub music: bool,
    pub album: String,
    pub audience: String,
}

impl ValidatedEntry {
    /// The entry as it will exist at the given id. Used to echo the
    /// persisted record back to the client.
    pub fn into_entry(self, id: i64) -> CatalogEntry {
        CatalogEntry {
            id,
            url: self.url,
            cover: self.cover,
            collection: self.collection,
            language: self.language,
            title: self.title,
            description: self.description,
            tags: self.tags,
            music: self.music,
            album: self.album,
            audience: self.audience,
        }
    }
}

/// Result of an update request.
#[derive(Clone, Debug, PartialEq)]
pub enum UpdateOutcome {
    /// No row with the requested id.
    NotFound,
    /// The row exists and the submitted values equal the stored ones.
    /// No write was performed.
    Unchanged,
    /// The row was rewritten.
    Updated(CatalogEntry),
}
