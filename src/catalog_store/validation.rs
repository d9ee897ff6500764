//! Validation for incoming catalog entries.
//!
//! Turns a raw request body into a [`ValidatedEntry`] or a typed error.
//! Mirrors the mandatory-field and enum rules enforced by the insert and
//! update endpoints: rejections carry the message sent to the client.

use super::models::{CatalogEntryDraft, Language, ValidatedEntry};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("The field '{field}' is required")]
    MissingField { field: &'static str },
    #[error("Invalid language. Use ES or EN")]
    InvalidLanguage,
    #[error("The music field must be 0 or 1")]
    InvalidMusicFlag,
}

fn required(value: &Option<String>, field: &'static str) -> Result<String, ValidationError> {
    match value.as_deref().map(str::trim) {
        Some(trimmed) if !trimmed.is_empty() => Ok(trimmed.to_string()),
        _ => Err(ValidationError::MissingField { field }),
    }
}

fn optional(value: &Option<String>) -> String {
    value.as_deref().map(str::trim).unwrap_or("").to_string()
}

/// Validate an insert/update body.
///
/// `url`, `cover` and `collection` are mandatory non-empty strings,
/// `language` defaults to ES when absent, `music` to 0. Every string is
/// trimmed before it reaches the database.
pub fn validate_draft(draft: &CatalogEntryDraft) -> Result<ValidatedEntry, ValidationError> {
    let url = required(&draft.url, "url")?;
    let cover = required(&draft.cover, "cover")?;
    let collection = required(&draft.collection, "collection")?;

    let language = match draft.language.as_deref().map(str::trim) {
        None => Language::Es,
        Some(value) => Language::from_db_str(value).ok_or(ValidationError::InvalidLanguage)?,
    };

    let music = match draft.music.unwrap_or(0) {
        0 => false,
        1 => true,
        _ => return Err(ValidationError::InvalidMusicFlag),
    };

    let title = draft
        .title
        .as_deref()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string);

    Ok(ValidatedEntry {
        url,
        cover,
        collection,
        language,
        title,
        description: optional(&draft.description),
        tags: optional(&draft.tags),
        music,
        album: optional(&draft.album),
        audience: optional(&draft.audience),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_draft() -> CatalogEntryDraft {
        CatalogEntryDraft {
            url: Some("https://videos.example/embed/abc123".to_string()),
            cover: Some("paw-patrol-10001".to_string()),
            collection: Some("Paw Patrol".to_string()),
            language: Some("EN".to_string()),
            title: Some("Pup Save".to_string()),
            description: Some("rescue episode".to_string()),
            tags: Some("dogs, rescue".to_string()),
            music: Some(0),
            album: Some("".to_string()),
            audience: Some("ethan".to_string()),
        }
    }

    #[test]
    fn accepts_full_draft() {
        let entry = validate_draft(&full_draft()).unwrap();
        assert_eq!(entry.collection, "Paw Patrol");
        assert_eq!(entry.language, Language::En);
        assert!(!entry.music);
        assert_eq!(entry.audience, "ethan");
    }

    #[test]
    fn rejects_missing_mandatory_fields() {
        for field in ["url", "cover", "collection"] {
            let mut draft = full_draft();
            match field {
                "url" => draft.url = None,
                "cover" => draft.cover = Some("   ".to_string()),
                _ => draft.collection = Some("".to_string()),
            }
            let err = validate_draft(&draft).unwrap_err();
            assert_eq!(err, ValidationError::MissingField { field });
        }
    }

    #[test]
    fn defaults_language_and_music() {
        let draft = CatalogEntryDraft {
            url: Some("u".to_string()),
            cover: Some("c".to_string()),
            collection: Some("k".to_string()),
            ..Default::default()
        };
        let entry = validate_draft(&draft).unwrap();
        assert_eq!(entry.language, Language::Es);
        assert!(!entry.music);
        assert_eq!(entry.description, "");
        assert_eq!(entry.title, None);
    }

    #[test]
    fn rejects_unknown_language() {
        let mut draft = full_draft();
        draft.language = Some("IT".to_string());
        assert_eq!(
            validate_draft(&draft).unwrap_err(),
            ValidationError::InvalidLanguage
        );
    }

    #[test]
    fn rejects_out_of_range_music_flag() {
        let mut draft = full_draft();
        draft.music = Some(2);
        assert_eq!(
            validate_draft(&draft).unwrap_err(),
            ValidationError::InvalidMusicFlag
        );

        draft.music = Some(-1);
        assert_eq!(
            validate_draft(&draft).unwrap_err(),
            ValidationError::InvalidMusicFlag
        );
    }

    #[test]
    fn trims_all_strings() {
        let mut draft = full_draft();
        draft.url = Some("  https://videos.example/embed/abc123  ".to_string());
        draft.tags = Some(" dogs ".to_string());
        draft.title = Some("   ".to_string());
        let entry = validate_draft(&draft).unwrap();
        assert_eq!(entry.url, "https://videos.example/embed/abc123");
        assert_eq!(entry.tags, "dogs");
        assert_eq!(entry.title, None);
    }
}
