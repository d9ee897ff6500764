//! Artwork naming helpers for the operator's new-entry form.
//!
//! Cover names are derived from the collection name plus a random
//! discriminator so the operator can upload the matching image file
//! before the entry exists; the album-art name is the cover name with an
//! `-a` suffix.

use rand::Rng;

/// Derive a thumbnail name from a collection name: lowercased,
/// whitespace collapsed to dashes, with a random 5-digit discriminator.
/// Returns an empty string for a blank collection.
pub fn derive_cover_name<R: Rng>(collection: &str, rng: &mut R) -> String {
    let collection = collection.trim();
    if collection.is_empty() {
        return String::new();
    }
    let slug = collection
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-");
    let discriminator: u32 = rng.random_range(10_000..100_000);
    format!("{}-{}", slug, discriminator)
}

/// Derive the album-art name from a cover name.
pub fn derive_album_name(cover: &str) -> String {
    let cover = cover.trim();
    if cover.is_empty() {
        return String::new();
    }
    format!("{}-a", cover)
}
