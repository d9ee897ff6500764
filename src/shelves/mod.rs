//! Client shelf building.
//!
//! Turns a flat catalog listing into the rows the browsing screen shows:
//! a shuffled "recommended" shelf first, then one shelf per collection.
//! Also owns the filter-mode presentation rules (video / music / radio).

use crate::catalog_store::CatalogEntry;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

pub const RECOMMENDED_SHELF_TITLE: &str = "Recommended";

/// One row of thumbnails on the browsing screen.
#[derive(Clone, Debug, Serialize)]
pub struct Shelf {
    pub title: String,
    pub entries: Vec<CatalogEntry>,
}

/// Build the browsing shelves from a catalog listing.
///
/// The listing arrives ordered by collection then id; within each
/// collection shelf that order is preserved. The recommended shelf holds
/// every entry in shuffled order.
pub fn build_shelves<R: Rng>(entries: &[CatalogEntry], rng: &mut R) -> Vec<Shelf> {
    let mut shelves: Vec<Shelf> = Vec::new();

    let mut recommended: Vec<CatalogEntry> = entries.to_vec();
    recommended.shuffle(rng);
    shelves.push(Shelf {
        title: RECOMMENDED_SHELF_TITLE.to_string(),
        entries: recommended,
    });

    for entry in entries {
        match shelves
            .iter_mut()
            .skip(1)
            .find(|shelf| shelf.title == entry.collection)
        {
            Some(shelf) => shelf.entries.push(entry.clone()),
            None => shelves.push(Shelf {
                title: entry.collection.clone(),
                entries: vec![entry.clone()],
            }),
        }
    }

    shelves
}

/// What the child is browsing for: regular videos, music (album-art
/// presentation) or radio (audio-only).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterMode {
    Videos,
    Music,
    Radio,
}

impl FilterMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            FilterMode::Videos => "videos",
            FilterMode::Music => "music",
            FilterMode::Radio => "radio",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "videos" => Some(FilterMode::Videos),
            "music" => Some(FilterMode::Music),
            "radio" => Some(FilterMode::Radio),
            _ => None,
        }
    }

    /// The music predicate this mode implies on the catalog query.
    /// Radio plays music entries with the video frame hidden.
    pub fn music_filter(&self) -> Option<bool> {
        match self {
            FilterMode::Videos => Some(false),
            FilterMode::Music | FilterMode::Radio => Some(true),
        }
    }

    pub fn presentation(&self) -> Presentation {
        match self {
            FilterMode::Videos => Presentation {
                show_video_frame: true,
                square_artwork: false,
                use_album_art: false,
            },
            FilterMode::Music => Presentation {
                show_video_frame: true,
                square_artwork: true,
                use_album_art: true,
            },
            FilterMode::Radio => Presentation {
                show_video_frame: false,
                square_artwork: true,
                use_album_art: true,
            },
        }
    }
}

/// How the playback view renders for a filter mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Presentation {
    /// Radio hides the frame behind a static placeholder while audio runs.
    pub show_video_frame: bool,
    /// Music swaps the landscape thumbnail for a square one.
    pub square_artwork: bool,
    /// Whether to show album art instead of the video cover.
    pub use_album_art: bool,
}
