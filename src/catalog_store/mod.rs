mod models;
mod naming;
mod schema;
mod store;
mod trait_def;
mod validation;

pub use models::*;
pub use naming::{derive_album_name, derive_cover_name};
pub use schema::CATALOG_VERSIONED_SCHEMAS;
pub use store::SqliteCatalogStore;
pub use trait_def::CatalogStore;
pub use validation::{validate_draft, ValidationError};
