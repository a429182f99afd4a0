//! Local playlist vault: domain types, JSON persistence, reconciliation

pub mod models;
pub mod reconcile;
pub mod sort;
pub mod store;

pub use models::{Playlist, Video};
pub use reconcile::reconcile;
pub use sort::sort_by_published;
pub use store::{JsonStore, Store, StoreError};
