//! Song storage
//!
//! `SongStore` is the seam between the catalog logic and persistence;
//! `SqliteSongStore` is the production implementation.

pub mod songs;

pub use songs::{SongFilter, SongStore, SqliteSongStore};
