//! Catalog services

pub mod song_info_client;
pub mod song_service;

pub use song_info_client::{EnrichmentError, SongDetails, SongInfoClient, SongInfoProvider};
pub use song_service::SongService;
