//! Catalog data model

pub mod song;

pub use song::{CreateSongRequest, NewSong, Song, SongPatch};
