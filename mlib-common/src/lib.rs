//! # mlib Common Library
//!
//! Shared code for mlib services:
//! - Error taxonomy for infrastructure failures
//! - Bootstrap configuration (TOML layer and compiled defaults)
//! - Database initialization and table schemas

pub mod config;
#[cfg(feature = "sqlx")]
pub mod db;
pub mod error;

pub use error::{Error, Result};
