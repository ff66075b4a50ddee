//! # Songbook Common Library
//!
//! Shared code for the songbook service:
//! - Catalog and lyrics stores
//! - Credential mapping
//! - Built-in data set and TOML data file loading
//! - Configuration resolution
//! - Error types

pub mod catalog;
pub mod config;
pub mod credentials;
pub mod data;
pub mod error;
pub mod lyrics;

pub use catalog::{Catalog, Song, SongId};
pub use credentials::CredentialStore;
pub use data::DataSet;
pub use error::{Error, Result};
pub use lyrics::{Language, LyricsStore};
