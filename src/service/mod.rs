//! Service Module
//!
//! Orchestrates reads and writes between callers, the entity cache and the
//! backing store.
//!
//! # Services
//! - `AlbumService`: cache-aside album reads, invalidating writes, cache admin
//! - `ArtistService`: uncached artist reads and creation

mod album;
mod artist;

pub use album::{AlbumService, CacheSnapshot};
pub use artist::ArtistService;
