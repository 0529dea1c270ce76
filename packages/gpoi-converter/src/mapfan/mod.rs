//! MapFan bookmark publishing.
//!
//! A [`MapfanClient`] session authenticates once and reuses its bearer token
//! for the address lookups and bookmark creations that follow, one request
//! at a time.

pub mod client;
pub mod config;
pub mod publish;
pub mod types;

pub use client::{clean_payload_text, BookmarkService, MapfanClient};
pub use config::MapfanConfig;
pub use publish::{publish_bookmarks, PublishEvent};
pub use types::{Bookmark, BookmarkRequest};
