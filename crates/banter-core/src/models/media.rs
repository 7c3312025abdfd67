//! Unresolved media references.
//!
//! A draft carries media the user picked but whose final URLs are not known
//! yet; the picker, upload queue, or asset store owns that resolution. The
//! core only needs the [`MediaSource`] lookups; it never touches network or
//! storage itself.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;
use url::Url;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MediaKind {
    Image,
    Video,
}

/// A pending media reference inside a draft.
///
/// Both lookups may suspend (upload in flight, asset store round-trip) and
/// both may come back empty. The conversion pipeline treats an empty answer
/// as "drop this reference", not as an error; see
/// [`compose_message`](crate::compose::compose_message).
#[async_trait]
pub trait MediaSource: fmt::Debug + Send + Sync {
    fn kind(&self) -> MediaKind;

    /// Preview-quality URL. Required for every kind.
    async fn thumbnail_url(&self) -> Option<Url>;

    /// Full-resolution URL. Only consulted for [`MediaKind::Video`].
    async fn full_url(&self) -> Option<Url>;
}

/// Reference to an externally hosted animated image (sticker/GIF service).
/// The core never fetches it; the identifier is copied onto the message
/// as-is for the renderer to resolve.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AnimatedMedia {
    pub id: String,
}
