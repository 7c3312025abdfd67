//! Resolved media attachments.

use serde::{Deserialize, Serialize};
use url::Url;

/// A media attachment with fully resolved URLs.
///
/// Produced either directly by the host (historical messages) or by the
/// draft conversion pipeline (see [`compose_message`]). Images carry one
/// URL in both slots; videos carry a thumbnail and a full-resolution URL.
///
/// [`compose_message`]: crate::compose::compose_message
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Attachment {
    /// Attachment identifier, unique within the message.
    pub id: String,

    /// Preview-quality URL.
    pub thumbnail: Url,

    /// Full-resolution URL. Equal to `thumbnail` for images.
    pub full: Url,

    pub kind: AttachmentKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttachmentKind {
    Image,
    Video,
}

impl Attachment {
    /// An image attachment; the single URL serves as both thumbnail and full.
    pub fn image(id: impl Into<String>, url: Url) -> Self {
        Self {
            id: id.into(),
            thumbnail: url.clone(),
            full: url,
            kind: AttachmentKind::Image,
        }
    }

    /// A video attachment with separate thumbnail and full-resolution URLs.
    pub fn video(id: impl Into<String>, thumbnail: Url, full: Url) -> Self {
        Self {
            id: id.into(),
            thumbnail,
            full,
            kind: AttachmentKind::Video,
        }
    }
}
