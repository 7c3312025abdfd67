//! In-progress message drafts.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::media::{AnimatedMedia, MediaSource};
use crate::models::message::ReplyMessage;
use crate::models::recording::Recording;

/// A locally composed message that has not been finalized yet: its media
/// references still need URL resolution and nothing has been delivered.
///
/// Drafts are produced by the (external) composition layer and consumed by
/// [`compose_message`](crate::compose::compose_message). A failed delivery
/// hands the draft back through [`Status::Error`](crate::Status::Error) so
/// the host can retry it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DraftMessage {
    /// Pre-assigned message identifier, when the host wants to choose it
    /// before conversion (e.g. for optimistic rendering). The conversion
    /// pipeline takes the identifier as an explicit argument; this field is
    /// carried for the host's own bookkeeping.
    pub id: Option<String>,

    pub created_at: DateTime<Utc>,

    /// Raw composed text.
    pub text: String,

    /// Pending media in pick order. Not serialized: media sources are live
    /// handles into the host's picker/upload machinery.
    #[serde(skip)]
    pub medias: Vec<Arc<dyn MediaSource>>,

    pub animation: Option<AnimatedMedia>,

    pub recording: Option<Recording>,

    /// Projection of the message being replied to, if any.
    pub reply_to: Option<ReplyMessage>,
}

impl DraftMessage {
    /// A text-only draft timestamped now.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: None,
            created_at: Utc::now(),
            text: text.into(),
            medias: Vec::new(),
            animation: None,
            recording: None,
            reply_to: None,
        }
    }
}
