//! Message model — the transcript unit of record.
//!
//! A [`Message`] is never mutated in place. Delivery updates, reaction
//! changes, and redraw hints all go through the `with_*` builders, which
//! return a new value with the same identifier. That keeps the transcript
//! safe to share across threads with plain clones and no locks.

use std::hash::{Hash, Hasher};
use std::mem;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::attachment::{Attachment, AttachmentKind};
use crate::models::draft::DraftMessage;
use crate::models::reaction::Reaction;
use crate::models::recording::Recording;
use crate::models::user::User;
use crate::payload::MessagePayload;

/// Content kind assigned to plain text messages by [`Message::new`].
pub const KIND_TEXT: &str = "text";

/// Delivery state of a message.
///
/// Transitions are driven entirely by the host's delivery layer:
/// `Sending → Sent → Read`, or `Sending → Error`. The error variant carries
/// the original draft so the host can re-enter the pipeline for a retry.
///
/// Equality and hashing compare the discriminant only: two `Error` values
/// are equal regardless of the drafts they carry. This keeps display-state
/// comparisons cheap, but it means `Status` equality cannot distinguish two
/// distinct failures; compare the carried drafts yourself if you need to.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Sending,
    Sent,
    Read,
    Error(Box<DraftMessage>),
}

impl PartialEq for Status {
    fn eq(&self, other: &Self) -> bool {
        mem::discriminant(self) == mem::discriminant(other)
    }
}

impl Eq for Status {}

impl Hash for Status {
    fn hash<H: Hasher>(&self, state: &mut H) {
        mem::discriminant(self).hash(state);
    }
}

/// A finalized message in a transcript.
///
/// Built either directly from already-resolved fields (historical
/// transcripts) or asynchronously from a draft via
/// [`compose_message`](crate::compose::compose_message).
///
/// # Equality and hashing
///
/// Two messages are equal iff every content field matches and their
/// payloads are either both absent or both present and structurally equal
/// (see [`MessagePayload`]). The `trigger_redraw` marker is **excluded**
/// from equality (it carries no content) but **included** in the hash,
/// which doubles as a render-cache key that must change when a redraw is
/// forced. This asymmetry is intentional; the one consequence is that
/// `Message` must not be used as a hash-map key across values that differ
/// only in their redraw marker.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    /// Stable identifier, unique within the transcript and immutable for
    /// the message's lifetime.
    pub id: String,

    pub user: User,

    /// Delivery state; `None` for historical messages the host never
    /// tracked delivery for.
    pub status: Option<Status>,

    pub created_at: DateTime<Utc>,

    pub text: String,

    /// Resolved attachments, in the draft's original media order.
    pub attachments: Vec<Attachment>,

    pub reactions: Vec<Reaction>,

    /// Identifier of an externally hosted animated image, if any.
    pub animation_id: Option<String>,

    pub recording: Option<Recording>,

    /// Projection of the message this one replies to.
    pub reply_to: Option<ReplyMessage>,

    /// Opaque token renderers fold into memoization keys. Replaced via
    /// [`Message::redrawn`] to invalidate cached renderings when nothing
    /// content-bearing changed. Excluded from equality, included in the
    /// hash; not serialized.
    #[serde(skip)]
    pub trigger_redraw: Option<Uuid>,

    /// Free-form content kind tag; [`KIND_TEXT`] by default. Hosts with
    /// custom payloads use this to pick a renderer without downcasting.
    pub kind: String,

    /// Host-defined content. Skipped by serde: an open trait object cannot
    /// be serialized without host cooperation.
    #[serde(skip)]
    pub payload: Option<Arc<dyn MessagePayload>>,
}

impl Message {
    /// A plain text message with no attachments, reactions, or payload.
    /// Fields are public; extend with struct update or the `with_*`
    /// builders.
    pub fn new(id: impl Into<String>, user: User, created_at: DateTime<Utc>) -> Self {
        Self {
            id: id.into(),
            user,
            status: None,
            created_at,
            text: String::new(),
            attachments: Vec::new(),
            reactions: Vec::new(),
            animation_id: None,
            recording: None,
            reply_to: None,
            trigger_redraw: None,
            kind: KIND_TEXT.to_owned(),
            payload: None,
        }
    }

    /// New value with the given delivery status, same identifier.
    pub fn with_status(mut self, status: Status) -> Self {
        self.status = Some(status);
        self
    }

    /// New value with the reaction list replaced wholesale.
    pub fn with_reactions(mut self, reactions: Vec<Reaction>) -> Self {
        self.reactions = reactions;
        self
    }

    /// New value with a fresh redraw marker. Equal to `self` under
    /// `PartialEq`, but hashes differently, so memoized renderings keyed on
    /// the hash are invalidated.
    pub fn redrawn(mut self) -> Self {
        self.trigger_redraw = Some(Uuid::new_v4());
        self
    }

    pub fn contains_attachment_kind(&self, kind: AttachmentKind) -> bool {
        self.attachments.iter().any(|a| a.kind == kind)
    }

    /// Reduced projection for quoting this message elsewhere. Drops status,
    /// reactions, and payload.
    pub fn to_reply(&self) -> ReplyMessage {
        ReplyMessage {
            id: self.id.clone(),
            user: self.user.clone(),
            created_at: self.created_at,
            text: self.text.clone(),
            attachments: self.attachments.clone(),
            recording: self.recording.clone(),
        }
    }
}

impl PartialEq for Message {
    fn eq(&self, other: &Self) -> bool {
        // A present-vs-absent payload mismatch is always unequal; two
        // present payloads compare structurally through the type-erased
        // contract. trigger_redraw is deliberately not compared.
        let payloads_match = match (&self.payload, &other.payload) {
            (None, None) => true,
            (Some(lhs), Some(rhs)) => lhs.eq_payload(rhs.as_ref()),
            _ => false,
        };

        payloads_match
            && self.id == other.id
            && self.user == other.user
            && self.status == other.status
            && self.created_at == other.created_at
            && self.text == other.text
            && self.attachments == other.attachments
            && self.reactions == other.reactions
            && self.animation_id == other.animation_id
            && self.recording == other.recording
            && self.reply_to == other.reply_to
            && self.kind == other.kind
    }
}

// Explicit ordered combination so the inclusion list stays auditable:
// every equality field, plus trigger_redraw (cache key, see the type-level
// note on the asymmetry), plus the payload when present.
impl Hash for Message {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
        self.user.hash(state);
        self.status.hash(state);
        self.created_at.hash(state);
        self.text.hash(state);
        self.attachments.hash(state);
        self.reactions.hash(state);
        self.animation_id.hash(state);
        self.recording.hash(state);
        self.reply_to.hash(state);
        self.trigger_redraw.hash(state);
        self.kind.hash(state);
        if let Some(payload) = &self.payload {
            payload.hash_payload(state);
        }
    }
}

/// Reduced projection of a [`Message`] used to render a quoted reference
/// without retaining the full original (reactions, status, and payload are
/// deliberately dropped).
#[derive(Debug, Clone, PartialEq, Hash, Serialize, Deserialize)]
pub struct ReplyMessage {
    pub id: String,
    pub user: User,
    pub created_at: DateTime<Utc>,
    pub text: String,
    pub attachments: Vec<Attachment>,
    pub recording: Option<Recording>,
}

impl ReplyMessage {
    /// Expand back into a full [`Message`]. Lossy: the result has no
    /// status, reactions, or payload, so `Message::to_reply` followed by
    /// `into_message` does not round-trip to the original.
    pub fn into_message(self) -> Message {
        Message {
            id: self.id,
            user: self.user,
            status: None,
            created_at: self.created_at,
            text: self.text,
            attachments: self.attachments,
            reactions: Vec::new(),
            animation_id: None,
            recording: self.recording,
            reply_to: None,
            trigger_redraw: None,
            kind: KIND_TEXT.to_owned(),
            payload: None,
        }
    }
}
