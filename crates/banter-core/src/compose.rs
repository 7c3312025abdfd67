//! Draft-to-message conversion.
//!
//! Turns a [`DraftMessage`] into a finalized [`Message`] by resolving every
//! pending media reference to final URLs. Resolutions fan out concurrently
//! (one future per reference) and fan in through an order-preserving join,
//! so the output attachment order always matches the draft's media order,
//! never completion order.
//!
//! Resolution failures never fail the conversion: a reference whose URLs do
//! not resolve is dropped and logged. Callers that need to detect drops can
//! compare the output attachment count against the draft's media count.
//! Cancelling the enclosing task cancels in-flight resolutions and produces
//! no message.

use futures_util::future::join_all;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::models::attachment::Attachment;
use crate::models::draft::DraftMessage;
use crate::models::media::{MediaKind, MediaSource};
use crate::models::message::{Message, Status};
use crate::models::user::User;

/// Asynchronously finalize `draft` into a [`Message`] with the given
/// identifier, author, and optional initial delivery status.
///
/// The draft's timestamp, text, recording, reply projection, and animation
/// identifier are carried over verbatim. This call suspends until every
/// media reference has resolved or been dropped; it never errors.
pub async fn compose_message(
    id: impl Into<String>,
    user: User,
    status: Option<Status>,
    draft: &DraftMessage,
) -> Message {
    let id = id.into();
    debug!(
        message_id = %id,
        media_count = draft.medias.len(),
        "composing message from draft"
    );

    // join_all yields results in input order regardless of completion
    // order; unresolved slots are filtered after the join.
    let resolutions = draft
        .medias
        .iter()
        .enumerate()
        .map(|(index, media)| resolve_media(index, media.as_ref()));
    let attachments: Vec<Attachment> = join_all(resolutions).await.into_iter().flatten().collect();

    if attachments.len() < draft.medias.len() {
        debug!(
            message_id = %id,
            dropped = draft.medias.len() - attachments.len(),
            "conversion dropped unresolvable media"
        );
    }

    Message {
        id,
        user,
        status,
        created_at: draft.created_at,
        text: draft.text.clone(),
        attachments,
        reactions: Vec::new(),
        animation_id: draft.animation.as_ref().map(|a| a.id.clone()),
        recording: draft.recording.clone(),
        reply_to: draft.reply_to.clone(),
        trigger_redraw: None,
        kind: crate::models::message::KIND_TEXT.to_owned(),
        payload: None,
    }
}

async fn resolve_media(index: usize, media: &dyn MediaSource) -> Option<Attachment> {
    let Some(thumbnail) = media.thumbnail_url().await else {
        warn!(index, kind = ?media.kind(), "dropping media reference: no thumbnail URL");
        return None;
    };

    match media.kind() {
        MediaKind::Image => Some(Attachment::image(Uuid::new_v4().to_string(), thumbnail)),
        MediaKind::Video => match media.full_url().await {
            Some(full) => Some(Attachment::video(
                Uuid::new_v4().to_string(),
                thumbnail,
                full,
            )),
            None => {
                warn!(index, "dropping video reference: no full-resolution URL");
                None
            }
        },
    }
}

impl Message {
    /// Method form of [`compose_message`].
    pub async fn compose(
        id: impl Into<String>,
        user: User,
        status: Option<Status>,
        draft: &DraftMessage,
    ) -> Self {
        compose_message(id, user, status, draft).await
    }
}
