//! Emoji reactions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::user::User;

/// An emoji reaction attached to a message by a user. Immutable; removing
/// or changing a reaction means replacing the message value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Reaction {
    /// Reaction identifier, unique within the message.
    pub id: String,

    /// Who reacted.
    pub user: User,

    pub created_at: DateTime<Utc>,

    /// Unicode emoji or a host-defined emoji identifier.
    pub emoji: String,

    /// Delivery state of the reaction itself: a reaction is sent like a
    /// message and can fail.
    pub status: ReactionStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReactionStatus {
    Sending,
    Sent,
    Error,
}
