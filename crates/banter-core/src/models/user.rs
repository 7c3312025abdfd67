//! Message author.

use serde::{Deserialize, Serialize};
use url::Url;

/// The author of a message.
///
/// Identity is owned by the host application; this is only as much of it as
/// a transcript needs to render and compare messages.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct User {
    /// Stable identifier, unique within the conversation.
    pub id: String,

    /// Display name.
    pub name: String,

    /// Avatar location, if the host has one.
    pub avatar_url: Option<Url>,

    /// Whether this user is the one looking at the transcript. Renderers
    /// use it to align bubbles; it compares like any other field.
    pub is_current_user: bool,
}

impl User {
    pub fn new(id: impl Into<String>, name: impl Into<String>, is_current_user: bool) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            avatar_url: None,
            is_current_user,
        }
    }
}
