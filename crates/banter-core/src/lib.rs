//! # banter-core
//!
//! The non-visual core of the Banter chat library: the message data model,
//! the type-erased payload contract, the asynchronous draft-to-message
//! conversion pipeline, and the date-sectioned transcript builder.
//! Rendering, input composition, and delivery live in other crates; this
//! one only models an in-memory transcript and the transformations over it.
//!
//! The transcript is immutable by convention: nothing here mutates a
//! [`Message`] in place. Status changes, reaction updates, and redraw hints
//! all produce a new value with the same identifier, so the model can be
//! shared across threads without locks.

pub mod compose;
pub mod models;
pub mod payload;
pub mod sections;

pub use compose::compose_message;
pub use models::*;
pub use payload::MessagePayload;
pub use sections::{
    ChatType, MessagesSection, ReplyMode, SectionedTranscript, map_messages, map_messages_in_zone,
};
