//! Core transcript models.
//!
//! These are the value types a host application builds a transcript from.
//! All of them are immutable once constructed: updates are modeled as new
//! values (see the `with_*` builders on [`Message`]).

pub mod attachment;
pub mod draft;
pub mod media;
pub mod message;
pub mod reaction;
pub mod recording;
pub mod user;

pub use attachment::*;
pub use draft::*;
pub use media::*;
pub use message::*;
pub use reaction::*;
pub use recording::*;
pub use user::*;
