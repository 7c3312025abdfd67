//! Type-erased message payloads.
//!
//! Host applications can attach arbitrary content (polls, locations, game
//! invites) to a [`Message`](crate::Message) without this crate knowing the
//! concrete type. The only capability a payload must provide is structural
//! equality against another payload of unknown type, plus hashing, so the
//! message equality/hash contract keeps working over an open set of types.

use std::any::Any;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Contract for custom message content.
///
/// Comparing payloads of different concrete types must return `false`,
/// never panic. Implement by hand, or use [`impl_message_payload!`] for any
/// type that is already `PartialEq + Hash`.
///
/// [`impl_message_payload!`]: crate::impl_message_payload
pub trait MessagePayload: Any + fmt::Debug + Send + Sync {
    /// Structural equality against a payload of unknown concrete type.
    /// Must return `false` on a type mismatch.
    fn eq_payload(&self, other: &dyn MessagePayload) -> bool;

    /// Feed the payload's content into `state`.
    fn hash_payload(&self, state: &mut dyn Hasher);

    /// Upcast for downcasting in [`eq_payload`](Self::eq_payload) impls.
    fn as_any(&self) -> &dyn Any;
}

/// Equality helper for payload types that are already `PartialEq`:
/// downcasts `other` and delegates, yielding `false` on any type mismatch.
pub fn payload_eq<T>(this: &T, other: &dyn MessagePayload) -> bool
where
    T: MessagePayload + PartialEq,
{
    other.as_any().downcast_ref::<T>().is_some_and(|other| this == other)
}

/// Implements [`MessagePayload`] for a `PartialEq + Hash` type by delegating
/// to its own equality and hashing.
///
/// ```
/// use banter_core::impl_message_payload;
///
/// #[derive(Debug, PartialEq, Hash)]
/// struct Poll {
///     question: String,
/// }
///
/// impl_message_payload!(Poll);
/// ```
#[macro_export]
macro_rules! impl_message_payload {
    ($ty:ty) => {
        impl $crate::MessagePayload for $ty {
            fn eq_payload(&self, other: &dyn $crate::MessagePayload) -> bool {
                $crate::payload::payload_eq(self, other)
            }

            fn hash_payload(&self, mut state: &mut dyn ::std::hash::Hasher) {
                ::std::hash::Hash::hash(self, &mut state)
            }

            fn as_any(&self) -> &dyn ::std::any::Any {
                self
            }
        }
    };
}

impl PartialEq for dyn MessagePayload {
    fn eq(&self, other: &Self) -> bool {
        self.eq_payload(other)
    }
}

impl Hash for dyn MessagePayload {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.hash_payload(state);
    }
}
