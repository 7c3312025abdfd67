//! Date-sectioned transcript building.
//!
//! Transforms a flat, possibly unordered message collection into calendar-
//! day sections ready for incremental rendering. The builder is a pure
//! function of its inputs: it is recomputed wholesale on every transcript
//! mutation, which is cheap at chat scale and avoids the whole class of
//! incremental-update bugs. Safe to call from any thread.

use chrono::{Local, NaiveDate, TimeZone};
use serde::{Deserialize, Serialize};

use crate::models::message::Message;

/// How the transcript is anchored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChatType {
    /// Bottom-anchored messaging view: oldest day first, oldest message
    /// first within a day.
    Conversation,
    /// Top-anchored comment thread: newest day first, newest message first
    /// within a day.
    Comments,
}

/// How reply references are prepared for rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReplyMode {
    /// Use each message's stored reply projection as-is.
    Quote,
    /// Refresh each reply projection from the full referenced message when
    /// it is present in the input collection, for richer quote rendering.
    /// Absent referents (deleted, not yet loaded) keep their stored
    /// projection.
    Answer,
}

/// One calendar day of messages, ordered per the chat type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessagesSection {
    pub date: NaiveDate,
    pub messages: Vec<Message>,
}

/// Output of the section builder: the day sections plus the flat identifier
/// list in the same fully-ordered view order, for index-based diffing by
/// the rendering layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionedTranscript {
    pub sections: Vec<MessagesSection>,
    pub ids: Vec<String>,
}

/// Section `messages` by calendar day in the local time zone.
///
/// See [`map_messages_in_zone`] for the ordering and determinism contract.
pub fn map_messages(
    messages: &[Message],
    chat_type: ChatType,
    reply_mode: ReplyMode,
) -> SectionedTranscript {
    map_messages_in_zone(messages, chat_type, reply_mode, &Local)
}

/// Section `messages` by calendar day in the given time zone.
///
/// Deterministic for a fixed input: messages are stably sorted by creation
/// timestamp, so equal timestamps keep their insertion order in the source
/// collection. `Conversation` yields ascending sections and messages;
/// `Comments` yields the exact reverse.
pub fn map_messages_in_zone<Tz: TimeZone>(
    messages: &[Message],
    chat_type: ChatType,
    reply_mode: ReplyMode,
    zone: &Tz,
) -> SectionedTranscript {
    let mut ordered: Vec<Message> = match reply_mode {
        ReplyMode::Quote => messages.to_vec(),
        ReplyMode::Answer => messages
            .iter()
            .map(|message| refresh_reply(message, messages))
            .collect(),
    };
    // Stable sort: ties keep source-collection order. Identifier ordering
    // is never a correctness signal.
    ordered.sort_by_key(|message| message.created_at);

    let mut sections: Vec<MessagesSection> = Vec::new();
    for message in ordered {
        let date = message.created_at.with_timezone(zone).date_naive();
        match sections.last_mut() {
            Some(section) if section.date == date => section.messages.push(message),
            _ => sections.push(MessagesSection {
                date,
                messages: vec![message],
            }),
        }
    }

    if chat_type == ChatType::Comments {
        sections.reverse();
        for section in &mut sections {
            section.messages.reverse();
        }
    }

    let ids = sections
        .iter()
        .flat_map(|section| section.messages.iter().map(|message| message.id.clone()))
        .collect();

    SectionedTranscript { sections, ids }
}

/// In [`ReplyMode::Answer`], substitute the reply projection with one built
/// from the full referenced message, when that message is in `collection`.
fn refresh_reply(message: &Message, collection: &[Message]) -> Message {
    let Some(reply) = &message.reply_to else {
        return message.clone();
    };
    match collection.iter().find(|candidate| candidate.id == reply.id) {
        Some(original) => {
            let mut refreshed = message.clone();
            refreshed.reply_to = Some(original.to_reply());
            refreshed
        }
        None => message.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::user::User;
    use chrono::{FixedOffset, Utc};

    fn alice() -> User {
        User::new("u1", "Alice", false)
    }

    fn message_at(id: &str, y: i32, mo: u32, d: u32, h: u32, mi: u32) -> Message {
        let mut message = Message::new(
            id,
            alice(),
            Utc.with_ymd_and_hms(y, mo, d, h, mi, 0).unwrap(),
        );
        message.text = format!("body of {id}");
        message
    }

    fn section_ids(section: &MessagesSection) -> Vec<&str> {
        section.messages.iter().map(|m| m.id.as_str()).collect()
    }

    #[test]
    fn test_groups_by_calendar_day_ascending() {
        let messages = vec![
            message_at("late", 2024, 1, 1, 23, 0),
            message_at("next-day", 2024, 1, 2, 1, 0),
            message_at("morning", 2024, 1, 1, 10, 0),
        ];

        let out = map_messages_in_zone(&messages, ChatType::Conversation, ReplyMode::Quote, &Utc);

        assert_eq!(out.sections.len(), 2);
        assert_eq!(
            out.sections[0].date,
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
        );
        assert_eq!(section_ids(&out.sections[0]), vec!["morning", "late"]);
        assert_eq!(
            out.sections[1].date,
            NaiveDate::from_ymd_opt(2024, 1, 2).unwrap()
        );
        assert_eq!(section_ids(&out.sections[1]), vec!["next-day"]);
        assert_eq!(out.ids, vec!["morning", "late", "next-day"]);
    }

    #[test]
    fn test_equal_timestamps_keep_insertion_order() {
        // Identifiers sort the other way lexicographically; insertion order
        // must win.
        let messages = vec![
            message_at("zz-first-inserted", 2024, 3, 5, 9, 30),
            message_at("aa-second-inserted", 2024, 3, 5, 9, 30),
        ];

        let out = map_messages_in_zone(&messages, ChatType::Conversation, ReplyMode::Quote, &Utc);

        assert_eq!(out.ids, vec!["zz-first-inserted", "aa-second-inserted"]);
    }

    #[test]
    fn test_deterministic_for_fixed_input() {
        let messages = vec![
            message_at("b", 2024, 3, 5, 9, 30),
            message_at("a", 2024, 3, 4, 9, 30),
            message_at("c", 2024, 3, 5, 9, 30),
        ];

        let first = map_messages_in_zone(&messages, ChatType::Conversation, ReplyMode::Quote, &Utc);
        let second =
            map_messages_in_zone(&messages, ChatType::Conversation, ReplyMode::Quote, &Utc);
        assert_eq!(first, second);
    }

    #[test]
    fn test_comments_mode_reverses_sections_and_messages() {
        let messages = vec![
            message_at("late", 2024, 1, 1, 23, 0),
            message_at("next-day", 2024, 1, 2, 1, 0),
            message_at("morning", 2024, 1, 1, 10, 0),
        ];

        let out = map_messages_in_zone(&messages, ChatType::Comments, ReplyMode::Quote, &Utc);

        assert_eq!(
            out.sections[0].date,
            NaiveDate::from_ymd_opt(2024, 1, 2).unwrap()
        );
        assert_eq!(section_ids(&out.sections[0]), vec!["next-day"]);
        assert_eq!(section_ids(&out.sections[1]), vec!["late", "morning"]);
        assert_eq!(out.ids, vec!["next-day", "late", "morning"]);
    }

    #[test]
    fn test_day_boundary_follows_requested_zone() {
        // 23:00 UTC on Jan 1 is already Jan 2 at UTC+2.
        let messages = vec![message_at("m", 2024, 1, 1, 23, 0)];
        let zone = FixedOffset::east_opt(2 * 3600).unwrap();

        let out = map_messages_in_zone(&messages, ChatType::Conversation, ReplyMode::Quote, &zone);

        assert_eq!(
            out.sections[0].date,
            NaiveDate::from_ymd_opt(2024, 1, 2).unwrap()
        );
    }

    #[test]
    fn test_answer_mode_refreshes_reply_from_collection() {
        let mut original = message_at("orig", 2024, 1, 1, 10, 0);
        original.text = "original, later edited".to_owned();

        // Stale projection: text from before the edit.
        let mut stale_projection = original.to_reply();
        stale_projection.text = "original".to_owned();

        let mut reply = message_at("reply", 2024, 1, 1, 11, 0);
        reply.reply_to = Some(stale_projection);

        let messages = vec![original.clone(), reply];
        let out = map_messages_in_zone(&messages, ChatType::Conversation, ReplyMode::Answer, &Utc);

        let refreshed = &out.sections[0].messages[1];
        assert_eq!(refreshed.reply_to, Some(original.to_reply()));
    }

    #[test]
    fn test_answer_mode_keeps_projection_when_referent_absent() {
        let mut reply = message_at("reply", 2024, 1, 1, 11, 0);
        let projection = message_at("deleted", 2024, 1, 1, 10, 0).to_reply();
        reply.reply_to = Some(projection.clone());

        let messages = vec![reply];
        let out = map_messages_in_zone(&messages, ChatType::Conversation, ReplyMode::Answer, &Utc);

        assert_eq!(out.sections[0].messages[0].reply_to, Some(projection));
    }

    #[test]
    fn test_quote_mode_leaves_projections_untouched() {
        let mut original = message_at("orig", 2024, 1, 1, 10, 0);
        original.text = "edited since".to_owned();

        let mut stale_projection = original.to_reply();
        stale_projection.text = "as quoted".to_owned();

        let mut reply = message_at("reply", 2024, 1, 1, 11, 0);
        reply.reply_to = Some(stale_projection.clone());

        let messages = vec![original, reply];
        let out = map_messages_in_zone(&messages, ChatType::Conversation, ReplyMode::Quote, &Utc);

        assert_eq!(out.sections[0].messages[1].reply_to, Some(stale_projection));
    }

    #[test]
    fn test_empty_collection_yields_empty_output() {
        let out = map_messages(&[], ChatType::Conversation, ReplyMode::Quote);
        assert!(out.sections.is_empty());
        assert!(out.ids.is_empty());
    }
}
