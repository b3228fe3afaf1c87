//! Mention control records for dynamic posts
//!
//! The dynamic endpoints want every `@name ` span of the post described by a
//! control record whose `location` and `length` count Unicode characters.
//! The regex engine reports byte offsets, so parsing happens in two passes:
//! collect the byte spans, then walk the text one character at a time and
//! translate each span start into a character index.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::MentionError;

// `@`, shortest run of non-newline characters, then a space
static RE_MENTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("@.*? ").expect("invalid mention regex"));

/// Control type for a user mention.
pub const MENTION_KIND: i32 = 1;

/// One `@name ` occurrence, in the shape the dynamic endpoints expect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MentionControl {
    /// Character index of the `@`
    pub location: usize,
    #[serde(rename = "type")]
    pub kind: i32,
    /// Characters covered by `@name `, both delimiters included
    pub length: usize,
    /// Decimal user id, `"0"` when the name is unknown
    pub data: String,
}

/// Find every `@name ` span in `text` and resolve the names through `at`.
///
/// Records come back in order of appearance. Text without a complete span
/// (no trailing space) yields no record for it.
pub fn parse_mentions(
    kind: i32,
    text: &str,
    at: &HashMap<String, i64>,
) -> Result<Vec<MentionControl>, MentionError> {
    let spans: Vec<(usize, usize)> = RE_MENTION
        .find_iter(text)
        .map(|m| (m.start(), m.end()))
        .collect();

    let mut controls = Vec::with_capacity(spans.len());
    let mut pending = spans.into_iter().peekable();

    for (location, (byte_offset, _)) in text.char_indices().enumerate() {
        let Some(&(start, end)) = pending.peek() else {
            break;
        };
        if byte_offset < start {
            continue;
        }
        if byte_offset > start {
            return Err(MentionError::Unaligned { byte_offset: start });
        }

        // '@' and ' ' are one byte each
        let name = &text[start + 1..end - 1];
        let uid = at.get(name).copied().unwrap_or(0);
        trace!(mention = name, uid, location, "resolved mention");

        controls.push(MentionControl {
            location,
            kind,
            length: name.chars().count() + 2,
            data: uid.to_string(),
        });
        pending.next();
    }

    if let Some((start, _)) = pending.next() {
        return Err(MentionError::Unaligned { byte_offset: start });
    }

    Ok(controls)
}

/// Parse mentions and serialize them into the JSON array sent as the
/// `ctrl` / `at_control` form field.
pub fn mention_ctrl_json(
    kind: i32,
    text: &str,
    at: &HashMap<String, i64>,
) -> Result<String, MentionError> {
    let controls = parse_mentions(kind, text, at)?;
    Ok(serde_json::to_string(&controls)?)
}

/// Comma-joined user ids for the `at_uids` form field, ascending.
#[must_use]
pub fn at_uids(at: &HashMap<String, i64>) -> String {
    let mut ids: Vec<i64> = at.values().copied().collect();
    ids.sort_unstable();
    ids.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",")
}
