//! JSONL parser for chat log records.
//!
//! This module provides pure parsing functions for converting JSONL lines
//! into validated [`ChatLine`]s. One record per line:
//!
//! ```json
//! {"id": 17, "time": "2024-01-01T10:00:00Z", "nick": "alice", "type": "message", "text": "hi"}
//! ```
//!
//! `id` defaults to the record's position among accepted lines, `type`
//! defaults to `message`, `nick` and `text` default to empty.

use crate::model::{ChatLine, LineId, LineKind, MalformedLine, ParseError};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::collections::HashSet;

/// Raw JSON structure for deserializing log records.
#[derive(Debug, Deserialize)]
struct RawChatLine {
    #[serde(default)]
    id: Option<u64>,
    time: String,
    #[serde(default)]
    nick: String,
    #[serde(default, rename = "type")]
    kind: Option<String>,
    #[serde(default)]
    text: String,
}

/// Result of parsing a whole log.
#[derive(Debug, Default)]
pub struct ParsedLog {
    /// Accepted lines in document order.
    pub lines: Vec<ChatLine>,
    /// Records that were skipped.
    pub malformed: Vec<MalformedLine>,
}

/// Parse a single JSONL record.
///
/// # Arguments
///
/// * `raw` - The record text
/// * `line_number` - 1-indexed input line, used in errors
/// * `ordinal` - Position among accepted lines, used when the record has no `id`
///
/// # Errors
///
/// Returns `ParseError` for invalid JSON, a bad timestamp or an unknown type.
pub fn parse_line(raw: &str, line_number: usize, ordinal: u64) -> Result<ChatLine, ParseError> {
    let record: RawChatLine =
        serde_json::from_str(raw).map_err(|e| ParseError::InvalidJson {
            line: line_number,
            message: e.to_string(),
        })?;

    let timestamp = DateTime::parse_from_rfc3339(&record.time)
        .map(|t| t.with_timezone(&Utc))
        .map_err(|_| ParseError::InvalidTimestamp {
            line: line_number,
            raw: record.time.clone(),
        })?;

    let kind = match record.kind.as_deref() {
        None => LineKind::default(),
        Some(raw_kind) => LineKind::parse(raw_kind).ok_or_else(|| ParseError::UnknownKind {
            line: line_number,
            raw: raw_kind.to_string(),
        })?,
    };

    let id = LineId::from_number(record.id.unwrap_or(ordinal));
    Ok(ChatLine::new(id, timestamp, record.nick, kind, record.text))
}

/// Parse a whole JSONL log.
///
/// Blank lines are ignored. Bad records, including ones whose id was already
/// used, are collected in [`ParsedLog::malformed`] and parsing continues.
pub fn parse_log(input: &str) -> ParsedLog {
    let mut parsed = ParsedLog::default();
    let mut seen: HashSet<LineId> = HashSet::new();

    for (index, raw) in input.lines().enumerate() {
        let line_number = index + 1;
        if raw.trim().is_empty() {
            continue;
        }

        let ordinal = parsed.lines.len() as u64;
        let result = parse_line(raw, line_number, ordinal).and_then(|line| {
            if seen.insert(line.id().clone()) {
                Ok(line)
            } else {
                Err(ParseError::DuplicateId {
                    line: line_number,
                    id: line.id().to_string(),
                })
            }
        });

        match result {
            Ok(line) => parsed.lines.push(line),
            Err(error) => parsed
                .malformed
                .push(MalformedLine::new(line_number, raw, error)),
        }
    }

    parsed
}
