//! Chat log lines as rendered by the viewer.

use crate::model::LineId;
use chrono::{DateTime, Utc};
use std::fmt;

/// What kind of channel event a line records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LineKind {
    /// Ordinary channel message.
    #[default]
    Message,
    /// `/me` action.
    Action,
    /// Notice sent to the channel.
    Notice,
    /// Nick joined the channel.
    Join,
    /// Nick left the channel; text is the part reason.
    Part,
    /// Nick disconnected; text is the quit message.
    Quit,
    /// Nick change; text is the new nick.
    Nick,
    /// Topic change; text is the new topic.
    Topic,
}

impl LineKind {
    /// Parse the `type` field of a log record.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "message" => Some(Self::Message),
            "action" => Some(Self::Action),
            "notice" => Some(Self::Notice),
            "join" => Some(Self::Join),
            "part" => Some(Self::Part),
            "quit" => Some(Self::Quit),
            "nick" => Some(Self::Nick),
            "topic" => Some(Self::Topic),
            _ => None,
        }
    }

    /// True for lines spoken by a user rather than channel bookkeeping.
    pub fn is_speech(self) -> bool {
        matches!(self, Self::Message | Self::Action | Self::Notice)
    }
}

/// One selectable entry of the log view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatLine {
    id: LineId,
    timestamp: DateTime<Utc>,
    nick: String,
    kind: LineKind,
    text: String,
}

impl ChatLine {
    /// Create a line.
    pub fn new(
        id: LineId,
        timestamp: DateTime<Utc>,
        nick: impl Into<String>,
        kind: LineKind,
        text: impl Into<String>,
    ) -> Self {
        Self {
            id,
            timestamp,
            nick: nick.into(),
            kind,
            text: text.into(),
        }
    }

    /// Stable id of the line.
    pub fn id(&self) -> &LineId {
        &self.id
    }

    /// When the event happened.
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// Nick that produced the event.
    pub fn nick(&self) -> &str {
        &self.nick
    }

    /// Event kind.
    pub fn kind(&self) -> LineKind {
        self.kind
    }

    /// Raw event text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// `HH:MM:SS` column shown in front of every line.
    pub fn time_label(&self) -> String {
        self.timestamp.format("%H:%M:%S").to_string()
    }
}

impl fmt::Display for ChatLine {
    /// Body of the line as shown after the timestamp column.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let nick = &self.nick;
        let text = &self.text;
        match self.kind {
            LineKind::Message => write!(f, "<{nick}> {text}"),
            LineKind::Action => write!(f, "* {nick} {text}"),
            LineKind::Notice => write!(f, "-{nick}- {text}"),
            LineKind::Join => write!(f, "-> {nick} has joined"),
            LineKind::Part if text.is_empty() => write!(f, "<- {nick} has left"),
            LineKind::Part => write!(f, "<- {nick} has left ({text})"),
            LineKind::Quit if text.is_empty() => write!(f, "<- {nick} has quit"),
            LineKind::Quit => write!(f, "<- {nick} has quit ({text})"),
            LineKind::Nick => write!(f, "{nick} is now known as {text}"),
            LineKind::Topic => write!(f, "{nick} changed the topic to: {text}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn line(kind: LineKind, text: &str) -> ChatLine {
        ChatLine::new(
            LineId::from_number(1),
            Utc.with_ymd_and_hms(2024, 3, 9, 7, 5, 3).unwrap(),
            "alice",
            kind,
            text,
        )
    }

    #[test]
    fn time_label_is_zero_padded() {
        assert_eq!(line(LineKind::Message, "hi").time_label(), "07:05:03");
    }

    #[test]
    fn message_renders_with_angle_brackets() {
        assert_eq!(line(LineKind::Message, "hi").to_string(), "<alice> hi");
    }

    #[test]
    fn action_renders_with_star() {
        assert_eq!(line(LineKind::Action, "waves").to_string(), "* alice waves");
    }

    #[test]
    fn part_without_reason_omits_parens() {
        assert_eq!(line(LineKind::Part, "").to_string(), "<- alice has left");
        assert_eq!(
            line(LineKind::Part, "bye").to_string(),
            "<- alice has left (bye)"
        );
    }

    #[test]
    fn kind_parse_rejects_unknown() {
        assert_eq!(LineKind::parse("kick"), None);
        assert_eq!(LineKind::parse("topic"), Some(LineKind::Topic));
    }

    #[test]
    fn only_spoken_kinds_are_speech() {
        assert!(LineKind::Action.is_speech());
        assert!(!LineKind::Join.is_speech());
    }
}
