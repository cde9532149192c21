#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use chrono::{DateTime, Local, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// A single chat message as supplied by the application layer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub text: String,
    pub sender: String,
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub is_own: bool,
}

/// Horizontal placement of a message bubble.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BubbleSide {
    /// Messages from other people, aligned left.
    Start,
    /// The viewer's own messages, aligned right.
    End,
}

impl Message {
    pub fn side(&self) -> BubbleSide {
        if self.is_own { BubbleSide::End } else { BubbleSide::Start }
    }

    /// Sender label shown above the text. Own messages carry none.
    pub fn sender_label(&self) -> Option<&str> {
        (!self.is_own).then_some(self.sender.as_str())
    }

    /// `HH:MM` in the viewer's local time zone.
    pub fn local_time(&self) -> String {
        format_clock(&self.timestamp.with_timezone(&Local))
    }
}

impl BubbleSide {
    pub fn row_class(self) -> &'static str {
        match self {
            Self::Start => "message-list__row message-list__row--start",
            Self::End => "message-list__row message-list__row--end",
        }
    }

    pub fn bubble_class(self) -> &'static str {
        match self {
            Self::Start => "message-list__bubble message-list__bubble--other",
            Self::End => "message-list__bubble message-list__bubble--own",
        }
    }
}

/// What the message list renders for a given set of inputs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ListContent {
    /// Only the error view; messages are suppressed.
    Error(String),
    /// Loading indicator in place of an empty list.
    Loading,
    /// The message bubbles (possibly none).
    Messages,
}

/// Decide the list body. An error always wins over loading and messages.
pub fn list_content(message_count: usize, loading: bool, error: Option<&str>) -> ListContent {
    if let Some(err) = error {
        return ListContent::Error(err.to_owned());
    }
    if loading && message_count == 0 {
        return ListContent::Loading;
    }
    ListContent::Messages
}

/// Format an instant as two-digit hour and minute in its own offset.
pub fn format_clock<Tz>(ts: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    ts.format("%H:%M").to_string()
}
