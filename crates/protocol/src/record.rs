//! Record kinds and row construction
//!
//! Two record kinds are logged, each into its own file per session:
//!
//! | Kind | File | Source endpoint |
//! |------|------|-----------------|
//! | `Click` | `<session>_clicks.csv` | `POST /api/coin_pickup` |
//! | `Round` | `<session>_events.csv` | `POST /api/round_event` |
//!
//! Column order is fixed. Files written by earlier deployments must keep
//! parsing, so headers are never reordered or extended.

use std::fmt;

use serde::Deserialize;
use serde_json::Value;

use crate::{Result, SessionId, cell};

/// Canonical header of a session's click log
pub const CLICK_HEADER: [&str; 12] = [
    "sessionId",
    "round",
    "coinId",
    "coin_color",
    "coin_value",
    "points_gained",
    "screen_x",
    "screen_y",
    "timestamp_client_ms",
    "timeLeft_client_s",
    "score_after_click",
    "server_received_ms",
];

/// Canonical header of a session's round/session event log
pub const ROUND_HEADER: [&str; 10] = [
    "sessionId",
    "type",
    "round",
    "timestamp_client_ms",
    "server_received_ms",
    "timeLeft_at_start",
    "timeLeft_at_end",
    "round_time_ms",
    "total_score_after_round",
    "final_score",
];

/// Kind of record, selecting the target file and its header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    /// Coin pickup interaction
    Click,
    /// Round or session lifecycle transition
    Round,
}

impl RecordKind {
    /// File name suffix (before `.csv`)
    #[inline]
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::Click => "clicks",
            Self::Round => "events",
        }
    }

    /// Canonical header row
    #[inline]
    pub const fn header(self) -> &'static [&'static str] {
        match self {
            Self::Click => &CLICK_HEADER,
            Self::Round => &ROUND_HEADER,
        }
    }

    /// Number of columns in every row of this kind
    #[inline]
    pub const fn column_count(self) -> usize {
        self.header().len()
    }

    /// File name for a session's log of this kind
    pub fn file_name(self, session: &SessionId) -> String {
        format!("{}_{}.csv", session.as_str(), self.suffix())
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.suffix())
    }
}

/// A payload that can be appended as one CSV row
pub trait Record {
    /// Kind of this record
    const KIND: RecordKind;

    /// Session this record belongs to
    fn session_id(&self) -> Result<SessionId>;

    /// Build the row in canonical column order
    ///
    /// `server_received_ms` is the server's clock at write time; any
    /// client-side value is ignored.
    fn to_row(&self, session: &SessionId, server_received_ms: i64) -> Vec<String>;
}

/// Coin pickup payload (`POST /api/coin_pickup`)
///
/// All fields are kept as raw JSON so client values pass through untouched.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ClickEvent {
    #[serde(rename = "sessionId", default)]
    pub session_id: Option<Value>,

    #[serde(default)]
    pub round: Option<Value>,

    #[serde(rename = "coinId", default)]
    pub coin_id: Option<Value>,

    #[serde(default)]
    pub coin_color: Option<Value>,

    #[serde(default)]
    pub coin_value: Option<Value>,

    #[serde(default)]
    pub points_gained: Option<Value>,

    /// Click position, `{"x": .., "y": ..}`
    #[serde(rename = "screenPos", default)]
    pub screen_pos: Option<Value>,

    /// Client clock in milliseconds
    #[serde(default)]
    pub timestamp: Option<Value>,

    /// Same as `timestamp`, under its column name; `timestamp` wins
    #[serde(default)]
    pub timestamp_client_ms: Option<Value>,

    /// Seconds left on the round timer
    #[serde(rename = "timeLeft", default)]
    pub time_left: Option<Value>,

    /// Same as `timeLeft`, under its column name; `timeLeft` wins
    #[serde(rename = "timeLeft_client_s", default)]
    pub time_left_client_s: Option<Value>,

    #[serde(default)]
    pub score_after_click: Option<Value>,
}

impl ClickEvent {
    fn screen_coord(&self, axis: &str) -> Option<&Value> {
        self.screen_pos
            .as_ref()
            .and_then(Value::as_object)
            .and_then(|pos| pos.get(axis))
    }

    /// Client timestamp, from `timestamp` or its column-name key
    pub fn client_timestamp(&self) -> Option<&Value> {
        self.timestamp.as_ref().or(self.timestamp_client_ms.as_ref())
    }

    /// Seconds left, from `timeLeft` or its column-name key
    pub fn client_time_left(&self) -> Option<&Value> {
        self.time_left.as_ref().or(self.time_left_client_s.as_ref())
    }
}

impl Record for ClickEvent {
    const KIND: RecordKind = RecordKind::Click;

    fn session_id(&self) -> Result<SessionId> {
        SessionId::from_value(self.session_id.as_ref())
    }

    fn to_row(&self, session: &SessionId, server_received_ms: i64) -> Vec<String> {
        vec![
            session.as_str().to_string(),
            cell(self.round.as_ref()),
            cell(self.coin_id.as_ref()),
            cell(self.coin_color.as_ref()),
            cell(self.coin_value.as_ref()),
            cell(self.points_gained.as_ref()),
            cell(self.screen_coord("x")),
            cell(self.screen_coord("y")),
            cell(self.client_timestamp()),
            cell(self.client_time_left()),
            cell(self.score_after_click.as_ref()),
            server_received_ms.to_string(),
        ]
    }
}

/// Round or session lifecycle payload (`POST /api/round_event`)
///
/// `type` is free-form: `session_start`, `round_start`, `round_end` and
/// `session_end` are what the game sends today, anything else is logged as is.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RoundEvent {
    #[serde(rename = "sessionId", default)]
    pub session_id: Option<Value>,

    #[serde(rename = "type", default)]
    pub event_type: Option<Value>,

    #[serde(default)]
    pub round: Option<Value>,

    /// Client clock in milliseconds
    #[serde(default)]
    pub timestamp: Option<Value>,

    /// Same as `timestamp`, under its column name; `timestamp` wins
    #[serde(default)]
    pub timestamp_client_ms: Option<Value>,

    #[serde(rename = "timeLeft_at_start", default)]
    pub time_left_at_start: Option<Value>,

    #[serde(rename = "timeLeft_at_end", default)]
    pub time_left_at_end: Option<Value>,

    #[serde(default)]
    pub round_time_ms: Option<Value>,

    #[serde(default)]
    pub total_score_after_round: Option<Value>,

    #[serde(default)]
    pub final_score: Option<Value>,
}

impl RoundEvent {
    /// Client timestamp, from `timestamp` or its column-name key
    pub fn client_timestamp(&self) -> Option<&Value> {
        self.timestamp.as_ref().or(self.timestamp_client_ms.as_ref())
    }
}

impl Record for RoundEvent {
    const KIND: RecordKind = RecordKind::Round;

    fn session_id(&self) -> Result<SessionId> {
        SessionId::from_value(self.session_id.as_ref())
    }

    fn to_row(&self, session: &SessionId, server_received_ms: i64) -> Vec<String> {
        vec![
            session.as_str().to_string(),
            cell(self.event_type.as_ref()),
            cell(self.round.as_ref()),
            cell(self.client_timestamp()),
            server_received_ms.to_string(),
            cell(self.time_left_at_start.as_ref()),
            cell(self.time_left_at_end.as_ref()),
            cell(self.round_time_ms.as_ref()),
            cell(self.total_score_after_round.as_ref()),
            cell(self.final_score.as_ref()),
        ]
    }
}
