// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Wire frames exchanged between the streaming endpoint and its clients.

use serde::{Deserialize, Deserializer, Serialize};
use time::OffsetDateTime;
use time::format_description::well_known::Iso8601;

/// The payload portion of a webhook notification from the board provider.
///
/// All fields are optional because the provider varies the shape per
/// event kind. Ids arrive as either JSON strings or numbers depending
/// on the event, both are normalized to strings here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderEvent {
    /// The provider's event kind, e.g. `update_column_value`.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// The board the event originated from.
    #[serde(
        rename = "boardId",
        default,
        deserialize_with = "opt_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub board_id: Option<String>,
    /// The item the event concerns, if any.
    #[serde(
        rename = "itemId",
        default,
        deserialize_with = "opt_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub item_id: Option<String>,
    /// The column the event concerns, if any.
    #[serde(rename = "columnId", default, skip_serializing_if = "Option::is_none")]
    pub column_id: Option<String>,
    /// The new value, as an opaque JSON fragment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<serde_json::Value>,
}

impl ProviderEvent {
    /// Decode a provider event from the `event` object of a webhook
    /// body. A missing or malformed object yields an empty event rather
    /// than dropping the notification.
    #[must_use]
    pub fn from_value(value: serde_json::Value) -> Self {
        serde_json::from_value(value).unwrap_or_default()
    }
}

/// Id fields arrive as either a string or a number.
fn opt_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Int(i64),
        Float(f64),
    }

    let raw = Option::<Raw>::deserialize(deserializer)?;
    Ok(raw.map(|raw| match raw {
        Raw::Text(text) => text,
        Raw::Int(number) => number.to_string(),
        Raw::Float(number) => number.to_string(),
    }))
}

/// One line of the newline-delimited JSON stream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EventFrame {
    /// First frame on every new stream connection.
    Connected { timestamp: String },
    /// Periodic liveness frame. Clients ignore it.
    Heartbeat { timestamp: String },
    /// A board changed upstream.
    MondayWebhook {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        board_id: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        item_id: Option<String>,
        timestamp: String,
        event: ProviderEvent,
    },
}

impl EventFrame {
    #[must_use]
    pub fn connected_now() -> Self {
        Self::Connected {
            timestamp: now_timestamp(),
        }
    }

    #[must_use]
    pub fn heartbeat_now() -> Self {
        Self::Heartbeat {
            timestamp: now_timestamp(),
        }
    }

    /// Wrap a provider event, lifting the board and item ids to the
    /// frame level so clients can route without digging into the event.
    #[must_use]
    pub fn webhook(event: ProviderEvent) -> Self {
        Self::MondayWebhook {
            board_id: event.board_id.clone(),
            item_id: event.item_id.clone(),
            timestamp: now_timestamp(),
            event,
        }
    }
}

fn now_timestamp() -> String {
    OffsetDateTime::now_utc()
        .format(&Iso8601::DEFAULT)
        .unwrap_or_else(|_| String::from("unknown"))
}
