use serde::{Serialize, Serializer};
use std::collections::BTreeMap;

/// Identifying details of one command invocation, used for logs and metrics.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CommandRecord {
    #[serde(serialize_with = "serialize_u64_as_string")]
    pub id: u64,
    pub command: String,
    #[serde(serialize_with = "serialize_option_u64_as_string")]
    pub guild: Option<u64>,
    #[serde(serialize_with = "serialize_u64_as_string")]
    pub channel: u64,
    #[serde(serialize_with = "serialize_u64_as_string")]
    pub author: u64,
    pub locale: String,
    pub options: BTreeMap<String, String>,
    /// Gateway heartbeat latency of the receiving shard in milliseconds, when
    /// the shard has measured one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gateway_ping: Option<u64>,
}

#[derive(Serialize)]
struct CommandLogLine<'a> {
    #[serde(flatten)]
    record: &'a CommandRecord,
    event: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    latency: Option<i64>,
}

impl CommandRecord {
    /// Serializes the record with an event name and optional latency as a
    /// single JSON line.
    pub fn to_log(&self, event: &str, latency: Option<i64>) -> String {
        serde_json::to_string(&CommandLogLine {
            record: self,
            event,
            latency,
        })
        .unwrap_or_else(|e| format!("{{\"event\":\"{}\",\"serialize_error\":\"{}\"}}", event, e))
    }
}

fn serialize_u64_as_string<S>(value: &u64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&value.to_string())
}

fn serialize_option_u64_as_string<S>(value: &Option<u64>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match value {
        Some(value) => serializer.serialize_str(&value.to_string()),
        None => serializer.serialize_none(),
    }
}
