//! Rows returned by the persistence service

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Primary key of an inserted row (bigint or uuid/text columns)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Int(i64),
    Text(String),
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Int(id) => write!(f, "{id}"),
            RecordId::Text(id) => f.write_str(id),
        }
    }
}

/// The created row as echoed back by the service.
///
/// Only the columns the form cares about are decoded; the rest are ignored.
/// `id` is required. An unreadable `created_at` decodes as `None` because
/// the row already exists by then.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsertedRecord {
    pub id: RecordId,
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub created_at: Option<DateTime<Utc>>,
}

fn lenient_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(raw
        .as_ref()
        .and_then(serde_json::Value::as_str)
        .and_then(parse_timestamp))
}

/// `timestamptz` columns carry an offset; plain `timestamp` columns do not
/// and are read as UTC
fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(stamp) = DateTime::parse_from_rfc3339(raw) {
        return Some(stamp.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc())
}

#[cfg(test)]
impl InsertedRecord {
    pub fn new(id: RecordId) -> Self {
        Self {
            id,
            created_at: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_integer_id() {
        let json = r#"{"id": 42, "company_info": "Acme", "personas": []}"#;
        let record: InsertedRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.id, RecordId::Int(42));
        assert!(record.created_at.is_none());
    }

    #[test]
    fn test_deserialize_uuid_id_and_timestamp() {
        let json = r#"{
            "id": "0b6f7c3e-1d2a-4e8b-9a51-5c3b2f4d6e70",
            "created_at": "2024-05-01T12:30:00+00:00"
        }"#;
        let record: InsertedRecord = serde_json::from_str(json).unwrap();
        assert_eq!(
            record.id.to_string(),
            "0b6f7c3e-1d2a-4e8b-9a51-5c3b2f4d6e70"
        );
        let created = record.created_at.unwrap();
        assert_eq!(created.to_rfc3339(), "2024-05-01T12:30:00+00:00");
    }

    #[test]
    fn test_timestamp_without_offset_is_read_as_utc() {
        let json = r#"{"id": 5, "created_at": "2024-05-01T12:30:00.123456"}"#;
        let record: InsertedRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.id, RecordId::Int(5));
        let created = record.created_at.unwrap();
        assert_eq!(created.to_rfc3339(), "2024-05-01T12:30:00.123456+00:00");
    }

    #[test]
    fn test_unreadable_timestamp_keeps_the_id() {
        for json in [
            r#"{"id": 6, "created_at": "yesterday"}"#,
            r#"{"id": 6, "created_at": 1714566600}"#,
            r#"{"id": 6, "created_at": null}"#,
        ] {
            let record: InsertedRecord = serde_json::from_str(json).unwrap();
            assert_eq!(record.id, RecordId::Int(6));
            assert!(record.created_at.is_none());
        }
    }

    #[test]
    fn test_missing_id_is_an_error() {
        let json = r#"{"company_info": "Acme"}"#;
        assert!(serde_json::from_str::<InsertedRecord>(json).is_err());
    }
}
