use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One line of the history log: a station's state at a fetch instant.
///
/// Every field is always serialized; missing source values become `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryRecord {
    #[serde(with = "timestamp")]
    pub timestamp: DateTime<Utc>,
    pub station_id: String,
    pub name: Option<String>,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    pub num_bikes_available: Option<i64>,
    pub num_docks_available: Option<i64>,
}

/// Second-precision RFC 3339 timestamps, written as `2024-05-01T12:00:00+00:00`.
pub mod timestamp {
    use chrono::{DateTime, SecondsFormat, SubsecRound, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    /// Current UTC time with the sub-second part dropped.
    pub fn now() -> DateTime<Utc> {
        Utc::now().trunc_subsecs(0)
    }

    pub fn format(ts: &DateTime<Utc>) -> String {
        ts.to_rfc3339_opts(SecondsFormat::Secs, false)
    }

    /// Parses any RFC 3339 timestamp and normalizes it to UTC.
    pub fn parse(raw: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
        DateTime::parse_from_rfc3339(raw).map(|dt| dt.with_timezone(&Utc))
    }

    pub fn serialize<S: Serializer>(ts: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format(ts))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse(&raw).map_err(serde::de::Error::custom)
    }
}
