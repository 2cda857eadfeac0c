//! Decoder for the GBFS-style `{"data": {"stations": [...]}}` envelope.

use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{Error, Result};

#[derive(Deserialize)]
#[serde(bound = "T: DeserializeOwned")]
struct Envelope<T> {
    #[serde(default)]
    data: Option<Payload<T>>,
}

#[derive(Deserialize)]
#[serde(bound = "T: DeserializeOwned")]
struct Payload<T> {
    #[serde(default)]
    stations: Option<Vec<T>>,
}

/// Extracts the station list at `data.stations`.
///
/// A missing or `null` `data` or `stations` yields an empty list. `feed` names
/// the payload in error messages.
///
/// # Errors
///
/// Returns [`Error::Shape`] if the value is not an object, `stations` is not
/// a list, or an entry does not match `T`.
pub fn parse_stations<T: DeserializeOwned>(feed: &'static str, value: Value) -> Result<Vec<T>> {
    let envelope: Envelope<T> =
        serde_json::from_value(value).map_err(|source| Error::Shape { feed, source })?;

    Ok(envelope
        .data
        .and_then(|payload| payload.stations)
        .unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Station {
        station_id: String,
    }

    #[test]
    fn test_parse_stations_list() {
        let value = json!({"data": {"stations": [{"station_id": "a"}, {"station_id": "b", "extra": 1}]}});
        let stations: Vec<Station> = parse_stations("status", value).unwrap();
        assert_eq!(
            stations,
            vec![
                Station { station_id: "a".into() },
                Station { station_id: "b".into() }
            ]
        );
    }

    #[test]
    fn test_missing_data_is_empty() {
        let stations: Vec<Station> = parse_stations("status", json!({"last_updated": 1})).unwrap();
        assert!(stations.is_empty());
    }

    #[test]
    fn test_missing_or_null_stations_is_empty() {
        let stations: Vec<Station> = parse_stations("info", json!({"data": {}})).unwrap();
        assert!(stations.is_empty());

        let stations: Vec<Station> =
            parse_stations("info", json!({"data": {"stations": null}})).unwrap();
        assert!(stations.is_empty());
    }

    #[test]
    fn test_stations_not_a_list_is_shape_error() {
        let err = parse_stations::<Station>("status", json!({"data": {"stations": "nope"}}))
            .unwrap_err();
        assert!(matches!(err, Error::Shape { feed: "status", .. }));
    }

    #[test]
    fn test_entry_without_id_is_shape_error() {
        let err = parse_stations::<Station>("info", json!({"data": {"stations": [{"name": "x"}]}}))
            .unwrap_err();
        assert!(matches!(err, Error::Shape { feed: "info", .. }));
    }
}
