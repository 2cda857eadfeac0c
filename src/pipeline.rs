//! One fetch invocation: status + info → join → append.

use chrono::{DateTime, Utc};
use std::path::PathBuf;
use tracing::{debug, info};

use crate::config::Settings;
use crate::error::Result;
use crate::fetch::{HttpClient, get_json};
use crate::output::append_records;
use crate::record::timestamp;
use crate::stations::join_feeds;

/// Result of a completed fetch. `appended == 0` means both feeds were empty.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchOutcome {
    pub timestamp: DateTime<Utc>,
    pub appended: usize,
    pub path: PathBuf,
}

impl FetchOutcome {
    pub fn is_empty(&self) -> bool {
        self.appended == 0
    }
}

/// Fetches both feeds, joins them and appends the batch to the history log.
///
/// The two requests run one after the other. A failure in either request or
/// in the join returns before anything is written.
#[tracing::instrument(skip_all, fields(status_url = %settings.status_url, info_url = %settings.info_url))]
pub async fn run_fetch<C: HttpClient>(client: &C, settings: &Settings) -> Result<FetchOutcome> {
    let timestamp = timestamp::now();

    let status_json = get_json(client, &settings.status_url).await?;
    let info_json = get_json(client, &settings.info_url).await?;
    debug!("Both feeds received, joining");

    let records = join_feeds(status_json, info_json, timestamp)?;
    let appended = append_records(&settings.history_path, &records)?;

    info!(
        appended,
        timestamp = %timestamp::format(&timestamp),
        path = %settings.history_path.display(),
        "Fetch complete"
    );

    Ok(FetchOutcome {
        timestamp,
        appended,
        path: settings.history_path.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::fetch::BasicClient;
    use std::fs;

    fn settings_for(server: &mockito::Server, dir: &tempfile::TempDir) -> Settings {
        Settings {
            status_url: format!("{}/station_status.json", server.url()),
            info_url: format!("{}/station_information.json", server.url()),
            history_path: dir.path().join("data/history.jsonl"),
            ..Settings::default()
        }
    }

    #[tokio::test]
    async fn test_info_failure_writes_nothing() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/station_status.json")
            .with_status(200)
            .with_body(r#"{"data":{"stations":[{"station_id":"S1","num_bikes_available":4,"num_docks_available":2}]}}"#)
            .create_async()
            .await;
        server
            .mock("GET", "/station_information.json")
            .with_status(500)
            .create_async()
            .await;

        let dir = tempfile::tempdir().unwrap();
        let settings = settings_for(&server, &dir);
        let client = BasicClient::new().unwrap();

        let err = run_fetch(&client, &settings).await.unwrap_err();

        assert!(matches!(err, Error::HttpStatus { .. }));
        assert!(!settings.history_path.exists());
    }

    #[tokio::test]
    async fn test_status_failure_skips_info_request() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/station_status.json")
            .with_status(404)
            .create_async()
            .await;
        let info_mock = server
            .mock("GET", "/station_information.json")
            .with_status(200)
            .with_body(r#"{"data":{"stations":[]}}"#)
            .expect(0)
            .create_async()
            .await;

        let dir = tempfile::tempdir().unwrap();
        let settings = settings_for(&server, &dir);
        let client = BasicClient::new().unwrap();

        assert!(run_fetch(&client, &settings).await.is_err());
        info_mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_batch_shares_one_timestamp() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/station_status.json")
            .with_status(200)
            .with_body(
                r#"{"data":{"stations":[
                    {"station_id":"S1","num_bikes_available":1,"num_docks_available":1},
                    {"station_id":"S2","num_bikes_available":2,"num_docks_available":2}
                ]}}"#,
            )
            .create_async()
            .await;
        server
            .mock("GET", "/station_information.json")
            .with_status(200)
            .with_body(r#"{"data":{"stations":[]}}"#)
            .create_async()
            .await;

        let dir = tempfile::tempdir().unwrap();
        let settings = settings_for(&server, &dir);
        let client = BasicClient::new().unwrap();

        let outcome = run_fetch(&client, &settings).await.unwrap();
        assert_eq!(outcome.appended, 2);

        let expected = timestamp::format(&outcome.timestamp);
        let content = fs::read_to_string(&settings.history_path).unwrap();
        for line in content.lines() {
            let value: serde_json::Value = serde_json::from_str(line).unwrap();
            assert_eq!(value["timestamp"], expected.as_str());
        }
    }
}
