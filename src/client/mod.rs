pub mod payload;

pub use payload::WritePayload;

use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;

use crate::config::Config;
use crate::error::Result;
use crate::models::{RecordKey, ShipmentRecord, WarehouseSetting};

/// Both collections as returned by one read of the remote store.
#[derive(Debug, Default)]
pub struct FetchedData {
    pub records: Vec<ShipmentRecord>,
    pub settings: Vec<WarehouseSetting>,
}

/// Raw read response. Either key may be absent.
#[derive(Deserialize)]
struct RawResponse {
    #[serde(default)]
    logs: Vec<Vec<Value>>,
    #[serde(default)]
    settings: Vec<Vec<Value>>,
}

/// Client for the spreadsheet scripting endpoint.
///
/// Reads fetch both tables wholesale. Writes are fire and forget: the
/// endpoint never reports application-level success or failure, so the only
/// observable error is a transport one, and `Ok(())` means "request was
/// sent", not "write was applied".
pub struct StoreClient {
    http: reqwest::Client,
    config: Arc<Config>,
}

impl StoreClient {
    pub fn new(config: Arc<Config>) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// Reads both tables. Never errors: any transport or shape failure logs
    /// a warning and degrades to empty collections, so a broken connection
    /// shows up as an empty state rather than an error screen.
    pub async fn fetch_all(&self) -> FetchedData {
        match self.try_fetch().await {
            Ok(data) => data,
            Err(err) => {
                tracing::warn!("Failed to load data from remote store: {err}");
                FetchedData::default()
            }
        }
    }

    async fn try_fetch(&self) -> Result<FetchedData> {
        let response = self
            .http
            .get(&self.config.script_url)
            .send()
            .await?
            .error_for_status()?;
        let body: RawResponse = response.json().await?;

        tracing::debug!(
            records = body.logs.len(),
            settings = body.settings.len(),
            "Fetched remote store"
        );

        Ok(FetchedData {
            records: body
                .logs
                .iter()
                .map(|row| ShipmentRecord::from_row(row))
                .collect(),
            settings: body
                .settings
                .iter()
                .map(|row| WarehouseSetting::from_row(row))
                .collect(),
        })
    }

    /// Inserts a record, or updates one when `edit` carries the original
    /// (number, date) identity captured before the form was changed.
    pub async fn save_record(
        &self,
        record: &ShipmentRecord,
        edit: Option<&RecordKey>,
    ) -> Result<()> {
        let payload = match edit {
            Some(key) => WritePayload::EditRecord {
                record: record.clone(),
                old_num: key.number.clone(),
                old_date: key.date.clone(),
            },
            None => WritePayload::InsertRecord {
                record: record.clone(),
            },
        };
        self.post(&payload).await
    }

    /// Deletes the one row matching the exact (number, date) pair. When two
    /// rows share both values the backend removes a single one of them.
    pub async fn delete_record(&self, number: &str, date: &str) -> Result<()> {
        self.post(&WritePayload::DeleteRecord {
            num: number.to_string(),
            date: date.to_string(),
        })
        .await
    }

    pub async fn save_setting(&self, setting: &WarehouseSetting) -> Result<()> {
        self.post(&WritePayload::UpsertSetting {
            setting: setting.clone(),
        })
        .await
    }

    pub async fn delete_setting(&self, name: &str) -> Result<()> {
        self.post(&WritePayload::DeleteSetting {
            name: name.to_string(),
        })
        .await
    }

    /// Triggers invoice generation and e-mailing in the external system.
    pub async fn send_invoice(&self, number: &str) -> Result<()> {
        self.post(&WritePayload::SendInvoice {
            nr: number.to_string(),
        })
        .await
    }

    /// Write channel. The response body is intentionally not inspected; the
    /// endpoint accepts or drops payloads without telling us which.
    async fn post(&self, payload: &WritePayload) -> Result<()> {
        tracing::debug!(?payload, "Posting write to remote store");
        self.http
            .post(&self.config.script_url)
            .json(payload)
            .send()
            .await?;
        Ok(())
    }
}
