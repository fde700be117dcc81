use std::sync::Arc;
use tokio::time::{sleep, Duration};

use crate::client::StoreClient;
use crate::config::Config;
use crate::error::Result;
use crate::models::{RecordKey, ShipmentRecord, WarehouseSetting};

/// In-memory working copy of the two remote tables for one process lifetime.
///
/// The remote store is the sole durable owner: every reload replaces both
/// collections wholesale, nothing is merged, and nothing survives a restart.
/// All mutating operations go write-then-refresh; overlapping writes from
/// other sessions are unguarded (last write wins at the backend).
pub struct Session {
    client: StoreClient,
    config: Arc<Config>,
    records: Vec<ShipmentRecord>,
    settings: Vec<WarehouseSetting>,
    editing: Option<RecordKey>,
}

impl Session {
    pub fn new(config: Arc<Config>) -> Self {
        Self {
            client: StoreClient::new(config.clone()),
            config,
            records: Vec::new(),
            settings: Vec::new(),
            editing: None,
        }
    }

    pub fn records(&self) -> &[ShipmentRecord] {
        &self.records
    }

    pub fn settings(&self) -> &[WarehouseSetting] {
        &self.settings
    }

    pub fn editing(&self) -> Option<&RecordKey> {
        self.editing.as_ref()
    }

    /// Full re-fetch, replacing both collections. Skipped entirely while the
    /// endpoint is unconfigured.
    pub async fn load(&mut self) {
        if !self.config.is_configured() {
            return;
        }
        let data = self.client.fetch_all().await;
        self.records = data.records;
        self.settings = data.settings;
    }

    /// Marks the record with this key as being edited; the next
    /// `save_record` becomes an update targeting this original identity.
    /// Returns the matching record so a form can prefill from it.
    pub fn begin_edit(&mut self, key: RecordKey) -> Option<&ShipmentRecord> {
        let idx = self
            .records
            .iter()
            .position(|r| r.number == key.number && r.date == key.date)?;
        self.editing = Some(key);
        Some(&self.records[idx])
    }

    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    /// Blank record for the form: dated today, with the warehouse's default
    /// production cost copied in when the warehouse is known.
    pub fn new_record(&self, warehouse: &str) -> ShipmentRecord {
        let prod_cost = self
            .settings
            .iter()
            .find(|s| s.name == warehouse)
            .map(|s| s.prod_cost)
            .unwrap_or(0.0);
        ShipmentRecord {
            date: chrono::Local::now().format("%Y-%m-%d").to_string(),
            warehouse: warehouse.to_string(),
            production_cost: prod_cost,
            ..Default::default()
        }
    }

    /// Inserts, or updates when an edit is in progress. The edit state is
    /// consumed either way.
    pub async fn save_record(&mut self, record: ShipmentRecord) -> Result<()> {
        let edit = self.editing.take();
        self.client.save_record(&record, edit.as_ref()).await?;
        self.refresh_after_write().await;
        Ok(())
    }

    /// Permanent row removal by exact (number, date) key.
    pub async fn delete_record(&mut self, number: &str, date: &str) -> Result<()> {
        self.client.delete_record(number, date).await?;
        self.refresh_after_write().await;
        Ok(())
    }

    pub async fn save_setting(&mut self, setting: WarehouseSetting) -> Result<()> {
        self.client.save_setting(&setting).await?;
        self.refresh_after_write().await;
        Ok(())
    }

    /// Deletes a warehouse setting by name. Shipment records referencing the
    /// name stay behind and drop out of the per-warehouse rollups.
    pub async fn delete_setting(&mut self, name: &str) -> Result<()> {
        self.client.delete_setting(name).await?;
        self.refresh_after_write().await;
        Ok(())
    }

    /// Fire-and-forget invoice trigger. The sheet rows this client reads do
    /// not change, so no reload follows.
    pub async fn send_invoice(&self, number: &str) -> Result<()> {
        self.client.send_invoice(number).await
    }

    /// Case-insensitive search over number, warehouse and recipient.
    pub fn search_records(&self, term: &str) -> Vec<&ShipmentRecord> {
        let term = term.to_lowercase();
        self.records
            .iter()
            .filter(|r| {
                r.number.to_lowercase().contains(&term)
                    || r.warehouse.to_lowercase().contains(&term)
                    || r.recipient.to_lowercase().contains(&term)
            })
            .collect()
    }

    /// Optimistic reload after an unacknowledged write. The write channel
    /// gives no confirmation, so this waits a fixed delay and re-fetches.
    /// Known race: a backend slower than the delay leaves the reloaded
    /// collections one write behind until the next reload. Accepted
    /// limitation; the delay lives here and nowhere else.
    async fn refresh_after_write(&mut self) {
        sleep(Duration::from_millis(self.config.refresh_delay_ms)).await;
        self.load().await;
    }
}
