use serde::Serialize;

use crate::models::{ShipmentRecord, WarehouseSetting};

/// Write payload shapes understood by the scripting endpoint, discriminated
/// by the `type` field.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type")]
pub enum WritePayload {
    /// Insert a new shipment record row.
    #[serde(rename = "log")]
    InsertRecord {
        #[serde(flatten)]
        record: ShipmentRecord,
    },
    /// Update an existing row. `old_num`/`old_date` carry the lookup key as
    /// it was before the edit, distinct from the (possibly changed) values
    /// inside `record`. The backend rewrites the first matching row.
    #[serde(rename = "edit_log")]
    EditRecord {
        #[serde(flatten)]
        record: ShipmentRecord,
        old_num: String,
        old_date: String,
    },
    /// Remove the one row matching the exact (num, date) pair.
    #[serde(rename = "delete_log_entry")]
    DeleteRecord {
        num: String,
        #[serde(rename = "data")]
        date: String,
    },
    /// Upsert a warehouse setting by name.
    #[serde(rename = "setting")]
    UpsertSetting {
        #[serde(flatten)]
        setting: WarehouseSetting,
    },
    /// Remove a warehouse setting by name. Shipment records referencing the
    /// name are left untouched.
    #[serde(rename = "delete_setting")]
    DeleteSetting { name: String },
    /// Ask the backend to generate and e-mail the invoice for a record
    /// number. The side effect is fully opaque to this client.
    #[serde(rename = "send_invoice")]
    SendInvoice { nr: String },
}
