use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{cell_flag, cell_number, cell_string, normalize_date};

/// Column layout of the LOGS sheet. Raw rows arrive as positional arrays;
/// every index up to [`LogColumn::COUNT`] must be accounted for when
/// decoding, or a field silently disappears.
pub struct LogColumn;

impl LogColumn {
    pub const NUM: usize = 0;
    pub const DATE: usize = 1;
    pub const WAREHOUSE: usize = 2;
    pub const CARRIER: usize = 3;
    pub const RECIPIENT: usize = 4;
    pub const ASSORTMENT: usize = 5;
    pub const LENGTH: usize = 6;
    pub const VOLUME: usize = 7;
    pub const PRICE: usize = 8;
    pub const PRODUCTION_COST: usize = 9;
    pub const NOTES: usize = 10;
    pub const EXTRA_INCOME: usize = 11;
    pub const EXTRA_INCOME_DESC: usize = 12;
    pub const TIME: usize = 13;
    pub const IS_TRANSFER: usize = 14;

    /// Total number of columns in the sheet.
    pub const COUNT: usize = 15;
}

/// One shipped-timber row. Wire names keep the sheet's original keys.
///
/// Identity is the (number, date) pair; it is not guaranteed unique. Two rows
/// sharing both values are ambiguous for edit and delete targeting, and the
/// backend resolves that by touching a single matching row.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ShipmentRecord {
    #[serde(rename = "num")]
    pub number: String,
    /// Calendar day in `YYYY-MM-DD` form.
    #[serde(rename = "data")]
    pub date: String,
    /// Warehouse name, foreign key into the settings by name. No referential
    /// integrity: the referenced warehouse may have been deleted.
    #[serde(rename = "sandelys")]
    pub warehouse: String,
    #[serde(rename = "vezejas")]
    pub carrier: String,
    #[serde(rename = "gavejas")]
    pub recipient: String,
    #[serde(rename = "sortimentas")]
    pub assortment: String,
    #[serde(rename = "ilgis")]
    pub length: String,
    /// Volume in m³.
    #[serde(rename = "kiekis")]
    pub volume: f64,
    /// Unit price per m³.
    #[serde(rename = "kaina")]
    pub price: f64,
    /// Production cost per m³.
    #[serde(rename = "gamyba")]
    pub production_cost: f64,
    #[serde(rename = "pastabos")]
    pub notes: String,
    /// Supplemental income outside the price × volume calculation.
    #[serde(rename = "pap_pajamos")]
    pub extra_income: f64,
    #[serde(rename = "pap_pajamos_desc")]
    pub extra_income_desc: String,
    /// Entry timestamp, stamped by the backend on insert and edit. Sent back
    /// on writes but ignored there.
    #[serde(rename = "time", default)]
    pub time: String,
    /// True when the shipment arrived from another warehouse instead of
    /// being freshly produced.
    #[serde(rename = "is_transfer")]
    pub is_transfer: bool,
}

impl ShipmentRecord {
    /// Decodes one positional LOGS row. Missing or non-numeric numeric cells
    /// become 0, missing strings become empty, and the date cell normalizes
    /// to `YYYY-MM-DD`.
    pub fn from_row(row: &[Value]) -> Self {
        Self {
            number: cell_string(row, LogColumn::NUM),
            date: normalize_date(row.get(LogColumn::DATE).unwrap_or(&Value::Null)),
            warehouse: cell_string(row, LogColumn::WAREHOUSE),
            carrier: cell_string(row, LogColumn::CARRIER),
            recipient: cell_string(row, LogColumn::RECIPIENT),
            assortment: cell_string(row, LogColumn::ASSORTMENT),
            length: cell_string(row, LogColumn::LENGTH),
            volume: cell_number(row, LogColumn::VOLUME),
            price: cell_number(row, LogColumn::PRICE),
            production_cost: cell_number(row, LogColumn::PRODUCTION_COST),
            notes: cell_string(row, LogColumn::NOTES),
            extra_income: cell_number(row, LogColumn::EXTRA_INCOME),
            extra_income_desc: cell_string(row, LogColumn::EXTRA_INCOME_DESC),
            time: cell_string(row, LogColumn::TIME),
            is_transfer: cell_flag(row, LogColumn::IS_TRANSFER),
        }
    }

    pub fn key(&self) -> RecordKey {
        RecordKey {
            number: self.number.clone(),
            date: self.date.clone(),
        }
    }
}

/// Edit/delete targeting key for a shipment record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordKey {
    pub number: String,
    pub date: String,
}
