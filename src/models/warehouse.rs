use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{cell_number, cell_string};

/// Column layout of the SETTINGS sheet.
pub struct SettingColumn;

impl SettingColumn {
    pub const NAME: usize = 0;
    pub const COST: usize = 1;
    pub const VOLUME: usize = 2;
    pub const PROD_COST: usize = 3;

    /// Total number of columns in the sheet.
    pub const COUNT: usize = 4;
}

/// Capacity and cost profile of one physical warehouse.
///
/// `name` is the unique key, and the sole key for upsert and delete. Deleting
/// a setting does not cascade to shipment records referencing its name; those
/// rows stay behind and simply drop out of the per-warehouse rollups.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct WarehouseSetting {
    pub name: String,
    /// Total capital cost sunk into the warehouse.
    pub cost: f64,
    /// Maximum volume capacity in m³.
    pub volume: f64,
    /// Default production cost per m³, copied into new shipment records as a
    /// form convenience and editable there.
    #[serde(rename = "prodCost")]
    pub prod_cost: f64,
}

impl WarehouseSetting {
    /// Decodes one positional SETTINGS row with the same defaulting rules as
    /// shipment rows.
    pub fn from_row(row: &[Value]) -> Self {
        Self {
            name: cell_string(row, SettingColumn::NAME),
            cost: cell_number(row, SettingColumn::COST),
            volume: cell_number(row, SettingColumn::VOLUME),
            prod_cost: cell_number(row, SettingColumn::PROD_COST),
        }
    }
}
