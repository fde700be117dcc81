//! Financial rollups over the shipment records, joined against the warehouse
//! settings. Pure and infallible: no I/O happens here, numeric inputs are
//! already coerced to finite values at the decode boundary, and intermediate
//! sums are never rounded. Rounding to two decimals is presentation work.

use chrono::{Local, Months};
use serde::Serialize;

use crate::models::{ShipmentRecord, WarehouseSetting};

/// Inclusive calendar-day range. Comparison is lexicographic on the date
/// strings, which is correct because they are zero-padded `YYYY-MM-DD`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DateRange {
    pub from: String,
    pub to: String,
}

impl DateRange {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }

    /// Default dashboard window: one month back through today.
    pub fn last_month() -> Self {
        let today = Local::now().date_naive();
        let from = today
            .checked_sub_months(Months::new(1))
            .unwrap_or(today);
        Self {
            from: from.format("%Y-%m-%d").to_string(),
            to: today.format("%Y-%m-%d").to_string(),
        }
    }

    pub fn contains(&self, date: &str) -> bool {
        self.from.as_str() <= date && date <= self.to.as_str()
    }
}

/// Keeps the records whose date falls inside the inclusive range.
pub fn filter_by_date<'a>(records: &'a [ShipmentRecord], range: &DateRange) -> Vec<&'a ShipmentRecord> {
    records.iter().filter(|r| range.contains(&r.date)).collect()
}

/// Period totals across every filtered record, plus the structural sum of
/// warehouse capital costs (deliberately not date-filtered).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GlobalSummary {
    pub volume: f64,
    pub sales: f64,
    pub production_cost: f64,
    pub extra_income: f64,
    pub investments: f64,
}

impl GlobalSummary {
    pub fn compute(records: &[&ShipmentRecord], settings: &[WarehouseSetting]) -> Self {
        Self {
            volume: records.iter().map(|r| r.volume).sum(),
            sales: records.iter().map(|r| r.volume * r.price).sum(),
            production_cost: records.iter().map(|r| r.volume * r.production_cost).sum(),
            extra_income: records.iter().map(|r| r.extra_income).sum(),
            investments: settings.iter().map(|s| s.cost).sum(),
        }
    }

    pub fn net_result(&self) -> f64 {
        self.sales - self.production_cost + self.extra_income
    }
}

/// Volume of one assortment/grade within a warehouse's filtered records.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssortmentShare {
    pub name: String,
    pub volume: f64,
}

impl AssortmentShare {
    /// Share of the warehouse subset volume, as a percentage.
    pub fn percent_of(&self, total_volume: f64) -> f64 {
        if total_volume > 0.0 {
            self.volume / total_volume * 100.0
        } else {
            0.0
        }
    }
}

/// Period totals for one warehouse, restricted to the records naming it.
/// Records referencing a warehouse with no setting appear in no summary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WarehouseSummary {
    pub name: String,
    /// Stated capacity in m³, from the setting.
    pub capacity: f64,
    pub capital_cost: f64,
    pub volume: f64,
    pub sales: f64,
    pub production_cost: f64,
    pub extra_income: f64,
    /// Grouped by assortment name, ordered by first appearance.
    pub assortments: Vec<AssortmentShare>,
}

impl WarehouseSummary {
    /// One summary per setting, in settings order.
    pub fn compute_all(
        records: &[&ShipmentRecord],
        settings: &[WarehouseSetting],
    ) -> Vec<Self> {
        settings
            .iter()
            .map(|setting| Self::compute(setting, records))
            .collect()
    }

    fn compute(setting: &WarehouseSetting, records: &[&ShipmentRecord]) -> Self {
        let subset: Vec<&&ShipmentRecord> = records
            .iter()
            .filter(|r| r.warehouse == setting.name)
            .collect();

        let mut assortments: Vec<AssortmentShare> = Vec::new();
        for record in &subset {
            match assortments.iter_mut().find(|a| a.name == record.assortment) {
                Some(share) => share.volume += record.volume,
                None => assortments.push(AssortmentShare {
                    name: record.assortment.clone(),
                    volume: record.volume,
                }),
            }
        }

        Self {
            name: setting.name.clone(),
            capacity: setting.volume,
            capital_cost: setting.cost,
            volume: subset.iter().map(|r| r.volume).sum(),
            sales: subset.iter().map(|r| r.volume * r.price).sum(),
            production_cost: subset.iter().map(|r| r.volume * r.production_cost).sum(),
            extra_income: subset.iter().map(|r| r.extra_income).sum(),
            assortments,
        }
    }

    pub fn net_result(&self) -> f64 {
        self.sales - self.production_cost + self.extra_income
    }

    /// Period volume over stated capacity. `None` when the capacity is zero
    /// or negative, so no NaN or infinity ever reaches a consumer. Can
    /// legitimately exceed 1.0 when shipments outgrow the stated capacity;
    /// never clamped.
    pub fn fill_ratio(&self) -> Option<f64> {
        if self.capacity > 0.0 {
            Some(self.volume / self.capacity)
        } else {
            None
        }
    }
}

/// Everything the dashboard renders for one date range.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardReport {
    pub range: DateRange,
    pub global: GlobalSummary,
    pub warehouses: Vec<WarehouseSummary>,
}

impl DashboardReport {
    pub fn build(
        records: &[ShipmentRecord],
        settings: &[WarehouseSetting],
        range: DateRange,
    ) -> Self {
        let filtered = filter_by_date(records, &range);
        Self {
            global: GlobalSummary::compute(&filtered, settings),
            warehouses: WarehouseSummary::compute_all(&filtered, settings),
            range,
        }
    }
}
