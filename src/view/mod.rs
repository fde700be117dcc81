//! Read-only text rendering of the dashboard and record table. This is the
//! only place numbers get rounded: money and volume to two decimals, fill
//! percentage to one, matching the sheet front-end.

use std::fmt::Write;

use crate::models::ShipmentRecord;
use crate::report::DashboardReport;

fn eur(value: f64) -> String {
    format!("{value:.2} EUR")
}

fn m3(value: f64) -> String {
    format!("{value:.2} m3")
}

fn fill(ratio: Option<f64>) -> String {
    match ratio {
        Some(r) => format!("{:.1}%", r * 100.0),
        None => "-".to_string(),
    }
}

pub fn render_dashboard(report: &DashboardReport) -> String {
    let mut out = String::new();

    if report.warehouses.is_empty() && report.global.volume == 0.0 {
        out.push_str("No warehouses configured and no shipments recorded yet.\n");
        out.push_str("Add warehouse settings first, then register shipments to see reports.\n");
        return out;
    }

    let _ = writeln!(
        out,
        "FINANCIAL REPORT  {} .. {}",
        report.range.from, report.range.to
    );
    let _ = writeln!(out, "  Total volume:      {}", m3(report.global.volume));
    let _ = writeln!(out, "  Sales:             {}", eur(report.global.sales));
    let _ = writeln!(
        out,
        "  Production cost:   {}",
        eur(report.global.production_cost)
    );
    let _ = writeln!(
        out,
        "  Extra income:      {}",
        eur(report.global.extra_income)
    );
    let _ = writeln!(
        out,
        "  Net result:        {}",
        eur(report.global.net_result())
    );
    let _ = writeln!(
        out,
        "  Investments:       {}",
        eur(report.global.investments)
    );

    for warehouse in &report.warehouses {
        let _ = writeln!(out);
        let _ = writeln!(
            out,
            "WAREHOUSE {}  (fill {})",
            warehouse.name,
            fill(warehouse.fill_ratio())
        );
        let _ = writeln!(
            out,
            "  Volume {} of {}",
            m3(warehouse.volume),
            m3(warehouse.capacity)
        );
        let _ = writeln!(out, "  Sales:             {}", eur(warehouse.sales));
        let _ = writeln!(
            out,
            "  Production cost:   {}",
            eur(warehouse.production_cost)
        );
        let _ = writeln!(out, "  Extra income:      {}", eur(warehouse.extra_income));
        let _ = writeln!(out, "  Net result:        {}", eur(warehouse.net_result()));

        if !warehouse.assortments.is_empty() {
            let _ = writeln!(out, "  Assortments:");
            for share in &warehouse.assortments {
                let _ = writeln!(
                    out,
                    "    {:<20} {:>12}  {:>6.1}%",
                    share.name,
                    m3(share.volume),
                    share.percent_of(warehouse.volume)
                );
            }
        }
    }

    out
}

pub fn render_record_table(records: &[&ShipmentRecord]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<8} {:<12} {:<14} {:<14} {:>10} {:>10}",
        "Nr", "Date", "Warehouse", "Assortment", "Volume", "Price"
    );
    for record in records {
        let _ = writeln!(
            out,
            "{:<8} {:<12} {:<14} {:<14} {:>10} {:>10}",
            record.number,
            record.date,
            record.warehouse,
            record.assortment,
            m3(record.volume),
            eur(record.price)
        );
    }
    out
}
