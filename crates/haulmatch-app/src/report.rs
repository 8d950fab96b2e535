//! Comparison report tables
//!
//! Turns a completed comparison into titled sections of display strings,
//! shared by the table printer and the Excel export.

use haulmatch_domain::model::MetricPair;
use haulmatch_types::Result;
use serde::Serialize;

use crate::app::Comparison;

/// Column headings for every section
pub const COLUMNS: [&str; 5] = ["Description", "Current Bucket", "Selected Bucket", "Difference", "% Difference"];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportRow {
    pub description: String,
    pub old: String,
    pub new: String,
    pub difference: String,
    pub percent: String,
}

impl ReportRow {
    pub fn cells(&self) -> [&str; 5] {
        [&self.description, &self.old, &self.new, &self.difference, &self.percent]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportSection {
    pub title: String,
    pub rows: Vec<ReportRow>,
}

fn paired(description: &str, pair: MetricPair, decimals: usize) -> Result<ReportRow> {
    Ok(ReportRow {
        description: description.to_string(),
        old: format!("{:.*}", decimals, pair.old),
        new: format!("{:.*}", decimals, pair.new),
        difference: format!("{:.*}", decimals, pair.difference()),
        percent: format!("{:.0}%", pair.percent_change()?),
    })
}

fn unchanged(description: &str, value: String) -> ReportRow {
    ReportRow {
        description: description.to_string(),
        old: value.clone(),
        new: value,
        difference: "-".to_string(),
        percent: "-".to_string(),
    }
}

/// Build the four comparison sections
pub fn build_sections(comparison: &Comparison) -> Result<Vec<ReportSection>> {
    let r = &comparison.report;

    let bucket = ReportSection {
        title: "Side-by-Side Bucket Comparison".to_string(),
        rows: vec![
            paired("Capacity (m³)", r.capacity_m3, 1)?,
            unchanged("Material Density (kg/m³)", format!("{:.0}", r.material_density)),
            paired("Bucket Payload (kg)", r.bucket_payload_kg, 0)?,
            paired("Total Suspended Load (kg)", r.suspended_load_kg, 0)?,
        ],
    };

    let mut truck_payload = paired("Dump Truck Payload (kg)", r.truck_payload_kg, 0)?;
    if comparison.old_match.is_adjusted() {
        truck_payload.old.push('*');
    }
    if comparison.new_match.is_adjusted() {
        truck_payload.new.push('*');
    }
    let mut swings_per_hour = paired("Swings/Hour", r.swings_per_hour, 0)?;
    swings_per_hour.difference = "-".to_string();
    swings_per_hour.percent = "-".to_string();

    let loadout = ReportSection {
        title: "Loadout Productivity & Truck Pass Simulation".to_string(),
        rows: vec![
            truck_payload,
            paired("Avg No. Swings to Fill Truck", r.swings_to_fill, 1)?,
            paired("Time to Fill Truck (min)", r.time_to_fill_min, 1)?,
            paired("Avg Trucks/Hour @ 75% eff", r.trucks_per_hour, 1)?,
            swings_per_hour,
            paired("Tonnes/Hour", r.truck_tonnage_per_hour, 0)?,
        ],
    };

    let daily = ReportSection {
        title: "1000 Swings Side-by-Side Simulation".to_string(),
        rows: vec![
            unchanged("Number of Swings", format!("{:.0}", r.daily.swings.old)),
            paired("Total Volume (m³)", r.daily.volume_m3, 0)?,
            paired("Total Tonnes", r.daily.tonnage, 0)?,
            paired("Total Trucks", r.daily.trucks, 0)?,
        ],
    };

    let improved = ReportSection {
        title: "10% Improved Cycle Time Simulation".to_string(),
        rows: vec![
            paired("Number of Swings", r.improved_cycle.swings, 0)?,
            paired("Total Volume (m³)", r.improved_cycle.volume_m3, 0)?,
            paired("Total Tonnes", r.improved_cycle.tonnage, 0)?,
            paired("Total Trucks", r.improved_cycle.trucks, 0)?,
        ],
    };

    Ok(vec![bucket, loadout, daily, improved])
}

/// Explanatory notes printed under the tables
pub fn footnotes(comparison: &Comparison, truck_label: Option<&str>) -> Vec<String> {
    let mut notes = Vec::new();
    if comparison.new_match.is_adjusted() {
        notes.push(format!(
            "*Dump truck fill factor of {:.1}% applied for selected bucket pass matching.",
            comparison.new_match.fill_factor_percent()
        ));
    }
    if comparison.old_match.is_adjusted() {
        notes.push(format!(
            "*Dump truck fill factor of {:.1}% applied for current bucket pass matching.",
            comparison.old_match.fill_factor_percent()
        ));
    }

    let input = &comparison.input;
    notes.push(format!(
        "Calculations based on the {}, with a material density of {:.0}kg/m³.",
        input.configuration, input.material_density
    ));
    notes.push(format!(
        "Safe working load {:.0}kg, total suspended load with {} {:.0}kg.",
        comparison.swl.swl_kg, comparison.optimal.bucket.name, comparison.optimal.total_suspended_load_kg
    ));
    match truck_label {
        Some(label) => notes.push(format!(
            "Dump truck: {}, rated payload = {:.0}kg",
            label, comparison.report.rated_payload_kg
        )),
        None => notes.push(format!(
            "Dump truck rated payload = {:.0}kg",
            comparison.report.rated_payload_kg
        )),
    }
    notes
}
