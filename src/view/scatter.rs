//! Payload Scatter Chart
//!
//! One mark per record surviving the payload-range and site filters:
//! x = payload mass, y = outcome class. Marks are grouped into one trace per
//! booster version category so the frontend colors by category.

use super::figure::{ScatterFigure, ScatterTrace};
use crate::dataset::{LaunchDataset, ALL_SITES};
use std::collections::BTreeMap;

/// Compute the scatter figure for the current dropdown and slider values.
///
/// `payload_range` bounds are inclusive. No aggregation happens here; every
/// surviving record contributes exactly one mark.
pub fn payload_scatter(
    dataset: &LaunchDataset,
    selected_site: &str,
    payload_range: (f64, f64),
) -> ScatterFigure {
    let (low, high) = payload_range;

    let matching = dataset.records().iter().filter(|r| {
        r.payload_mass_kg >= low
            && r.payload_mass_kg <= high
            && (selected_site == ALL_SITES || r.launch_site == selected_site)
    });

    let mut by_category: BTreeMap<&str, (Vec<f64>, Vec<u8>)> = BTreeMap::new();
    for record in matching {
        let (x, y) = by_category
            .entry(record.booster_version_category.as_str())
            .or_default();
        x.push(record.payload_mass_kg);
        y.push(record.outcome_class);
    }

    let traces = by_category
        .into_iter()
        .map(|(name, (x, y))| ScatterTrace {
            name: name.to_string(),
            x,
            y,
        })
        .collect();

    ScatterFigure {
        x_title: "Payload Mass (kg)".to_string(),
        y_title: "class".to_string(),
        traces,
    }
}
