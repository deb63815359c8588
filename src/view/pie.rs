//! Success Pie Chart
//!
//! With the "All" sentinel selected, each site becomes a slice sized by its
//! share of all success-labeled launches. With a single site selected, the
//! slices are the per-outcome-class record counts at that site.

use super::figure::PieFigure;
use crate::dataset::{LaunchDataset, ALL_SITES};
use std::collections::BTreeMap;

/// Compute the pie figure for the current dropdown selection.
///
/// Unknown site names yield a figure with zero slices, as does an "All"
/// selection over a dataset with no success-labeled records (rather than
/// NaN proportions from a zero denominator).
pub fn success_pie(dataset: &LaunchDataset, selected_site: &str) -> PieFigure {
    if selected_site == ALL_SITES {
        all_sites_pie(dataset)
    } else {
        single_site_pie(dataset, selected_site)
    }
}

fn all_sites_pie(dataset: &LaunchDataset) -> PieFigure {
    let mut site_successes: BTreeMap<&str, usize> = BTreeMap::new();
    for record in dataset.records().iter().filter(|r| r.is_success()) {
        *site_successes.entry(record.launch_site.as_str()).or_insert(0) += 1;
    }
    let total: usize = site_successes.values().sum();

    let mut labels = Vec::with_capacity(site_successes.len());
    let mut values = Vec::with_capacity(site_successes.len());
    if total > 0 {
        for (site, count) in site_successes {
            labels.push(site.to_string());
            values.push(count as f64 / total as f64);
        }
    }

    PieFigure {
        title: "Success launch all site(s)".to_string(),
        labels,
        values,
    }
}

fn single_site_pie(dataset: &LaunchDataset, site: &str) -> PieFigure {
    let mut class_counts = [0usize; 2];
    for record in dataset.records().iter().filter(|r| r.launch_site == site) {
        class_counts[record.outcome_class as usize] += 1;
    }

    let mut labels = Vec::new();
    let mut values = Vec::new();
    for (class, label) in [(0usize, "Success"), (1, "Failure")] {
        if class_counts[class] > 0 {
            labels.push(label.to_string());
            values.push(class_counts[class] as f64);
        }
    }

    PieFigure {
        title: format!("Total success launches for site {}", site),
        labels,
        values,
    }
}
