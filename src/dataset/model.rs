//! Launch Record Model
//!
//! One record per historical launch, plus the immutable dataset wrapper
//! holding the full record set and the lookups derived from it.

use super::{DatasetError, DatasetResult};
use serde::Deserialize;
use std::collections::BTreeSet;

/// Sentinel dropdown value meaning "no site filter applied".
pub const ALL_SITES: &str = "All";

/// Outcome class recorded for a successful launch.
pub const OUTCOME_SUCCESS: u8 = 1;

/// Outcome class recorded for a failed launch.
pub const OUTCOME_FAILURE: u8 = 0;

/// One historical launch, one CSV row.
///
/// Field names map to the CSV headers of the source dataset; columns not
/// listed here are ignored during deserialization.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LaunchRecord {
    /// Categorical launch site identifier
    #[serde(rename = "Launch Site")]
    pub launch_site: String,

    /// Payload weight in kilograms
    #[serde(rename = "Payload Mass (kg)")]
    pub payload_mass_kg: f64,

    /// Binary outcome flag: 1 = success, 0 = failure
    #[serde(rename = "class")]
    pub outcome_class: u8,

    /// Categorical booster family identifier
    #[serde(rename = "Booster Version Category")]
    pub booster_version_category: String,
}

impl LaunchRecord {
    /// Whether this launch is success-labeled
    pub fn is_success(&self) -> bool {
        self.outcome_class == OUTCOME_SUCCESS
    }
}

/// The full launch record set, loaded once and immutable for the process
/// lifetime, together with derived lookups:
///
/// - `sites`: the [`ALL_SITES`] sentinel followed by the distinct launch
///   sites in sorted order, ready for the dropdown.
/// - payload bounds across all records (informational; the dashboard slider
///   keeps its fixed domain).
#[derive(Debug, Clone)]
pub struct LaunchDataset {
    records: Vec<LaunchRecord>,
    sites: Vec<String>,
    payload_min: f64,
    payload_max: f64,
}

impl LaunchDataset {
    /// Build a dataset from parsed records, computing the derived lookups.
    ///
    /// Fails on an empty record set and on outcome classes outside {0, 1}.
    pub fn from_records(records: Vec<LaunchRecord>) -> DatasetResult<Self> {
        if records.is_empty() {
            return Err(DatasetError::Empty);
        }

        if let Some(bad) = records.iter().find(|r| r.outcome_class > OUTCOME_SUCCESS) {
            return Err(DatasetError::Schema(format!(
                "outcome class {} at site {} is not binary",
                bad.outcome_class, bad.launch_site
            )));
        }

        let distinct: BTreeSet<&str> = records.iter().map(|r| r.launch_site.as_str()).collect();
        let mut sites = Vec::with_capacity(distinct.len() + 1);
        sites.push(ALL_SITES.to_string());
        sites.extend(distinct.into_iter().map(String::from));

        let payload_min = records
            .iter()
            .map(|r| r.payload_mass_kg)
            .fold(f64::INFINITY, f64::min);
        let payload_max = records
            .iter()
            .map(|r| r.payload_mass_kg)
            .fold(f64::NEG_INFINITY, f64::max);

        Ok(Self {
            records,
            sites,
            payload_min,
            payload_max,
        })
    }

    /// All launch records, in file order
    pub fn records(&self) -> &[LaunchRecord] {
        &self.records
    }

    /// Dropdown options: the "All" sentinel followed by sorted distinct sites
    pub fn sites(&self) -> &[String] {
        &self.sites
    }

    /// Number of distinct launch sites (sentinel excluded)
    pub fn site_count(&self) -> usize {
        self.sites.len() - 1
    }

    /// Number of launch records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset holds no records (never true after construction)
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// (min, max) payload mass across all records
    pub fn payload_bounds(&self) -> (f64, f64) {
        (self.payload_min, self.payload_max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(site: &str, payload: f64, class: u8) -> LaunchRecord {
        LaunchRecord {
            launch_site: site.to_string(),
            payload_mass_kg: payload,
            outcome_class: class,
            booster_version_category: "FT".to_string(),
        }
    }

    #[test]
    fn test_sites_sentinel_first_then_sorted() {
        let dataset = LaunchDataset::from_records(vec![
            record("KSC LC-39A", 3000.0, 1),
            record("CCAFS LC-40", 500.0, 0),
            record("KSC LC-39A", 4500.0, 1),
            record("VAFB SLC-4E", 9600.0, 0),
        ])
        .unwrap();

        assert_eq!(
            dataset.sites(),
            &["All", "CCAFS LC-40", "KSC LC-39A", "VAFB SLC-4E"]
        );
        assert_eq!(dataset.site_count(), 3);
    }

    #[test]
    fn test_payload_bounds() {
        let dataset = LaunchDataset::from_records(vec![
            record("KSC LC-39A", 3000.0, 1),
            record("CCAFS LC-40", 500.0, 0),
            record("VAFB SLC-4E", 9600.0, 0),
        ])
        .unwrap();

        assert_eq!(dataset.payload_bounds(), (500.0, 9600.0));
    }

    #[test]
    fn test_empty_records_rejected() {
        let result = LaunchDataset::from_records(Vec::new());
        assert!(matches!(result, Err(DatasetError::Empty)));
    }

    #[test]
    fn test_non_binary_outcome_rejected() {
        let result = LaunchDataset::from_records(vec![record("KSC LC-39A", 3000.0, 2)]);
        assert!(matches!(result, Err(DatasetError::Schema(_))));
    }
}
