//! Dataset Loader
//!
//! One-shot fetch and parse of the launch records CSV. The remote resource
//! is ISO-8859-1 encoded; `reqwest` handles the transcoding. A local-file
//! path exists for offline runs and tests, sharing the same parse path.

use super::model::{LaunchDataset, LaunchRecord};
use super::{DatasetError, DatasetResult};
use std::path::Path;

/// Headers the CSV must carry; extra columns are ignored.
const REQUIRED_COLUMNS: [&str; 4] = [
    "Launch Site",
    "Payload Mass (kg)",
    "class",
    "Booster Version Category",
];

/// Fetch the launch records CSV from `url` and parse it.
pub async fn fetch_dataset(url: &str) -> DatasetResult<LaunchDataset> {
    tracing::info!("Fetching launch dataset from {}", url);

    let response = reqwest::get(url).await?;
    if !response.status().is_success() {
        return Err(DatasetError::Status(response.status()));
    }

    let body = response.text_with_charset("ISO-8859-1").await?;
    parse_csv(&body)
}

/// Load the launch records CSV from a local file.
pub fn load_csv_file(path: &Path) -> DatasetResult<LaunchDataset> {
    let bytes = std::fs::read(path).map_err(|e| DatasetError::Io {
        path: path.to_path_buf(),
        error: e.to_string(),
    })?;
    parse_csv(&String::from_utf8_lossy(&bytes))
}

/// Parse CSV text into a [`LaunchDataset`].
///
/// Validates that every required column is present before deserializing so
/// schema mismatches surface as one clear error instead of a per-row parse
/// failure.
pub fn parse_csv(data: &str) -> DatasetResult<LaunchDataset> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(data.as_bytes());

    let headers = reader.headers()?.clone();
    for required in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == required) {
            return Err(DatasetError::Schema(format!(
                "missing column {:?}",
                required
            )));
        }
    }

    let mut records: Vec<LaunchRecord> = Vec::new();
    for result in reader.deserialize() {
        records.push(result?);
    }

    LaunchDataset::from_records(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_CSV: &str = "\
Flight Number,Launch Site,class,Payload Mass (kg),Booster Version,Booster Version Category
1,CCAFS LC-40,0,0,F9 v1.0  B0003,v1.0
2,CCAFS LC-40,1,525,F9 v1.0  B0005,v1.0
3,KSC LC-39A,1,2490,F9 FT B1031.1,FT
4,VAFB SLC-4E,0,9600,F9 FT B1038.1,FT
";

    #[test]
    fn test_parse_sample_csv() {
        let dataset = parse_csv(SAMPLE_CSV).unwrap();

        assert_eq!(dataset.len(), 4);
        assert_eq!(
            dataset.sites(),
            &["All", "CCAFS LC-40", "KSC LC-39A", "VAFB SLC-4E"]
        );
        assert_eq!(dataset.payload_bounds(), (0.0, 9600.0));

        let first = &dataset.records()[0];
        assert_eq!(first.launch_site, "CCAFS LC-40");
        assert_eq!(first.outcome_class, 0);
        assert_eq!(first.booster_version_category, "v1.0");
    }

    #[test]
    fn test_missing_column_is_schema_error() {
        let csv_data = "\
Flight Number,Launch Site,class
1,CCAFS LC-40,0
";
        let result = parse_csv(csv_data);
        assert!(matches!(result, Err(DatasetError::Schema(_))));
    }

    #[test]
    fn test_header_only_csv_is_empty() {
        let csv_data =
            "Flight Number,Launch Site,class,Payload Mass (kg),Booster Version,Booster Version Category\n";
        let result = parse_csv(csv_data);
        assert!(matches!(result, Err(DatasetError::Empty)));
    }

    #[test]
    fn test_unparseable_payload_is_csv_error() {
        let csv_data = "\
Launch Site,class,Payload Mass (kg),Booster Version Category
CCAFS LC-40,1,not-a-number,v1.0
";
        let result = parse_csv(csv_data);
        assert!(matches!(result, Err(DatasetError::Csv(_))));
    }

    #[test]
    fn test_load_csv_file() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE_CSV.as_bytes()).unwrap();

        let dataset = load_csv_file(file.path()).unwrap();
        assert_eq!(dataset.len(), 4);
    }

    #[test]
    fn test_load_missing_file() {
        let result = load_csv_file(Path::new("/nonexistent/launches.csv"));
        assert!(matches!(result, Err(DatasetError::Io { .. })));
    }
}
