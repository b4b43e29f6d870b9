// CSV launch repository implementation
use crate::application::launch_repository::{DatasetError, LaunchRepository};
use crate::domain::launch::{LaunchRecord, LaunchTable, Outcome};
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

const LAUNCH_SITE: &str = "Launch Site";
const PAYLOAD_MASS: &str = "Payload Mass (kg)";
const CLASS: &str = "class";
const BOOSTER_CATEGORY: &str = "Booster Version Category";

const REQUIRED_COLUMNS: [&str; 4] = [LAUNCH_SITE, PAYLOAD_MASS, CLASS, BOOSTER_CATEGORY];

#[derive(Debug, Clone)]
pub struct CsvLaunchRepository {
    path: PathBuf,
}

/// One CSV row; columns other than these are ignored
#[derive(Debug, Deserialize)]
struct LaunchRow {
    #[serde(rename = "Launch Site")]
    launch_site: String,
    #[serde(rename = "Payload Mass (kg)")]
    payload_mass_kg: f64,
    #[serde(rename = "class")]
    class: u8,
    #[serde(rename = "Booster Version Category")]
    booster_category: String,
}

impl CsvLaunchRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn parse<R: Read>(source: R) -> Result<LaunchTable, DatasetError> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(source);

        let headers = reader.headers()?.clone();
        for column in REQUIRED_COLUMNS {
            if !headers.iter().any(|h| h == column) {
                return Err(DatasetError::MissingColumn(column));
            }
        }

        let mut records = Vec::new();
        for result in reader.records() {
            let record = result?;
            let row: LaunchRow = record.deserialize(Some(&headers))?;
            let line = record.position().map_or(0, |p| p.line());
            records.push(Self::to_record(row, line)?);
        }

        LaunchTable::new(records).ok_or(DatasetError::Empty)
    }

    fn to_record(row: LaunchRow, line: u64) -> Result<LaunchRecord, DatasetError> {
        if !row.payload_mass_kg.is_finite() || row.payload_mass_kg < 0.0 {
            return Err(DatasetError::InvalidValue {
                row: line,
                column: PAYLOAD_MASS,
                value: row.payload_mass_kg.to_string(),
            });
        }

        let outcome = Outcome::from_class(row.class).ok_or_else(|| DatasetError::InvalidValue {
            row: line,
            column: CLASS,
            value: row.class.to_string(),
        })?;

        Ok(LaunchRecord::new(
            row.launch_site,
            row.payload_mass_kg,
            outcome,
            row.booster_category,
        ))
    }
}

impl LaunchRepository for CsvLaunchRepository {
    fn load_launches(&self) -> Result<LaunchTable, DatasetError> {
        let file = File::open(&self.path).map_err(|source| DatasetError::Io {
            path: self.path.display().to_string(),
            source,
        })?;

        let table = Self::parse(file)?;
        tracing::debug!(
            "Parsed {} launch records from {}",
            table.len(),
            self.path.display()
        );
        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::launch::PayloadBounds;
    use std::io::Write;

    const DATASET: &str = "\
,Flight Number,Launch Site,class,Payload Mass (kg),Booster Version,Booster Version Category
0,1,CCAFS LC-40,0,0.0,F9 v1.0  B0003,v1.0
1,2,CCAFS LC-40,0,525.0,F9 v1.0  B0005,v1.0
2,3,KSC LC-39A,1,2490.0,F9 FT B1031.1,FT
3,4,VAFB SLC-4E,1,9600.0,F9 B4 B1041.1,B4
";

    #[test]
    fn test_parse_reads_required_columns() {
        let table = CsvLaunchRepository::parse(DATASET.as_bytes()).unwrap();

        assert_eq!(table.len(), 4);
        assert_eq!(table.bounds(), PayloadBounds { min: 0.0, max: 9600.0 });
        assert_eq!(
            table.records()[2],
            LaunchRecord::new("KSC LC-39A", 2490.0, Outcome::Success, "FT")
        );
        assert_eq!(table.sites(), vec!["CCAFS LC-40", "KSC LC-39A", "VAFB SLC-4E"]);
    }

    #[test]
    fn test_missing_column_is_rejected() {
        let data = "Launch Site,class,Booster Version Category\nCCAFS LC-40,1,FT\n";
        let err = CsvLaunchRepository::parse(data.as_bytes()).unwrap_err();
        assert!(matches!(err, DatasetError::MissingColumn("Payload Mass (kg)")));
    }

    #[test]
    fn test_class_outside_binary_is_rejected() {
        let data = "Launch Site,class,Payload Mass (kg),Booster Version Category\nCCAFS LC-40,3,100,FT\n";
        let err = CsvLaunchRepository::parse(data.as_bytes()).unwrap_err();
        assert!(matches!(err, DatasetError::InvalidValue { column: "class", .. }));
    }

    #[test]
    fn test_negative_payload_is_rejected() {
        let data = "Launch Site,class,Payload Mass (kg),Booster Version Category\nCCAFS LC-40,1,-5,FT\n";
        let err = CsvLaunchRepository::parse(data.as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            DatasetError::InvalidValue { column: "Payload Mass (kg)", row: 2, .. }
        ));
    }

    #[test]
    fn test_unparseable_payload_is_rejected() {
        let data = "Launch Site,class,Payload Mass (kg),Booster Version Category\nCCAFS LC-40,1,heavy,FT\n";
        let err = CsvLaunchRepository::parse(data.as_bytes()).unwrap_err();
        assert!(matches!(err, DatasetError::Csv(_)));
    }

    #[test]
    fn test_header_only_dataset_is_empty() {
        let data = "Launch Site,class,Payload Mass (kg),Booster Version Category\n";
        let err = CsvLaunchRepository::parse(data.as_bytes()).unwrap_err();
        assert!(matches!(err, DatasetError::Empty));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(DATASET.as_bytes()).unwrap();

        let repository = CsvLaunchRepository::new(file.path());
        let table = repository.load_launches().unwrap();
        assert_eq!(table.len(), 4);
    }

    #[test]
    fn test_missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let repository = CsvLaunchRepository::new(dir.path().join("absent.csv"));

        let err = repository.load_launches().unwrap_err();
        assert!(matches!(err, DatasetError::Io { .. }));
    }
}
