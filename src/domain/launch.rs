// Launch record domain models
use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;

/// Binary launch outcome as recorded in the `class` column
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Outcome {
    Failure,
    Success,
}

impl Outcome {
    pub fn from_class(class: u8) -> Option<Self> {
        match class {
            0 => Some(Outcome::Failure),
            1 => Some(Outcome::Success),
            _ => None,
        }
    }

    pub fn class(self) -> u8 {
        match self {
            Outcome::Failure => 0,
            Outcome::Success => 1,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.class())
    }
}

impl Serialize for Outcome {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.class())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LaunchRecord {
    pub launch_site: String,
    pub payload_mass_kg: f64,
    pub outcome: Outcome,
    pub booster_category: String,
}

impl LaunchRecord {
    pub fn new(
        launch_site: impl Into<String>,
        payload_mass_kg: f64,
        outcome: Outcome,
        booster_category: impl Into<String>,
    ) -> Self {
        Self {
            launch_site: launch_site.into(),
            payload_mass_kg,
            outcome,
            booster_category: booster_category.into(),
        }
    }
}

/// Observed payload mass range of the whole dataset
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PayloadBounds {
    pub min: f64,
    pub max: f64,
}

/// The full dataset. Built once at startup and only ever read afterwards.
#[derive(Debug, Clone)]
pub struct LaunchTable {
    records: Vec<LaunchRecord>,
    bounds: PayloadBounds,
}

impl LaunchTable {
    /// Returns `None` for an empty record set, which has no payload bounds.
    pub fn new(records: Vec<LaunchRecord>) -> Option<Self> {
        let bounds = records
            .iter()
            .map(|r| r.payload_mass_kg)
            .fold(None::<PayloadBounds>, |acc, mass| {
                Some(match acc {
                    None => PayloadBounds { min: mass, max: mass },
                    Some(b) => PayloadBounds {
                        min: b.min.min(mass),
                        max: b.max.max(mass),
                    },
                })
            })?;

        Some(Self { records, bounds })
    }

    pub fn records(&self) -> &[LaunchRecord] {
        &self.records
    }

    pub fn bounds(&self) -> PayloadBounds {
        self.bounds
    }

    /// Distinct launch sites, sorted by name
    pub fn sites(&self) -> Vec<String> {
        self.records
            .iter()
            .map(|r| r.launch_site.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    pub fn has_site(&self, site: &str) -> bool {
        self.records.iter().any(|r| r.launch_site == site)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    /// Three-row table used across the aggregation tests
    pub fn sample_table() -> LaunchTable {
        LaunchTable::new(vec![
            LaunchRecord::new("A", 500.0, Outcome::Success, "v1"),
            LaunchRecord::new("A", 1500.0, Outcome::Failure, "v1"),
            LaunchRecord::new("B", 800.0, Outcome::Success, "v2"),
        ])
        .expect("sample table is not empty")
    }
}
