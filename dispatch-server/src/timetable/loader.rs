//! Timetable loading.

use std::collections::HashSet;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use super::error::TimetableError;

/// Number of trains in the built-in sample.
const SAMPLE_SIZE: usize = 50;

/// Trains in the built-in sample that run late.
const SAMPLE_DELAYED: usize = 10;

const SAMPLE_SOURCES: [&str; 5] = ["Mumbai", "Delhi", "Bangalore", "Chennai", "Kolkata"];
const SAMPLE_DESTINATIONS: [&str; 5] = ["Pune", "Jaipur", "Mysore", "Hyderabad", "Patna"];

/// One scheduled train.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TrainRecord {
    pub train_id: String,
    pub train_name: String,
    pub source: String,
    pub destination: String,
    pub scheduled_departure: String,
    pub scheduled_arrival: String,
    pub platform: u32,
    pub status: String,
}

/// An immutable list of trains.
#[derive(Debug, Clone, Default)]
pub struct Timetable {
    trains: Vec<TrainRecord>,
}

impl Timetable {
    /// Wrap records, dropping exact duplicates but keeping order.
    pub fn new(trains: Vec<TrainRecord>) -> Self {
        let mut seen = HashSet::new();
        let trains = trains
            .into_iter()
            .filter(|t| seen.insert(t.clone()))
            .collect();
        Self { trains }
    }

    /// The built-in sample timetable.
    pub fn sample() -> Self {
        Self::new(sample_trains())
    }

    /// Read records from any CSV source with a header row.
    pub fn read<R: Read>(reader: R) -> Result<Self, TimetableError> {
        let mut csv = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let trains = csv
            .deserialize::<TrainRecord>()
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(trains))
    }

    /// Load from a CSV file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TimetableError> {
        let path = path.as_ref();
        let file = std::fs::File::open(path).map_err(|source| TimetableError::Open {
            path: path.display().to_string(),
            source,
        })?;
        let timetable = Self::read(file)?;
        info!(path = %path.display(), trains = timetable.len(), "loaded timetable");
        Ok(timetable)
    }

    /// Load from `path` if it exists, else use the built-in sample.
    pub fn load_or_sample(path: Option<&Path>) -> Result<Self, TimetableError> {
        match path {
            Some(p) if p.exists() => Self::load(p),
            _ => Ok(Self::sample()),
        }
    }

    /// Write as CSV with a header row.
    pub fn write_csv(&self, path: impl AsRef<Path>) -> Result<(), TimetableError> {
        let mut writer = csv::Writer::from_path(path)?;
        for train in &self.trains {
            writer.serialize(train)?;
        }
        writer.flush().map_err(csv::Error::from)?;
        Ok(())
    }

    pub fn trains(&self) -> &[TrainRecord] {
        &self.trains
    }

    pub fn len(&self) -> usize {
        self.trains.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trains.is_empty()
    }
}

/// Generate the deterministic sample of 50 trains.
pub fn sample_trains() -> Vec<TrainRecord> {
    (0..SAMPLE_SIZE)
        .map(|i| {
            let n = i + 1;
            let status = if i < SAMPLE_SIZE - SAMPLE_DELAYED {
                "On Time"
            } else {
                "Delayed"
            };
            TrainRecord {
                train_id: format!("TR{n:04}"),
                train_name: format!("Express {n}"),
                source: SAMPLE_SOURCES[i % SAMPLE_SOURCES.len()].to_string(),
                destination: SAMPLE_DESTINATIONS[i % SAMPLE_DESTINATIONS.len()].to_string(),
                scheduled_departure: format!("{:02}:{:02}", 7 + i % 12, i % 60),
                scheduled_arrival: format!("{:02}:{:02}", 10 + i % 12, i % 60),
                platform: (i % 10 + 1) as u32,
                status: status.to_string(),
            }
        })
        .collect()
}
