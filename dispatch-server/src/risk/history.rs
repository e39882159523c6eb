//! Historical delay records used for offline training.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use super::error::ModelError;
use super::features::encode;
use super::trained::LabeledExample;

/// One observed train run, as stored in a history CSV.
///
/// Expected header:
/// `current_time,station,weather_condition,day_of_week,delayed`
#[derive(Debug, Clone, Deserialize)]
pub struct DelayRecord {
    pub current_time: String,
    pub station: String,
    #[serde(default = "default_weather")]
    pub weather_condition: String,
    #[serde(default = "default_day")]
    pub day_of_week: u8,
    pub delayed: bool,
}

fn default_weather() -> String {
    "clear".to_string()
}

fn default_day() -> u8 {
    1
}

impl DelayRecord {
    /// Encode through the same path live requests take.
    pub fn to_example(&self) -> LabeledExample {
        LabeledExample {
            features: encode(
                &self.current_time,
                self.day_of_week,
                &self.weather_condition,
                &self.station,
            ),
            delayed: self.delayed,
        }
    }
}

/// Read labeled examples from any CSV source.
pub fn read_history<R: Read>(reader: R) -> Result<Vec<LabeledExample>, ModelError> {
    let mut csv = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);

    csv.deserialize::<DelayRecord>()
        .map(|row| Ok(row?.to_example()))
        .collect()
}

/// Read labeled examples from a CSV file.
pub fn load_history(path: impl AsRef<Path>) -> Result<Vec<LabeledExample>, ModelError> {
    let file = std::fs::File::open(path)?;
    read_history(file)
}
