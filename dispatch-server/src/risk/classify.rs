//! Risk banding and delay estimation.

use std::fmt;
use std::ops::RangeInclusive;

use rand::Rng;
use serde::Serialize;

use super::features::FeatureVector;

/// Lower edge of the MEDIUM band.
pub const MEDIUM_THRESHOLD: f64 = 0.3;

/// Lower edge of the HIGH band.
pub const HIGH_THRESHOLD: f64 = 0.6;

pub const FACTOR_PEAK_HOURS: &str = "Peak hours";
pub const FACTOR_ADVERSE_WEATHER: &str = "Adverse weather";
pub const FACTOR_WEEKEND: &str = "Weekend traffic";
pub const FACTOR_NORMAL: &str = "Normal conditions";

/// Discrete summary of a delay probability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskBand {
    Low,
    Medium,
    High,
}

impl RiskBand {
    /// Band for a probability. Each threshold belongs to the band above it.
    pub fn from_probability(probability: f64) -> Self {
        if probability >= HIGH_THRESHOLD {
            RiskBand::High
        } else if probability >= MEDIUM_THRESHOLD {
            RiskBand::Medium
        } else {
            RiskBand::Low
        }
    }

    /// Plausible delay in minutes for this band, inclusive.
    pub fn delay_range(self) -> RangeInclusive<u32> {
        match self {
            RiskBand::Low => 0..=10,
            RiskBand::Medium => 10..=30,
            RiskBand::High => 30..=90,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RiskBand::Low => "LOW",
            RiskBand::Medium => "MEDIUM",
            RiskBand::High => "HIGH",
        }
    }
}

impl fmt::Display for RiskBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Band, delay estimate and contributing factors for one prediction.
#[derive(Debug, Clone, PartialEq)]
pub struct RiskAssessment {
    pub band: RiskBand,
    pub delay_minutes: u32,
    pub factors: Vec<String>,
}

/// Classify a probability and explain it in terms of the features.
///
/// The delay estimate is drawn uniformly from the band's range using `rng`,
/// so a seeded generator gives reproducible output.
pub fn classify<R: Rng>(
    probability: f64,
    features: &FeatureVector,
    rng: &mut R,
) -> RiskAssessment {
    let band = RiskBand::from_probability(probability);

    RiskAssessment {
        band,
        delay_minutes: rng.gen_range(band.delay_range()),
        factors: factors(features),
    }
}

/// Human-readable conditions behind a score. Never empty.
pub fn factors(features: &FeatureVector) -> Vec<String> {
    let mut factors = Vec::new();

    if features.is_peak_hour() {
        factors.push(FACTOR_PEAK_HOURS.to_string());
    }
    if features.is_adverse_weather() {
        factors.push(FACTOR_ADVERSE_WEATHER.to_string());
    }
    if features.is_weekend() {
        factors.push(FACTOR_WEEKEND.to_string());
    }
    if factors.is_empty() {
        factors.push(FACTOR_NORMAL.to_string());
    }

    factors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::risk::encode;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn band_thresholds() {
        assert_eq!(RiskBand::from_probability(0.0), RiskBand::Low);
        assert_eq!(RiskBand::from_probability(0.2999), RiskBand::Low);
        assert_eq!(RiskBand::from_probability(0.3), RiskBand::Medium);
        assert_eq!(RiskBand::from_probability(0.5999), RiskBand::Medium);
        assert_eq!(RiskBand::from_probability(0.6), RiskBand::High);
        assert_eq!(RiskBand::from_probability(1.0), RiskBand::High);
    }

    #[test]
    fn band_serializes_uppercase() {
        assert_eq!(serde_json::to_string(&RiskBand::Medium).unwrap(), "\"MEDIUM\"");
        assert_eq!(RiskBand::High.to_string(), "HIGH");
    }

    #[test]
    fn all_factors() {
        let f = encode("08:00", 6, "storm", "Mumbai");
        assert_eq!(
            factors(&f),
            vec!["Peak hours", "Adverse weather", "Weekend traffic"]
        );
    }

    #[test]
    fn normal_conditions_fallback() {
        let f = encode("13:00", 2, "clear", "Mumbai");
        assert_eq!(factors(&f), vec!["Normal conditions"]);
    }

    #[test]
    fn seeded_classification_is_reproducible() {
        let f = encode("08:00", 2, "rain", "Pune");
        let a = classify(0.7, &f, &mut ChaCha8Rng::seed_from_u64(7));
        let b = classify(0.7, &f, &mut ChaCha8Rng::seed_from_u64(7));
        assert_eq!(a, b);
        assert_eq!(a.band, RiskBand::High);
    }

    #[test]
    fn delay_minutes_stay_in_band() {
        let f = encode("13:00", 2, "clear", "Pune");
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        for (p, band) in [(0.1, RiskBand::Low), (0.45, RiskBand::Medium), (0.9, RiskBand::High)] {
            for _ in 0..100 {
                let a = classify(p, &f, &mut rng);
                assert_eq!(a.band, band);
                assert!(band.delay_range().contains(&a.delay_minutes));
            }
        }
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Banding is monotone in probability.
        #[test]
        fn monotone(a in 0.0f64..=1.0, b in 0.0f64..=1.0) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(RiskBand::from_probability(lo) <= RiskBand::from_probability(hi));
        }

        /// Factors are never empty.
        #[test]
        fn factors_non_empty(hour in 0u8..24, day in 0u8..7, weather in 0u8..4) {
            let f = FeatureVector { hour, day_of_week: day, weather_code: weather, station_code: 0 };
            prop_assert!(!factors(&f).is_empty());
        }
    }
}
