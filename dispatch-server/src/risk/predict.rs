//! The delay-prediction pipeline: encode, score, classify.

use rand::Rng;
use tracing::debug;

use super::classify::{RiskBand, classify};
use super::features::encode;
use super::model::DelayRiskModel;

/// Raw conditions for one train.
#[derive(Debug, Clone)]
pub struct DelayQuery<'a> {
    pub train_id: &'a str,
    pub current_time: &'a str,
    pub station: &'a str,
    pub weather_condition: &'a str,
    pub day_of_week: u8,
}

/// Outcome of a delay prediction.
#[derive(Debug, Clone, PartialEq)]
pub struct DelayPrediction {
    pub train_id: String,

    /// Unrounded model output in [0, 1].
    pub probability: f64,

    pub delay_minutes: u32,
    pub band: RiskBand,

    /// Conditions behind the score, never empty.
    pub factors: Vec<String>,
}

/// Run a query through the model.
///
/// Never fails: malformed fields degrade to defaults during encoding.
pub fn predict_delay<M, R>(model: &M, query: &DelayQuery<'_>, rng: &mut R) -> DelayPrediction
where
    M: DelayRiskModel + ?Sized,
    R: Rng,
{
    let features = encode(
        query.current_time,
        query.day_of_week,
        query.weather_condition,
        query.station,
    );
    let probability = model.predict(&features).clamp(0.0, 1.0);
    let assessment = classify(probability, &features, rng);

    debug!(
        train_id = query.train_id,
        model = model.name(),
        ?features,
        probability,
        band = %assessment.band,
        "scored delay risk"
    );

    DelayPrediction {
        train_id: query.train_id.to_string(),
        probability,
        delay_minutes: assessment.delay_minutes,
        band: assessment.band,
        factors: assessment.factors,
    }
}
