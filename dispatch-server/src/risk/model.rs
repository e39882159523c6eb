//! Delay probability models.

use super::features::FeatureVector;
use super::trained::TrainedModel;

/// Baseline delay probability before any condition applies.
pub const BASE_PROBABILITY: f64 = 0.15;

/// Upper bound on any rule-based probability. A delay is never reported
/// as certain.
pub const MAX_PROBABILITY: f64 = 0.95;

const PEAK_HOUR_PENALTY: f64 = 0.25;
const WEEKEND_RELIEF: f64 = 0.05;
const ADVERSE_WEATHER_PENALTY: f64 = 0.30;

/// Anything that can turn a feature vector into a delay probability.
///
/// This abstraction lets the pipeline be tested with stub models.
pub trait DelayRiskModel {
    /// Probability in [0, 1] that the train will be delayed.
    fn predict(&self, features: &FeatureVector) -> f64;

    /// Short identifier used in logs.
    fn name(&self) -> &'static str;
}

/// Deterministic scoring from fixed operating rules.
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleBasedModel;

impl DelayRiskModel for RuleBasedModel {
    fn predict(&self, features: &FeatureVector) -> f64 {
        let mut probability = BASE_PROBABILITY;

        if features.is_peak_hour() {
            probability += PEAK_HOUR_PENALTY;
        }
        if features.is_weekend() {
            probability -= WEEKEND_RELIEF;
        }
        if features.weather_code > 1 {
            probability += ADVERSE_WEATHER_PENALTY;
        }

        probability.min(MAX_PROBABILITY)
    }

    fn name(&self) -> &'static str {
        "rule-based"
    }
}

/// The model selected at startup.
///
/// Selection is explicit: the server never swaps a trained model for the
/// rule-based one behind the caller's back.
#[derive(Debug, Clone)]
pub enum DelayModel {
    RuleBased(RuleBasedModel),
    Trained(TrainedModel),
}

impl DelayModel {
    /// Whether a trained classifier is in use.
    pub fn is_trained(&self) -> bool {
        matches!(self, DelayModel::Trained(_))
    }
}

impl Default for DelayModel {
    fn default() -> Self {
        DelayModel::RuleBased(RuleBasedModel)
    }
}

impl From<TrainedModel> for DelayModel {
    fn from(model: TrainedModel) -> Self {
        DelayModel::Trained(model)
    }
}

impl DelayRiskModel for DelayModel {
    fn predict(&self, features: &FeatureVector) -> f64 {
        match self {
            DelayModel::RuleBased(m) => m.predict(features),
            DelayModel::Trained(m) => m.predict(features),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            DelayModel::RuleBased(m) => m.name(),
            DelayModel::Trained(m) => m.name(),
        }
    }
}
