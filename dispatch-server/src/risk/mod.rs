//! Delay-risk estimation.
//!
//! A request's raw conditions are encoded into a [`FeatureVector`], scored by
//! a [`DelayRiskModel`], and banded into a [`RiskAssessment`]. The model is
//! either the fixed rule set or a classifier trained offline from history.

mod classify;
mod error;
mod features;
mod history;
mod model;
mod predict;
mod trained;

pub use classify::{
    FACTOR_ADVERSE_WEATHER, FACTOR_NORMAL, FACTOR_PEAK_HOURS, FACTOR_WEEKEND, RiskAssessment,
    RiskBand, classify, factors,
};
pub use error::ModelError;
pub use features::{FeatureVector, Weather, encode, parse_hour, station_code};
pub use history::{DelayRecord, load_history, read_history};
pub use model::{DelayModel, DelayRiskModel, MAX_PROBABILITY, RuleBasedModel};
pub use predict::{DelayPrediction, DelayQuery, predict_delay};
pub use trained::{LabeledExample, TrainOptions, TrainedModel};
