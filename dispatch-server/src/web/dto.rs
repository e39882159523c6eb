//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::planner::{AlternativeTrain, RerouteRecommendation};
use crate::risk::{DelayPrediction, RiskBand};
use crate::timetable::TrainRecord;

/// Request to predict a train's delay.
#[derive(Debug, Deserialize)]
pub struct PredictDelayRequest {
    /// Train identifier, echoed back
    pub train_id: String,

    /// Time in HH:MM format
    pub current_time: String,

    /// Station the train is at
    pub station: String,

    /// Weather label (defaults to "clear")
    pub weather_condition: Option<String>,

    /// Day of week, 0 = Monday (defaults to 1)
    pub day_of_week: Option<u8>,
}

/// Delay prediction response.
#[derive(Debug, Serialize, Deserialize)]
pub struct PredictDelayResponse {
    pub train_id: String,

    /// Probability of delay, rounded to 3 decimals
    pub delay_probability: f64,

    pub predicted_delay_minutes: u32,

    /// LOW, MEDIUM or HIGH
    pub risk_level: String,

    pub factors: Vec<String>,
}

/// Request to reroute a delayed train.
#[derive(Debug, Deserialize)]
pub struct RerouteRequest {
    pub delayed_train_id: String,
    pub current_station: String,
    pub destination_station: String,
    pub delay_minutes: u32,

    /// Accepted for compatibility; not used by the planner
    #[serde(default)]
    pub available_routes: Option<Vec<String>>,

    /// Stations the new route must avoid
    #[serde(default)]
    pub blocked_stations: Option<Vec<String>>,
}

/// An alternative train offered to passengers.
#[derive(Debug, Serialize, Deserialize)]
pub struct AlternativeTrainResult {
    pub train_id: String,

    /// Departure in HH:MM format
    pub departure_time: String,

    pub available_seats: u32,

    /// First stations of the route, or "Direct"
    pub route: String,
}

/// Reroute recommendation response.
#[derive(Debug, Serialize, Deserialize)]
pub struct RerouteResponse {
    pub delayed_train_id: String,

    /// Action tier and directive, e.g. "HOLD - Wait for track clearance"
    pub recommended_action: String,

    pub alternative_trains: Vec<AlternativeTrainResult>,

    /// Planned path, or [current, destination] when none was found
    pub reroute_path: Vec<String>,

    /// Minutes until the schedule recovers
    pub estimated_recovery_time: u32,

    /// Confidence in [0, 1], rounded to 2 decimals
    pub confidence_score: f64,
}

/// Timetable listing response.
#[derive(Debug, Serialize)]
pub struct TrainsResponse {
    pub trains: Vec<TrainRecord>,
}

/// Service banner.
#[derive(Debug, Serialize)]
pub struct RootResponse {
    pub message: &'static str,
    pub status: &'static str,
    pub endpoints: Vec<&'static str>,
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

// Conversion implementations

impl PredictDelayResponse {
    /// Create from a domain prediction.
    pub fn from_prediction(prediction: DelayPrediction) -> Self {
        Self {
            train_id: prediction.train_id,
            delay_probability: round_to(prediction.probability, 3),
            predicted_delay_minutes: prediction.delay_minutes,
            risk_level: risk_label(prediction.band),
            factors: prediction.factors,
        }
    }
}

impl RerouteResponse {
    /// Create from a domain recommendation.
    pub fn from_recommendation(rec: RerouteRecommendation) -> Self {
        Self {
            delayed_train_id: rec.delayed_train_id,
            recommended_action: rec.action.label(),
            alternative_trains: rec
                .alternatives
                .iter()
                .map(AlternativeTrainResult::from_alternative)
                .collect(),
            reroute_path: rec.path,
            estimated_recovery_time: rec.recovery_minutes,
            confidence_score: round_to(rec.confidence, 2),
        }
    }
}

impl AlternativeTrainResult {
    /// Create from a domain alternative.
    pub fn from_alternative(alt: &AlternativeTrain) -> Self {
        Self {
            train_id: alt.train_id.clone(),
            departure_time: alt.departure_time.format("%H:%M").to_string(),
            available_seats: alt.available_seats,
            route: alt.route.clone(),
        }
    }
}

fn risk_label(band: RiskBand) -> String {
    band.as_str().to_string()
}

/// Round half away from zero to `places` decimals.
fn round_to(value: f64, places: i32) -> f64 {
    let scale = 10f64.powi(places);
    (value * scale).round() / scale
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::planner::DispatchAction;
    use chrono::NaiveTime;

    #[test]
    fn rounding() {
        assert_eq!(round_to(0.64999, 3), 0.65);
        assert_eq!(round_to(0.1234, 3), 0.123);
        assert_eq!(round_to(0.849, 2), 0.85);
        assert_eq!(round_to(0.7, 2), 0.7);
    }

    #[test]
    fn prediction_response() {
        let resp = PredictDelayResponse::from_prediction(DelayPrediction {
            train_id: "12951".into(),
            probability: 0.650_000_000_1,
            delay_minutes: 42,
            band: RiskBand::High,
            factors: vec!["Peak hours".into()],
        });

        assert_eq!(resp.delay_probability, 0.65);
        assert_eq!(resp.risk_level, "HIGH");

        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["predicted_delay_minutes"], 42);
        assert_eq!(json["factors"][0], "Peak hours");
    }

    #[test]
    fn reroute_response() {
        let resp = RerouteResponse::from_recommendation(RerouteRecommendation {
            delayed_train_id: "12137".into(),
            action: DispatchAction::Hold,
            alternatives: vec![AlternativeTrain {
                train_id: "ALT4321".into(),
                departure_time: NaiveTime::from_hms_opt(7, 5, 0).unwrap(),
                available_seats: 120,
                route: "Direct".into(),
            }],
            path: vec!["Mumbai".into(), "Delhi".into()],
            route_found: false,
            recovery_minutes: 15,
            confidence: 0.45,
        });

        assert_eq!(resp.recommended_action, "HOLD - Wait for track clearance");
        assert_eq!(resp.alternative_trains[0].departure_time, "07:05");
        assert_eq!(resp.confidence_score, 0.45);
        assert_eq!(resp.reroute_path, ["Mumbai", "Delhi"]);
    }
}
