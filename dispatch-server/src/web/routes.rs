//! HTTP route handlers.

use std::collections::BTreeSet;

use axum::body::Bytes;
use axum::{
    Json, Router,
    extract::State,
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::Local;
use serde::de::DeserializeOwned;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::planner::RerouteQuery;
use crate::risk::{DelayQuery, predict_delay};

use super::dto::*;
use super::state::AppState;

const DEFAULT_WEATHER: &str = "clear";
const DEFAULT_DAY_OF_WEEK: u8 = 1;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/predict_delay", post(predict_delay_handler))
        .route("/reroute", post(reroute_handler))
        .route("/trains", get(list_trains))
        .fallback(not_found)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Service banner.
async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: "Rail Dispatch Decision Support API",
        status: "active",
        endpoints: vec!["/predict_delay", "/reroute", "/trains", "/health"],
    })
}

/// Health check endpoint.
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        service: "backend",
    })
}

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound {
        message: format!("no route for {uri}"),
    }
}

/// Parse a JSON body, logging the raw body on failure.
fn parse_body<T: DeserializeOwned>(endpoint: &str, body: &Bytes) -> Result<T, AppError> {
    serde_json::from_slice(body).map_err(|e| {
        warn!(
            endpoint,
            error = %e,
            body = %String::from_utf8_lossy(body),
            "rejected request body"
        );
        AppError::BadRequest {
            message: format!("Invalid JSON: {e}"),
        }
    })
}

/// Predict the delay risk for a train.
async fn predict_delay_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<PredictDelayResponse>, AppError> {
    let req: PredictDelayRequest = parse_body("predict_delay", &body)?;

    let day_of_week = req.day_of_week.unwrap_or(DEFAULT_DAY_OF_WEEK);
    if day_of_week > 6 {
        return Err(AppError::BadRequest {
            message: format!("day_of_week must be 0-6, got {day_of_week}"),
        });
    }
    let weather = req.weather_condition.as_deref().unwrap_or(DEFAULT_WEATHER);

    info!(
        endpoint = "predict_delay",
        train_id = %req.train_id,
        current_time = %req.current_time,
        station = %req.station,
        weather,
        day_of_week,
        "handling request"
    );

    let query = DelayQuery {
        train_id: &req.train_id,
        current_time: &req.current_time,
        station: &req.station,
        weather_condition: weather,
        day_of_week,
    };
    let mut rng = state.rng.request_rng();
    let prediction = predict_delay(state.model.as_ref(), &query, &mut rng);

    Ok(Json(PredictDelayResponse::from_prediction(prediction)))
}

/// Recommend an action and alternative path for a delayed train.
async fn reroute_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<RerouteResponse>, AppError> {
    let req: RerouteRequest = parse_body("reroute", &body)?;

    let blocked: BTreeSet<String> = req.blocked_stations.unwrap_or_default().into_iter().collect();

    info!(
        endpoint = "reroute",
        train_id = %req.delayed_train_id,
        from = %req.current_station,
        to = %req.destination_station,
        delay_minutes = req.delay_minutes,
        blocked = blocked.len(),
        available_routes = req.available_routes.as_ref().map_or(0, Vec::len),
        "handling request"
    );

    let query = RerouteQuery {
        delayed_train_id: &req.delayed_train_id,
        current_station: &req.current_station,
        destination_station: &req.destination_station,
        delay_minutes: req.delay_minutes,
        blocked: &blocked,
    };
    let mut rng = state.rng.request_rng();
    let now = Local::now().time();
    let recommendation = state.planner().reroute(&query, now, &mut rng);

    Ok(Json(RerouteResponse::from_recommendation(recommendation)))
}

/// List the sample timetable.
async fn list_trains(State(state): State<AppState>) -> Json<TrainsResponse> {
    Json(TrainsResponse {
        trains: state.timetable.trains().to_vec(),
    })
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
        };

        warn!(%status, error = %message, "request rejected");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
