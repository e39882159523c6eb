//! Assembling a reroute recommendation.

use chrono::{Duration, NaiveTime};
use rand::Rng;

use super::policy::{ActionDecision, DispatchAction};
use super::route::RoutePlan;

/// Number of alternative trains offered with every recommendation.
pub const ALTERNATIVE_COUNT: usize = 3;

const CONFIDENCE_WITH_ROUTE: f64 = 0.85;
const CONFIDENCE_WITHOUT_ROUTE: f64 = 0.60;
const LONG_DELAY_PENALTY: f64 = 0.15;

/// Delays beyond this many minutes lower confidence.
pub const LONG_DELAY_MINS: u32 = 60;

/// A connecting train offered to passengers of a delayed one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlternativeTrain {
    pub train_id: String,
    pub departure_time: NaiveTime,
    pub available_seats: u32,
    /// First stations of the planned route, or `"Direct"`.
    pub route: String,
}

/// Everything the dispatcher is told about a delayed train.
#[derive(Debug, Clone, PartialEq)]
pub struct RerouteRecommendation {
    pub delayed_train_id: String,
    pub action: DispatchAction,
    pub alternatives: Vec<AlternativeTrain>,

    /// The planned route, or `[origin, destination]` when none was found.
    /// A non-empty path is not proof of reachability; see `route_found`.
    pub path: Vec<String>,

    /// Whether `path` came from the planner.
    pub route_found: bool,

    pub recovery_minutes: u32,

    /// In [0, 1].
    pub confidence: f64,
}

/// Inputs to [`compose`] besides the planner output.
#[derive(Debug, Clone, Copy)]
pub struct ComposeContext<'a> {
    pub delayed_train_id: &'a str,
    pub origin: &'a str,
    pub destination: &'a str,
    pub delay_minutes: u32,
    /// Wall-clock time alternatives are offset from.
    pub now: NaiveTime,
}

/// Build the recommendation for a planned route and action.
pub fn compose<R: Rng>(
    ctx: &ComposeContext<'_>,
    plan: RoutePlan,
    decision: ActionDecision,
    rng: &mut R,
) -> RerouteRecommendation {
    let route_found = !plan.is_empty();
    let label = route_label(&plan);

    let alternatives = (0..ALTERNATIVE_COUNT)
        .map(|_| AlternativeTrain {
            train_id: format!("ALT{}", rng.gen_range(1000..=9999)),
            departure_time: ctx.now + Duration::minutes(rng.gen_range(15..=60)),
            available_seats: rng.gen_range(50..=200),
            route: label.clone(),
        })
        .collect();

    let path = if route_found {
        plan.into_stations()
    } else {
        vec![ctx.origin.to_string(), ctx.destination.to_string()]
    };

    RerouteRecommendation {
        delayed_train_id: ctx.delayed_train_id.to_string(),
        action: decision.action,
        alternatives,
        path,
        route_found,
        recovery_minutes: decision.recovery_minutes,
        confidence: confidence(route_found, ctx.delay_minutes),
    }
}

/// Confidence in a recommendation, clamped to [0, 1].
pub fn confidence(route_found: bool, delay_minutes: u32) -> f64 {
    let mut score = if route_found {
        CONFIDENCE_WITH_ROUTE
    } else {
        CONFIDENCE_WITHOUT_ROUTE
    };
    if delay_minutes > LONG_DELAY_MINS {
        score -= LONG_DELAY_PENALTY;
    }
    score.clamp(0.0, 1.0)
}

fn route_label(plan: &RoutePlan) -> String {
    match plan.stations() {
        [a, b, c, ..] => format!("{a} → {b} → {c}"),
        _ => "Direct".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::india_network;
    use crate::planner::{BlockedStations, decide, find_path};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn now() -> NaiveTime {
        NaiveTime::from_hms_opt(14, 0, 0).unwrap()
    }

    fn ctx<'a>(origin: &'a str, destination: &'a str, delay_minutes: u32) -> ComposeContext<'a> {
        ComposeContext {
            delayed_train_id: "12137",
            origin,
            destination,
            delay_minutes,
            now: now(),
        }
    }

    fn plan(from: &str, to: &str) -> RoutePlan {
        find_path(&india_network(), from, to, &BlockedStations::new())
    }

    #[test]
    fn confidence_table() {
        assert!((confidence(true, 10) - 0.85).abs() < 1e-9);
        assert!((confidence(false, 10) - 0.60).abs() < 1e-9);
        assert!((confidence(true, 60) - 0.85).abs() < 1e-9);
        assert!((confidence(true, 61) - 0.70).abs() < 1e-9);
        assert!((confidence(false, 61) - 0.45).abs() < 1e-9);
    }

    #[test]
    fn found_route_is_used() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let rec = compose(
            &ctx("Mumbai", "Solapur", 30),
            plan("Mumbai", "Solapur"),
            decide(30),
            &mut rng,
        );

        assert!(rec.route_found);
        assert_eq!(rec.path, ["Mumbai", "Pune", "Solapur"]);
        assert_eq!(rec.action, DispatchAction::Reroute);
        assert_eq!(rec.recovery_minutes, 10);
        for alt in &rec.alternatives {
            assert_eq!(alt.route, "Mumbai → Pune → Solapur");
        }
    }

    #[test]
    fn missing_route_falls_back_to_endpoints() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let rec = compose(
            &ctx("Mumbai", "Delhi", 70),
            plan("Mumbai", "Delhi"),
            decide(70),
            &mut rng,
        );

        assert!(!rec.route_found);
        assert_eq!(rec.path, ["Mumbai", "Delhi"]);
        assert!((rec.confidence - 0.45).abs() < 1e-9);
        assert!(rec.alternatives.iter().all(|a| a.route == "Direct"));
    }

    #[test]
    fn short_route_is_direct() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let rec = compose(
            &ctx("Mumbai", "Pune", 5),
            plan("Mumbai", "Pune"),
            decide(5),
            &mut rng,
        );
        assert_eq!(rec.path, ["Mumbai", "Pune"]);
        assert!(rec.alternatives.iter().all(|a| a.route == "Direct"));
    }

    #[test]
    fn alternatives_are_within_bounds() {
        let mut rng = ChaCha8Rng::seed_from_u64(99);
        for _ in 0..50 {
            let rec = compose(
                &ctx("Mumbai", "Kolhapur", 20),
                plan("Mumbai", "Kolhapur"),
                decide(20),
                &mut rng,
            );
            assert_eq!(rec.alternatives.len(), ALTERNATIVE_COUNT);
            for alt in &rec.alternatives {
                let id: u32 = alt.train_id.strip_prefix("ALT").unwrap().parse().unwrap();
                assert!((1000..=9999).contains(&id));
                assert!((50..=200).contains(&alt.available_seats));

                let offset = alt.departure_time - now();
                assert!(offset >= Duration::minutes(15));
                assert!(offset <= Duration::minutes(60));
            }
        }
    }

    #[test]
    fn departure_wraps_past_midnight() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let late = ComposeContext {
            now: NaiveTime::from_hms_opt(23, 50, 0).unwrap(),
            ..ctx("Mumbai", "Pune", 5)
        };
        let rec = compose(&late, plan("Mumbai", "Pune"), decide(5), &mut rng);
        for alt in &rec.alternatives {
            assert!(alt.departure_time < NaiveTime::from_hms_opt(1, 0, 0).unwrap());
        }
    }

    #[test]
    fn seeded_output_is_reproducible() {
        let a = compose(
            &ctx("Mumbai", "Kolhapur", 50),
            plan("Mumbai", "Kolhapur"),
            decide(50),
            &mut ChaCha8Rng::seed_from_u64(11),
        );
        let b = compose(
            &ctx("Mumbai", "Kolhapur", 50),
            plan("Mumbai", "Kolhapur"),
            decide(50),
            &mut ChaCha8Rng::seed_from_u64(11),
        );
        assert_eq!(a, b);
    }
}
