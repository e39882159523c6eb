//! Rerouting for delayed trains.
//!
//! A breadth-first search over the station graph finds the shortest
//! alternative path that avoids blocked stations. The delay decides the
//! dispatcher action, and both are composed into a recommendation with
//! alternative trains for passengers.

mod compose;
mod policy;
mod reroute;
mod route;

pub use compose::{
    ALTERNATIVE_COUNT, AlternativeTrain, ComposeContext, RerouteRecommendation, compose,
    confidence,
};
pub use policy::{ActionDecision, DispatchAction, decide};
pub use reroute::{RerouteQuery, ReroutingPlanner};
pub use route::{BlockedStations, RoutePlan, find_path};
