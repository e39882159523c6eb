//! Application state for the web layer.

use std::sync::Arc;

use crate::cache::RouteCache;
use crate::config::RngPolicy;
use crate::network::StationGraph;
use crate::planner::ReroutingPlanner;
use crate::risk::DelayModel;
use crate::timetable::Timetable;

/// Shared application state.
///
/// Everything here is built once at startup and only read afterwards, so
/// handlers share it without locking.
#[derive(Clone)]
pub struct AppState {
    /// Delay model chosen at startup
    pub model: Arc<DelayModel>,

    /// Rail network for rerouting
    pub graph: Arc<StationGraph>,

    /// Memoized routes, if enabled
    pub route_cache: Option<Arc<RouteCache>>,

    /// Sample timetable
    pub timetable: Arc<Timetable>,

    /// Per-request randomness
    pub rng: RngPolicy,
}

impl AppState {
    /// Create a new app state.
    pub fn new(
        model: DelayModel,
        graph: StationGraph,
        route_cache: Option<RouteCache>,
        timetable: Timetable,
        rng: RngPolicy,
    ) -> Self {
        Self {
            model: Arc::new(model),
            graph: Arc::new(graph),
            route_cache: route_cache.map(Arc::new),
            timetable: Arc::new(timetable),
            rng,
        }
    }

    /// A planner borrowing the shared graph and cache.
    pub fn planner(&self) -> ReroutingPlanner<'_> {
        let planner = ReroutingPlanner::new(&self.graph);
        match &self.route_cache {
            Some(cache) => planner.with_cache(cache),
            None => planner,
        }
    }
}
