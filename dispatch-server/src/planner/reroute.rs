//! The reroute pipeline: plan a path, pick an action, compose.

use std::collections::BTreeSet;

use chrono::NaiveTime;
use rand::Rng;
use tracing::debug;

use super::compose::{ComposeContext, RerouteRecommendation, compose};
use super::policy::decide;
use super::route::{BlockedStations, RoutePlan, find_path};
use crate::cache::RouteCache;
use crate::network::StationGraph;

/// A delayed train that needs a new plan.
#[derive(Debug, Clone)]
pub struct RerouteQuery<'a> {
    pub delayed_train_id: &'a str,
    pub current_station: &'a str,
    pub destination_station: &'a str,
    pub delay_minutes: u32,

    /// Stations that must be avoided.
    pub blocked: &'a BTreeSet<String>,
}

/// Route search over a shared graph, optionally memoized.
pub struct ReroutingPlanner<'a> {
    graph: &'a StationGraph,
    cache: Option<&'a RouteCache>,
}

impl<'a> ReroutingPlanner<'a> {
    /// Create a planner without memoization.
    pub fn new(graph: &'a StationGraph) -> Self {
        Self { graph, cache: None }
    }

    /// Remember plans in `cache`. Results are identical either way.
    pub fn with_cache(mut self, cache: &'a RouteCache) -> Self {
        self.cache = Some(cache);
        self
    }

    /// Minimum-hop route avoiding `blocked`; see [`find_path`].
    pub fn find_path(&self, origin: &str, destination: &str, blocked: &BlockedStations) -> RoutePlan {
        let search = || find_path(self.graph, origin, destination, blocked);

        match self.cache {
            Some(cache) => cache.get_or_plan(origin, destination, blocked, search),
            None => search(),
        }
    }

    /// Produce a full recommendation for a delayed train.
    ///
    /// Never fails: an unknown station or an unreachable destination yields a
    /// recommendation with `route_found == false`.
    pub fn reroute<R: Rng>(
        &self,
        query: &RerouteQuery<'_>,
        now: NaiveTime,
        rng: &mut R,
    ) -> RerouteRecommendation {
        let plan = self.find_path(
            query.current_station,
            query.destination_station,
            query.blocked,
        );
        let decision = decide(query.delay_minutes);

        debug!(
            train_id = query.delayed_train_id,
            hops = plan.hops(),
            found = !plan.is_empty(),
            action = %decision.action,
            "planned reroute"
        );

        let ctx = ComposeContext {
            delayed_train_id: query.delayed_train_id,
            origin: query.current_station,
            destination: query.destination_station,
            delay_minutes: query.delay_minutes,
            now,
        };

        compose(&ctx, plan, decision, rng)
    }
}
