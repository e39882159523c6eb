//! Shortest-hop route search over the station graph.
//!
//! Breadth-first search that treats blocked stations as impassable. Neighbors
//! are explored in declared order, so when several shortest routes exist the
//! first one discovered is returned, every time.

use std::collections::{BTreeSet, HashMap, HashSet, VecDeque};
use std::fmt;

use tracing::trace;

use crate::network::StationGraph;

/// Stations the search must not pass through or end at.
pub type BlockedStations = BTreeSet<String>;

/// An ordered route from origin to destination, or nothing.
///
/// When non-empty, the first station is the origin, the last is the
/// destination, and each consecutive pair is an edge of the graph the plan
/// was computed on.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct RoutePlan(Vec<String>);

impl RoutePlan {
    /// No route.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of stations, including both ends.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Number of edges traversed.
    pub fn hops(&self) -> usize {
        self.0.len().saturating_sub(1)
    }

    pub fn stations(&self) -> &[String] {
        &self.0
    }

    pub fn into_stations(self) -> Vec<String> {
        self.0
    }
}

impl fmt::Display for RoutePlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join(" → "))
    }
}

/// Find a minimum-hop route from `origin` to `destination`.
///
/// Rules, in order:
/// 1. Either end missing from the graph: empty.
/// 2. `origin == destination`: the single-station route, even if blocked.
/// 3. Blocked origin: empty.
/// 4. Otherwise BFS skipping blocked stations; empty if unreachable.
pub fn find_path(
    graph: &StationGraph,
    origin: &str,
    destination: &str,
    blocked: &BlockedStations,
) -> RoutePlan {
    if !graph.contains(origin) || !graph.contains(destination) {
        return RoutePlan::empty();
    }
    if origin == destination {
        return RoutePlan(vec![origin.to_string()]);
    }
    if blocked.contains(origin) {
        return RoutePlan::empty();
    }

    let mut parent: HashMap<&str, &str> = HashMap::new();
    let mut seen: HashSet<&str> = HashSet::from([origin]);
    let mut frontier: VecDeque<&str> = VecDeque::from([origin]);

    while let Some(current) = frontier.pop_front() {
        trace!(station = current, "route search expanding");

        for next in graph.neighbors(current) {
            let next = next.as_str();
            if blocked.contains(next) || !seen.insert(next) {
                continue;
            }
            parent.insert(next, current);

            if next == destination {
                return RoutePlan(unwind(&parent, origin, destination));
            }
            frontier.push_back(next);
        }
    }

    RoutePlan::empty()
}

/// Walk parent links back from `destination` to `origin`.
fn unwind(parent: &HashMap<&str, &str>, origin: &str, destination: &str) -> Vec<String> {
    let mut path = vec![destination.to_string()];
    let mut at = destination;

    while at != origin {
        match parent.get(at) {
            Some(&prev) => {
                path.push(prev.to_string());
                at = prev;
            }
            None => break,
        }
    }

    path.reverse();
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::{StationGraphBuilder, india_network};

    fn blocked(names: &[&str]) -> BlockedStations {
        names.iter().map(|s| s.to_string()).collect()
    }

    fn path(g: &StationGraph, from: &str, to: &str, block: &[&str]) -> Vec<String> {
        find_path(g, from, to, &blocked(block)).into_stations()
    }

    #[test]
    fn same_station_is_trivial() {
        let g = india_network();
        assert_eq!(path(&g, "Mumbai", "Mumbai", &[]), ["Mumbai"]);
    }

    #[test]
    fn same_station_ignores_block() {
        let g = india_network();
        assert_eq!(path(&g, "Mumbai", "Mumbai", &["Mumbai"]), ["Mumbai"]);
    }

    #[test]
    fn disconnected_regions() {
        let g = india_network();
        assert!(path(&g, "Mumbai", "Delhi", &[]).is_empty());
    }

    #[test]
    fn two_hop_route() {
        let g = india_network();
        assert_eq!(
            path(&g, "Mumbai", "Solapur", &[]),
            ["Mumbai", "Pune", "Solapur"]
        );
        assert_eq!(
            path(&g, "Mumbai", "Kolhapur", &[]),
            ["Mumbai", "Pune", "Kolhapur"]
        );
    }

    #[test]
    fn blocking_only_connector_severs_route() {
        let g = india_network();
        assert!(path(&g, "Mumbai", "Kolhapur", &["Pune"]).is_empty());
    }

    #[test]
    fn blocked_destination_is_unreachable() {
        let g = india_network();
        assert!(path(&g, "Mumbai", "Pune", &["Pune"]).is_empty());
    }

    #[test]
    fn blocked_origin_is_unreachable() {
        let g = india_network();
        assert!(path(&g, "Mumbai", "Pune", &["Mumbai"]).is_empty());
    }

    #[test]
    fn unknown_stations() {
        let g = india_network();
        assert!(path(&g, "Atlantis", "Mumbai", &[]).is_empty());
        assert!(path(&g, "Mumbai", "Atlantis", &[]).is_empty());
        assert!(path(&g, "Atlantis", "Atlantis", &[]).is_empty());
    }

    #[test]
    fn edges_are_one_way() {
        let g = india_network();
        // Ahmedabad -> Surat exists, Surat has no outgoing edges.
        assert_eq!(path(&g, "Ahmedabad", "Surat", &[]), ["Ahmedabad", "Surat"]);
        assert!(path(&g, "Surat", "Ahmedabad", &[]).is_empty());
    }

    #[test]
    fn detour_around_block() {
        let g = india_network();
        // Vijayawada is only reachable through Hyderabad.
        assert_eq!(
            path(&g, "Bangalore", "Vijayawada", &[]),
            ["Bangalore", "Chennai", "Hyderabad", "Vijayawada"]
        );
        assert!(path(&g, "Bangalore", "Vijayawada", &["Hyderabad"]).is_empty());
    }

    #[test]
    fn ties_follow_declared_order() {
        let g = StationGraphBuilder::new()
            .station("A", &["B", "C"])
            .station("B", &["D"])
            .station("C", &["D"])
            .build();
        assert_eq!(path(&g, "A", "D", &[]), ["A", "B", "D"]);
        assert_eq!(path(&g, "A", "D", &["B"]), ["A", "C", "D"]);

        let g = StationGraphBuilder::new()
            .station("A", &["C", "B"])
            .station("B", &["D"])
            .station("C", &["D"])
            .build();
        assert_eq!(path(&g, "A", "D", &[]), ["A", "C", "D"]);
    }

    #[test]
    fn prefers_fewer_hops() {
        let g = StationGraphBuilder::new()
            .station("A", &["B", "E"])
            .station("B", &["C"])
            .station("C", &["D"])
            .station("E", &["D"])
            .build();
        assert_eq!(path(&g, "A", "D", &[]), ["A", "E", "D"]);
    }

    #[test]
    fn cycles_terminate() {
        let g = StationGraphBuilder::new()
            .station("A", &["B"])
            .station("B", &["A", "C"])
            .station("C", &["B"])
            .build();
        assert!(path(&g, "A", "Z", &[]).is_empty());
        assert_eq!(path(&g, "C", "A", &[]), ["C", "B", "A"]);
    }

    #[test]
    fn display_joins_with_arrows() {
        let g = india_network();
        let plan = find_path(&g, "Mumbai", "Solapur", &BlockedStations::new());
        assert_eq!(plan.to_string(), "Mumbai → Pune → Solapur");
        assert_eq!(plan.hops(), 2);
        assert_eq!(plan.len(), 3);
    }
}
