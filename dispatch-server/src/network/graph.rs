//! Static station adjacency.
//!
//! The network is declared once at startup and never mutated. Edges are
//! directed: declaring `A -> B` says nothing about `B -> A`.

use std::collections::HashMap;

/// A directed rail network keyed by station name.
///
/// Every station mentioned anywhere in the declaration is a node, including
/// ones that only appear as a neighbor; those simply have no outgoing edges.
#[derive(Debug, Clone, Default)]
pub struct StationGraph {
    /// Station to directly reachable stations, in declared order.
    adjacency: HashMap<String, Vec<String>>,
}

impl StationGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add directed edges from `station` to each of `neighbors`, in order.
    ///
    /// Repeated declarations append; duplicate edges are ignored.
    pub fn connect<S: AsRef<str>>(&mut self, station: &str, neighbors: &[S]) {
        for neighbor in neighbors {
            let neighbor = neighbor.as_ref();
            self.adjacency.entry(neighbor.to_string()).or_default();

            let edges = self.adjacency.entry(station.to_string()).or_default();
            if !edges.iter().any(|n| n == neighbor) {
                edges.push(neighbor.to_string());
            }
        }
        self.adjacency.entry(station.to_string()).or_default();
    }

    /// Whether the station is a node of the graph.
    pub fn contains(&self, station: &str) -> bool {
        self.adjacency.contains_key(station)
    }

    /// Direct successors of a station, in declared order.
    ///
    /// Unknown stations have no neighbors.
    pub fn neighbors(&self, station: &str) -> &[String] {
        self.adjacency.get(station).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Whether there is a direct edge `from -> to`.
    pub fn has_edge(&self, from: &str, to: &str) -> bool {
        self.neighbors(from).iter().any(|n| n == to)
    }

    /// All station names, sorted.
    pub fn stations(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.adjacency.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Number of stations.
    pub fn len(&self) -> usize {
        self.adjacency.len()
    }

    /// Returns true if there are no stations.
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Number of directed edges.
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }
}

/// Builder for creating station graphs.
///
/// Provides a fluent API for declaring adjacency rows.
#[derive(Debug, Default)]
pub struct StationGraphBuilder {
    inner: StationGraph,
}

impl StationGraphBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a station's outgoing edges.
    pub fn station(mut self, name: &str, neighbors: &[&str]) -> Self {
        self.inner.connect(name, neighbors);
        self
    }

    /// Build the graph.
    pub fn build(self) -> StationGraph {
        self.inner
    }
}

/// The fixed Indian mainline network served by the dispatcher.
///
/// Several regions form disconnected components, and many edges are one-way.
pub fn india_network() -> StationGraph {
    StationGraphBuilder::new()
        .station("Mumbai", &["Pune", "Surat", "Vadodara"])
        .station("Pune", &["Mumbai", "Solapur", "Kolhapur"])
        .station("Delhi", &["Jaipur", "Agra", "Chandigarh", "Lucknow"])
        .station("Bangalore", &["Chennai", "Mysore", "Hubli"])
        .station("Chennai", &["Bangalore", "Hyderabad", "Coimbatore"])
        .station("Kolkata", &["Patna", "Bhubaneswar", "Guwahati"])
        .station("Hyderabad", &["Bangalore", "Chennai", "Vijayawada"])
        .station("Ahmedabad", &["Surat", "Vadodara", "Rajkot"])
        .station("Jaipur", &["Delhi", "Jodhpur", "Udaipur"])
        .station("Lucknow", &["Delhi", "Kanpur", "Varanasi"])
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_graph() {
        let g = StationGraph::new();
        assert!(g.is_empty());
        assert_eq!(g.len(), 0);
        assert!(!g.contains("Mumbai"));
        assert!(g.neighbors("Mumbai").is_empty());
    }

    #[test]
    fn edges_are_directed() {
        let g = StationGraphBuilder::new().station("A", &["B"]).build();

        assert!(g.has_edge("A", "B"));
        assert!(!g.has_edge("B", "A"));
        assert!(g.contains("B"));
        assert!(g.neighbors("B").is_empty());
    }

    #[test]
    fn neighbor_order_is_preserved() {
        let g = StationGraphBuilder::new()
            .station("A", &["C", "B", "D"])
            .build();
        assert_eq!(g.neighbors("A"), ["C", "B", "D"]);
    }

    #[test]
    fn duplicate_edges_collapse() {
        let g = StationGraphBuilder::new()
            .station("A", &["B", "B"])
            .station("A", &["B", "C"])
            .build();
        assert_eq!(g.neighbors("A"), ["B", "C"]);
        assert_eq!(g.edge_count(), 2);
    }

    #[test]
    fn isolated_station() {
        let g = StationGraphBuilder::new().station("A", &[]).build();
        assert!(g.contains("A"));
        assert_eq!(g.len(), 1);
    }

    #[test]
    fn india_network_shape() {
        let g = india_network();

        assert!(g.contains("Mumbai"));
        assert!(g.contains("Solapur"));
        assert!(g.contains("Kolhapur"));
        assert!(!g.contains("Atlantis"));

        assert_eq!(g.neighbors("Mumbai"), ["Pune", "Surat", "Vadodara"]);
        assert!(g.has_edge("Ahmedabad", "Surat"));
        assert!(!g.has_edge("Surat", "Ahmedabad"));
        assert_eq!(g.edge_count(), 31);
    }

    #[test]
    fn stations_are_sorted() {
        let g = india_network();
        let names = g.stations();
        let mut sorted = names.clone();
        sorted.sort_unstable();
        assert_eq!(names, sorted);
        assert_eq!(names.len(), g.len());
    }
}
