//! The rail network the rerouting planner searches.

mod graph;

pub use graph::{StationGraph, StationGraphBuilder, india_network};
