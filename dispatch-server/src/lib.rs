//! Rail dispatch decision-support server.
//!
//! Estimates how likely a train is to run late and, for a train that
//! already is, recommends whether to monitor, reroute or hold it.

pub mod cache;
pub mod config;
pub mod network;
pub mod planner;
pub mod risk;
pub mod timetable;
pub mod web;
