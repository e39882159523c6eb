//! Sample timetable served alongside the dispatch API.
//!
//! The timetable is display data only; neither the risk model nor the
//! planner reads it.

mod error;
mod loader;

pub use error::TimetableError;
pub use loader::{Timetable, TrainRecord, sample_trains};
