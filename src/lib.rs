pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::toml_config::TourConfig;
pub use core::{Tour, TourReport};
pub use domain::{Account, Named, Person, Ride, RideCounter, SeatArrangement, Student, Teacher};
pub use utils::error::{LessonError, Result};
