pub mod tour;

pub use tour::{Tour, TourReport};
