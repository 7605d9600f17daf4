// Domain layer: the entities of the lesson and the capability traits they share.
// No I/O here; logging only through `tracing`.

pub mod account;
pub mod person;
pub mod ports;
pub mod ride;
pub mod seating;
pub mod tax;

pub use account::Account;
pub use person::{Person, Student, Teacher};
pub use ports::Named;
pub use ride::{Ride, RideCounter};
pub use seating::SeatArrangement;
