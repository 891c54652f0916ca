// Value objects

pub mod checkin_mode;
pub mod geo;
pub mod timestamp;

pub use checkin_mode::*;
pub use geo::*;
pub use timestamp::*;
