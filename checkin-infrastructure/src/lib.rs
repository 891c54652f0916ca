// Check-in Infrastructure Layer

pub mod config;

pub use config::*;
