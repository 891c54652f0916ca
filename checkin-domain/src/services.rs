// Domain services

pub mod evaluator;
pub mod token_service;

pub use evaluator::*;
pub use token_service::*;
