pub mod assistant;
pub mod outlets;
