pub mod config;
pub mod geo;
pub mod outlet;
pub mod viewport;
