pub mod animation;
pub mod state;
