#[cfg(feature = "tokio-runtime")]
pub mod app;
pub mod popup;
pub mod surface;
