pub mod state;

#[cfg(all(feature = "egui", feature = "tokio-runtime"))]
pub mod widget;

pub use state::{ChatMessage, ChatState, Speaker};

#[cfg(all(feature = "egui", feature = "tokio-runtime"))]
pub use widget::ChatPanel;
