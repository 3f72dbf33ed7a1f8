//! Command channel between the assistant component and the map surface.
//!
//! The two components never share mutable state: the assistant side holds a
//! cloneable [`MapCommands`] handle and the map surface drains the paired
//! [`CommandReceiver`] once per frame. Both operations are idempotent and
//! side-effect-scoped to visual state; a command that cannot be resolved
//! (unknown name fragment, surface not yet ready) is dropped silently.

use crossbeam_channel::{Receiver, Sender};

/// Commands the conversational component may issue against the map
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MapCommand {
    /// Replace the highlighted name fragments. An empty list explicitly
    /// clears highlighting.
    HighlightByName(Vec<String>),
    /// Open the detail callout of the first outlet whose name contains the
    /// fragment and recenter the view on it.
    OpenOutletPopup(String),
}

/// Creates a connected command handle / receiver pair.
pub fn command_channel() -> (MapCommands, CommandReceiver) {
    let (tx, rx) = crossbeam_channel::unbounded();
    (MapCommands { tx }, CommandReceiver { rx })
}

/// Sending half of the command channel, the only surface the assistant
/// component sees. Cheap to clone.
#[derive(Debug, Clone)]
pub struct MapCommands {
    tx: Sender<MapCommand>,
}

impl MapCommands {
    /// Requests highlighting of every outlet whose name contains any of the
    /// given fragments. Pass an empty vec to clear (callers that have nothing
    /// to say simply do not call).
    pub fn highlight_outlets_by_name(&self, names: Vec<String>) {
        self.send(MapCommand::HighlightByName(names));
    }

    /// Requests that the first outlet matching the fragment has its callout
    /// opened and the view centered on it.
    pub fn open_outlet_popup(&self, name_fragment: impl Into<String>) {
        self.send(MapCommand::OpenOutletPopup(name_fragment.into()));
    }

    fn send(&self, command: MapCommand) {
        // A disconnected receiver means the surface is gone; dropping the
        // command matches the no-retry contract.
        if self.tx.send(command).is_err() {
            log::debug!("map command dropped: surface not listening");
        }
    }
}

/// Receiving half, owned by the map surface.
#[derive(Debug)]
pub struct CommandReceiver {
    rx: Receiver<MapCommand>,
}

impl CommandReceiver {
    /// Drains every command issued since the last frame, in order.
    pub fn drain(&self) -> Vec<MapCommand> {
        self.rx.try_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commands_arrive_in_order() {
        let (commands, receiver) = command_channel();
        commands.highlight_outlets_by_name(vec!["SS2".to_string()]);
        commands.open_outlet_popup("Cheras");
        commands.highlight_outlets_by_name(Vec::new());

        let drained = receiver.drain();
        assert_eq!(
            drained,
            vec![
                MapCommand::HighlightByName(vec!["SS2".to_string()]),
                MapCommand::OpenOutletPopup("Cheras".to_string()),
                MapCommand::HighlightByName(Vec::new()),
            ]
        );
        assert!(receiver.drain().is_empty());
    }

    #[test]
    fn test_send_after_receiver_dropped_is_silent() {
        let (commands, receiver) = command_channel();
        drop(receiver);
        commands.open_outlet_popup("Sunway");
    }

    #[test]
    fn test_handle_is_cloneable() {
        let (commands, receiver) = command_channel();
        let clone = commands.clone();
        clone.open_outlet_popup("Subang");
        assert_eq!(receiver.drain().len(), 1);
    }
}
