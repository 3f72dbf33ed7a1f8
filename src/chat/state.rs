//! Chat transcript state and assistant reply routing.
//!
//! Owns the transcript, the loading flag, and the session identifier.
//! Replies route to the map through the command channel only; the chat side
//! never touches interaction state directly.

use crate::bridge::MapCommands;
use crate::net::assistant::AssistantReply;

const GREETING_INTRO: &str = "Hi! I'm Samantha, your virtual assistant for McDonald's Find McD. \
    I can help you locate any store branch by name, location, or available facilities!";
const GREETING_HINT: &str = "You may hover over the location on the map to inspect the \
    McDelivery support area and see if it's available near you.";
const NO_MATCH_TEXT: &str =
    "Sorry, I couldn't find a matching branch. Can I help you find it using other details?";
const CONNECTION_TROUBLE_TEXT: &str =
    "Sorry, I'm having trouble connecting to the server. Please try again later.";

/// Who authored a transcript message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Speaker {
    User,
    Bot,
}

/// One transcript entry. Bot messages may carry outlet names that render as
/// clickable buttons invoking the popup-open command.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatMessage {
    pub text: String,
    pub sender: Speaker,
    pub outlets: Option<Vec<String>>,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            sender: Speaker::User,
            outlets: None,
        }
    }

    pub fn bot(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            sender: Speaker::Bot,
            outlets: None,
        }
    }

    pub fn bot_with_outlets(text: impl Into<String>, outlets: Vec<String>) -> Self {
        Self {
            text: text.into(),
            sender: Speaker::Bot,
            outlets: Some(outlets),
        }
    }
}

/// Transcript, loading flag, and session identifier for the assistant widget
#[derive(Debug)]
pub struct ChatState {
    pub messages: Vec<ChatMessage>,
    pub input: String,
    pub loading: bool,
    pub session_id: Option<String>,
}

impl Default for ChatState {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatState {
    pub fn new() -> Self {
        Self {
            messages: vec![ChatMessage::bot(GREETING_INTRO), ChatMessage::bot(GREETING_HINT)],
            input: String::new(),
            loading: false,
            session_id: None,
        }
    }

    /// Appends the user's message and marks the exchange as in flight.
    pub fn push_user(&mut self, text: impl Into<String>) {
        self.messages.push(ChatMessage::user(text));
        self.loading = true;
    }

    /// Routes one assistant reply: updates the session id, issues the map
    /// command the `outlet` field calls for, and appends the bot message.
    pub fn apply_reply(&mut self, reply: AssistantReply, commands: &MapCommands) {
        if let Some(session_id) = reply.session_id {
            self.session_id = Some(session_id);
        }

        let message = match reply.outlet {
            Some(names) if !names.is_empty() => {
                commands.highlight_outlets_by_name(names.clone());
                ChatMessage::bot_with_outlets(reply.reply, names)
            }
            Some(_) => {
                commands.highlight_outlets_by_name(Vec::new());
                ChatMessage::bot(NO_MATCH_TEXT)
            }
            None => ChatMessage::bot(reply.reply),
        };
        self.messages.push(message);
        self.loading = false;
    }

    /// A failed chat turn: generic notice, loading cleared, session id kept
    /// unchanged so the user can retry.
    pub fn apply_error(&mut self) {
        self.messages.push(ChatMessage::bot(CONNECTION_TROUBLE_TEXT));
        self.loading = false;
    }
}
