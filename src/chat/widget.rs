//! egui chat panel for the assistant.
//!
//! Renders the transcript (including outlet buttons on bot messages), the
//! input row, and a loading indicator while a turn is in flight. Network
//! calls run on spawned tasks; their results come back over a crossbeam
//! channel drained at the start of each frame, so all state mutation stays
//! on the UI loop.

use crate::bridge::MapCommands;
use crate::chat::state::{ChatState, Speaker};
use crate::core::config::MapConfig;
use crate::net::assistant::{AssistantClient, AssistantReply};
use crate::prelude::Arc;
use crate::Result;
use crossbeam_channel::{Receiver, Sender};
use egui::{Color32, RichText, Ui};

pub struct ChatPanel {
    state: ChatState,
    client: Arc<AssistantClient>,
    commands: MapCommands,
    reply_tx: Sender<Result<AssistantReply>>,
    reply_rx: Receiver<Result<AssistantReply>>,
}

impl ChatPanel {
    pub fn new(config: &MapConfig, commands: MapCommands) -> Self {
        let (reply_tx, reply_rx) = crossbeam_channel::unbounded();
        Self {
            state: ChatState::new(),
            client: Arc::new(AssistantClient::new(config)),
            commands,
            reply_tx,
            reply_rx,
        }
    }

    pub fn state(&self) -> &ChatState {
        &self.state
    }

    /// Renders the panel and processes any reply that arrived since the last
    /// frame.
    pub fn ui(&mut self, ui: &mut Ui) {
        self.drain_replies();

        ui.vertical(|ui| {
            ui.heading("Samantha");
            ui.separator();

            egui::ScrollArea::vertical()
                .stick_to_bottom(true)
                .max_height(ui.available_height() - 40.0)
                .show(ui, |ui| {
                    // Collecting clicks first keeps the borrow on messages
                    // immutable while rendering.
                    let mut clicked_outlet = None;
                    for message in &self.state.messages {
                        match message.sender {
                            Speaker::Bot => {
                                ui.horizontal_wrapped(|ui| {
                                    ui.label(RichText::new(&message.text).color(Color32::DARK_GRAY));
                                });
                                if let Some(outlets) = &message.outlets {
                                    for name in outlets {
                                        if ui.button(format!("📍 {name}")).clicked() {
                                            clicked_outlet = Some(name.clone());
                                        }
                                    }
                                }
                            }
                            Speaker::User => {
                                ui.with_layout(
                                    egui::Layout::right_to_left(egui::Align::TOP),
                                    |ui| {
                                        ui.label(RichText::new(&message.text).strong());
                                    },
                                );
                            }
                        }
                        ui.add_space(6.0);
                    }
                    if let Some(name) = clicked_outlet {
                        self.commands.open_outlet_popup(name);
                    }

                    if self.state.loading {
                        self.loading_indicator(ui);
                    }
                });

            ui.separator();
            self.input_row(ui);
        });
    }

    fn input_row(&mut self, ui: &mut Ui) {
        ui.horizontal(|ui| {
            let input = ui.add_enabled(
                !self.state.loading,
                egui::TextEdit::singleline(&mut self.state.input)
                    .hint_text("I am looking for ..."),
            );
            let submitted =
                input.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
            let clicked = ui
                .add_enabled(!self.state.loading, egui::Button::new("➤"))
                .clicked();
            if submitted || clicked {
                self.send_current_input();
            }
        });
    }

    fn loading_indicator(&self, ui: &mut Ui) {
        let dots = 1 + (ui.input(|i| i.time) * 2.5) as usize % 3;
        ui.label(RichText::new("●".repeat(dots)).color(Color32::GOLD));
        ui.ctx().request_repaint();
    }

    /// Starts one chat turn on a spawned task. The UI stays interactive
    /// while the call is in flight; only the input row is blocked.
    fn send_current_input(&mut self) {
        let message = self.state.input.trim().to_owned();
        if message.is_empty() {
            return;
        }
        self.state.input.clear();
        self.state.push_user(message.clone());

        let client = Arc::clone(&self.client);
        let session_id = self.state.session_id.clone();
        let reply_tx = self.reply_tx.clone();
        tokio::spawn(async move {
            let result = client.send(&message, session_id.as_deref()).await;
            let _ = reply_tx.send(result);
        });
    }

    fn drain_replies(&mut self) {
        for result in self.reply_rx.try_iter().collect::<Vec<_>>() {
            match result {
                Ok(reply) => self.state.apply_reply(reply, &self.commands),
                Err(err) => {
                    log::error!("assistant call failed: {err}");
                    self.state.apply_error();
                }
            }
        }
    }
}
