//! Ready-made eframe application wiring the map surface to the chat panel
//! through the command channel.

use crate::bridge::command_channel;
use crate::chat::widget::ChatPanel;
use crate::core::config::MapConfig;
use crate::ui::surface::MapSurface;
use crate::Result;

/// Full-window outlet map with the assistant panel docked on the right.
///
/// Owns its own tokio runtime so network tasks spawned by the widgets have a
/// context to run on.
pub struct OutletMapApp {
    runtime: tokio::runtime::Runtime,
    surface: MapSurface,
    chat: ChatPanel,
}

impl OutletMapApp {
    pub fn new(config: MapConfig) -> Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()?;

        let (commands, receiver) = command_channel();
        let chat = ChatPanel::new(&config, commands);
        let surface = MapSurface::new(config, receiver);

        let _guard = runtime.enter();
        surface.load_outlets();
        drop(_guard);

        Ok(Self {
            runtime,
            surface,
            chat,
        })
    }
}

impl eframe::App for OutletMapApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Widgets spawn tasks while handling input; keep the runtime entered
        // for the duration of the frame.
        let _guard = self.runtime.enter();

        egui::SidePanel::right("assistant")
            .default_width(320.0)
            .show(ctx, |ui| self.chat.ui(ui));
        egui::CentralPanel::default().show(ctx, |ui| {
            self.surface.ui(ui);
        });
    }
}
