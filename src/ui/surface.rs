//! egui map surface.
//!
//! Binds the outlet store and the marker interaction state to on-screen
//! markers and service circles. Each frame it drains the command channel,
//! advances icon animations and any fly-to transition, hit-tests the pointer
//! against marker rects to feed hover events (in pointer order, no
//! coalescing), and paints. It never mutates interaction state except through
//! the state machine's operations.

use crate::bridge::{CommandReceiver, MapCommand};
use crate::core::config::MapConfig;
use crate::core::geo::Point;
use crate::core::outlet::{Outlet, OutletStore};
use crate::core::viewport::Viewport;
use crate::interaction::animation::FlyToAnimation;
use crate::interaction::state::MarkerInteraction;
use crate::ui::popup::OutletPopup;
use egui::{Color32, Pos2, Rect, Response, Sense, Stroke, Ui, Vec2};

#[cfg(feature = "tokio-runtime")]
use crate::net::outlets::OutletClient;
#[cfg(feature = "tokio-runtime")]
use crate::prelude::Arc;
#[cfg(feature = "tokio-runtime")]
use crossbeam_channel::{Receiver, Sender};

const MARKER_FILL: Color32 = Color32::WHITE;
const MARKER_FILL_HIGHLIGHTED: Color32 = Color32::from_rgb(0xdb, 0x00, 0x07);
const MARKER_STROKE: Color32 = Color32::DARK_GRAY;
const MARKER_BORDER: Color32 = Color32::from_rgb(0x2c, 0x7f, 0xb8);
const CIRCLE_FILL: Color32 = Color32::from_rgba_premultiplied(60, 120, 180, 40);
const CIRCLE_STROKE: Color32 = Color32::from_rgb(0xad, 0xd8, 0xe6);

pub struct MapSurface {
    config: MapConfig,
    store: OutletStore,
    interaction: MarkerInteraction,
    commands: CommandReceiver,
    viewport: Viewport,
    popup: OutletPopup,
    open_popup: Option<u64>,
    fly_to: Option<FlyToAnimation>,
    #[cfg(feature = "tokio-runtime")]
    outlets_tx: Sender<Vec<Outlet>>,
    #[cfg(feature = "tokio-runtime")]
    outlets_rx: Receiver<Vec<Outlet>>,
}

impl MapSurface {
    pub fn new(config: MapConfig, commands: CommandReceiver) -> Self {
        let viewport = Viewport::new(config.center, config.zoom, Point::new(0.0, 0.0));
        let interaction = MarkerInteraction::new(config.icon_min_size, config.icon_max_size);
        #[cfg(feature = "tokio-runtime")]
        let (outlets_tx, outlets_rx) = crossbeam_channel::unbounded();
        Self {
            config,
            store: OutletStore::new(),
            interaction,
            commands,
            viewport,
            popup: OutletPopup::new(),
            open_popup: None,
            fly_to: None,
            #[cfg(feature = "tokio-runtime")]
            outlets_tx,
            #[cfg(feature = "tokio-runtime")]
            outlets_rx,
        }
    }

    /// Replaces the outlet set wholesale (the only kind of update).
    pub fn set_outlets(&mut self, outlets: Vec<Outlet>) {
        self.open_popup = None;
        self.store.replace_all(outlets);
    }

    /// Kicks off the one-shot outlet load on a spawned task; the result is
    /// swapped in on a later frame. A failed load arrives as an empty set.
    #[cfg(feature = "tokio-runtime")]
    pub fn load_outlets(&self) {
        let client = Arc::new(OutletClient::new(&self.config));
        let tx = self.outlets_tx.clone();
        tokio::spawn(async move {
            let _ = tx.send(client.load().await);
        });
    }

    /// Swaps in a finished outlet load, if one arrived since the last frame.
    #[cfg(feature = "tokio-runtime")]
    fn poll_outlet_load(&mut self) {
        if let Some(outlets) = self.outlets_rx.try_iter().last() {
            self.set_outlets(outlets);
        }
    }

    #[cfg(not(feature = "tokio-runtime"))]
    fn poll_outlet_load(&mut self) {}

    pub fn store(&self) -> &OutletStore {
        &self.store
    }

    pub fn interaction(&self) -> &MarkerInteraction {
        &self.interaction
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Id of the outlet whose callout is currently open, if any
    pub fn open_popup_id(&self) -> Option<u64> {
        self.open_popup
    }

    /// Resolves a name fragment and opens the matching outlet's callout,
    /// recentering the view on it at the current zoom. No match is a silent
    /// no-op.
    pub fn open_popup_for(&mut self, fragment: &str) {
        match self.store.find_by_name_fragment(fragment) {
            Some(outlet) => {
                let target = outlet.position();
                self.open_popup = Some(outlet.id);
                self.fly_to = Some(FlyToAnimation::new(
                    self.viewport.center,
                    target,
                    self.config.fly_duration,
                ));
            }
            None => log::debug!("popup request for {fragment:?} matched no outlet"),
        }
    }

    fn handle_command(&mut self, command: MapCommand) {
        match command {
            MapCommand::HighlightByName(names) => {
                self.interaction.set_highlighted_names(Some(names));
            }
            MapCommand::OpenOutletPopup(fragment) => self.open_popup_for(&fragment),
        }
    }

    /// Renders one frame of the surface.
    pub fn ui(&mut self, ui: &mut Ui) -> Response {
        let (rect, response) = ui.allocate_exact_size(ui.available_size(), Sense::click());
        self.viewport
            .set_size(Point::new(rect.width() as f64, rect.height() as f64));

        for command in self.commands.drain() {
            self.handle_command(command);
        }

        self.poll_outlet_load();

        if let Some(fly) = &self.fly_to {
            let (center, done) = fly.update();
            self.viewport.set_center(center);
            if done {
                self.fly_to = None;
            } else {
                ui.ctx().request_repaint();
            }
        }

        if self.interaction.tick() {
            ui.ctx().request_repaint();
        }

        self.process_pointer(&response, rect);
        self.paint(ui, rect);

        response
    }

    fn marker_rect(&self, outlet: &Outlet, rect: Rect) -> Rect {
        let screen = self.viewport.lat_lng_to_screen(&outlet.position());
        let size = self.interaction.icon_size(outlet.id) as f32;
        Rect::from_center_size(
            Pos2::new(rect.left() + screen.x as f32, rect.top() + screen.y as f32),
            Vec2::splat(size),
        )
    }

    /// Feeds hover transitions and marker clicks from this frame's pointer
    /// state. Events apply in the order the pointer reports them; a direct
    /// marker-to-marker move is an end followed by a start.
    fn process_pointer(&mut self, response: &Response, rect: Rect) {
        let pointer = response.hover_pos();
        let hit = pointer.and_then(|pos| {
            self.store
                .iter()
                .find(|outlet| self.marker_rect(outlet, rect).contains(pos))
                .map(|outlet| outlet.id)
        });

        match (self.interaction.hovered(), hit) {
            (Some(current), Some(new)) if current != new => {
                self.interaction.on_hover_end();
                self.interaction.on_hover_start(new, &self.store);
            }
            (Some(_), None) => self.interaction.on_hover_end(),
            (None, Some(new)) => self.interaction.on_hover_start(new, &self.store),
            _ => {}
        }

        if response.clicked() {
            // A click on a marker opens its callout; elsewhere closes it.
            self.open_popup = hit;
        }
    }

    fn paint(&self, ui: &mut Ui, rect: Rect) {
        let painter = ui.painter_at(rect);
        painter.rect_filled(rect, 0.0, Color32::from_gray(245));

        // Service circle for the hovered outlet only
        if let Some(hovered) = self.interaction.hovered() {
            if let Some(outlet) = self.store.get(hovered) {
                let screen = self.viewport.lat_lng_to_screen(&outlet.position());
                let center =
                    Pos2::new(rect.left() + screen.x as f32, rect.top() + screen.y as f32);
                let radius_px =
                    (outlet.radius / self.viewport.meters_per_pixel(outlet.lat)) as f32;
                painter.circle(
                    center,
                    radius_px,
                    CIRCLE_FILL,
                    Stroke::new(2.0, CIRCLE_STROKE),
                );
            }
        }

        for outlet in self.store.iter() {
            let marker = self.marker_rect(outlet, rect);
            let fill = if self.interaction.is_highlighted(outlet) {
                MARKER_FILL_HIGHLIGHTED
            } else {
                MARKER_FILL
            };
            let stroke = if self.interaction.has_border(outlet.id) {
                Stroke::new(3.0, MARKER_BORDER)
            } else {
                Stroke::new(1.0, MARKER_STROKE)
            };
            painter.circle(marker.center(), marker.width() / 2.0, fill, stroke);
        }

        painter.text(
            rect.right_bottom() - Vec2::new(4.0, 2.0),
            egui::Align2::RIGHT_BOTTOM,
            &self.config.tile_attribution,
            egui::FontId::proportional(9.0),
            Color32::GRAY,
        );

        if let Some(id) = self.open_popup {
            if let Some(outlet) = self.store.get(id) {
                let marker = self.marker_rect(outlet, rect);
                self.popup.show(ui, marker.center_top(), outlet);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bridge::command_channel;

    fn outlet(id: u64, name: &str, lat: f64, lng: f64, radius: f64) -> Outlet {
        Outlet {
            id,
            name: name.to_string(),
            address: "1 Test Street".to_string(),
            lat,
            lng,
            radius,
            waze_url: String::new(),
        }
    }

    fn surface_with_outlets() -> MapSurface {
        let (_commands, receiver) = command_channel();
        let mut surface = MapSurface::new(MapConfig::default(), receiver);
        surface.set_outlets(vec![
            outlet(1, "McDonald's SS2 DT", 3.10, 101.60, 500.0),
            outlet(2, "McDonald's Cheras", 3.1005, 101.60, 400.0),
        ]);
        surface
    }

    #[test]
    fn test_open_popup_for_resolves_fragment() {
        let mut surface = surface_with_outlets();
        surface.open_popup_for("Cheras");
        assert_eq!(surface.open_popup, Some(2));
        assert!(surface.fly_to.is_some());
        assert_eq!(
            surface.fly_to.as_ref().unwrap().target(),
            surface.store.get(2).unwrap().position()
        );
    }

    #[test]
    fn test_open_popup_for_no_match_is_silent() {
        let mut surface = surface_with_outlets();
        surface.open_popup_for("Sunway");
        assert!(surface.open_popup.is_none());
        assert!(surface.fly_to.is_none());
    }

    #[test]
    fn test_commands_mutate_visual_state() {
        let (commands, receiver) = command_channel();
        let mut surface = MapSurface::new(MapConfig::default(), receiver);
        surface.set_outlets(vec![outlet(1, "McDonald's SS2 DT", 3.10, 101.60, 500.0)]);

        commands.highlight_outlets_by_name(vec!["SS2".to_string()]);
        commands.open_outlet_popup("SS2");
        for command in surface.commands.drain() {
            surface.handle_command(command);
        }

        let o = surface.store.get(1).unwrap().clone();
        assert!(surface.interaction.is_highlighted(&o));
        assert_eq!(surface.open_popup, Some(1));
    }

    #[test]
    fn test_replacing_outlets_closes_popup() {
        let mut surface = surface_with_outlets();
        surface.open_popup_for("SS2");
        assert!(surface.open_popup.is_some());
        surface.set_outlets(Vec::new());
        assert!(surface.open_popup.is_none());
        assert!(surface.store.is_empty());
    }
}
