//! Detail callout for a single outlet: name, address, and the external
//! navigation link.

use crate::core::outlet::Outlet;
use egui::{Color32, FontId, Pos2, Rect, Ui, Vec2};

#[derive(Debug, Clone)]
pub struct PopupStyle {
    pub background_color: Color32,
    pub border_color: Color32,
    pub border_width: f32,
    pub rounding: f32,
    pub padding: f32,
    pub title_font: FontId,
    pub body_font: FontId,
    pub text_color: Color32,
    pub link_color: Color32,
    pub width: f32,
}

impl Default for PopupStyle {
    fn default() -> Self {
        Self {
            background_color: Color32::WHITE,
            border_color: Color32::GRAY,
            border_width: 1.0,
            rounding: 6.0,
            padding: 8.0,
            title_font: FontId::proportional(14.0),
            body_font: FontId::proportional(11.0),
            text_color: Color32::BLACK,
            link_color: Color32::BLUE,
            width: 220.0,
        }
    }
}

/// Renders an outlet callout anchored above a marker position.
pub struct OutletPopup {
    style: PopupStyle,
}

impl Default for OutletPopup {
    fn default() -> Self {
        Self::new()
    }
}

impl OutletPopup {
    pub fn new() -> Self {
        Self {
            style: PopupStyle::default(),
        }
    }

    pub fn with_style(mut self, style: PopupStyle) -> Self {
        self.style = style;
        self
    }

    /// Draws the callout with its anchor point at `anchor` (the top of the
    /// marker). Clicking the navigation link opens the outlet's external URL
    /// in a new tab.
    pub fn show(&self, ui: &mut Ui, anchor: Pos2, outlet: &Outlet) {
        let style = &self.style;
        let line_height = style.body_font.size + 4.0;
        let height = style.padding * 2.0 + style.title_font.size + 4.0 + line_height * 2.0;
        let popup_rect = Rect::from_min_size(
            Pos2::new(anchor.x - style.width / 2.0, anchor.y - height - 12.0),
            Vec2::new(style.width, height),
        );

        let painter = ui.painter();
        painter.rect_filled(popup_rect, style.rounding, style.background_color);
        painter.rect_stroke(
            popup_rect,
            style.rounding,
            (style.border_width, style.border_color),
        );

        let inner = popup_rect.shrink(style.padding);
        painter.text(
            inner.center_top(),
            egui::Align2::CENTER_TOP,
            &outlet.name,
            style.title_font.clone(),
            style.text_color,
        );
        painter.text(
            Pos2::new(inner.center().x, inner.top() + style.title_font.size + 4.0),
            egui::Align2::CENTER_TOP,
            &outlet.address,
            style.body_font.clone(),
            style.text_color,
        );

        let link_pos = Pos2::new(inner.center().x, inner.bottom() - line_height);
        let link_rect = painter.text(
            link_pos,
            egui::Align2::CENTER_TOP,
            "Open in Waze",
            style.body_font.clone(),
            style.link_color,
        );

        if !outlet.waze_url.is_empty() {
            let link_response = ui.allocate_rect(link_rect, egui::Sense::click());
            if link_response.clicked() {
                ui.ctx().open_url(egui::OpenUrl::new_tab(&outlet.waze_url));
            }
        }
    }
}
