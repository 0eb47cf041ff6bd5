//! Centered loading overlay shown while a backend request is in flight.

use super::super::*;
use eframe::egui;

impl TrackdeckApp {
    pub(crate) fn render_loading_overlay(&mut self, ctx: &egui::Context) {
        if !self.loading {
            return;
        }
        let palette = palette(self.theme);

        egui::Area::new(egui::Id::new("loading_overlay"))
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .interactable(false)
            .show(ctx, |ui| {
                egui::Frame::popup(ui.style())
                    .fill(palette.bg_secondary)
                    .stroke(egui::Stroke::new(1.0, palette.border))
                    .show(ui, |ui| {
                        ui.horizontal(|ui| {
                            ui.add(egui::Spinner::new());
                            ui.label(
                                egui::RichText::new("Loading...").color(palette.text_primary),
                            );
                        });
                    });
            });
    }
}
