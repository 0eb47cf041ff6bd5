//! New-playlist dialog with required-field validation.

use super::super::*;
use eframe::egui::{self, RichText};

impl TrackdeckApp {
    pub(crate) fn render_new_playlist_dialog(&mut self, ctx: &egui::Context) {
        if !self.new_playlist_open {
            return;
        }
        let palette = palette(self.theme);

        let mut open = true;
        let mut submitted = false;
        let mut cancelled = false;
        egui::Window::new("New playlist")
            .open(&mut open)
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                ui.label("Name *");
                let response = ui.text_edit_singleline(&mut self.new_playlist_title);
                if response.changed() {
                    self.new_playlist_title_error = false;
                }
                if self.new_playlist_title_error {
                    ui.label(
                        RichText::new("This field is required")
                            .small()
                            .color(egui::Color32::from_rgb(0xd9, 0x3a, 0x3a)),
                    );
                }
                ui.add_space(4.0);
                ui.label(RichText::new("Description").color(palette.text_secondary));
                ui.text_edit_multiline(&mut self.new_playlist_description);
                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    if ui.button("Create").clicked() {
                        submitted = true;
                    }
                    if ui.button("Cancel").clicked() {
                        cancelled = true;
                    }
                });
            });

        if submitted {
            self.submit_new_playlist();
        }
        if cancelled || !open {
            self.new_playlist_open = false;
            self.new_playlist_title_error = false;
        }
    }
}
