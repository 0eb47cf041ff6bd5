//! Central panel rendering the playlist card grid.

use super::super::cards::CardRow;
use super::super::*;
use eframe::egui::{self, RichText};

impl TrackdeckApp {
    pub(crate) fn render_card_grid(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            if self.grid.empty_state_visible {
                ui.centered_and_justified(|ui| {
                    ui.label(
                        RichText::new("No playlists found")
                            .heading()
                            .color(palette(self.theme).text_muted),
                    );
                });
                return;
            }

            egui::ScrollArea::vertical()
                .auto_shrink([false; 2])
                .show(ui, |ui| {
                    let theme = self.theme;
                    for row in self.grid.rows.iter().filter(|row| row.visible) {
                        render_card(ui, row, theme);
                        ui.add_space(8.0);
                    }
                });
        });
    }
}

fn render_card(ui: &mut egui::Ui, row: &CardRow, theme: trackdeck_core::ThemeMode) {
    let palette = palette(theme);
    egui::Frame::group(ui.style())
        .fill(palette.bg_secondary)
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                // Artwork tile, or the initial-letter placeholder on fallback.
                let initial = row
                    .summary
                    .title
                    .chars()
                    .next()
                    .unwrap_or('?')
                    .to_uppercase()
                    .to_string();
                let tile_color = if row.use_artwork_fallback() {
                    palette.text_muted
                } else {
                    palette.accent
                };
                ui.label(RichText::new(initial).heading().color(tile_color));
                ui.add_space(8.0);

                ui.vertical(|ui| {
                    ui.label(
                        RichText::new(&row.summary.title)
                            .strong()
                            .color(palette.text_primary),
                    );
                    ui.label(
                        RichText::new(format!("{} tracks", row.summary.track_count))
                            .small()
                            .color(palette.text_secondary),
                    );
                    if !row.summary.created_at.is_empty() {
                        ui.label(
                            RichText::new(format!("Created {}", row.summary.created_at))
                                .small()
                                .color(palette.text_muted),
                        );
                    }
                    if !row.summary.owner.is_empty() {
                        ui.label(
                            RichText::new(format!("by {}", row.summary.owner))
                                .small()
                                .color(palette.text_muted),
                        );
                    }
                });
            });
        });
}
