//! Top bar and sidebar rendering for library navigation and quick actions.

use super::super::*;
use eframe::egui::{self, RichText};
use trackdeck_core::{SortKey, ThemeMode};

impl TrackdeckApp {
    pub(crate) fn render_top_bar(&mut self, ctx: &egui::Context) {
        let accent = palette(self.theme).accent;
        egui::TopBottomPanel::top("top")
            .resizable(false)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.heading(RichText::new("Trackdeck").color(accent));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let label = match self.theme {
                            ThemeMode::Dark => "Light mode",
                            ThemeMode::Light => "Dark mode",
                        };
                        if ui.button(label).clicked() {
                            self.toggle_theme();
                        }
                    });
                });
            });
    }

    pub(crate) fn render_sidebar(&mut self, ctx: &egui::Context) {
        let text_primary = palette(self.theme).text_primary;
        egui::SidePanel::left("sidebar")
            .default_width(260.0)
            .show(ctx, |ui| {
                ui.heading(
                    RichText::new(format!(
                        "Playlists ({}/{})",
                        self.grid.visible_count(),
                        self.grid.rows.len()
                    ))
                    .color(text_primary),
                );
                ui.add_space(8.0);

                let response = ui.add(
                    egui::TextEdit::singleline(&mut self.search_query)
                        .hint_text("Search playlists"),
                );
                if response.changed() {
                    self.on_search_changed();
                }
                ui.add_space(8.0);

                let mut pending_sort: Option<SortKey> = None;
                egui::ComboBox::from_id_salt("sort_key")
                    .selected_text(
                        self.sort_key
                            .map(|key| key.label())
                            .unwrap_or("Sort by..."),
                    )
                    .show_ui(ui, |ui| {
                        for key in SortKey::ALL {
                            if ui
                                .selectable_label(self.sort_key == Some(key), key.label())
                                .clicked()
                            {
                                pending_sort = Some(key);
                            }
                        }
                    });
                if let Some(key) = pending_sort {
                    self.set_sort_key(key);
                }
                ui.add_space(8.0);

                ui.horizontal(|ui| {
                    if ui.button("+ New playlist").clicked() {
                        self.new_playlist_open = true;
                    }
                    if ui.button("Reload library").clicked() {
                        self.request_reload();
                    }
                });
            });
    }
}
