//! Theme palettes and style application for the egui app.

use super::TrackdeckApp;
use eframe::egui::{
    self, style::WidgetVisuals, Color32, CornerRadius, FontFamily, FontId, Margin, Stroke,
    TextStyle, Visuals,
};
use trackdeck_core::ThemeMode;

/// Color set for one theme mode.
pub(super) struct Palette {
    pub bg_primary: Color32,
    pub bg_secondary: Color32,
    pub bg_tertiary: Color32,
    pub text_primary: Color32,
    pub text_secondary: Color32,
    pub text_muted: Color32,
    pub accent: Color32,
    pub accent_hover: Color32,
    pub border: Color32,
}

const DARK_PALETTE: Palette = Palette {
    bg_primary: Color32::from_rgb(0x0d, 0x11, 0x17),
    bg_secondary: Color32::from_rgb(0x16, 0x1b, 0x22),
    bg_tertiary: Color32::from_rgb(0x21, 0x26, 0x29),
    text_primary: Color32::from_rgb(0xc9, 0xd1, 0xd9),
    text_secondary: Color32::from_rgb(0x8b, 0x94, 0x9e),
    text_muted: Color32::from_rgb(0x6e, 0x76, 0x81),
    accent: Color32::from_rgb(0x1d, 0xb9, 0x54),
    accent_hover: Color32::from_rgb(0x17, 0x9a, 0x45),
    border: Color32::from_rgb(0x30, 0x36, 0x3d),
};

const LIGHT_PALETTE: Palette = Palette {
    bg_primary: Color32::from_rgb(0xf6, 0xf8, 0xfa),
    bg_secondary: Color32::from_rgb(0xff, 0xff, 0xff),
    bg_tertiary: Color32::from_rgb(0xea, 0xee, 0xf2),
    text_primary: Color32::from_rgb(0x1f, 0x23, 0x28),
    text_secondary: Color32::from_rgb(0x57, 0x60, 0x69),
    text_muted: Color32::from_rgb(0x80, 0x88, 0x91),
    accent: Color32::from_rgb(0x14, 0x94, 0x43),
    accent_hover: Color32::from_rgb(0x0f, 0x7b, 0x37),
    border: Color32::from_rgb(0xd1, 0xd9, 0xe0),
};

pub(super) fn palette(mode: ThemeMode) -> &'static Palette {
    match mode {
        ThemeMode::Dark => &DARK_PALETTE,
        ThemeMode::Light => &LIGHT_PALETTE,
    }
}

impl TrackdeckApp {
    /// Apply the style for the current theme. No-op until the theme changes.
    pub(super) fn ensure_style(&mut self, ctx: &egui::Context) {
        if self.style_applied_for == Some(self.theme) {
            return;
        }

        let palette = palette(self.theme);
        let mut style = (*ctx.style()).clone();
        style.visuals = match self.theme {
            ThemeMode::Dark => Visuals::dark(),
            ThemeMode::Light => Visuals::light(),
        };
        style.visuals.override_text_color = Some(palette.text_primary);
        style.visuals.window_fill = palette.bg_primary;
        style.visuals.panel_fill = palette.bg_secondary;
        style.visuals.extreme_bg_color = palette.bg_primary;
        style.visuals.faint_bg_color = palette.bg_tertiary;
        style.visuals.window_stroke = Stroke::new(1.0, palette.border);
        style.visuals.hyperlink_color = palette.accent;
        style.visuals.text_edit_bg_color = Some(palette.bg_tertiary);

        style.visuals.widgets.noninteractive = WidgetVisuals {
            bg_fill: palette.bg_secondary,
            weak_bg_fill: palette.bg_secondary,
            bg_stroke: Stroke::new(1.0, palette.border),
            corner_radius: CornerRadius::same(6),
            fg_stroke: Stroke::new(1.0, palette.text_secondary),
            expansion: 0.0,
        };
        style.visuals.widgets.inactive = WidgetVisuals {
            bg_fill: palette.bg_tertiary,
            weak_bg_fill: palette.bg_tertiary,
            bg_stroke: Stroke::new(1.0, palette.border),
            corner_radius: CornerRadius::same(6),
            fg_stroke: Stroke::new(1.0, palette.text_primary),
            expansion: 0.0,
        };
        style.visuals.widgets.hovered = WidgetVisuals {
            bg_fill: palette.accent_hover,
            weak_bg_fill: palette.accent_hover,
            bg_stroke: Stroke::new(1.0, palette.accent_hover),
            corner_radius: CornerRadius::same(6),
            fg_stroke: Stroke::new(1.0, Color32::WHITE),
            expansion: 0.5,
        };
        style.visuals.widgets.active = WidgetVisuals {
            bg_fill: palette.accent,
            weak_bg_fill: palette.accent,
            bg_stroke: Stroke::new(1.0, palette.accent),
            corner_radius: CornerRadius::same(6),
            fg_stroke: Stroke::new(1.0, Color32::WHITE),
            expansion: 0.5,
        };
        style.visuals.widgets.open = WidgetVisuals {
            bg_fill: palette.accent,
            weak_bg_fill: palette.accent,
            bg_stroke: Stroke::new(1.0, palette.accent),
            corner_radius: CornerRadius::same(6),
            fg_stroke: Stroke::new(1.0, Color32::WHITE),
            expansion: 0.0,
        };

        style.spacing.window_margin = Margin::same(12);
        style.spacing.button_padding = egui::vec2(14.0, 8.0);
        style.spacing.item_spacing = egui::vec2(12.0, 8.0);
        style.spacing.interact_size.y = 34.0;
        style.spacing.text_edit_width = 260.0;
        style.spacing.combo_width = 200.0;

        style.text_styles.insert(
            TextStyle::Heading,
            FontId::new(24.0, FontFamily::Proportional),
        );
        style
            .text_styles
            .insert(TextStyle::Body, FontId::new(16.0, FontFamily::Proportional));
        style.text_styles.insert(
            TextStyle::Button,
            FontId::new(15.0, FontFamily::Proportional),
        );
        style.text_styles.insert(
            TextStyle::Small,
            FontId::new(12.0, FontFamily::Proportional),
        );

        ctx.set_style(style);
        self.style_applied_for = Some(self.theme);
    }
}
