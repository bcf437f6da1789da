use std::cell::RefCell;

use egui::{Color32, FontId, Rounding, Stroke, Visuals};

use crate::ui::theme_def::{CellPalette, ThemeDefinition, ThemeLayout, ThemeSizing, ThemeVariant};

thread_local! {
    static ACTIVE: RefCell<ThemeDefinition> = RefCell::new(ThemeDefinition::default());
}

/// Make `def` the theme read by every accessor below.
pub fn set_active(def: &ThemeDefinition) {
    ACTIVE.with(|active| {
        if *active.borrow() != *def {
            *active.borrow_mut() = def.clone();
        }
    });
}

fn with<R>(f: impl FnOnce(&ThemeDefinition) -> R) -> R {
    ACTIVE.with(|active| f(&active.borrow()))
}

// ── Palette ──────────────────────────────────────────────────────────────────

pub fn cell_palette() -> CellPalette {
    with(|t| t.cell_palette())
}

pub fn hover_outline() -> Color32 {
    with(|t| t.colors.hover_outline)
}

pub fn bg_panel() -> Color32 {
    with(|t| t.colors.bg_panel)
}

pub fn status_bar_bg() -> Color32 {
    with(|t| t.colors.status_bar_bg)
}

pub fn border_subtle() -> Color32 {
    with(|t| t.colors.border_subtle)
}

pub fn text_primary() -> Color32 {
    with(|t| t.colors.text_primary)
}

pub fn text_secondary() -> Color32 {
    with(|t| t.colors.text_secondary)
}

pub fn text_dim() -> Color32 {
    with(|t| t.colors.text_dim)
}

pub fn text_error() -> Color32 {
    with(|t| t.colors.text_error)
}

pub fn accent() -> Color32 {
    with(|t| t.colors.accent)
}

pub fn progress_track() -> Color32 {
    with(|t| t.colors.progress_track)
}

pub fn progress_fill() -> Color32 {
    with(|t| t.colors.progress_fill)
}

// ── Sizes ────────────────────────────────────────────────────────────────────

pub fn sizing() -> ThemeSizing {
    with(|t| t.sizing)
}

pub fn layout() -> ThemeLayout {
    with(|t| t.layout)
}

pub fn status_bar_height() -> f32 {
    with(|t| t.sizing.status_bar_height)
}

// ── Fonts ────────────────────────────────────────────────────────────────────

pub fn font_title() -> FontId {
    FontId::proportional(with(|t| t.typography.font_title_size))
}

pub fn font_body() -> FontId {
    FontId::proportional(with(|t| t.typography.font_body_size))
}

pub fn font_small() -> FontId {
    FontId::proportional(with(|t| t.typography.font_small_size))
}

pub fn font_menu() -> FontId {
    FontId::proportional(with(|t| t.typography.font_menu_size))
}

pub fn font_status() -> FontId {
    FontId::proportional(with(|t| t.typography.font_status_size))
}

// ── Apply custom visuals ─────────────────────────────────────────────────────

pub fn apply_theme(ctx: &egui::Context) {
    with(|t| {
        let c = &t.colors;
        let rounding = Rounding::same(t.spacing.widget_rounding);

        let mut visuals = match t.meta.variant {
            ThemeVariant::Dark => Visuals::dark(),
            ThemeVariant::Light => Visuals::light(),
        };

        visuals.override_text_color = Some(c.text_primary);
        visuals.panel_fill = c.bg_panel;
        visuals.window_fill = c.bg_panel;
        visuals.extreme_bg_color = c.bg_field;

        visuals.widgets.noninteractive.bg_fill = c.bg_panel;
        visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, c.border_subtle);
        visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, c.text_secondary);
        visuals.widgets.noninteractive.rounding = rounding;

        visuals.widgets.inactive.bg_fill = c.widget_bg_inactive;
        visuals.widgets.inactive.weak_bg_fill = c.widget_bg_inactive;
        visuals.widgets.inactive.bg_stroke = Stroke::new(1.0, c.border_subtle);
        visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, c.text_primary);
        visuals.widgets.inactive.rounding = rounding;

        visuals.widgets.hovered.bg_fill = c.widget_bg_hovered;
        visuals.widgets.hovered.weak_bg_fill = c.widget_bg_hovered;
        visuals.widgets.hovered.bg_stroke = Stroke::new(1.0, c.accent);
        visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, c.text_primary);
        visuals.widgets.hovered.rounding = rounding;

        visuals.widgets.active.bg_fill = c.widget_bg_active;
        visuals.widgets.active.weak_bg_fill = c.widget_bg_active;
        visuals.widgets.active.bg_stroke = Stroke::new(1.0, c.accent);
        visuals.widgets.active.fg_stroke = Stroke::new(2.0, c.text_primary);
        visuals.widgets.active.rounding = rounding;

        visuals.selection.bg_fill = c.bg_selected;
        visuals.selection.stroke = Stroke::new(1.0, c.accent);

        visuals.window_rounding = Rounding::same(t.spacing.window_rounding);
        visuals.window_stroke = Stroke::new(1.0, c.border_subtle);

        ctx.set_visuals(visuals);

        let mut style = (*ctx.style()).clone();
        style.spacing.item_spacing = egui::vec2(t.spacing.item_spacing_x, t.spacing.item_spacing_y);
        style.spacing.button_padding =
            egui::vec2(t.spacing.button_padding_x, t.spacing.button_padding_y);
        ctx.set_style(style);
    });
}
