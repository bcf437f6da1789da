//! Theme definition data model.
//!
//! Every visual parameter of the calendar is captured in [`ThemeDefinition`].
//! Themes are serialised as JSON with `#RRGGBB` / `#RRGGBBAA` colour strings
//! so that end-users can hand-edit them.
//!
//! All fields carry `#[serde(default)]` so that a partial JSON file is valid:
//! missing keys silently fall back to the built-in defaults.

use egui::Color32;
use serde::{Deserialize, Serialize};

use crate::model::DayStatus;

// ─── Hex-colour serde helper ────────────────────────────────────────────────

pub mod hex_color {
    use egui::Color32;
    use serde::{self, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(color: &Color32, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&to_hex(*color))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Color32, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        parse_hex_color(&s).map_err(serde::de::Error::custom)
    }

    pub fn to_hex(color: Color32) -> String {
        let [r, g, b, a] = color.to_srgba_unmultiplied();
        if a == 255 {
            format!("#{:02X}{:02X}{:02X}", r, g, b)
        } else {
            format!("#{:02X}{:02X}{:02X}{:02X}", r, g, b, a)
        }
    }

    pub fn parse_hex_color(s: &str) -> Result<Color32, String> {
        let s = s.trim().trim_start_matches('#');
        let channel = |range: std::ops::Range<usize>| {
            s.get(range)
                .ok_or_else(|| format!("Invalid hex color '{}'", s))
                .and_then(|h| u8::from_str_radix(h, 16).map_err(|e| e.to_string()))
        };
        match s.len() {
            6 => Ok(Color32::from_rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?)),
            8 => Ok(Color32::from_rgba_unmultiplied(
                channel(0..2)?,
                channel(2..4)?,
                channel(4..6)?,
                channel(6..8)?,
            )),
            _ => Err(format!("Invalid hex color '{}': expected 6 or 8 hex digits", s)),
        }
    }
}

// ─── Top-level definition ───────────────────────────────────────────────────

/// Complete theme definition.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeDefinition {
    pub meta: ThemeMeta,
    pub colors: ThemeColors,
    pub typography: ThemeTypography,
    pub spacing: ThemeSpacing,
    pub sizing: ThemeSizing,
    pub layout: ThemeLayout,
}

impl ThemeDefinition {
    /// The built-in dark theme.
    pub fn dark() -> Self {
        Self::default()
    }

    /// The built-in light theme.
    pub fn light() -> Self {
        let mut t = Self::default();
        t.meta = ThemeMeta {
            name: "Light".into(),
            author: "Built-in".into(),
            description: "A bright, clean light theme.".into(),
            variant: ThemeVariant::Light,
        };
        t.colors = ThemeColors::light();
        t
    }

    pub fn cell_palette(&self) -> CellPalette {
        CellPalette {
            background: self.colors.calendar_bg,
            past: self.colors.day_past,
            today: self.colors.day_today,
            future: self.colors.day_future,
        }
    }
}

// ─── Meta ───────────────────────────────────────────────────────────────────

/// Whether egui starts from `Visuals::dark()` or `Visuals::light()`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeVariant {
    #[default]
    Dark,
    Light,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeMeta {
    pub name: String,
    pub author: String,
    pub description: String,
    pub variant: ThemeVariant,
}

impl Default for ThemeMeta {
    fn default() -> Self {
        Self {
            name: "Dark".into(),
            author: "Built-in".into(),
            description: "The default dark theme.".into(),
            variant: ThemeVariant::Dark,
        }
    }
}

// ─── Colors ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeColors {
    // Calendar cells
    #[serde(with = "hex_color")]
    pub calendar_bg: Color32,
    #[serde(with = "hex_color")]
    pub day_past: Color32,
    #[serde(with = "hex_color")]
    pub day_today: Color32,
    #[serde(with = "hex_color")]
    pub day_future: Color32,
    #[serde(with = "hex_color")]
    pub hover_outline: Color32,

    // Backgrounds
    #[serde(with = "hex_color")]
    pub bg_panel: Color32,
    #[serde(with = "hex_color")]
    pub bg_field: Color32,
    #[serde(with = "hex_color")]
    pub bg_selected: Color32,
    #[serde(with = "hex_color")]
    pub status_bar_bg: Color32,

    // Borders
    #[serde(with = "hex_color")]
    pub border_subtle: Color32,

    // Text
    #[serde(with = "hex_color")]
    pub text_primary: Color32,
    #[serde(with = "hex_color")]
    pub text_secondary: Color32,
    #[serde(with = "hex_color")]
    pub text_dim: Color32,
    #[serde(with = "hex_color")]
    pub text_error: Color32,

    // Semantic
    #[serde(with = "hex_color")]
    pub accent: Color32,
    #[serde(with = "hex_color")]
    pub progress_track: Color32,
    #[serde(with = "hex_color")]
    pub progress_fill: Color32,

    // Widget colors (egui Visuals overrides)
    #[serde(with = "hex_color")]
    pub widget_bg_inactive: Color32,
    #[serde(with = "hex_color")]
    pub widget_bg_hovered: Color32,
    #[serde(with = "hex_color")]
    pub widget_bg_active: Color32,
}

impl Default for ThemeColors {
    fn default() -> Self {
        Self {
            calendar_bg: Color32::from_rgb(17, 24, 39),
            day_past: Color32::from_rgb(156, 163, 175),
            day_today: Color32::from_rgb(239, 68, 68),
            day_future: Color32::from_rgb(30, 58, 138),
            hover_outline: Color32::from_rgb(255, 255, 255),

            bg_panel: Color32::from_rgb(27, 30, 39),
            bg_field: Color32::from_rgb(20, 20, 28),
            bg_selected: Color32::from_rgba_unmultiplied(95, 145, 220, 34),
            status_bar_bg: Color32::from_rgb(26, 26, 36),

            border_subtle: Color32::from_rgb(47, 51, 63),

            text_primary: Color32::from_rgb(230, 232, 240),
            text_secondary: Color32::from_rgb(162, 168, 186),
            text_dim: Color32::from_rgb(111, 118, 136),
            text_error: Color32::from_rgb(248, 113, 113),

            accent: Color32::from_rgb(37, 99, 235),
            progress_track: Color32::from_rgb(55, 65, 81),
            progress_fill: Color32::from_rgb(37, 99, 235),

            widget_bg_inactive: Color32::from_rgb(38, 42, 54),
            widget_bg_hovered: Color32::from_rgb(48, 53, 67),
            widget_bg_active: Color32::from_rgb(57, 62, 78),
        }
    }
}

impl ThemeColors {
    fn light() -> Self {
        Self {
            calendar_bg: Color32::from_rgb(249, 250, 251),
            day_past: Color32::from_rgb(156, 163, 175),
            day_today: Color32::from_rgb(220, 38, 38),
            day_future: Color32::from_rgb(191, 219, 254),
            hover_outline: Color32::from_rgb(17, 24, 39),

            bg_panel: Color32::from_rgb(248, 249, 252),
            bg_field: Color32::from_rgb(255, 255, 255),
            bg_selected: Color32::from_rgba_unmultiplied(60, 120, 220, 30),
            status_bar_bg: Color32::from_rgb(235, 237, 242),

            border_subtle: Color32::from_rgb(210, 214, 222),

            text_primary: Color32::from_rgb(30, 32, 40),
            text_secondary: Color32::from_rgb(80, 86, 100),
            text_dim: Color32::from_rgb(140, 146, 158),
            text_error: Color32::from_rgb(185, 28, 28),

            accent: Color32::from_rgb(37, 99, 235),
            progress_track: Color32::from_rgb(229, 231, 235),
            progress_fill: Color32::from_rgb(37, 99, 235),

            widget_bg_inactive: Color32::from_rgb(232, 235, 240),
            widget_bg_hovered: Color32::from_rgb(220, 224, 232),
            widget_bg_active: Color32::from_rgb(208, 212, 222),
        }
    }
}

/// The four colours a calendar repaint needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellPalette {
    pub background: Color32,
    pub past: Color32,
    pub today: Color32,
    pub future: Color32,
}

impl CellPalette {
    pub fn color_for(&self, status: DayStatus) -> Color32 {
        match status {
            DayStatus::Past => self.past,
            DayStatus::Today => self.today,
            DayStatus::Future => self.future,
        }
    }
}

// ─── Typography ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeTypography {
    pub font_title_size: f32,
    pub font_body_size: f32,
    pub font_small_size: f32,
    /// Menu / toolbar button text
    pub font_menu_size: f32,
    /// Status bar text size
    pub font_status_size: f32,
}

impl Default for ThemeTypography {
    fn default() -> Self {
        Self {
            font_title_size: 20.0,
            font_body_size: 13.0,
            font_small_size: 11.0,
            font_menu_size: 12.0,
            font_status_size: 11.0,
        }
    }
}

// ─── Spacing ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeSpacing {
    pub item_spacing_x: f32,
    pub item_spacing_y: f32,
    pub button_padding_x: f32,
    pub button_padding_y: f32,
    /// Rounding radius applied to most widgets
    pub widget_rounding: f32,
    /// Rounding for windows and dialogs
    pub window_rounding: f32,
}

impl Default for ThemeSpacing {
    fn default() -> Self {
        Self {
            item_spacing_x: 8.0,
            item_spacing_y: 4.0,
            button_padding_x: 8.0,
            button_padding_y: 4.0,
            widget_rounding: 6.0,
            window_rounding: 8.0,
        }
    }
}

// ─── Sizing ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeSizing {
    /// Empty border around the day grid.
    pub grid_padding: f32,
    /// Gap removed from each side of a day cell.
    pub cell_gap: f32,
    pub hover_outline_width: f32,
    pub progress_bar_height: f32,
    pub status_bar_height: f32,
}

impl Default for ThemeSizing {
    fn default() -> Self {
        Self {
            grid_padding: 40.0,
            cell_gap: 1.0,
            hover_outline_width: 1.5,
            progress_bar_height: 10.0,
            status_bar_height: 24.0,
        }
    }
}

// ─── Layout ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeLayout {
    pub panel_inner_margin: f32,
    pub setup_form_width: f32,
    pub dialog_width: f32,
    pub about_dialog_width: f32,
    pub about_dialog_height: f32,
}

impl Default for ThemeLayout {
    fn default() -> Self {
        Self {
            panel_inner_margin: 16.0,
            setup_form_width: 420.0,
            dialog_width: 320.0,
            about_dialog_width: 300.0,
            about_dialog_height: 160.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_hex_colors() {
        assert_eq!(
            hex_color::parse_hex_color("#EF4444"),
            Ok(Color32::from_rgb(239, 68, 68))
        );
        assert_eq!(
            hex_color::parse_hex_color("11182780"),
            Ok(Color32::from_rgba_unmultiplied(17, 24, 39, 128))
        );
        assert!(hex_color::parse_hex_color("#12345").is_err());
        assert!(hex_color::parse_hex_color("#GG0000").is_err());
        assert!(hex_color::parse_hex_color("#ééé").is_err());
    }

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let json = r##"{
            "meta": { "name": "Sepia", "variant": "light" },
            "colors": { "day_today": "#00FF00" },
            "sizing": { "grid_padding": 12.0 }
        }"##;
        let def: ThemeDefinition = serde_json::from_str(json).unwrap();
        assert_eq!(def.meta.name, "Sepia");
        assert_eq!(def.meta.variant, ThemeVariant::Light);
        assert_eq!(def.colors.day_today, Color32::from_rgb(0, 255, 0));
        assert_eq!(def.colors.day_past, ThemeColors::default().day_past);
        assert_eq!(def.sizing.grid_padding, 12.0);
        assert_eq!(def.sizing.cell_gap, 1.0);
    }

    #[test]
    fn serialises_colors_as_hex() {
        let json = serde_json::to_value(ThemeDefinition::light()).unwrap();
        assert_eq!(json["colors"]["day_today"], "#DC2626");
        assert_eq!(json["meta"]["variant"], "light");
    }

    #[test]
    fn palettes_distinguish_every_status() {
        for def in [ThemeDefinition::dark(), ThemeDefinition::light()] {
            let p = def.cell_palette();
            let colors = [
                p.color_for(DayStatus::Past),
                p.color_for(DayStatus::Today),
                p.color_for(DayStatus::Future),
                p.background,
            ];
            for (i, a) in colors.iter().enumerate() {
                for b in &colors[i + 1..] {
                    assert_ne!(a, b, "{}", def.meta.name);
                }
            }
        }
    }
}
