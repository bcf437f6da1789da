use egui::{Align2, Id, Mesh, Pos2, RichText, Sense, Shape, Stroke, Ui, Vec2};

use crate::model::grid::compute_geometry;
use crate::model::{DayRecord, DayStatus, GridGeometry, HoverState, LifeCalendar};
use crate::ui::theme;
use crate::ui::theme_def::{CellPalette, ThemeSizing};

/// Render the progress summary above the grid.
/// Returns `true` when the user asked to reset the profile.
pub fn show_progress_header(calendar: &LifeCalendar, ui: &mut Ui) -> bool {
    let pct = calendar.progress_percent();
    let palette = theme::cell_palette();
    let mut reset_requested = false;

    ui.add_space(4.0);
    ui.horizontal(|ui| {
        ui.label(
            RichText::new("Your Life Calendar")
                .font(theme::font_title())
                .strong()
                .color(theme::text_primary()),
        );
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui
                .button(format!("{}  Reset", egui_phosphor::regular::ARROW_COUNTER_CLOCKWISE))
                .on_hover_text("Enter a different birth date or life expectancy")
                .clicked()
            {
                reset_requested = true;
            }
        });
    });
    ui.add_space(6.0);

    let bar = egui::ProgressBar::new((pct / 100.0) as f32)
        .fill(theme::progress_fill())
        .desired_height(theme::sizing().progress_bar_height)
        .rounding(egui::Rounding::same(theme::sizing().progress_bar_height / 2.0));
    ui.scope(|ui| {
        ui.visuals_mut().extreme_bg_color = theme::progress_track();
        ui.add(bar);
    });

    ui.add_space(4.0);
    ui.horizontal(|ui| {
        ui.label(
            RichText::new(format!("Progress: {:.1}% of your expected life", pct))
                .font(theme::font_body())
                .color(theme::text_secondary()),
        );
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            for status in [DayStatus::Future, DayStatus::Today, DayStatus::Past] {
                legend_entry(ui, &palette, status);
            }
        });
    });
    ui.label(
        RichText::new(format!(
            "{} days lived · {} days remaining",
            calendar.days_lived(),
            calendar.days_remaining()
        ))
        .font(theme::font_small())
        .color(theme::text_dim()),
    );
    ui.add_space(4.0);
    reset_requested
}

fn legend_entry(ui: &mut Ui, palette: &CellPalette, status: DayStatus) {
    ui.label(
        RichText::new(status.label())
            .font(theme::font_small())
            .color(theme::text_secondary()),
    );
    let (rect, _) = ui.allocate_exact_size(Vec2::splat(10.0), Sense::hover());
    ui.painter().rect_filled(rect, 2.0, palette.color_for(status));
    ui.add_space(6.0);
}

/// Render the day grid into all remaining space and drive the hover tooltip.
///
/// Geometry is computed once here and used for both painting and hit-testing.
/// Colours and spacing come in as arguments; nothing here reads the active theme.
pub fn show_calendar_grid(
    calendar: &LifeCalendar,
    hover: &mut HoverState,
    palette: &CellPalette,
    sizing: ThemeSizing,
    ui: &mut Ui,
) -> GridGeometry {
    let days = calendar.days();

    let (response, painter) = ui.allocate_painter(ui.available_size(), Sense::hover());
    let rect = response.rect;
    let geometry = compute_geometry(days.len(), rect.width(), rect.height(), sizing.grid_padding);

    painter.rect_filled(rect, 0.0, palette.background);
    if geometry.is_empty() {
        hover.pointer_left();
        return geometry;
    }

    paint_cells(&painter, rect.min, &geometry, days, palette, sizing.cell_gap);

    match response.hover_pos() {
        Some(pos) => {
            let local = (pos - rect.min).to_pos2();
            hover.pointer_moved(local, pos, &geometry, days.len());
        }
        None => hover.pointer_left(),
    }

    if let (Some(index), Some(pointer)) = (hover.day, hover.pointer) {
        let bounds = geometry.cell_bounds(index).translate(rect.min.to_vec2());
        painter.rect_stroke(
            bounds,
            0.0,
            Stroke::new(sizing.hover_outline_width, theme::hover_outline()),
        );
        show_day_tooltip(calendar, index, pointer, palette, ui.ctx());
    }

    geometry
}

/// One mesh for the whole grid; each day contributes a single quad.
fn paint_cells(
    painter: &egui::Painter,
    origin: Pos2,
    geometry: &GridGeometry,
    days: &[DayRecord],
    palette: &CellPalette,
    gap: f32,
) {
    let offset = origin.to_vec2();
    let mut mesh = Mesh::default();
    mesh.reserve_vertices(days.len() * 4);
    mesh.reserve_triangles(days.len() * 2);
    for (i, day) in days.iter().enumerate() {
        let cell = geometry.cell_interior(i, gap).translate(offset);
        mesh.add_colored_rect(cell, palette.color_for(day.status()));
    }
    painter.add(Shape::mesh(mesh));
}

fn show_day_tooltip(
    calendar: &LifeCalendar,
    index: usize,
    pointer: Pos2,
    palette: &CellPalette,
    ctx: &egui::Context,
) {
    let Some(desc) = calendar.describe(index) else {
        return;
    };
    egui::Area::new(Id::new("day-tip"))
        .order(egui::Order::Tooltip)
        .fixed_pos(pointer + Vec2::new(14.0, 14.0))
        .interactable(false)
        .show(ctx, |ui| {
            egui::Frame::popup(ui.style()).show(ui, |ui| {
                ui.strong(&desc.formatted_date);
                ui.label(format!("Age: {}", desc.age_label()));
                ui.horizontal(|ui| {
                    let (swatch, _) = ui.allocate_exact_size(Vec2::splat(8.0), Sense::hover());
                    ui.painter()
                        .rect_filled(swatch, 2.0, palette.color_for(desc.status));
                    ui.label(
                        RichText::new(format!("({})", desc.status.label()))
                            .color(theme::text_secondary()),
                    );
                });
                ui.label(
                    RichText::new(format!("Day {} of {}", index + 1, calendar.days().len()))
                        .font(theme::font_small())
                        .color(theme::text_dim()),
                );
            });
        });
}

/// Centered placeholder for a surface that has nothing to show.
pub fn show_empty_surface(message: &str, ui: &mut Ui) {
    let (response, painter) = ui.allocate_painter(ui.available_size(), Sense::hover());
    painter.rect_filled(response.rect, 0.0, theme::cell_palette().background);
    painter.text(
        response.rect.center(),
        Align2::CENTER_CENTER,
        message,
        theme::font_body(),
        theme::text_dim(),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Gender, UserProfile};
    use crate::ui::theme_def::ThemeDefinition;
    use chrono::NaiveDate;

    #[test]
    fn grid_uses_the_palette_and_sizing_it_is_given() {
        let birth = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();
        let profile = UserProfile::new(birth, 10.0, Gender::Female, "Norway");
        let calendar = LifeCalendar::new(profile, birth);

        theme::set_active(&ThemeDefinition::dark());
        let mut sizing = ThemeDefinition::dark().sizing;
        sizing.grid_padding = 8.0;
        let palette = ThemeDefinition::light().cell_palette();

        let mut hover = HoverState::default();
        let mut geometry = None;
        let ctx = egui::Context::default();
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                geometry = Some(show_calendar_grid(&calendar, &mut hover, &palette, sizing, ui));
            });
        });

        let geometry = geometry.expect("grid rendered");
        assert_eq!(geometry.padding, 8.0);
        assert!(!geometry.is_empty());
        assert_eq!(hover, HoverState::default());
    }
}
