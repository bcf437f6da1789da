use egui::{Color32, Context, RichText, Window};

use crate::app::LifeCalendarApp;
use crate::ui::theme;

/// Confirm before discarding the saved profile.
pub fn show_reset_dialog(app: &mut LifeCalendarApp, ctx: &Context) {
    let mut confirmed = false;
    let mut should_close = false;
    let layout = theme::layout();
    Window::new(RichText::new("Reset Profile").strong().size(14.0))
        .resizable(false)
        .collapsible(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .fixed_size([layout.dialog_width, 0.0])
        .show(ctx, |ui| {
            ui.add_space(4.0);
            ui.label("This deletes the saved birth date and life expectancy");
            ui.label("and returns to the setup screen.");
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                let reset_btn = egui::Button::new(RichText::new("Reset").color(Color32::WHITE))
                    .fill(theme::text_error())
                    .rounding(egui::Rounding::same(4.0));
                if ui.add_sized([80.0, 28.0], reset_btn).clicked() {
                    confirmed = true;
                }
                if ui.add_sized([80.0, 28.0], egui::Button::new("Cancel")).clicked() {
                    should_close = true;
                }
            });
            ui.add_space(2.0);
        });

    if confirmed {
        app.reset();
        should_close = true;
    }
    if should_close || ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
        app.show_reset_confirm = false;
    }
}

/// Render the "About" dialog.
pub fn show_about_dialog(app: &mut LifeCalendarApp, ctx: &Context) {
    let mut should_close = false;
    let layout = theme::layout();
    Window::new("About")
        .resizable(false)
        .collapsible(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .fixed_size([layout.about_dialog_width, layout.about_dialog_height])
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(12.0);
                ui.heading(RichText::new("Life Calendar").strong());
                ui.add_space(2.0);
                ui.label(
                    RichText::new(format!("Version {}", env!("CARGO_PKG_VERSION")))
                        .color(theme::text_secondary()),
                );
                ui.add_space(10.0);
                ui.label("Every day of an expected lifetime,");
                ui.label("one square at a time.");
                ui.add_space(14.0);
                if ui.add_sized([100.0, 28.0], egui::Button::new("Close")).clicked() {
                    should_close = true;
                }
            });
        });
    if should_close || ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
        app.show_about = false;
    }
}
