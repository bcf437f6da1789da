use egui::{menu, RichText, Ui};
use egui_phosphor::regular as icons;

use crate::app::LifeCalendarApp;
use crate::ui::theme;
use crate::ui::theme_manager::ThemeMode;

/// Render the top menu bar.
pub fn show_toolbar(app: &mut LifeCalendarApp, ui: &mut Ui) {
    menu::bar(ui, |ui| {
        ui.menu_button(RichText::new("  File  ").font(theme::font_menu()), |ui| {
            let has_profile = app.calendar.is_some();
            if ui
                .add_enabled(
                    has_profile,
                    egui::Button::new(format!("{}  Reset Profile...", icons::ARROW_COUNTER_CLOCKWISE)),
                )
                .clicked()
            {
                app.show_reset_confirm = true;
                ui.close_menu();
            }
            ui.separator();
            if ui
                .button(format!("{}  Open Config Folder", icons::FOLDER_OPEN))
                .clicked()
            {
                app.open_config_folder();
                ui.close_menu();
            }
            if ui
                .button(format!("{}  Reload Life Table", icons::TABLE))
                .clicked()
            {
                app.reload_life_table();
                ui.close_menu();
            }
            ui.separator();
            if ui.button(format!("{}  Quit", icons::SIGN_OUT)).clicked() {
                ui.ctx().send_viewport_cmd(egui::ViewportCommand::Close);
                ui.close_menu();
            }
        });

        ui.menu_button(RichText::new("  View  ").font(theme::font_menu()), |ui| {
            ui.label(RichText::new("Theme").small().weak());
            let current = app.theme_manager.mode();
            for mode in ThemeMode::ALL {
                let icon = match mode {
                    ThemeMode::System => icons::MONITOR,
                    ThemeMode::Light => icons::SUN,
                    ThemeMode::Dark => icons::MOON,
                };
                if ui
                    .radio(current == mode, format!("{}  {}", icon, mode.label()))
                    .clicked()
                {
                    app.set_theme_mode(mode);
                    ui.close_menu();
                }
            }
            ui.separator();
            if ui.button("  Reload Themes").clicked() {
                app.theme_manager.reload_user_themes();
                app.status_message = format!(
                    "Themes reloaded from {}",
                    app.theme_manager.themes_dir().display()
                );
                ui.close_menu();
            }
        });

        ui.menu_button(RichText::new("  Help  ").font(theme::font_menu()), |ui| {
            if ui.button(format!("{}  About", icons::INFO)).clicked() {
                app.show_about = true;
                ui.close_menu();
            }
        });

        // Right-aligned profile summary
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if let Some(calendar) = &app.calendar {
                let profile = calendar.profile();
                ui.label(
                    RichText::new(format!(
                        "{} {} · born {} · {} years",
                        icons::CALENDAR,
                        profile.country,
                        profile.birth_date.format("%Y-%m-%d"),
                        profile.life_expectancy
                    ))
                    .size(11.0)
                    .weak(),
                );
            }
        });
    });
}
