use std::path::Path;
use std::time::Duration;

use chrono::NaiveDate;

use crate::io::life_table_csv::import_life_table;
use crate::io::{ConfigPaths, ProfileStore};
use crate::model::{GridGeometry, HoverState, LifeCalendar, LifeTable, UserProfile};
use crate::ui;
use crate::ui::setup_form::SetupForm;
use crate::ui::theme_def::ThemeVariant;
use crate::ui::theme_manager::{ThemeManager, ThemeMode};

/// Main application state.
pub struct LifeCalendarApp {
    /// Present once a profile has been submitted or restored.
    pub calendar: Option<LifeCalendar>,
    pub hover: HoverState,
    pub last_geometry: Option<GridGeometry>,

    pub setup: SetupForm,
    pub life_table: LifeTable,

    pub paths: ConfigPaths,
    pub store: ProfileStore,
    pub theme_manager: ThemeManager,

    // Dialog state
    pub show_about: bool,
    pub show_reset_confirm: bool,

    // Status message
    pub status_message: String,
}

impl LifeCalendarApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        // Register Phosphor icon font as a fallback so icons render inline with text
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        Self::with_paths(ConfigPaths::discover(), local_today())
    }

    /// Build the app against a config directory, restoring any saved profile.
    pub fn with_paths(paths: ConfigPaths, today: NaiveDate) -> Self {
        tracing::info!("using config directory {}", paths.root().display());

        let (life_table, table_message) = load_life_table(&paths.life_table());
        let store = ProfileStore::new(paths.profile());
        let theme_manager = ThemeManager::new(&paths);
        let setup = SetupForm::new(&life_table);

        let mut status_message = table_message.unwrap_or_else(|| "Ready".to_string());
        let calendar = match store.load() {
            Ok(Some(profile)) => match profile.validated() {
                Ok(profile) => {
                    tracing::info!(
                        birth_date = %profile.birth_date,
                        life_expectancy = profile.life_expectancy,
                        "restored saved profile"
                    );
                    Some(LifeCalendar::new(profile, today))
                }
                Err(e) => {
                    tracing::warn!("discarding saved profile: {e}");
                    status_message = format!("Saved profile ignored: {}", e);
                    None
                }
            },
            Ok(None) => None,
            Err(e) => {
                tracing::warn!("failed to load saved profile: {e}");
                status_message = format!("Error loading profile: {}", e);
                None
            }
        };

        Self {
            calendar,
            hover: HoverState::default(),
            last_geometry: None,
            setup,
            life_table,
            paths,
            store,
            theme_manager,
            show_about: false,
            show_reset_confirm: false,
            status_message,
        }
    }

    // --- Profile lifecycle ---

    /// Accept a validated profile from the setup form.
    pub fn submit_profile(&mut self, profile: UserProfile, today: NaiveDate) {
        match self.store.save(&profile) {
            Ok(()) => {
                tracing::debug!("saved profile to {}", self.store.path().display());
                self.status_message = "Profile saved".to_string();
            }
            Err(e) => {
                tracing::warn!("failed to save profile: {e}");
                self.status_message = format!("Error saving profile: {}", e);
            }
        }
        tracing::info!(
            birth_date = %profile.birth_date,
            life_expectancy = profile.life_expectancy,
            country = %profile.country,
            "profile submitted"
        );
        self.hover.pointer_left();
        self.calendar = Some(LifeCalendar::new(profile, today));
    }

    /// Discard the profile and day sequence and return to the setup screen.
    pub fn reset(&mut self) {
        if let Err(e) = self.store.clear() {
            tracing::warn!("failed to delete saved profile: {e}");
        }
        self.calendar = None;
        self.hover.pointer_left();
        self.last_geometry = None;
        self.setup = SetupForm::new(&self.life_table);
        self.status_message = "Profile reset".to_string();
        tracing::info!("profile reset");
    }

    /// Rebuild the day sequence if the calendar day has changed.
    pub fn refresh_today(&mut self, today: NaiveDate) {
        if let Some(calendar) = &mut self.calendar {
            let previous = calendar.today();
            if calendar.set_today(today) {
                tracing::info!(%previous, %today, "day rolled over, rebuilt calendar");
                self.hover.pointer_left();
            }
        }
    }

    // --- Settings ---

    pub fn set_theme_mode(&mut self, mode: ThemeMode) {
        if self.theme_manager.set_mode(mode) {
            self.status_message = format!("Theme: {}", mode.label());
        }
    }

    pub fn reload_life_table(&mut self) {
        let (table, message) = load_life_table(&self.paths.life_table());
        self.life_table = table;
        self.status_message = message.unwrap_or_else(|| {
            format!("Using built-in life table ({} countries)", self.life_table.len())
        });
    }

    pub fn open_config_folder(&mut self) {
        let dir = self.paths.root();
        if let Err(e) = std::fs::create_dir_all(dir) {
            tracing::warn!("cannot create {}: {}", dir.display(), e);
        }
        if let Err(e) = open::that(dir) {
            tracing::warn!("cannot open {}: {}", dir.display(), e);
            self.status_message = format!("Cannot open config folder: {}", e);
        }
    }
}

fn local_today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Built-in table merged with the optional CSV override.
/// The message describes the override outcome, if one was present.
fn load_life_table(path: &Path) -> (LifeTable, Option<String>) {
    let mut table = LifeTable::builtin();
    if !path.exists() {
        return (table, None);
    }
    match import_life_table(path) {
        Ok((rows, skipped)) => {
            let (replaced, added) = table.merge(rows);
            tracing::info!(replaced, added, skipped, "applied life table override");
            let message = format!(
                "Life table: {} updated, {} added, {} rows skipped",
                replaced, added, skipped
            );
            (table, Some(message))
        }
        Err(e) => {
            tracing::warn!("ignoring life table override: {e}");
            (table, Some(format!("Life table override ignored: {}", e)))
        }
    }
}

fn system_variant(ctx: &egui::Context) -> Option<ThemeVariant> {
    match ctx.theme() {
        egui::Theme::Light => Some(ThemeVariant::Light),
        egui::Theme::Dark => Some(ThemeVariant::Dark),
    }
}

impl eframe::App for LifeCalendarApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ui::theme::set_active(self.theme_manager.active(system_variant(ctx)));
        ui::theme::apply_theme(ctx);

        let today = local_today();
        self.refresh_today(today);
        if self.calendar.is_some() {
            // Wake up periodically so a midnight rollover repaints without input.
            ctx.request_repaint_after(Duration::from_secs(60));
        }

        // Top panel: toolbar
        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            ui::toolbar::show_toolbar(self, ui);
        });

        // Bottom panel: status bar
        egui::TopBottomPanel::bottom("status_bar")
            .exact_height(ui::theme::status_bar_height())
            .frame(
                egui::Frame::default()
                    .fill(ui::theme::status_bar_bg())
                    .inner_margin(egui::Margin::symmetric(10.0, 0.0)),
            )
            .show(ctx, |ui| {
                ui.horizontal_centered(|ui| {
                    ui.label(
                        egui::RichText::new(&self.status_message)
                            .font(ui::theme::font_status())
                            .color(ui::theme::text_secondary()),
                    );
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if let Some(calendar) = &self.calendar {
                            if let Some(g) = self.last_geometry.filter(|g| !g.is_empty()) {
                                ui.label(
                                    egui::RichText::new(format!("Grid: {} × {}", g.columns, g.rows))
                                        .size(10.5)
                                        .color(ui::theme::text_dim()),
                                );
                                ui.label(
                                    egui::RichText::new(" · ")
                                        .size(10.5)
                                        .color(ui::theme::text_dim()),
                                );
                            }
                            ui.label(
                                egui::RichText::new(format!("Days: {}", calendar.days().len()))
                                    .size(10.5)
                                    .color(ui::theme::text_dim()),
                            );
                        }
                    });
                });
            });

        // Central panel: calendar or setup form
        let mut submitted: Option<UserProfile> = None;
        let panel_frame = egui::Frame::default()
            .fill(ui::theme::bg_panel())
            .inner_margin(egui::Margin::same(ui::theme::layout().panel_inner_margin));
        egui::CentralPanel::default().frame(panel_frame).show(ctx, |ui| {
            match &self.calendar {
                Some(calendar) => {
                    if ui::calendar_grid::show_progress_header(calendar, ui) {
                        self.show_reset_confirm = true;
                    }
                    if calendar.days().is_empty() {
                        self.last_geometry = None;
                        ui::calendar_grid::show_empty_surface("No days to show", ui);
                    } else {
                        let geometry =
                            ui::calendar_grid::show_calendar_grid(
                                calendar,
                                &mut self.hover,
                                &ui::theme::cell_palette(),
                                ui::theme::sizing(),
                                ui,
                            );
                        self.last_geometry = Some(geometry);
                    }
                }
                None => {
                    egui::ScrollArea::vertical()
                        .auto_shrink([false, false])
                        .show(ui, |ui| {
                            submitted = ui::setup_form::show_setup_form(
                                &mut self.setup,
                                &self.life_table,
                                ui,
                            );
                        });
                }
            }
        });
        if let Some(profile) = submitted {
            self.submit_profile(profile, today);
        }

        // Dialogs
        if self.show_reset_confirm {
            ui::dialogs::show_reset_dialog(self, ctx);
        }
        if self.show_about {
            ui::dialogs::show_about_dialog(self, ctx);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Gender;
    use pretty_assertions::assert_eq;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn profile() -> UserProfile {
        UserProfile::new(date(2000, 1, 1), 80.0, Gender::Male, "Norway")
    }

    #[test]
    fn starts_on_setup_screen_without_saved_profile() {
        let dir = tempfile::tempdir().unwrap();
        let app = LifeCalendarApp::with_paths(ConfigPaths::at(dir.path()), date(2025, 1, 1));
        assert!(app.calendar.is_none());
        assert_eq!(app.status_message, "Ready");
    }

    #[test]
    fn submitted_profile_is_restored_next_session() {
        let dir = tempfile::tempdir().unwrap();
        let paths = ConfigPaths::at(dir.path());
        let today = date(2025, 1, 1);

        let mut app = LifeCalendarApp::with_paths(paths.clone(), today);
        app.submit_profile(profile(), today);
        assert_eq!(app.calendar.as_ref().map(|c| c.days().len()), Some(29_200));
        assert!(paths.profile().exists());

        let restored = LifeCalendarApp::with_paths(paths, today);
        let calendar = restored.calendar.expect("profile restored");
        assert_eq!(calendar.profile(), &profile());
        assert_eq!(calendar.days_lived(), 9_132);
    }

    #[test]
    fn reset_clears_snapshot_and_calendar() {
        let dir = tempfile::tempdir().unwrap();
        let paths = ConfigPaths::at(dir.path());
        let today = date(2025, 1, 1);

        let mut app = LifeCalendarApp::with_paths(paths.clone(), today);
        app.submit_profile(profile(), today);
        app.hover.day = Some(3);
        app.reset();

        assert!(app.calendar.is_none());
        assert_eq!(app.hover, HoverState::default());
        assert!(!paths.profile().exists());
        assert!(LifeCalendarApp::with_paths(paths, today).calendar.is_none());
    }

    #[test]
    fn invalid_saved_profile_is_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let paths = ConfigPaths::at(dir.path());
        std::fs::write(
            paths.profile(),
            r#"{"birthDate":"2000-01-01","lifeExpectancy":-4,"gender":"male","country":"Norway"}"#,
        )
        .unwrap();

        let app = LifeCalendarApp::with_paths(paths, date(2025, 1, 1));
        assert!(app.calendar.is_none());
        assert!(app.status_message.starts_with("Saved profile ignored"));
    }

    #[test]
    fn day_rollover_rebuilds_calendar() {
        let dir = tempfile::tempdir().unwrap();
        let today = date(2025, 1, 1);
        let mut app = LifeCalendarApp::with_paths(ConfigPaths::at(dir.path()), today);
        app.submit_profile(profile(), today);
        app.hover.day = Some(10);

        app.refresh_today(date(2025, 1, 2));
        let calendar = app.calendar.as_ref().unwrap();
        assert_eq!(calendar.days_lived(), 9_133);
        assert_eq!(app.hover, HoverState::default());
    }

    #[test]
    fn life_table_override_is_merged() {
        let dir = tempfile::tempdir().unwrap();
        let paths = ConfigPaths::at(dir.path());
        std::fs::write(paths.life_table(), "country;male;female\nMonaco;85;89\nJapan;x;y\n").unwrap();

        let app = LifeCalendarApp::with_paths(paths, date(2025, 1, 1));
        assert_eq!(app.life_table.len(), 42);
        assert_eq!(
            app.status_message,
            "Life table: 0 updated, 1 added, 1 rows skipped"
        );
    }
}
