use chrono::NaiveDate;
use egui::{Color32, RichText, Ui};

use crate::model::profile::{parse_birth_date, MAX_LIFE_EXPECTANCY_YEARS};
use crate::model::{Gender, LifeTable, ProfileError, UserProfile};
use crate::ui::theme;

const DATE_INPUT_FORMAT: &str = "%Y-%m-%d";

/// Intake form state for the setup screen.
#[derive(Debug, Clone)]
pub struct SetupForm {
    pub birth_date: NaiveDate,
    pub birth_date_text: String,
    pub gender: Gender,
    pub country: String,
    pub use_custom_life_expectancy: bool,
    pub custom_life_expectancy: f64,
    pub error: Option<String>,
}

impl SetupForm {
    pub fn new(table: &LifeTable) -> Self {
        let birth_date = NaiveDate::from_ymd_opt(1990, 1, 1).unwrap_or_default();
        let country = table
            .countries()
            .first()
            .map(|c| c.name.clone())
            .unwrap_or_default();
        Self {
            birth_date,
            birth_date_text: birth_date.format(DATE_INPUT_FORMAT).to_string(),
            gender: Gender::Male,
            country,
            use_custom_life_expectancy: false,
            custom_life_expectancy: 80.0,
            error: None,
        }
    }

    /// Life expectancy the profile will be created with.
    pub fn life_expectancy(&self, table: &LifeTable) -> f64 {
        if self.use_custom_life_expectancy {
            self.custom_life_expectancy
        } else {
            table.default_life_expectancy(&self.country, self.gender)
        }
    }

    /// Assemble and validate a profile from the current field values.
    pub fn build_profile(&self, table: &LifeTable) -> Result<UserProfile, ProfileError> {
        let birth_date = parse_birth_date(&self.birth_date_text)?;
        UserProfile::new(
            birth_date,
            self.life_expectancy(table),
            self.gender,
            self.country.clone(),
        )
        .validated()
    }

    fn sync_text_from_picker(&mut self) {
        self.birth_date_text = self.birth_date.format(DATE_INPUT_FORMAT).to_string();
    }
}

/// Render the setup form. Returns a profile once the user submits valid input.
pub fn show_setup_form(form: &mut SetupForm, table: &LifeTable, ui: &mut Ui) -> Option<UserProfile> {
    let mut submitted = None;
    let layout = theme::layout();

    ui.vertical_centered(|ui| {
        ui.add_space(40.0);
        egui::Frame::default()
            .fill(theme::bg_panel())
            .stroke(egui::Stroke::new(1.0, theme::border_subtle()))
            .rounding(egui::Rounding::same(8.0))
            .inner_margin(egui::Margin::same(24.0))
            .show(ui, |ui| {
                ui.set_width(layout.setup_form_width);
                ui.label(
                    RichText::new("Life Calendar Setup")
                        .font(theme::font_title())
                        .strong()
                        .color(theme::text_primary()),
                );
                ui.add_space(12.0);

                egui::Grid::new("setup_form_grid")
                    .num_columns(2)
                    .spacing([12.0, 10.0])
                    .show(ui, |ui| {
                        ui.label(RichText::new("Birth Date").color(theme::text_secondary()));
                        ui.horizontal(|ui| {
                            let text = ui.add_sized(
                                [120.0, 24.0],
                                egui::TextEdit::singleline(&mut form.birth_date_text)
                                    .hint_text("YYYY-MM-DD"),
                            );
                            if text.changed() {
                                if let Ok(d) = parse_birth_date(&form.birth_date_text) {
                                    form.birth_date = d;
                                }
                            }
                            let picker = ui.add(
                                egui_extras::DatePickerButton::new(&mut form.birth_date)
                                    .id_salt("setup_birth_date"),
                            );
                            if picker.changed() {
                                form.sync_text_from_picker();
                            }
                        });
                        ui.end_row();

                        ui.label(RichText::new("Gender").color(theme::text_secondary()));
                        ui.horizontal(|ui| {
                            for gender in [Gender::Male, Gender::Female] {
                                ui.radio_value(&mut form.gender, gender, gender.label());
                            }
                        });
                        ui.end_row();

                        ui.label(RichText::new("Country").color(theme::text_secondary()));
                        egui::ComboBox::from_id_salt("setup_country")
                            .selected_text(form.country.as_str())
                            .width(layout.setup_form_width - 120.0)
                            .height(320.0)
                            .show_ui(ui, |ui| {
                                for c in table.countries() {
                                    ui.selectable_value(
                                        &mut form.country,
                                        c.name.clone(),
                                        format!(
                                            "{} (Life expectancy: M {}, F {})",
                                            c.name, c.male, c.female
                                        ),
                                    );
                                }
                            });
                        ui.end_row();

                        ui.label("");
                        ui.checkbox(&mut form.use_custom_life_expectancy, "Custom life expectancy");
                        ui.end_row();

                        if form.use_custom_life_expectancy {
                            ui.label(RichText::new("Years").color(theme::text_secondary()));
                            ui.add(
                                egui::DragValue::new(&mut form.custom_life_expectancy)
                                    .range(1.0..=MAX_LIFE_EXPECTANCY_YEARS)
                                    .speed(0.1)
                                    .max_decimals(1),
                            );
                            ui.end_row();
                        }
                    });

                ui.add_space(10.0);
                ui.label(
                    RichText::new(format!(
                        "Expected life: {} years",
                        form.life_expectancy(table)
                    ))
                    .color(theme::text_secondary()),
                );

                if let Some(err) = &form.error {
                    ui.add_space(6.0);
                    ui.label(RichText::new(err).color(theme::text_error()));
                }

                ui.add_space(12.0);
                let create_btn = egui::Button::new(
                    RichText::new("Create Life Calendar").color(Color32::WHITE),
                )
                .fill(theme::accent())
                .rounding(egui::Rounding::same(4.0));
                if ui.add_sized([ui.available_width(), 32.0], create_btn).clicked() {
                    match form.build_profile(table) {
                        Ok(profile) => {
                            form.error = None;
                            submitted = Some(profile);
                        }
                        Err(e) => {
                            tracing::debug!("setup form rejected: {e}");
                            form.error = Some(e.to_string());
                        }
                    }
                }
            });
    });

    submitted
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults_to_first_country_in_table() {
        let table = LifeTable::builtin();
        let form = SetupForm::new(&table);
        assert_eq!(form.country, "Japan");
        assert_eq!(form.life_expectancy(&table), 81.5);
    }

    #[test]
    fn builds_profile_from_table_figure() {
        let table = LifeTable::builtin();
        let mut form = SetupForm::new(&table);
        form.birth_date_text = "1975-08-20".into();
        form.gender = Gender::Female;
        form.country = "Canada".into();

        assert_eq!(
            form.build_profile(&table),
            Ok(UserProfile::new(
                NaiveDate::from_ymd_opt(1975, 8, 20).unwrap(),
                84.4,
                Gender::Female,
                "Canada",
            ))
        );
    }

    #[test]
    fn custom_figure_overrides_table_and_is_validated() {
        let table = LifeTable::builtin();
        let mut form = SetupForm::new(&table);
        form.use_custom_life_expectancy = true;
        form.custom_life_expectancy = 92.5;
        assert_eq!(form.build_profile(&table).map(|p| p.life_expectancy), Ok(92.5));

        form.custom_life_expectancy = 0.0;
        assert_eq!(
            form.build_profile(&table),
            Err(ProfileError::NonPositiveLifeExpectancy(0.0))
        );
    }

    #[test]
    fn unparseable_birth_date_is_rejected() {
        let table = LifeTable::builtin();
        let mut form = SetupForm::new(&table);
        form.birth_date_text = "not a date".into();
        assert_eq!(
            form.build_profile(&table),
            Err(ProfileError::UnparseableBirthDate("not a date".into()))
        );
    }

    #[test]
    fn unknown_country_falls_back_to_eighty_years() {
        let table = LifeTable::builtin();
        let mut form = SetupForm::new(&table);
        form.country = "Atlantis".into();
        assert_eq!(form.life_expectancy(&table), 80.0);
    }
}
