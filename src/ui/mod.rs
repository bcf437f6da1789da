pub mod calendar_grid;
pub mod dialogs;
pub mod setup_form;
pub mod theme;
pub mod theme_def;
pub mod theme_manager;
pub mod toolbar;
