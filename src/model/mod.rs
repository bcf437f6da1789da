pub mod calendar;
pub mod day;
pub mod describe;
pub mod grid;
pub mod hover;
pub mod life_table;
pub mod profile;

pub use calendar::LifeCalendar;
pub use day::{DayRecord, DayStatus};
pub use grid::{compute_geometry, GridGeometry};
pub use hover::HoverState;
pub use life_table::{CountryLifeExpectancy, LifeTable};
pub use profile::{Gender, ProfileError, UserProfile};
