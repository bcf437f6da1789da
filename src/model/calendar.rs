use chrono::NaiveDate;

use super::day::{build_days, progress_percent, DayRecord};
use super::describe::{describe_day, DayDescription};
use super::profile::UserProfile;

/// A submitted profile together with the day sequence derived from it.
///
/// The sequence is rebuilt wholesale whenever the profile or the reference
/// day changes; it is never patched in place.
#[derive(Debug, Clone)]
pub struct LifeCalendar {
    profile: UserProfile,
    today: NaiveDate,
    days: Vec<DayRecord>,
}

impl LifeCalendar {
    pub fn new(profile: UserProfile, today: NaiveDate) -> Self {
        let days = build_days(profile.birth_date, profile.life_expectancy, today);
        Self {
            profile,
            today,
            days,
        }
    }

    pub fn profile(&self) -> &UserProfile {
        &self.profile
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn days(&self) -> &[DayRecord] {
        &self.days
    }

    /// Rebuild against a new reference day. Returns `true` if anything changed.
    pub fn set_today(&mut self, today: NaiveDate) -> bool {
        if today == self.today {
            return false;
        }
        self.today = today;
        self.days = build_days(self.profile.birth_date, self.profile.life_expectancy, today);
        true
    }

    pub fn progress_percent(&self) -> f64 {
        progress_percent(&self.days)
    }

    pub fn days_lived(&self) -> usize {
        self.days.iter().filter(|d| d.is_past).count()
    }

    /// Days from today (inclusive) to the end of the sequence.
    pub fn days_remaining(&self) -> usize {
        self.days.len() - self.days_lived()
    }

    pub fn describe(&self, index: usize) -> Option<DayDescription> {
        self.days
            .get(index)
            .map(|day| describe_day(self.profile.birth_date, day))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::day::DayStatus;
    use crate::model::profile::Gender;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn calendar(today: NaiveDate) -> LifeCalendar {
        let profile = UserProfile::new(date(1990, 1, 1), 10.0, Gender::Male, "Norway");
        LifeCalendar::new(profile, today)
    }

    #[test]
    fn derives_days_from_profile() {
        let cal = calendar(date(1990, 1, 11));
        assert_eq!(cal.days().len(), 3_650);
        assert_eq!(cal.days_lived(), 10);
        assert_eq!(cal.days_remaining(), 3_640);
        assert_eq!(cal.describe(10).map(|d| d.status), Some(DayStatus::Today));
        assert_eq!(cal.describe(3_650), None);
    }

    #[test]
    fn today_rollover_rebuilds_classification() {
        let mut cal = calendar(date(1990, 1, 11));
        assert!(!cal.set_today(date(1990, 1, 11)));
        assert!(cal.set_today(date(1990, 1, 12)));
        assert_eq!(cal.today(), date(1990, 1, 12));
        assert_eq!(cal.days_lived(), 11);
        assert!(cal.days()[11].is_today);
        assert!(!cal.days()[10].is_today);
    }

    #[test]
    fn progress_tracks_days_lived() {
        let cal = calendar(date(1995, 1, 1));
        let expected = cal.days_lived() as f64 / 3_650.0 * 100.0;
        assert!((cal.progress_percent() - expected).abs() < 1e-9);
    }
}
