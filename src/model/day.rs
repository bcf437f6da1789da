use chrono::NaiveDate;

/// Days per year used throughout; leap years are deliberately ignored.
pub const DAYS_PER_YEAR: f64 = 365.0;

/// Where a day sits relative to the reference "today".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayStatus {
    Past,
    Today,
    Future,
}

impl DayStatus {
    pub fn label(self) -> &'static str {
        match self {
            DayStatus::Past => "past",
            DayStatus::Today => "today",
            DayStatus::Future => "future",
        }
    }
}

/// One calendar day of the expected lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayRecord {
    pub date: NaiveDate,
    /// Strictly before the start of today.
    pub is_past: bool,
    pub is_today: bool,
}

impl DayRecord {
    /// Today wins over past, past over future.
    pub fn status(&self) -> DayStatus {
        if self.is_today {
            DayStatus::Today
        } else if self.is_past {
            DayStatus::Past
        } else {
            DayStatus::Future
        }
    }
}

/// Number of days covered by a life expectancy, using 365-day years.
///
/// Non-finite or non-positive figures yield zero.
pub fn day_count(life_expectancy_years: f64) -> usize {
    if !life_expectancy_years.is_finite() || life_expectancy_years <= 0.0 {
        return 0;
    }
    (life_expectancy_years * DAYS_PER_YEAR).floor() as usize
}

/// Build the ordered day sequence starting at `birth_date`.
///
/// Dates advance by calendar day, so the result is independent of time zones
/// and daylight-saving shifts. The sequence stops early only if the date range
/// of [`NaiveDate`] is exhausted.
pub fn build_days(
    birth_date: NaiveDate,
    life_expectancy_years: f64,
    today: NaiveDate,
) -> Vec<DayRecord> {
    let count = day_count(life_expectancy_years);
    birth_date
        .iter_days()
        .take(count)
        .map(|date| DayRecord {
            date,
            is_past: date < today,
            is_today: date == today,
        })
        .collect()
}

/// Percentage of days already lived, in `[0, 100]`. Empty input gives 0.
pub fn progress_percent(days: &[DayRecord]) -> f64 {
    if days.is_empty() {
        return 0.0;
    }
    let past = days.iter().filter(|d| d.is_past).count();
    past as f64 / days.len() as f64 * 100.0
}
