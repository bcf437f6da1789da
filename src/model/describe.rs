use chrono::{Months, NaiveDate};

use super::day::{DayRecord, DayStatus};

/// Display format for dates, e.g. `Mar 5, 2010`.
pub const DATE_FORMAT: &str = "%b %-d, %Y";

/// Tooltip content for one day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayDescription {
    pub formatted_date: String,
    pub age_years: u32,
    pub age_months: u32,
    pub status: DayStatus,
}

impl DayDescription {
    /// `"12 years, 3 months"`, with singular forms where they apply.
    pub fn age_label(&self) -> String {
        format!(
            "{} {}, {} {}",
            self.age_years,
            if self.age_years == 1 { "year" } else { "years" },
            self.age_months,
            if self.age_months == 1 { "month" } else { "months" },
        )
    }
}

/// Whole calendar months from `from` to `to`; zero if `to` precedes `from`.
///
/// A month is complete once the same day-of-month is reached, or the last day
/// of a shorter month (Jan 31 to Feb 28 is one month).
pub fn months_between(from: NaiveDate, to: NaiveDate) -> u32 {
    use chrono::Datelike;

    if to <= from {
        return 0;
    }
    let estimate = (to.year() - from.year()) * 12 + to.month() as i32 - from.month() as i32;
    let mut months = estimate.max(0) as u32;
    while months > 0 && from.checked_add_months(Months::new(months)).map_or(true, |d| d > to) {
        months -= 1;
    }
    months
}

/// Describe a day for display: date, age reached on that day, and status.
///
/// The status comes straight from the record's flags, so it always agrees
/// with the colour the cell was painted in.
pub fn describe_day(birth_date: NaiveDate, day: &DayRecord) -> DayDescription {
    let months = months_between(birth_date, day.date);
    DayDescription {
        formatted_date: day.date.format(DATE_FORMAT).to_string(),
        age_years: months / 12,
        age_months: months % 12,
        status: day.status(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn counts_complete_months_only() {
        let birth = date(2000, 1, 15);
        assert_eq!(months_between(birth, birth), 0);
        assert_eq!(months_between(birth, date(2000, 2, 14)), 0);
        assert_eq!(months_between(birth, date(2000, 2, 15)), 1);
        assert_eq!(months_between(birth, date(2010, 4, 20)), 123);
        assert_eq!(months_between(birth, date(1999, 12, 31)), 0);
    }

    #[test]
    fn month_end_birthdays_complete_on_shorter_months() {
        let birth = date(2001, 1, 31);
        assert_eq!(months_between(birth, date(2001, 2, 27)), 0);
        assert_eq!(months_between(birth, date(2001, 2, 28)), 1);
        assert_eq!(months_between(birth, date(2001, 3, 30)), 1);
        assert_eq!(months_between(birth, date(2001, 3, 31)), 2);
    }

    #[test]
    fn describes_a_past_day() {
        let birth = date(2000, 1, 1);
        let day = DayRecord {
            date: date(2010, 3, 5),
            is_past: true,
            is_today: false,
        };
        assert_eq!(
            describe_day(birth, &day),
            DayDescription {
                formatted_date: "Mar 5, 2010".into(),
                age_years: 10,
                age_months: 2,
                status: DayStatus::Past,
            }
        );
    }

    #[test]
    fn status_follows_record_flags() {
        let birth = date(2000, 1, 1);
        let today = DayRecord {
            date: date(2001, 1, 1),
            is_past: false,
            is_today: true,
        };
        let desc = describe_day(birth, &today);
        assert_eq!(desc.status, DayStatus::Today);
        assert_eq!(desc.age_label(), "1 year, 0 months");
        assert_eq!(desc.status.label(), "today");
    }
}
