use chrono::{Datelike, Duration, NaiveDate, Weekday};
use std::collections::HashSet;

/// Upper bound on the forward scan in [`WorkingCalendar::next_working_day`].
/// A real weekend/holiday configuration never blocks more than a handful of
/// consecutive days; a full leap year of blocked dates means the configuration
/// itself is broken.
const MAX_SCAN_DAYS: u32 = 366;

#[derive(Debug, thiserror::Error)]
pub enum CalendarError {
    #[error("no working day within {MAX_SCAN_DAYS} days of {0}: weekend and holiday configuration leaves no open dates")]
    NoWorkingDay(NaiveDate),

    #[error("unknown weekday name: {0}")]
    UnknownWeekday(String),
}

/// Working-day calendar built from two components: the dates that are holidays
/// and the days of the week that are weekend days.
///
/// Both sets are immutable once constructed. All checks are at day granularity;
/// time of day never enters into it.
#[derive(Debug, Clone, Default)]
pub struct WorkingCalendar {
    holidays: HashSet<NaiveDate>,
    weekend: HashSet<Weekday>,
}

impl WorkingCalendar {
    pub fn new(holidays: Vec<NaiveDate>, weekend: Vec<Weekday>) -> Self {
        Self {
            holidays: holidays.into_iter().collect(),
            weekend: weekend.into_iter().collect(),
        }
    }

    /// Build a calendar from holiday dates and configured weekend day names
    /// ("Saturday", "Sunday", ...).
    pub fn from_day_names(
        holidays: Vec<NaiveDate>,
        weekend_names: &[String],
    ) -> Result<Self, CalendarError> {
        let weekend = weekend_names
            .iter()
            .map(|name| weekday_from_name(name))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(holidays, weekend))
    }

    /// Number of days a leave request spanning `[start, end]` counts for.
    ///
    /// The span is inclusive on both ends, and every holiday inside it is
    /// subtracted. Weekend days count toward the total; only holidays reduce
    /// it. Callers must pass `end >= start` (the service layer clamps the end
    /// date before calling), otherwise the result goes negative.
    pub fn duration_in_days(&self, start: NaiveDate, end: NaiveDate) -> i64 {
        let span = (end - start).num_days() + 1;
        let holidays_in_range = self
            .holidays
            .iter()
            .filter(|h| **h >= start && **h <= end)
            .count() as i64;
        span - holidays_in_range
    }

    pub fn is_weekend(&self, date: NaiveDate) -> bool {
        self.weekend.contains(&date.weekday())
    }

    pub fn is_holiday(&self, date: NaiveDate) -> bool {
        self.holidays.contains(&date)
    }

    pub fn is_working_day(&self, date: NaiveDate) -> bool {
        !self.is_weekend(date) && !self.is_holiday(date)
    }

    /// First working day at or after `date`. Returns `date` unchanged when it
    /// already qualifies. The scan is capped so a configuration that blocks
    /// every day of the week fails loudly instead of looping forever.
    pub fn next_working_day(&self, date: NaiveDate) -> Result<NaiveDate, CalendarError> {
        let mut candidate = date;
        for _ in 0..MAX_SCAN_DAYS {
            if self.is_working_day(candidate) {
                return Ok(candidate);
            }
            candidate = candidate + Duration::days(1);
        }
        Err(CalendarError::NoWorkingDay(date))
    }
}

/// Weekday name as stored in organization configuration.
pub fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

pub fn weekday_from_name(name: &str) -> Result<Weekday, CalendarError> {
    match name {
        "Monday" => Ok(Weekday::Mon),
        "Tuesday" => Ok(Weekday::Tue),
        "Wednesday" => Ok(Weekday::Wed),
        "Thursday" => Ok(Weekday::Thu),
        "Friday" => Ok(Weekday::Fri),
        "Saturday" => Ok(Weekday::Sat),
        "Sunday" => Ok(Weekday::Sun),
        other => Err(CalendarError::UnknownWeekday(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn weekend_cal(holidays: Vec<NaiveDate>) -> WorkingCalendar {
        WorkingCalendar::new(holidays, vec![Weekday::Sat, Weekday::Sun])
    }

    #[test]
    fn empty_holiday_set_counts_the_full_span() {
        let cal = weekend_cal(vec![]);
        // 2024-06-10 is a Monday, 2024-06-14 a Friday
        assert_eq!(cal.duration_in_days(date(2024, 6, 10), date(2024, 6, 14)), 5);
        assert_eq!(cal.duration_in_days(date(2024, 6, 1), date(2024, 6, 30)), 30);
    }

    #[test]
    fn single_day_request_counts_as_one_day() {
        let cal = weekend_cal(vec![]);
        assert_eq!(cal.duration_in_days(date(2024, 6, 10), date(2024, 6, 10)), 1);
    }

    #[test]
    fn holidays_inside_the_range_are_subtracted() {
        let cal = weekend_cal(vec![date(2024, 6, 12)]);
        assert_eq!(cal.duration_in_days(date(2024, 6, 10), date(2024, 6, 14)), 4);
    }

    #[test]
    fn holidays_on_range_boundaries_are_subtracted() {
        let cal = weekend_cal(vec![date(2024, 6, 10), date(2024, 6, 14)]);
        assert_eq!(cal.duration_in_days(date(2024, 6, 10), date(2024, 6, 14)), 3);
    }

    #[test]
    fn holidays_outside_the_range_do_not_change_the_result() {
        let in_range_only = weekend_cal(vec![date(2024, 6, 12)]);
        let with_strays = weekend_cal(vec![
            date(2024, 6, 12),
            date(2024, 6, 9),
            date(2024, 6, 15),
            date(2024, 12, 25),
        ]);
        assert_eq!(
            in_range_only.duration_in_days(date(2024, 6, 10), date(2024, 6, 14)),
            with_strays.duration_in_days(date(2024, 6, 10), date(2024, 6, 14)),
        );
    }

    #[test]
    fn weekends_count_toward_duration() {
        // The duration only excludes holidays. A Monday-to-Sunday request is
        // seven days even though it crosses a full weekend; weekend days
        // restrict which start dates are selectable, not how long a request
        // counts for.
        let cal = weekend_cal(vec![]);
        assert_eq!(cal.duration_in_days(date(2024, 6, 10), date(2024, 6, 16)), 7);
    }

    #[test]
    fn weekend_membership_follows_the_configured_set() {
        let cal = weekend_cal(vec![]);
        assert!(cal.is_weekend(date(2024, 6, 15))); // Saturday
        assert!(cal.is_weekend(date(2024, 6, 16))); // Sunday
        assert!(!cal.is_weekend(date(2024, 6, 17))); // Monday

        let fri_sat = WorkingCalendar::new(vec![], vec![Weekday::Fri, Weekday::Sat]);
        assert!(fri_sat.is_weekend(date(2024, 6, 14))); // Friday
        assert!(!fri_sat.is_weekend(date(2024, 6, 16))); // Sunday
    }

    #[test]
    fn holiday_membership_is_day_granular() {
        let cal = weekend_cal(vec![date(2024, 6, 12)]);
        assert!(cal.is_holiday(date(2024, 6, 12)));
        assert!(!cal.is_holiday(date(2024, 6, 13)));
    }

    #[test]
    fn next_working_day_skips_a_weekend() {
        let cal = weekend_cal(vec![]);
        // Saturday 2024-06-15 rolls to Monday 2024-06-17
        assert_eq!(
            cal.next_working_day(date(2024, 6, 15)).unwrap(),
            date(2024, 6, 17)
        );
    }

    #[test]
    fn next_working_day_leaves_a_working_day_unchanged() {
        let cal = weekend_cal(vec![]);
        assert_eq!(
            cal.next_working_day(date(2024, 6, 17)).unwrap(),
            date(2024, 6, 17)
        );
    }

    #[test]
    fn next_working_day_skips_holidays_adjacent_to_a_weekend() {
        // Friday and the following Monday are holidays: Friday rolls all the
        // way to Tuesday.
        let cal = weekend_cal(vec![date(2024, 6, 14), date(2024, 6, 17)]);
        assert_eq!(
            cal.next_working_day(date(2024, 6, 14)).unwrap(),
            date(2024, 6, 18)
        );
    }

    #[test]
    fn next_working_day_is_idempotent() {
        let cal = weekend_cal(vec![date(2024, 6, 17)]);
        let once = cal.next_working_day(date(2024, 6, 15)).unwrap();
        let twice = cal.next_working_day(once).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn a_fully_blocked_week_fails_instead_of_hanging() {
        let cal = WorkingCalendar::new(
            vec![],
            vec![
                Weekday::Mon,
                Weekday::Tue,
                Weekday::Wed,
                Weekday::Thu,
                Weekday::Fri,
                Weekday::Sat,
                Weekday::Sun,
            ],
        );
        let err = cal.next_working_day(date(2024, 6, 10)).unwrap_err();
        assert!(matches!(err, CalendarError::NoWorkingDay(_)));
    }

    #[test]
    fn weekday_names_round_trip() {
        for day in [
            Weekday::Mon,
            Weekday::Tue,
            Weekday::Wed,
            Weekday::Thu,
            Weekday::Fri,
            Weekday::Sat,
            Weekday::Sun,
        ] {
            assert_eq!(weekday_from_name(weekday_name(day)).unwrap(), day);
        }
        assert!(weekday_from_name("Caturday").is_err());
    }

    #[test]
    fn from_day_names_rejects_unknown_names() {
        let names = vec!["Saturday".to_string(), "Sonntag".to_string()];
        assert!(WorkingCalendar::from_day_names(vec![], &names).is_err());
    }
}
