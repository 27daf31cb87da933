use serde::{Deserialize, Serialize};
use std::{
    fmt::{self, Debug, Display},
    sync::OnceLock,
};
use time::{Date as TimeDate, Duration as TimeDuration, Month, format_description::FormatItem};

static FORMAT: OnceLock<Vec<FormatItem<'static>>> = OnceLock::new();

///
/// Date
///
/// Calendar date stored as whole days since the Unix epoch date. All calendar
/// math (weeks, month rollover, year boundaries) goes through `time::Date`,
/// never through fixed-day offsets.
///

#[derive(Clone, Copy, Default, Eq, PartialEq, Hash, Ord, PartialOrd)]
#[repr(transparent)]
pub struct Date(i32);

impl Date {
    pub const EPOCH: Self = Self(0);

    const fn epoch_date() -> TimeDate {
        // Safe: constant valid date
        match TimeDate::from_calendar_date(1970, Month::January, 1) {
            Ok(d) => d,
            Err(_) => unreachable!(),
        }
    }

    #[must_use]
    pub fn new_checked(y: i32, m: u8, d: u8) -> Option<Self> {
        let month = Month::try_from(m).ok()?;
        let date = TimeDate::from_calendar_date(y, month, d).ok()?;
        Some(Self::from_time_date(date))
    }

    #[must_use]
    pub const fn from_days(days: i32) -> Self {
        Self(days)
    }

    #[must_use]
    pub const fn get(self) -> i32 {
        self.0
    }

    /// Returns the year component (e.g. 2025)
    #[must_use]
    pub fn year(self) -> i32 {
        self.to_time_date().year()
    }

    /// Returns the month component (1–12)
    #[must_use]
    pub fn month(self) -> u8 {
        self.to_time_date().month().into()
    }

    /// Returns the day-of-month component (1–31)
    #[must_use]
    pub fn day(self) -> u8 {
        self.to_time_date().day()
    }

    /// Parse an ISO `YYYY-MM-DD` string into a `Date`.
    pub fn parse(s: &str) -> Option<Self> {
        let format =
            FORMAT.get_or_init(|| time::format_description::parse("[year]-[month]-[day]").unwrap());

        TimeDate::parse(s, format).ok().map(Self::from_time_date)
    }

    /// Offset by whole days, saturating at the representable bounds.
    #[must_use]
    pub const fn add_days(self, days: i32) -> Self {
        Self(self.0.saturating_add(days))
    }

    /// The Monday of this date's ISO week.
    #[must_use]
    pub fn monday_of_week(self) -> Self {
        let from_monday = self.to_time_date().weekday().number_days_from_monday();
        self.add_days(-i32::from(from_monday))
    }

    /// The first day of the month `months` calendar months away from this
    /// date's month. Rolls over year boundaries (January minus one month is
    /// December of the prior year).
    #[must_use]
    pub fn first_of_month(self, months: i32) -> Self {
        let d = self.to_time_date();
        let month: u8 = d.month().into();
        let index = d.year() * 12 + i32::from(month) - 1 + months;

        #[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let month = Month::try_from((index.rem_euclid(12) + 1) as u8).unwrap_or(Month::January);

        Self::from_time_date(calendar_date(index.div_euclid(12), month, 1))
    }

    /// January 1st of the year `years` away from this date's year.
    #[must_use]
    pub fn first_of_year(self, years: i32) -> Self {
        let year = self.to_time_date().year().saturating_add(years);

        Self::from_time_date(calendar_date(year, Month::January, 1))
    }

    #[expect(clippy::cast_possible_truncation)]
    fn from_time_date(date: TimeDate) -> Self {
        let epoch = Self::epoch_date();
        let days = (date - epoch).whole_days();
        Self(days as i32)
    }

    fn to_time_date(self) -> TimeDate {
        let epoch = Self::epoch_date();
        let delta = TimeDuration::days(self.0.into());
        epoch.checked_add(delta).unwrap_or({
            if self.0 >= 0 {
                TimeDate::MAX
            } else {
                TimeDate::MIN
            }
        })
    }
}

// Out-of-range years clamp instead of panicking.
fn calendar_date(year: i32, month: Month, day: u8) -> TimeDate {
    TimeDate::from_calendar_date(year, month, day).unwrap_or({
        if year >= 1970 {
            TimeDate::MAX
        } else {
            TimeDate::MIN
        }
    })
}

impl Debug for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Date({self})")
    }
}

impl Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let d = self.to_time_date();
        let month: u8 = d.month().into();
        write!(f, "{:04}-{:02}-{:02}", d.year(), month, d.day())
    }
}

impl Serialize for Date {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Date {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).ok_or_else(|| serde::de::Error::custom(format!("invalid date: {s}")))
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u8, d: u8) -> Date {
        Date::new_checked(y, m, d).unwrap()
    }

    #[test]
    fn components_round_trip() {
        let d = date(2024, 10, 19);
        assert_eq!(d.year(), 2024);
        assert_eq!(d.month(), 10);
        assert_eq!(d.day(), 19);
    }

    #[test]
    fn parse_and_display_round_trip() {
        let d = Date::parse("2018-05-18").unwrap();
        assert_eq!(d, date(2018, 5, 18));
        assert_eq!(d.to_string(), "2018-05-18");
    }

    #[test]
    fn invalid_dates_are_rejected() {
        assert!(Date::parse("2018-13-01").is_none());
        assert!(Date::parse("not a date").is_none());
        assert!(Date::new_checked(2018, 2, 30).is_none());
    }

    #[test]
    fn epoch_is_day_zero() {
        assert_eq!(date(1970, 1, 1), Date::EPOCH);
        assert_eq!(Date::EPOCH.get(), 0);
    }

    #[test]
    fn add_days_crosses_month_boundary() {
        assert_eq!(date(2018, 5, 18).add_days(15), date(2018, 6, 2));
        assert_eq!(date(2018, 1, 1).add_days(-1), date(2017, 12, 31));
    }

    #[test]
    fn monday_of_week_for_each_weekday() {
        let monday = date(2018, 5, 14);
        assert_eq!(monday.monday_of_week(), monday);
        assert_eq!(date(2018, 5, 18).monday_of_week(), monday); // Friday
        assert_eq!(date(2018, 5, 20).monday_of_week(), monday); // Sunday
    }

    #[test]
    fn first_of_month_rolls_over_years() {
        assert_eq!(date(2018, 5, 18).first_of_month(0), date(2018, 5, 1));
        assert_eq!(date(2018, 12, 15).first_of_month(1), date(2019, 1, 1));
        assert_eq!(date(2018, 1, 15).first_of_month(-1), date(2017, 12, 1));
        assert_eq!(date(2018, 12, 15).first_of_month(2), date(2019, 2, 1));
    }

    #[test]
    fn first_of_year_offsets() {
        assert_eq!(date(2018, 5, 18).first_of_year(0), date(2018, 1, 1));
        assert_eq!(date(2018, 5, 18).first_of_year(1), date(2019, 1, 1));
        assert_eq!(date(2018, 5, 18).first_of_year(-1), date(2017, 1, 1));
    }

    #[test]
    fn serde_round_trips_as_iso_string() {
        let d = date(2018, 5, 18);
        let json = serde_json::to_string(&d).unwrap();
        assert_eq!(json, "\"2018-05-18\"");

        let back: Date = serde_json::from_str(&json).unwrap();
        assert_eq!(back, d);
    }
}
