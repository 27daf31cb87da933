use crate::{range::RangeKind, types::Date};
use serde::{Deserialize, Serialize};

///
/// Interval
///
/// Resolved output of a range kind: a half-open date window. `Bounded` covers
/// `from <= t < to` and upholds `from < to`; `Before` has no lower bound at
/// all, which is distinct from being bounded below by some epoch date.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum Interval {
    Bounded { from: Date, to: Date },
    Before { to: Date },
}

impl Interval {
    /// Whether `date` falls inside the window.
    #[must_use]
    pub fn contains(self, date: Date) -> bool {
        match self {
            Self::Bounded { from, to } => date >= from && date < to,
            Self::Before { to } => date < to,
        }
    }
}

impl RangeKind {
    /// Resolve this kind against a reference date into its interval.
    ///
    /// Pure and total: the rule table below is fixed at compile time, one rule
    /// per kind. Weeks start on Monday; month and year steps are calendar
    /// aware and roll over at year boundaries.
    #[must_use]
    pub fn resolve(self, today: Date) -> Interval {
        match self {
            Self::BeforeToday => Interval::Before { to: today },
            Self::Today => days_from(today, 1),
            Self::NextFifteenDays => days_from(today, 15),
            Self::CurrentWeek => week_of(today.monday_of_week()),
            Self::NextWeek => week_of(today.monday_of_week().add_days(7)),
            Self::PreviousWeek => week_of(today.monday_of_week().add_days(-7)),
            Self::CurrentMonth => months_around(today, 0),
            Self::NextMonth => months_around(today, 1),
            Self::PreviousMonth => months_around(today, -1),
            Self::CurrentYear => years_around(today, 0),
            Self::NextYear => years_around(today, 1),
            Self::PreviousYear => years_around(today, -1),
        }
    }
}

const fn days_from(start: Date, days: i32) -> Interval {
    Interval::Bounded {
        from: start,
        to: start.add_days(days),
    }
}

const fn week_of(monday: Date) -> Interval {
    days_from(monday, 7)
}

fn months_around(today: Date, offset: i32) -> Interval {
    Interval::Bounded {
        from: today.first_of_month(offset),
        to: today.first_of_month(offset + 1),
    }
}

fn years_around(today: Date, offset: i32) -> Interval {
    Interval::Bounded {
        from: today.first_of_year(offset),
        to: today.first_of_year(offset + 1),
    }
}
