use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

///
/// RangeKind
///
/// Enumerated identifier for a named relative date window. The set is closed:
/// every kind resolves through exactly one rule, and identifiers outside the
/// set are rejected rather than mapped to a default.
///
/// Each kind combines an anchor unit (day, week, month, year) with a temporal
/// offset (previous/current/next), plus the open-ended `BeforeToday` variant.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RangeKind {
    BeforeToday,
    Today,
    NextFifteenDays,
    CurrentWeek,
    NextWeek,
    PreviousWeek,
    CurrentMonth,
    NextMonth,
    PreviousMonth,
    CurrentYear,
    NextYear,
    PreviousYear,
}

impl RangeKind {
    /// Every supported kind, in registry order.
    pub const ALL: [Self; 12] = [
        Self::BeforeToday,
        Self::Today,
        Self::NextFifteenDays,
        Self::CurrentWeek,
        Self::NextWeek,
        Self::PreviousWeek,
        Self::CurrentMonth,
        Self::NextMonth,
        Self::PreviousMonth,
        Self::CurrentYear,
        Self::NextYear,
        Self::PreviousYear,
    ];

    /// Stable identifier string, as exposed to external range registries.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::BeforeToday => "before_today",
            Self::Today => "today",
            Self::NextFifteenDays => "next_fifteen_days",
            Self::CurrentWeek => "current_week",
            Self::NextWeek => "next_week",
            Self::PreviousWeek => "previous_week",
            Self::CurrentMonth => "current_month",
            Self::NextMonth => "next_month",
            Self::PreviousMonth => "previous_month",
            Self::CurrentYear => "current_year",
            Self::NextYear => "next_year",
            Self::PreviousYear => "previous_year",
        }
    }
}

impl fmt::Display for RangeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RangeKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| Error::unknown_range_kind(s))
    }
}

///
/// TESTS
///
