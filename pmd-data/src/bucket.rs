use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Calendar rule deciding which week a day belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Convention {
    /// Weeks run Friday through Thursday and are named by their Friday.
    #[default]
    WeekStartsFriday,
    /// Weeks run Monday through Sunday and are named by their Sunday.
    RollingWeekEndsSunday,
}

impl Convention {
    /// Every convention, in toggle display order.
    pub const ALL: [Convention; 2] = [Convention::WeekStartsFriday, Convention::RollingWeekEndsSunday];

    pub fn as_str(&self) -> &'static str {
        match self {
            Convention::WeekStartsFriday => "week-starts-friday",
            Convention::RollingWeekEndsSunday => "rolling-week-ends-sunday",
        }
    }

    /// Button text for the aggregation toggle.
    pub fn label(&self) -> &'static str {
        match self {
            Convention::WeekStartsFriday => "Week Starting Friday",
            Convention::RollingWeekEndsSunday => "Rolling Week (ends Sunday)",
        }
    }
}

impl fmt::Display for Convention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
#[error("Unknown aggregation convention: {0}")]
pub struct ParseConventionError(pub String);

impl FromStr for Convention {
    type Err = ParseConventionError;

    /// Accepts the kebab-case names plus the short `friday` / `rolling` forms.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "week-starts-friday" | "friday" => Ok(Convention::WeekStartsFriday),
            "rolling-week-ends-sunday" | "rolling" => Ok(Convention::RollingWeekEndsSunday),
            _ => Err(ParseConventionError(s.to_string())),
        }
    }
}

/// The date naming the week that `date` falls in.
///
/// - `WeekStartsFriday`: the most recent Friday on or before `date`.
/// - `RollingWeekEndsSunday`: the first Sunday on or after `date`.
///
/// Works on calendar components only, so the result does not depend on the
/// local time zone.
pub fn bucket_key(date: NaiveDate, convention: Convention) -> NaiveDate {
    match convention {
        Convention::WeekStartsFriday => {
            let dow = date.weekday().num_days_from_sunday();
            let back = if dow >= 5 { dow - 5 } else { dow + 2 };
            date - Days::new(u64::from(back))
        }
        Convention::RollingWeekEndsSunday => {
            let forward = 6 - date.weekday().num_days_from_monday();
            date + Days::new(u64::from(forward))
        }
    }
}
