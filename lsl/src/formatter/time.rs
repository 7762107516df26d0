use chrono::{DateTime, Datelike, Local, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Zone used to split timestamps into calendar fields.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ZoneSetting {
    #[default]
    Utc,
    Local,
}

#[derive(Clone, Copy, Debug)]
pub struct TimestampFormatter {
    zone: ZoneSetting,
}

impl TimestampFormatter {
    pub fn new(zone: ZoneSetting) -> Self {
        Self { zone }
    }

    /// Shows the time of day for timestamps in the same calendar year as
    /// `now`, the year otherwise.
    pub fn format(&self, modified: &DateTime<Utc>, now: &DateTime<Utc>) -> String {
        match self.zone {
            ZoneSetting::Utc => format_in_zone(modified, now, &Utc),
            ZoneSetting::Local => format_in_zone(modified, now, &Local),
        }
    }
}

fn format_in_zone<Tz>(modified: &DateTime<Utc>, now: &DateTime<Utc>, zone: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let modified = modified.with_timezone(zone);
    let now = now.with_timezone(zone);

    if modified.year() == now.year() {
        modified.format("%b %e %H:%M").to_string()
    } else {
        // Year padded to the width of "HH:MM" so both shapes line up.
        format!("{} {:>5}", modified.format("%b %e"), modified.year())
    }
}
