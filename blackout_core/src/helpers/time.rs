use chrono::{Timelike, Utc};
use chrono_tz::{Europe::Kyiv, Tz};

pub const MINUTES_PER_DAY: u16 = 24 * 60;

/// Renders minutes since midnight as `H:MM`.
pub fn minutes_to_clock(minutes: u16) -> String {
    format!("{}:{:02}", minutes / 60, minutes % 60)
}

pub fn format_duration(minutes: u16) -> String {
    let hours = minutes / 60;
    let rest = minutes % 60;

    match (hours, rest) {
        (0, m) => format!("{} мин", m),
        (h, 0) => format!("{} ч", h),
        (h, m) => format!("{} ч {} мин", h, m),
    }
}

/// Source of the current local minute of day.
pub trait Clock: Send + Sync {
    fn now_minute_of_day(&self) -> u16;
}

/// Wall clock pinned to a fixed timezone, Europe/Kyiv unless built otherwise.
#[derive(Debug, Clone, Copy)]
pub struct ZonedClock {
    tz: Tz,
}

impl ZonedClock {
    pub fn new(tz: Tz) -> Self {
        Self { tz }
    }

    pub fn kyiv() -> Self {
        Self::new(Kyiv)
    }
}

impl Default for ZonedClock {
    fn default() -> Self {
        Self::kyiv()
    }
}

impl Clock for ZonedClock {
    fn now_minute_of_day(&self) -> u16 {
        let now = Utc::now().with_timezone(&self.tz);
        (now.hour() * 60 + now.minute()) as u16
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub u16);

impl Clock for FixedClock {
    fn now_minute_of_day(&self) -> u16 {
        self.0
    }
}
