//! Host wall clock standing in for the watch RTC

use chrono::{Datelike, Duration, Local, NaiveDateTime, NaiveTime, Timelike};

use dozenal_core::{RealTimeClock, TickRate, WatchDateTime};

/// Wall clock with an optional fixed offset
///
/// The reading is sampled once per tick with `refresh`, so every call a
/// face makes during one dispatch sees the same instant.
pub struct HostClock {
    offset: Duration,
    sample: NaiveDateTime,
}

impl HostClock {
    /// Follow local time
    pub fn new() -> Self {
        Self::with_offset(Duration::zero())
    }

    /// Follow local time shifted by `offset`
    pub fn with_offset(offset: Duration) -> Self {
        let mut clock = Self {
            offset,
            sample: NaiveDateTime::default(),
        };
        clock.refresh();
        clock
    }

    /// Follow local time, but start at `start` today
    pub fn starting_at(start: NaiveTime) -> Self {
        let now = Local::now().naive_local();
        Self::with_offset(now.date().and_time(start) - now)
    }

    /// Clock frozen at `sample` until the next `refresh`
    #[cfg(test)]
    pub fn frozen(sample: NaiveDateTime) -> Self {
        Self {
            offset: Duration::zero(),
            sample,
        }
    }

    /// Take a new sample of the wall clock
    pub fn refresh(&mut self) {
        self.sample = Local::now().naive_local() + self.offset;
    }

    /// Tick index within the sampled second at `rate`
    pub fn subsecond(&self, rate: TickRate) -> u8 {
        subsecond_at(self.sample.nanosecond(), rate)
    }
}

impl Default for HostClock {
    fn default() -> Self {
        Self::new()
    }
}

impl RealTimeClock for HostClock {
    fn date_time(&self) -> WatchDateTime {
        WatchDateTime {
            year: u16::try_from(self.sample.year()).unwrap_or(0),
            month: self.sample.month() as u8,
            day: self.sample.day() as u8,
            hour: self.sample.hour() as u8,
            minute: self.sample.minute() as u8,
            second: self.sample.second() as u8,
        }
    }
}

/// Map nanoseconds into the second onto a tick index
///
/// Leap-second nanos (>= 1e9) land on the last tick.
pub fn subsecond_at(nanos: u32, rate: TickRate) -> u8 {
    let hz = u64::from(rate.hz());
    if hz == 0 {
        return 0;
    }
    let tick = u64::from(nanos) * hz / 1_000_000_000;
    tick.min(hz - 1) as u8
}
