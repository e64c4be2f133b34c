//! Time-of-day and tick-rate types
//!
//! The real-time clock reports calendar fields; faces only need the
//! time of day plus the sub-second position of the current tick.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Seconds in one day
pub const SECONDS_PER_DAY: u32 = 24 * 60 * 60;

/// Errors constructing a time of day
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TimeError {
    /// Hour outside 0-23
    InvalidHour,
    /// Minute outside 0-59
    InvalidMinute,
    /// Second outside 0-59
    InvalidSecond,
}

/// Calendar reading from the real-time clock
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct WatchDateTime {
    /// Full year (e.g. 2024)
    pub year: u16,
    /// Month 1-12
    pub month: u8,
    /// Day of month 1-31
    pub day: u8,
    /// Hour 0-23
    pub hour: u8,
    /// Minute 0-59
    pub minute: u8,
    /// Second 0-59
    pub second: u8,
}

impl WatchDateTime {
    /// Project the reading onto a time of day
    ///
    /// Out-of-range fields (a misbehaving RTC) are clamped rather than
    /// rejected so that a face always has something to draw.
    pub fn time_of_day(&self) -> TimeOfDay {
        TimeOfDay {
            hour: self.hour.min(23),
            minute: self.minute.min(59),
            second: self.second.min(59),
        }
    }
}

/// Time of day with validated fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TimeOfDay {
    hour: u8,
    minute: u8,
    second: u8,
}

impl TimeOfDay {
    /// Midnight (00:00:00)
    pub const MIDNIGHT: TimeOfDay = TimeOfDay {
        hour: 0,
        minute: 0,
        second: 0,
    };

    /// Create a time of day
    pub fn new(hour: u8, minute: u8, second: u8) -> Result<Self, TimeError> {
        if hour > 23 {
            return Err(TimeError::InvalidHour);
        }
        if minute > 59 {
            return Err(TimeError::InvalidMinute);
        }
        if second > 59 {
            return Err(TimeError::InvalidSecond);
        }
        Ok(Self {
            hour,
            minute,
            second,
        })
    }

    /// Create a time of day from seconds since midnight
    ///
    /// Values of a day or more wrap.
    pub fn from_seconds(seconds: u32) -> Self {
        let seconds = seconds % SECONDS_PER_DAY;
        Self {
            hour: (seconds / 3600) as u8,
            minute: (seconds / 60 % 60) as u8,
            second: (seconds % 60) as u8,
        }
    }

    /// Hour 0-23
    pub fn hour(&self) -> u8 {
        self.hour
    }

    /// Minute 0-59
    pub fn minute(&self) -> u8 {
        self.minute
    }

    /// Second 0-59
    pub fn second(&self) -> u8 {
        self.second
    }

    /// Seconds elapsed since midnight, in [0, 86400)
    pub fn seconds_since_midnight(&self) -> u32 {
        (u32::from(self.hour) * 60 + u32::from(self.minute)) * 60 + u32::from(self.second)
    }
}

/// Tick events per second
///
/// Zero is representable: a host that stops ticking still reports a
/// rate, and the encoder then ignores the sub-second position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct TickRate(u8);

impl Default for TickRate {
    fn default() -> Self {
        Self::DOZENAL
    }
}

impl TickRate {
    /// Refresh rate of the dozenal face
    pub const DOZENAL: TickRate = TickRate(16);

    /// Refresh rate of the earlier per-character variant
    pub const FAST: TickRate = TickRate(64);

    /// Once per second
    pub const ONE_HZ: TickRate = TickRate(1);

    /// Highest rate the host can deliver
    pub const MAX: TickRate = TickRate(128);

    /// Create a tick rate
    pub const fn new(hz: u8) -> Self {
        Self(hz)
    }

    /// Rate the host actually delivers for a request of `hz`
    ///
    /// 0 stops ticks, anything above 128 Hz is capped, and other values
    /// round down to a power of two.
    pub const fn supported(hz: u8) -> Self {
        if hz == 0 {
            return Self(0);
        }
        let hz = if hz > Self::MAX.0 { Self::MAX.0 } else { hz };
        Self(1 << (7 - hz.leading_zeros()))
    }

    /// Ticks per second
    pub const fn hz(&self) -> u8 {
        self.0
    }

    /// Check if ticks are disabled
    pub const fn is_stopped(&self) -> bool {
        self.0 == 0
    }

    /// Tick period in microseconds, or `None` when stopped
    pub fn period_us(&self) -> Option<u32> {
        if self.0 == 0 {
            None
        } else {
            Some(1_000_000 / u32::from(self.0))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_of_day_validation() {
        assert!(TimeOfDay::new(23, 59, 59).is_ok());
        assert_eq!(TimeOfDay::new(24, 0, 0), Err(TimeError::InvalidHour));
        assert_eq!(TimeOfDay::new(0, 60, 0), Err(TimeError::InvalidMinute));
        assert_eq!(TimeOfDay::new(0, 0, 60), Err(TimeError::InvalidSecond));
    }

    #[test]
    fn test_seconds_since_midnight() {
        assert_eq!(TimeOfDay::MIDNIGHT.seconds_since_midnight(), 0);
        let noon = TimeOfDay::new(12, 0, 0).unwrap();
        assert_eq!(noon.seconds_since_midnight(), 43_200);
        let last = TimeOfDay::new(23, 59, 59).unwrap();
        assert_eq!(last.seconds_since_midnight(), SECONDS_PER_DAY - 1);
    }

    #[test]
    fn test_from_seconds_wraps() {
        let t = TimeOfDay::from_seconds(SECONDS_PER_DAY + 3661);
        assert_eq!((t.hour(), t.minute(), t.second()), (1, 1, 1));
        assert_eq!(TimeOfDay::from_seconds(86_399).seconds_since_midnight(), 86_399);
    }

    #[test]
    fn test_date_time_clamps_fields() {
        let reading = WatchDateTime {
            year: 2024,
            month: 1,
            day: 1,
            hour: 25,
            minute: 61,
            second: 70,
        };
        let t = reading.time_of_day();
        assert_eq!((t.hour(), t.minute(), t.second()), (23, 59, 59));
    }

    #[test]
    fn test_supported_tick_rate() {
        assert_eq!(TickRate::supported(0).hz(), 0);
        assert_eq!(TickRate::supported(1), TickRate::ONE_HZ);
        assert_eq!(TickRate::supported(3).hz(), 2);
        assert_eq!(TickRate::supported(20), TickRate::DOZENAL);
        assert_eq!(TickRate::supported(64), TickRate::FAST);
        assert_eq!(TickRate::supported(255), TickRate::MAX);
    }

    #[test]
    fn test_tick_rate_period() {
        assert_eq!(TickRate::DOZENAL.period_us(), Some(62_500));
        assert_eq!(TickRate::ONE_HZ.period_us(), Some(1_000_000));
        assert_eq!(TickRate::new(0).period_us(), None);
        assert!(TickRate::new(0).is_stopped());
        assert_eq!(TickRate::default(), TickRate::DOZENAL);
    }
}
