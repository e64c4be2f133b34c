//! Real-time clock trait

use crate::time::WatchDateTime;

/// Trait for the watch's real-time clock
///
/// Implementations read the calendar registers of the RTC peripheral, or
/// the host wall clock in simulation.
pub trait RealTimeClock {
    /// Read the current date and time
    fn date_time(&self) -> WatchDateTime;
}

/// Fixed reading, useful where no RTC is attached
impl RealTimeClock for WatchDateTime {
    fn date_time(&self) -> WatchDateTime {
        *self
    }
}
