//! Host services handed to the active face
//!
//! `Services` owns the clock, display and LED and implements `FaceHost`.
//! It is kept apart from the face list so a face can borrow it mutably
//! while the registry borrows the face.

use dozenal_core::time::SECONDS_PER_DAY;
use dozenal_core::{EventType, FaceEvent, FaceHost, RealTimeClock, TickRate, WatchDateTime};
use dozenal_display::{DisplayError, SegmentDisplay};

use crate::config::MovementConfig;
use crate::led::Led;

/// Face change requested by the default loop handler
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Navigation {
    /// Next face in the registry, wrapping to the first
    Next,
    /// First face in the registry
    First,
}

/// Round a requested tick frequency to one the RTC can deliver
///
/// 0 stops ticks, anything above 128 Hz is capped, and other values
/// round down to a power of two.
pub fn normalize_tick_frequency(hz: u8) -> TickRate {
    TickRate::supported(hz)
}

/// Clock, display and LED owned by the registry
pub struct Services<C, D, L> {
    clock: C,
    display: D,
    led: L,
    config: MovementConfig,
    /// Tick rate requested by the active face
    tick_rate: TickRate,
    /// Navigation requested during the current dispatch
    pending: Option<Navigation>,
    /// Second of day the LED was switched on
    led_on_since: Option<u32>,
    /// Display writes that failed since boot
    display_errors: u32,
}

impl<C, D, L> Services<C, D, L>
where
    C: RealTimeClock,
    D: SegmentDisplay,
    L: Led,
{
    /// Create the services
    pub fn new(clock: C, display: D, led: L, config: MovementConfig) -> Self {
        Self {
            clock,
            display,
            led,
            config,
            tick_rate: TickRate::ONE_HZ,
            pending: None,
            led_on_since: None,
            display_errors: 0,
        }
    }

    /// Get the clock
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Get the clock mutably (to set the time)
    pub fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }

    /// Get the display
    pub fn segment_display(&self) -> &D {
        &self.display
    }

    /// Get the display mutably
    pub fn segment_display_mut(&mut self) -> &mut D {
        &mut self.display
    }

    /// Get the LED
    pub fn led(&self) -> &L {
        &self.led
    }

    /// Current tick rate
    pub fn tick_rate(&self) -> TickRate {
        self.tick_rate
    }

    /// Number of failed display writes reported by faces
    pub fn display_errors(&self) -> u32 {
        self.display_errors
    }

    /// Reset the tick rate before a face is activated
    pub(crate) fn reset_tick_rate(&mut self) {
        self.tick_rate = TickRate::ONE_HZ;
    }

    /// Take the navigation requested since the last call
    pub(crate) fn take_navigation(&mut self) -> Option<Navigation> {
        self.pending.take()
    }

    /// Turn the LED on for the configured duration
    pub fn illuminate_led(&mut self) {
        if self.config.led_duration_s == 0 {
            return;
        }
        self.led.set_on(true);
        self.led_on_since = Some(self.second_of_day());
    }

    /// Turn the LED off once its duration has elapsed
    pub fn expire_led(&mut self) {
        let Some(since) = self.led_on_since else {
            return;
        };
        let elapsed = (self.second_of_day() + SECONDS_PER_DAY - since) % SECONDS_PER_DAY;
        if elapsed >= u32::from(self.config.led_duration_s) {
            self.led.set_on(false);
            self.led_on_since = None;
        }
    }

    fn second_of_day(&self) -> u32 {
        self.clock.date_time().time_of_day().seconds_since_midnight()
    }
}

impl<C, D, L> FaceHost for Services<C, D, L>
where
    C: RealTimeClock,
    D: SegmentDisplay,
    L: Led,
{
    fn date_time(&self) -> WatchDateTime {
        self.clock.date_time()
    }

    fn display(&mut self) -> &mut dyn SegmentDisplay {
        &mut self.display
    }

    fn request_tick_frequency(&mut self, hz: u8) {
        let rate = normalize_tick_frequency(hz);
        #[cfg(feature = "defmt")]
        if rate.hz() != hz {
            defmt::warn!("Tick frequency {} Hz adjusted to {} Hz", hz, rate.hz());
        }
        self.tick_rate = rate;
    }

    fn default_loop_handler(&mut self, event: FaceEvent) -> bool {
        match event.event_type {
            EventType::ModeButtonUp => self.pending = Some(Navigation::Next),
            EventType::ModeLongPress | EventType::Timeout => self.pending = Some(Navigation::First),
            EventType::LightButtonDown => self.illuminate_led(),
            _ => {}
        }
        true
    }

    fn report_display_error(&mut self, error: DisplayError) {
        #[cfg(feature = "defmt")]
        defmt::warn!("Display write failed: {}", error);
        let _ = error;
        self.display_errors = self.display_errors.saturating_add(1);
    }
}
