//! Dozenal time face
//!
//! Shows the time of day as four base-12 digits in the hours/minutes/
//! seconds area of the display, refreshed at 16 Hz so the last digit
//! (25/6 s) advances smoothly.

use crate::config::FaceConfig;
use crate::encoder::DozenalTime;
use crate::events::{EventType, FaceEvent};
use crate::time::TickRate;
use crate::traits::{FaceHost, WatchFace};

/// Per-face state
///
/// Lives inside the face value; the host never allocates for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DozenalState {
    /// Registry index assigned at setup
    pub index: Option<u8>,
    /// Reading drawn by the last refresh
    pub last_reading: Option<DozenalTime>,
}

/// Dozenal watch face
#[derive(Debug, Clone)]
pub struct DozenalFace {
    config: FaceConfig,
    state: DozenalState,
}

impl Default for DozenalFace {
    fn default() -> Self {
        Self::new(FaceConfig::default())
    }
}

impl DozenalFace {
    /// Create a face with the given configuration
    ///
    /// The tick rate is rounded to one the host can deliver, so the
    /// encoder scales sub-second ticks by the rate actually granted.
    pub fn new(mut config: FaceConfig) -> Self {
        config.tick_rate = TickRate::supported(config.tick_rate.hz());
        Self {
            config,
            state: DozenalState::default(),
        }
    }

    /// Get the configuration
    pub fn config(&self) -> &FaceConfig {
        &self.config
    }

    /// Get the face state
    pub fn state(&self) -> &DozenalState {
        &self.state
    }

    /// Read the clock, encode it and draw the field
    fn refresh(&mut self, subsecond: u8, host: &mut dyn FaceHost) {
        let time = host.date_time().time_of_day();
        let reading = self
            .config
            .table
            .encode(time, subsecond, self.config.tick_rate);
        let field = reading.field(self.config.show_subdigit);

        if let Err(e) = host
            .display()
            .display_string(field.as_str(), self.config.display_offset)
        {
            host.report_display_error(e);
        }
        self.state.last_reading = Some(reading);
    }
}

impl WatchFace for DozenalFace {
    fn name(&self) -> &'static str {
        "dozenal"
    }

    fn setup(&mut self, index: u8) {
        if self.state.index.is_none() {
            self.state.index = Some(index);
        }
    }

    fn activate(&mut self, host: &mut dyn FaceHost) {
        host.request_tick_frequency(self.config.tick_rate.hz());
    }

    fn handle(&mut self, event: FaceEvent, host: &mut dyn FaceHost) -> bool {
        match event.event_type {
            e if e.is_refresh() => self.refresh(event.subsecond, host),
            // Consumed so the host does not act on them
            EventType::LightButtonUp
            | EventType::AlarmButtonUp
            | EventType::Timeout
            | EventType::LowEnergyUpdate => {}
            _ => return host.default_loop_handler(event),
        }

        // No LED or buzzer is driven directly, so standby is always fine
        true
    }

    fn resign(&mut self, _host: &mut dyn FaceHost) {}
}
