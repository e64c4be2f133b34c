//! Plain 24-hour clock face
//!
//! Draws `DD HH:MM:SS` once per second. Registered alongside the dozenal
//! face so the mode button has somewhere to go.

use core::fmt::Write;

use heapless::String;

use dozenal_display::Indicator;

use crate::events::{EventType, FaceEvent};
use crate::time::{TickRate, WatchDateTime};
use crate::traits::{FaceHost, WatchFace};

/// First cell of the day-of-month field
const DAY_OFFSET: u8 = 2;

/// 24-hour clock face
#[derive(Debug, Clone, Default)]
pub struct ClockFace;

impl ClockFace {
    /// Create a clock face
    pub fn new() -> Self {
        Self
    }

    fn draw(&self, now: &WatchDateTime, with_seconds: bool, host: &mut dyn FaceHost) {
        let time = now.time_of_day();
        let mut text: String<8> = String::new();
        let _ = write!(
            text,
            "{:>2}{:02}{:02}",
            now.day.min(31),
            time.hour(),
            time.minute()
        );
        if with_seconds {
            let _ = write!(text, "{:02}", time.second());
        } else {
            let _ = text.push_str("  ");
        }

        let display = host.display();
        display.set_indicator(Indicator::Colon);
        display.set_indicator(Indicator::TwentyFourHour);
        if let Err(e) = display.display_string(text.as_str(), DAY_OFFSET) {
            host.report_display_error(e);
        }
    }
}

impl WatchFace for ClockFace {
    fn name(&self) -> &'static str {
        "clock"
    }

    fn setup(&mut self, _index: u8) {}

    fn activate(&mut self, host: &mut dyn FaceHost) {
        host.request_tick_frequency(TickRate::ONE_HZ.hz());
    }

    fn handle(&mut self, event: FaceEvent, host: &mut dyn FaceHost) -> bool {
        match event.event_type {
            e if e.is_refresh() => {
                let now = host.date_time();
                self.draw(&now, true, host);
            }
            EventType::LowEnergyUpdate => {
                // Seconds would sit stale for a minute in low energy mode
                let now = host.date_time();
                self.draw(&now, false, host);
            }
            _ => return host.default_loop_handler(event),
        }
        true
    }

    fn resign(&mut self, host: &mut dyn FaceHost) {
        let display = host.display();
        display.clear_indicator(Indicator::Colon);
        display.clear_indicator(Indicator::TwentyFourHour);
    }
}
