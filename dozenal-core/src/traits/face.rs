//! Watch face trait
//!
//! A face is a pluggable display mode. The host owns every registered
//! face and calls into the active one; faces reach back into the host
//! only through `FaceHost`.

use dozenal_display::{DisplayError, SegmentDisplay};

use crate::events::FaceEvent;
use crate::time::WatchDateTime;

/// Services the host offers a face while it handles a callback
pub trait FaceHost {
    /// Current real-time clock reading
    fn date_time(&self) -> WatchDateTime;

    /// Display the face draws on
    fn display(&mut self) -> &mut dyn SegmentDisplay;

    /// Ask for tick events at `hz` per second while this face is active
    fn request_tick_frequency(&mut self, hz: u8);

    /// Host behavior for events a face does not handle itself
    ///
    /// Returns whether the watch may enter standby afterwards.
    fn default_loop_handler(&mut self, event: FaceEvent) -> bool;

    /// Report a display write that failed
    fn report_display_error(&mut self, error: DisplayError) {
        let _ = error;
    }
}

/// Watch face lifecycle
///
/// The four required callbacks mirror the host's face descriptor:
/// `setup` at boot, `activate` when the face comes on screen, `handle`
/// for every event while on screen, and `resign` before it leaves.
pub trait WatchFace {
    /// Short name used in logs
    fn name(&self) -> &'static str;

    /// One-time and wake-from-sleep setup
    ///
    /// Called for every registered face at boot with its registry index.
    /// Must be idempotent.
    fn setup(&mut self, index: u8);

    /// Face is coming on screen
    fn activate(&mut self, host: &mut dyn FaceHost);

    /// Handle one event
    ///
    /// Returns `true` if the watch may enter standby afterwards. Return
    /// `false` only while driving the LED or buzzer directly.
    fn handle(&mut self, event: FaceEvent, host: &mut dyn FaceHost) -> bool;

    /// Face is leaving the screen
    fn resign(&mut self, host: &mut dyn FaceHost);

    /// Whether this face needs a `BackgroundTask` event while inactive
    ///
    /// Polled once a minute for faces that are not on screen.
    fn wants_background_task(&mut self, host: &mut dyn FaceHost) -> bool {
        let _ = host;
        false
    }
}
