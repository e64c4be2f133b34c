//! Registry configuration

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default LED on-time after a light button press
pub const DEFAULT_LED_DURATION_S: u8 = 1;

/// Registry configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MovementConfig {
    /// Seconds the LED stays lit after the light button (0 = off)
    pub led_duration_s: u8,
}

impl Default for MovementConfig {
    fn default() -> Self {
        Self {
            led_duration_s: DEFAULT_LED_DURATION_S,
        }
    }
}
