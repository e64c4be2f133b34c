//! Configuration type definitions
//!
//! These types describe how the dozenal face samples and renders time.
//! With the `serde` feature they can be read from a host-side config
//! file; every field has a default.

use crate::encoder::{DivisionTable, FIELD_WIDTH};
use crate::time::TickRate;
use dozenal_display::DISPLAY_CELLS;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Cell where the dozenal field starts (the hours/minutes/seconds area)
pub const DEFAULT_DISPLAY_OFFSET: u8 = 5;

/// Configuration errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// A division table entry is zero
    ZeroDivisor,
    /// First divisor longer than a day
    DivisorOutOfRange,
    /// Divisors are not strictly decreasing
    DivisorOrder,
    /// Tick rate is zero, above 128 Hz, or not a power of two
    InvalidTickRate,
    /// The five-cell field does not fit on the display at this offset
    FieldOutOfRange,
}

/// Dozenal face configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FaceConfig {
    /// Refresh rate requested while the face is active
    pub tick_rate: TickRate,
    /// First display cell of the five-cell field
    pub display_offset: u8,
    /// Draw the fifth subdivision instead of a blank in the last cell
    pub show_subdigit: bool,
    /// Divisors used by the encoder
    pub table: DivisionTable,
}

impl Default for FaceConfig {
    fn default() -> Self {
        Self {
            tick_rate: TickRate::DOZENAL,
            display_offset: DEFAULT_DISPLAY_OFFSET,
            show_subdigit: false,
            table: DivisionTable::STANDARD,
        }
    }
}

impl FaceConfig {
    /// 64 Hz configuration of the earlier variant
    pub fn fast() -> Self {
        Self {
            tick_rate: TickRate::FAST,
            ..Self::default()
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.table.validate()?;

        let hz = self.tick_rate.hz();
        if hz == 0 || hz > TickRate::MAX.hz() || !hz.is_power_of_two() {
            return Err(ConfigError::InvalidTickRate);
        }

        if usize::from(self.display_offset) + FIELD_WIDTH > DISPLAY_CELLS {
            return Err(ConfigError::FieldOutOfRange);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = FaceConfig::default();
        assert_eq!(config.tick_rate.hz(), 16);
        assert_eq!(config.display_offset, 5);
        assert!(!config.show_subdigit);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_fast_config() {
        let config = FaceConfig::fast();
        assert_eq!(config.tick_rate.hz(), 64);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_invalid_tick_rates() {
        for hz in [0u8, 3, 12, 129, 255] {
            let config = FaceConfig {
                tick_rate: TickRate::new(hz),
                ..FaceConfig::default()
            };
            assert_eq!(config.validate(), Err(ConfigError::InvalidTickRate), "{} Hz", hz);
        }
    }

    #[test]
    fn test_field_must_fit() {
        let config = FaceConfig {
            display_offset: 6,
            ..FaceConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::FieldOutOfRange));

        let leftmost = FaceConfig {
            display_offset: 0,
            ..FaceConfig::default()
        };
        assert_eq!(leftmost.validate(), Ok(()));
    }

    #[test]
    fn test_table_errors_propagate() {
        let config = FaceConfig {
            table: DivisionTable {
                fraction_den: 0,
                ..DivisionTable::STANDARD
            },
            ..FaceConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroDivisor));
    }
}
