//! Segment display trait
//!
//! Defines the interface a watch face uses to write characters.

/// Number of character cells on the segment display
pub const DISPLAY_CELLS: usize = 10;

/// Segment display errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Position is outside the ten character cells
    InvalidPosition,
    /// Character has no segment representation
    UnsupportedCharacter,
}

/// Fixed annunciator segments
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Indicator {
    /// Signal strength / activity
    Signal,
    /// Alarm bell
    Bell,
    /// PM marker
    Pm,
    /// 24-hour mode marker
    TwentyFourHour,
    /// Lap marker
    Lap,
    /// Colon between hours and minutes
    Colon,
}

impl Indicator {
    /// All indicators, in bit order
    pub const ALL: [Indicator; 6] = [
        Indicator::Signal,
        Indicator::Bell,
        Indicator::Pm,
        Indicator::TwentyFourHour,
        Indicator::Lap,
        Indicator::Colon,
    ];

    /// Bit mask of this indicator in a packed indicator byte
    pub const fn mask(self) -> u8 {
        1 << (self as u8)
    }
}

/// Check whether a character can be drawn on a segment cell
///
/// The segment font covers printable ASCII; lowercase letters are drawn
/// in their nearest segment form by the driver.
pub fn is_renderable(c: char) -> bool {
    c.is_ascii() && !c.is_ascii_control()
}

/// Segment display trait
///
/// Implementations map characters to segments for a specific LCD.
pub trait SegmentDisplay {
    /// Draw a single character at a cell position (0-9)
    fn display_character(&mut self, c: char, position: u8) -> Result<(), DisplayError>;

    /// Turn an indicator segment on
    fn set_indicator(&mut self, indicator: Indicator);

    /// Turn an indicator segment off
    fn clear_indicator(&mut self, indicator: Indicator);

    /// Blank every cell and indicator
    fn clear(&mut self);

    /// Draw a string starting at a cell position
    ///
    /// Characters past the last cell are an error; cells written before
    /// the error keep their new contents.
    fn display_string(&mut self, text: &str, position: u8) -> Result<(), DisplayError> {
        for (offset, c) in text.chars().enumerate() {
            let pos = usize::from(position) + offset;
            if pos >= DISPLAY_CELLS {
                return Err(DisplayError::InvalidPosition);
            }
            self.display_character(c, pos as u8)?;
        }
        Ok(())
    }
}
