//! In-memory segment display
//!
//! Provides a ten-cell character buffer that can stand in for the LCD.

use core::fmt;

use heapless::String;

use crate::segment::{is_renderable, DisplayError, Indicator, SegmentDisplay, DISPLAY_CELLS};

/// In-memory segment display
///
/// Records what a face drew so it can be rendered elsewhere (terminal,
/// test assertions) instead of driving segments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmentBuffer {
    /// Current character in each cell
    cells: [char; DISPLAY_CELLS],
    /// Packed indicator bits (see `Indicator::mask`)
    indicators: u8,
    /// Whether the contents changed since the last `mark_clean`
    dirty: bool,
}

impl Default for SegmentBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl SegmentBuffer {
    /// Create a blank buffer
    pub const fn new() -> Self {
        Self {
            cells: [' '; DISPLAY_CELLS],
            indicators: 0,
            dirty: true,
        }
    }

    /// Get the character in a cell
    pub fn cell(&self, position: usize) -> Option<char> {
        self.cells.get(position).copied()
    }

    /// Get all cells as a string
    pub fn text(&self) -> String<DISPLAY_CELLS> {
        let mut out = String::new();
        for &c in &self.cells {
            // Cells only ever hold ASCII, so each push is one byte
            let _ = out.push(c);
        }
        out
    }

    /// Get a range of cells as a string
    ///
    /// The range is clipped to the display.
    pub fn slice(&self, start: usize, len: usize) -> String<DISPLAY_CELLS> {
        let mut out = String::new();
        for &c in self.cells.iter().skip(start).take(len) {
            let _ = out.push(c);
        }
        out
    }

    /// Check if an indicator is lit
    pub fn indicator(&self, indicator: Indicator) -> bool {
        self.indicators & indicator.mask() != 0
    }

    /// Check if the buffer changed since it was last rendered
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Mark buffer as clean (after rendering)
    pub fn mark_clean(&mut self) {
        self.dirty = false;
    }
}

impl SegmentDisplay for SegmentBuffer {
    fn display_character(&mut self, c: char, position: u8) -> Result<(), DisplayError> {
        let pos = usize::from(position);
        if pos >= DISPLAY_CELLS {
            return Err(DisplayError::InvalidPosition);
        }
        if !is_renderable(c) {
            return Err(DisplayError::UnsupportedCharacter);
        }
        if self.cells[pos] != c {
            self.cells[pos] = c;
            self.dirty = true;
        }
        Ok(())
    }

    fn set_indicator(&mut self, indicator: Indicator) {
        if !self.indicator(indicator) {
            self.indicators |= indicator.mask();
            self.dirty = true;
        }
    }

    fn clear_indicator(&mut self, indicator: Indicator) {
        if self.indicator(indicator) {
            self.indicators &= !indicator.mask();
            self.dirty = true;
        }
    }

    fn clear(&mut self) {
        self.cells = [' '; DISPLAY_CELLS];
        self.indicators = 0;
        self.dirty = true;
    }
}

impl fmt::Display for SegmentBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text().as_str())
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for SegmentBuffer {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "SegmentBuffer[{}]", self.text().as_str());
    }
}
