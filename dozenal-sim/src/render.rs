//! Terminal rendering of the segment buffer

use dozenal_display::{Indicator, SegmentBuffer};

/// Render the display as one terminal line
///
/// Cells are grouped the way the LCD groups them, followed by any lit
/// indicators.
pub fn render_line(buffer: &SegmentBuffer) -> String {
    let mut line = format!(
        "[{}|{}|{}:{}:{}]",
        buffer.slice(0, 2),
        buffer.slice(2, 2),
        buffer.slice(4, 2),
        buffer.slice(6, 2),
        buffer.slice(8, 2),
    );
    for indicator in Indicator::ALL {
        if buffer.indicator(indicator) {
            line.push(' ');
            line.push_str(indicator_label(indicator));
        }
    }
    line
}

fn indicator_label(indicator: Indicator) -> &'static str {
    match indicator {
        Indicator::Signal => "SIG",
        Indicator::Bell => "BELL",
        Indicator::Pm => "PM",
        Indicator::TwentyFourHour => "24H",
        Indicator::Lap => "LAP",
        Indicator::Colon => "COLON",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dozenal_display::SegmentDisplay;

    #[test]
    fn test_render_dozenal_field() {
        let mut buffer = SegmentBuffer::new();
        buffer.display_string("635E ", 5).unwrap();
        assert_eq!(render_line(&buffer), "[  |  | 6:35:E ]");
    }

    #[test]
    fn test_render_indicators() {
        let mut buffer = SegmentBuffer::new();
        buffer.set_indicator(Indicator::TwentyFourHour);
        buffer.set_indicator(Indicator::Colon);
        assert_eq!(render_line(&buffer), "[  |  |  :  :  ] 24H COLON");
    }
}
