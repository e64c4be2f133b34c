//! Dozenal time encoder
//!
//! Splits the 86400-second day into a base-12 place-value reading:
//!
//! ```text
//! ┌────────┬────────┬────────┬───────────┬────────────┐
//! │ DIGIT1 │ DIGIT2 │ DIGIT3 │ DIGIT4    │ SUBDIGIT   │
//! │ 7200 s │ 600 s  │ 50 s   │ 25/6 s    │ 25/72 s    │
//! └────────┴────────┴────────┴───────────┴────────────┘
//! ```
//!
//! The first three steps are integer division of the seconds since
//! midnight. The fourth step also takes the sub-second tick position into
//! account and is computed with exact rational arithmetic, so no floating
//! point is needed on the watch.

use core::fmt;

use heapless::String;

use crate::config::ConfigError;
use crate::time::{TickRate, TimeOfDay, SECONDS_PER_DAY};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Digit alphabet, indexed by digit value 0-11
pub const DOZENAL_DIGITS: [char; 12] = [
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', 'H', 'E',
];

/// Largest value a single dozenal digit can hold
pub const MAX_DIGIT: u8 = 11;

/// Width of the rendered field: four digits plus the fifth cell
pub const FIELD_WIDTH: usize = 5;

/// Subdivisions of the fourth step used for the fifth digit
const SUBDIGIT_STEPS: u64 = 12;

/// Divisors used to peel digits off the seconds since midnight
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DivisionTable {
    /// First divisor in seconds
    pub first: u32,
    /// Second divisor in seconds
    pub second: u32,
    /// Third divisor in seconds
    pub third: u32,
    /// Fourth divisor numerator (seconds = num / den)
    pub fraction_num: u32,
    /// Fourth divisor denominator
    pub fraction_den: u32,
}

impl Default for DivisionTable {
    fn default() -> Self {
        Self::STANDARD
    }
}

impl DivisionTable {
    /// 7200 s / 600 s / 50 s / 25/6 s
    pub const STANDARD: DivisionTable = DivisionTable {
        first: 2 * 60 * 60,
        second: 10 * 60,
        third: 50,
        fraction_num: 25,
        fraction_den: 6,
    };

    /// Check the table is usable
    ///
    /// Divisors must be non-zero, the first must fit in a day, and each
    /// step must be strictly smaller than the one before it.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.first == 0
            || self.second == 0
            || self.third == 0
            || self.fraction_num == 0
            || self.fraction_den == 0
        {
            return Err(ConfigError::ZeroDivisor);
        }
        if self.first > SECONDS_PER_DAY {
            return Err(ConfigError::DivisorOutOfRange);
        }
        // fraction_num / fraction_den < third  <=>  num < third * den
        let fraction_fits =
            u64::from(self.fraction_num) < u64::from(self.third) * u64::from(self.fraction_den);
        if self.second >= self.first || self.third >= self.second || !fraction_fits {
            return Err(ConfigError::DivisorOrder);
        }
        Ok(())
    }

    /// Encode a time of day
    ///
    /// `subsecond` is the tick index within the current second; it is
    /// clamped to `rate - 1`. A zero rate ignores it entirely.
    pub fn encode(&self, time: TimeOfDay, subsecond: u8, rate: TickRate) -> DozenalTime {
        let first = self.first.max(1);
        let second = self.second.max(1);
        let third = self.third.max(1);

        let mut total = time.seconds_since_midnight();
        let d1 = total / first;
        total %= first;
        let d2 = total / second;
        total %= second;
        let d3 = total / third;
        total %= third;

        // Work in units of 1 / (den * ticks) seconds so the fourth and
        // fifth steps stay integral.
        let ticks = u64::from(rate.hz().max(1));
        let sub = if rate.is_stopped() {
            0
        } else {
            u64::from(subsecond).min(ticks - 1)
        };
        let num = u64::from(self.fraction_num.max(1));
        let den = u64::from(self.fraction_den.max(1));

        let scaled = (u64::from(total) * ticks + sub) * den;
        let step = num * ticks;
        let d4 = scaled / step;
        let d5 = (scaled % step) * SUBDIGIT_STEPS / step;

        DozenalTime {
            digits: [
                clamp_digit(u64::from(d1)),
                clamp_digit(u64::from(d2)),
                clamp_digit(u64::from(d3)),
                clamp_digit(d4),
            ],
            subdigit: clamp_digit(d5),
        }
    }
}

fn clamp_digit(value: u64) -> u8 {
    value.min(u64::from(MAX_DIGIT)) as u8
}

/// Map a digit value to its display character
///
/// Values above 11 map to `E`.
pub fn digit_char(digit: u8) -> char {
    DOZENAL_DIGITS[usize::from(digit.min(MAX_DIGIT))]
}

/// Four-digit dozenal reading plus the fifth subdivision
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DozenalTime {
    digits: [u8; 4],
    subdigit: u8,
}

impl DozenalTime {
    /// Encode with the standard division table
    pub fn from_time(time: TimeOfDay, subsecond: u8, rate: TickRate) -> Self {
        DivisionTable::STANDARD.encode(time, subsecond, rate)
    }

    /// Digit values, most significant first
    pub fn digits(&self) -> [u8; 4] {
        self.digits
    }

    /// Fifth subdivision of the last digit (0-11)
    pub fn subdigit(&self) -> u8 {
        self.subdigit
    }

    /// Digit characters, most significant first
    pub fn chars(&self) -> [char; 4] {
        self.digits.map(digit_char)
    }

    /// Reading as a single base-12 number (0..=20735)
    ///
    /// Orders readings the same way the wall clock orders times.
    pub fn ordinal(&self) -> u16 {
        self.digits
            .iter()
            .fold(0u16, |acc, &d| acc * 12 + u16::from(d))
    }

    /// Render the five-cell display field
    ///
    /// The fifth cell is blank unless `show_subdigit` is set.
    pub fn field(&self, show_subdigit: bool) -> String<FIELD_WIDTH> {
        let mut out = String::new();
        for c in self.chars() {
            // Capacity is exactly FIELD_WIDTH, so pushes cannot fail
            let _ = out.push(c);
        }
        let tail = if show_subdigit {
            digit_char(self.subdigit)
        } else {
            ' '
        };
        let _ = out.push(tail);
        out
    }
}

impl fmt::Display for DozenalTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in self.chars() {
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn at(h: u8, m: u8, s: u8) -> TimeOfDay {
        TimeOfDay::new(h, m, s).unwrap()
    }

    #[test]
    fn test_midnight() {
        let t = DozenalTime::from_time(TimeOfDay::MIDNIGHT, 0, TickRate::DOZENAL);
        assert_eq!(t.digits(), [0, 0, 0, 0]);
        assert_eq!(t.field(false).as_str(), "0000 ");
    }

    #[test]
    fn test_two_hours() {
        let t = DozenalTime::from_time(at(2, 0, 0), 0, TickRate::DOZENAL);
        assert_eq!(t.digits(), [1, 0, 0, 0]);
        assert_eq!(t.field(false).as_str(), "1000 ");
    }

    #[test]
    fn test_noon() {
        let t = DozenalTime::from_time(at(12, 0, 0), 0, TickRate::DOZENAL);
        assert_eq!(t.field(false).as_str(), "6000 ");
    }

    #[test]
    fn test_last_tick_before_midnight() {
        let t = DozenalTime::from_time(at(23, 59, 59), 15, TickRate::DOZENAL);
        assert_eq!(t.digits(), [11, 11, 11, 11]);
        assert_eq!(t.field(false).as_str(), "EEEE ");
        assert_eq!(t.subdigit(), 11);
        assert_eq!(t.field(true).as_str(), "EEEEE");
    }

    #[test]
    fn test_zero_tick_rate_ignores_subsecond() {
        // 49 s remainder: floor(49 * 6 / 25) = 11
        let stopped = DozenalTime::from_time(at(0, 0, 49), 200, TickRate::new(0));
        assert_eq!(stopped.digits(), [0, 0, 0, 11]);

        // 4 s remainder sits just below the first 25/6 s boundary
        let t = DozenalTime::from_time(at(0, 0, 4), 15, TickRate::new(0));
        assert_eq!(t.digits()[3], 0);
    }

    #[test]
    fn test_subsecond_crosses_fraction_boundary() {
        // 25/6 s = 4.1666 s; 4 s + 3/16 s is past it, 4 s + 2/16 s is not
        let below = DozenalTime::from_time(at(0, 0, 4), 2, TickRate::DOZENAL);
        let above = DozenalTime::from_time(at(0, 0, 4), 3, TickRate::DOZENAL);
        assert_eq!(below.digits()[3], 0);
        assert_eq!(above.digits()[3], 1);
    }

    #[test]
    fn test_subsecond_clamped_to_rate() {
        let clamped = DozenalTime::from_time(at(0, 0, 4), 255, TickRate::DOZENAL);
        let last = DozenalTime::from_time(at(0, 0, 4), 15, TickRate::DOZENAL);
        assert_eq!(clamped, last);
    }

    #[test]
    fn test_fast_rate_matches_slow_rate_on_whole_seconds() {
        for s in 0..50 {
            let slow = DozenalTime::from_time(at(5, 17, s), 0, TickRate::DOZENAL);
            let fast = DozenalTime::from_time(at(5, 17, s), 0, TickRate::FAST);
            assert_eq!(slow, fast);
        }
    }

    #[test]
    fn test_digit_alphabet() {
        assert_eq!(digit_char(0), '0');
        assert_eq!(digit_char(9), '9');
        assert_eq!(digit_char(10), 'H');
        assert_eq!(digit_char(11), 'E');
        assert_eq!(digit_char(200), 'E');
    }

    #[test]
    fn test_display_impl() {
        let t = DozenalTime::from_time(at(20, 50, 0), 0, TickRate::DOZENAL);
        // 75000 s = 10 * 7200 + 5 * 600
        let mut s: String<8> = String::new();
        core::fmt::write(&mut s, format_args!("{}", t)).unwrap();
        assert_eq!(s.as_str(), "H500");
    }

    #[test]
    fn test_standard_table_is_valid() {
        assert_eq!(DivisionTable::STANDARD.validate(), Ok(()));
        assert_eq!(DivisionTable::default(), DivisionTable::STANDARD);
    }

    #[test]
    fn test_invalid_tables() {
        let zero = DivisionTable {
            third: 0,
            ..DivisionTable::STANDARD
        };
        assert_eq!(zero.validate(), Err(ConfigError::ZeroDivisor));

        let too_big = DivisionTable {
            first: SECONDS_PER_DAY + 1,
            ..DivisionTable::STANDARD
        };
        assert_eq!(too_big.validate(), Err(ConfigError::DivisorOutOfRange));

        let unordered = DivisionTable {
            second: 7200,
            ..DivisionTable::STANDARD
        };
        assert_eq!(unordered.validate(), Err(ConfigError::DivisorOrder));

        let fraction_too_big = DivisionTable {
            fraction_num: 300,
            fraction_den: 6,
            ..DivisionTable::STANDARD
        };
        assert_eq!(fraction_too_big.validate(), Err(ConfigError::DivisorOrder));
    }

    #[test]
    fn test_unvalidated_table_does_not_panic() {
        let broken = DivisionTable {
            first: 0,
            second: 0,
            third: 0,
            fraction_num: 0,
            fraction_den: 0,
        };
        let t = broken.encode(at(23, 59, 59), 15, TickRate::DOZENAL);
        for d in t.digits() {
            assert!(d <= MAX_DIGIT);
        }
    }

    #[test]
    fn test_midnight_wraps() {
        let before = DozenalTime::from_time(at(23, 59, 59), 15, TickRate::DOZENAL);
        let after = DozenalTime::from_time(TimeOfDay::from_seconds(86_400), 0, TickRate::DOZENAL);
        assert_eq!(before.ordinal(), 12 * 12 * 12 * 12 - 1);
        assert_eq!(after.ordinal(), 0);
    }

    proptest! {
        #[test]
        fn prop_digits_in_range(seconds in 0u32..SECONDS_PER_DAY, sub in 0u8..16) {
            let t = DozenalTime::from_time(TimeOfDay::from_seconds(seconds), sub, TickRate::DOZENAL);
            for d in t.digits() {
                prop_assert!(d <= MAX_DIGIT);
            }
            prop_assert!(t.subdigit() <= MAX_DIGIT);
        }

        #[test]
        fn prop_recombines_within_truncation(seconds in 0u32..SECONDS_PER_DAY) {
            let t = DozenalTime::from_time(TimeOfDay::from_seconds(seconds), 0, TickRate::DOZENAL);
            let [d1, d2, d3, d4] = t.digits().map(u32::from);
            let whole = d1 * 7200 + d2 * 600 + d3 * 50;
            let remainder = seconds - whole;
            prop_assert!(remainder < 50);
            // d4 * 25/6 <= remainder < (d4 + 1) * 25/6
            prop_assert!(d4 * 25 <= remainder * 6);
            prop_assert!(remainder * 6 < (d4 + 1) * 25);
        }

        #[test]
        fn prop_monotonic_across_ticks(seconds in 0u32..SECONDS_PER_DAY, sub in 0u8..16) {
            let now = DozenalTime::from_time(TimeOfDay::from_seconds(seconds), sub, TickRate::DOZENAL);
            let (next_seconds, next_sub) = if sub == 15 {
                (seconds + 1, 0)
            } else {
                (seconds, sub + 1)
            };
            let next = DozenalTime::from_time(
                TimeOfDay::from_seconds(next_seconds),
                next_sub,
                TickRate::DOZENAL,
            );
            if next_seconds == SECONDS_PER_DAY {
                prop_assert_eq!(next.ordinal(), 0);
            } else {
                prop_assert!(next.ordinal() >= now.ordinal());
                prop_assert!(next.ordinal() - now.ordinal() <= 1);
            }
        }

        #[test]
        fn prop_ticks_only_move_last_digit(seconds in 0u32..SECONDS_PER_DAY, sub in 0u8..16) {
            let whole = DozenalTime::from_time(TimeOfDay::from_seconds(seconds), 0, TickRate::DOZENAL);
            let t = DozenalTime::from_time(TimeOfDay::from_seconds(seconds), sub, TickRate::DOZENAL);
            let [a1, a2, a3, _] = whole.digits();
            let [b1, b2, b3, _] = t.digits();
            prop_assert_eq!((a1, a2, a3), (b1, b2, b3));
        }
    }
}
