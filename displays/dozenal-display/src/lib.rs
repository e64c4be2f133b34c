//! Segment display abstraction for the dozenal watch face
//!
//! This crate provides:
//! - `SegmentDisplay` trait for the watch's character-segment LCD
//! - `Indicator` enum for the fixed annunciator segments
//! - `SegmentBuffer`, an in-memory display used by the simulator and tests
//!
//! # Layout
//!
//! The display has ten character cells:
//!
//! ```text
//! ┌───────┬─────┬───────┬─────────┬─────────┐
//! │ WDAY  │ DAY │ HOURS │ MINUTES │ SECONDS │
//! │ 0 1   │ 2 3 │ 4 5   │ 6 7     │ 8 9     │
//! └───────┴─────┴───────┴─────────┴─────────┘
//! ```
//!
//! Faces address cells by position and never see the segment mapping.

#![no_std]
#![deny(unsafe_code)]

pub mod buffer;
pub mod segment;

// Re-export key types
pub use buffer::SegmentBuffer;
pub use segment::{DisplayError, Indicator, SegmentDisplay, DISPLAY_CELLS};
