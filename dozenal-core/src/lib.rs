//! Board-agnostic core logic for the dozenal watch face
//!
//! This crate contains everything that does not depend on a specific
//! watch or host:
//!
//! - Time-of-day and tick-rate types
//! - Dozenal time encoder (mixed-radix division of the day)
//! - Face configuration
//! - Watch face traits and events
//! - The dozenal face and a plain clock face

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod config;
pub mod encoder;
pub mod events;
pub mod faces;
pub mod time;
pub mod traits;

pub use config::{ConfigError, FaceConfig};
pub use encoder::{DivisionTable, DozenalTime, DOZENAL_DIGITS};
pub use events::{EventType, FaceEvent};
pub use time::{TickRate, TimeError, TimeOfDay, WatchDateTime};
pub use traits::{FaceHost, RealTimeClock, WatchFace};
