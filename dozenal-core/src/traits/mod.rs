//! Face and host traits
//!
//! These traits define the interface between a watch face and the
//! firmware that hosts it.

pub mod clock;
pub mod face;

pub use clock::RealTimeClock;
pub use face::{FaceHost, WatchFace};
