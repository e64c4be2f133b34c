//! Face registry and event dispatch
//!
//! A minimal stand-in for the watch firmware's face framework:
//!
//! - Registry of faces with mode-button navigation
//! - Default loop handler for events a face passes through
//! - Tick-frequency requests, normalized to what the RTC can deliver
//! - LED illumination on the light button
//!
//! Everything is `no_std` and allocation free; faces are borrowed for
//! the lifetime of the registry.

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod config;
pub mod led;
pub mod movement;
pub mod services;

pub use config::MovementConfig;
pub use led::{Led, NoLed, PinLed};
pub use movement::{Movement, MovementError};
pub use services::{normalize_tick_frequency, Navigation, Services};
