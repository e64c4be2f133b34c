//! Configuration types
//!
//! Face configuration is an immutable value handed to the face at
//! construction; nothing here is global or mutable.

pub mod types;

pub use types::*;
