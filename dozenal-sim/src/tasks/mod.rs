//! Embassy async tasks

pub mod watch;

pub use watch::{watch_task, WatchSettings};
