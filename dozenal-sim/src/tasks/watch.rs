//! Watch task
//!
//! Owns the faces and the registry and drives them from an embassy
//! `Ticker` at whatever rate the active face requested:
//! - Samples the host clock once per tick
//! - Dispatches the tick with its sub-second position, or polls the
//!   registry while ticks are stopped
//! - Runs background tasks when the minute changes
//! - Redraws the terminal when the display changed

use std::io::{self, Write};

use chrono::NaiveTime;
use embassy_time::{Duration, Ticker};
use tracing::{debug, error, info, warn};

use dozenal_core::faces::{ClockFace, DozenalFace};
use dozenal_core::{RealTimeClock, TickRate};
use dozenal_display::SegmentBuffer;
use dozenal_movement::{Movement, MovementError, NoLed};

use crate::clock::HostClock;
use crate::config::SimConfig;
use crate::render::render_line;

/// Registry capacity
pub const MAX_FACES: usize = 4;

type SimMovement<'a> = Movement<'a, HostClock, SegmentBuffer, NoLed, MAX_FACES>;

/// Everything the watch task needs from the command line
#[derive(Debug, Clone)]
pub struct WatchSettings {
    /// Face and registry configuration
    pub config: SimConfig,
    /// Time of day to start the clock at (local time if `None`)
    pub start: Option<NaiveTime>,
    /// Face to bring on screen after boot
    pub start_face: usize,
    /// Exit after this many ticks
    pub tick_limit: Option<u64>,
}

/// Ticker period for a rate; a stopped face is polled once per second
fn tick_period(rate: TickRate) -> Duration {
    rate.period_us()
        .map(|us| Duration::from_micros(u64::from(us)))
        .unwrap_or(Duration::from_secs(1))
}

/// Register the faces and boot the registry
fn boot_faces<'a>(
    movement: &mut SimMovement<'a>,
    dozenal: &'a mut DozenalFace,
    clock_face: &'a mut ClockFace,
) -> Result<(), MovementError> {
    movement.register(dozenal)?;
    movement.register(clock_face)?;
    movement.boot()
}

/// Print the display if it changed
fn redraw(movement: &mut SimMovement<'_>) {
    if !movement.display().is_dirty() {
        return;
    }
    let line = render_line(movement.display());
    print!("\r{}", line);
    if let Err(e) = io::stdout().flush() {
        warn!("Failed to flush stdout: {}", e);
    }
    movement.display_mut().mark_clean();
}

/// What the loop does after a step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StepOutcome {
    /// Keep the current ticker
    Continue,
    /// The active face changed the rate; re-arm the ticker
    Rearm(TickRate),
    /// Tick limit reached
    Finished,
}

/// Loop bookkeeping carried between ticks
#[derive(Debug)]
struct LoopState {
    rate: TickRate,
    last_minute: u8,
    ticks: u64,
    tick_limit: Option<u64>,
}

impl LoopState {
    fn new(movement: &SimMovement<'_>, tick_limit: Option<u64>) -> Self {
        Self {
            rate: movement.tick_rate(),
            last_minute: movement.services().clock().date_time().minute,
            ticks: 0,
            tick_limit,
        }
    }
}

/// One pass of the loop against the clock sample already taken
fn step(
    movement: &mut SimMovement<'_>,
    state: &mut LoopState,
) -> Result<StepOutcome, MovementError> {
    let now = movement.services().clock().date_time();

    if state.rate.is_stopped() {
        movement.poll();
    } else {
        let subsecond = movement.services().clock().subsecond(state.rate);
        movement.tick(subsecond)?;
    }

    if now.minute != state.last_minute {
        state.last_minute = now.minute;
        if let Err(e) = movement.run_background_tasks() {
            warn!("Background tasks failed: {:?}", e);
        }
    }

    state.ticks += 1;
    if state.tick_limit.is_some_and(|limit| state.ticks >= limit) {
        return Ok(StepOutcome::Finished);
    }

    let requested = movement.tick_rate();
    if requested != state.rate {
        debug!("Tick rate {} Hz -> {} Hz", state.rate.hz(), requested.hz());
        state.rate = requested;
        return Ok(StepOutcome::Rearm(requested));
    }
    Ok(StepOutcome::Continue)
}

/// Watch task - owns the registry and runs the tick loop
#[embassy_executor::task]
pub async fn watch_task(settings: WatchSettings) {
    info!("Watch task started");

    let mut dozenal = DozenalFace::new(settings.config.face);
    let mut clock_face = ClockFace::new();

    let clock = match settings.start {
        Some(start) => HostClock::starting_at(start),
        None => HostClock::new(),
    };
    let mut movement: SimMovement<'_> =
        Movement::new(clock, SegmentBuffer::new(), NoLed, settings.config.movement);

    if let Err(e) = boot_faces(&mut movement, &mut dozenal, &mut clock_face) {
        error!("Failed to boot faces: {:?}", e);
        return;
    }

    if settings.start_face != 0 {
        if let Err(e) = movement.move_to_face(settings.start_face) {
            warn!("Cannot start on face {}: {:?}", settings.start_face, e);
        }
    }
    info!(
        "Active face: {}",
        movement.face_name(movement.current_face()).unwrap_or("?")
    );
    redraw(&mut movement);

    let mut state = LoopState::new(&movement, settings.tick_limit);
    let mut ticker = Ticker::every(tick_period(state.rate));

    loop {
        ticker.next().await;

        movement.services_mut().clock_mut().refresh();
        let outcome = match step(&mut movement, &mut state) {
            Ok(outcome) => outcome,
            Err(e) => {
                error!("Tick dispatch failed: {:?}", e);
                return;
            }
        };
        redraw(&mut movement);

        match outcome {
            StepOutcome::Continue => {}
            StepOutcome::Rearm(rate) => ticker = Ticker::every(tick_period(rate)),
            StepOutcome::Finished => {
                println!();
                info!("Stopped after {} ticks", state.ticks);
                std::process::exit(0);
            }
        }
    }
}
