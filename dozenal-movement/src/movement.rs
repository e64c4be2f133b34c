//! Face registry
//!
//! Owns the services and a fixed-capacity list of borrowed faces. Events
//! go to the active face; navigation requested by the default loop
//! handler is applied once the face returns.

use heapless::Vec;

use dozenal_core::{EventType, FaceEvent, RealTimeClock, TickRate, WatchFace};
use dozenal_display::SegmentDisplay;

use crate::config::MovementConfig;
use crate::led::Led;
use crate::services::{Navigation, Services};

/// Registry errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MovementError {
    /// No room for another face
    RegistryFull,
    /// Boot requested with no faces registered
    NoFaces,
    /// Event dispatched before boot
    NotBooted,
    /// Face index out of range
    InvalidFace,
}

/// Face registry and dispatcher
pub struct Movement<'a, C, D, L, const N: usize> {
    services: Services<C, D, L>,
    faces: Vec<&'a mut dyn WatchFace, N>,
    current: usize,
    booted: bool,
}

impl<'a, C, D, L, const N: usize> Movement<'a, C, D, L, N>
where
    C: RealTimeClock,
    D: SegmentDisplay,
    L: Led,
{
    /// Create an empty registry
    pub fn new(clock: C, display: D, led: L, config: MovementConfig) -> Self {
        Self {
            services: Services::new(clock, display, led, config),
            faces: Vec::new(),
            current: 0,
            booted: false,
        }
    }

    /// Register a face, returning its index
    pub fn register(&mut self, face: &'a mut dyn WatchFace) -> Result<u8, MovementError> {
        let index = self.faces.len() as u8;
        self.faces
            .push(face)
            .map_err(|_| MovementError::RegistryFull)?;
        Ok(index)
    }

    /// Set up every face and bring the first one on screen
    pub fn boot(&mut self) -> Result<(), MovementError> {
        if self.faces.is_empty() {
            return Err(MovementError::NoFaces);
        }

        for (index, face) in self.faces.iter_mut().enumerate() {
            face.setup(index as u8);
        }

        #[cfg(feature = "defmt")]
        defmt::info!("Movement booted with {} faces", self.faces.len());

        self.booted = true;
        self.current = 0;
        self.enter_current();
        Ok(())
    }

    /// Deliver an event to the active face
    ///
    /// Returns whether the watch may enter standby.
    pub fn dispatch(&mut self, event: FaceEvent) -> Result<bool, MovementError> {
        if !self.booted {
            return Err(MovementError::NotBooted);
        }

        self.services.expire_led();
        let standby = self.faces[self.current].handle(event, &mut self.services);

        match self.services.take_navigation() {
            Some(Navigation::Next) => {
                let next = (self.current + 1) % self.faces.len();
                self.switch_to(next);
            }
            Some(Navigation::First) => self.switch_to(0),
            None => {}
        }

        Ok(standby)
    }

    /// Tick event at a sub-second position
    pub fn tick(&mut self, subsecond: u8) -> Result<bool, MovementError> {
        self.dispatch(FaceEvent::tick(subsecond))
    }

    /// Bring a specific face on screen
    pub fn move_to_face(&mut self, index: usize) -> Result<(), MovementError> {
        if !self.booted {
            return Err(MovementError::NotBooted);
        }
        if index >= self.faces.len() {
            return Err(MovementError::InvalidFace);
        }
        self.switch_to(index);
        Ok(())
    }

    /// Give inactive faces that ask for it a `BackgroundTask` event
    ///
    /// Meant to be called once a minute. Returns whether every face that
    /// ran allows standby.
    pub fn run_background_tasks(&mut self) -> Result<bool, MovementError> {
        if !self.booted {
            return Err(MovementError::NotBooted);
        }

        self.services.expire_led();
        let mut standby = true;
        for (index, face) in self.faces.iter_mut().enumerate() {
            if index == self.current {
                continue;
            }
            if face.wants_background_task(&mut self.services) {
                standby &= face.handle(EventType::BackgroundTask.into(), &mut self.services);
            }
        }
        // Background faces do not get to navigate
        let _ = self.services.take_navigation();
        Ok(standby)
    }

    /// Housekeeping while no events are dispatched
    ///
    /// Hosts call this about once a second while ticks are stopped, so
    /// the LED still goes out on time.
    pub fn poll(&mut self) {
        self.services.expire_led();
    }

    /// Index of the active face
    pub fn current_face(&self) -> usize {
        self.current
    }

    /// Name of a registered face
    pub fn face_name(&self, index: usize) -> Option<&'static str> {
        self.faces.get(index).map(|face| face.name())
    }

    /// Number of registered faces
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Check if `boot` has run
    pub fn is_booted(&self) -> bool {
        self.booted
    }

    /// Tick rate requested by the active face
    pub fn tick_rate(&self) -> TickRate {
        self.services.tick_rate()
    }

    /// Get the services
    pub fn services(&self) -> &Services<C, D, L> {
        &self.services
    }

    /// Get the services mutably
    pub fn services_mut(&mut self) -> &mut Services<C, D, L> {
        &mut self.services
    }

    /// Get the display
    pub fn display(&self) -> &D {
        self.services.segment_display()
    }

    /// Get the display mutably
    pub fn display_mut(&mut self) -> &mut D {
        self.services.segment_display_mut()
    }

    fn switch_to(&mut self, index: usize) {
        if index == self.current {
            return;
        }

        #[cfg(feature = "defmt")]
        defmt::debug!(
            "Face {} -> {}",
            self.faces[self.current].name(),
            self.faces[index].name()
        );

        self.faces[self.current].resign(&mut self.services);
        self.services.segment_display_mut().clear();
        self.current = index;
        self.enter_current();
    }

    fn enter_current(&mut self) {
        self.services.reset_tick_rate();
        let face = &mut self.faces[self.current];
        face.activate(&mut self.services);
        face.handle(FaceEvent::activate(), &mut self.services);
        // Navigation requested while activating is dropped
        let _ = self.services.take_navigation();
    }
}
