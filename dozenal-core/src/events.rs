//! Events delivered to watch faces

/// Kinds of event the host dispatches to the active face
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EventType {
    /// Nothing happened
    None,
    /// Face just became active
    Activate,
    /// Periodic refresh at the requested tick rate
    Tick,
    /// Once-a-minute update while in low energy mode
    LowEnergyUpdate,
    /// Background task requested via `wants_background_task`
    BackgroundTask,
    /// Inactivity timeout
    Timeout,

    // Light button
    LightButtonDown,
    LightButtonUp,
    LightLongPress,
    LightLongUp,

    // Mode button
    ModeButtonDown,
    ModeButtonUp,
    ModeLongPress,
    ModeLongUp,

    // Alarm button
    AlarmButtonDown,
    AlarmButtonUp,
    AlarmLongPress,
    AlarmLongUp,
}

impl EventType {
    /// Check if this event asks the face to redraw the time
    pub fn is_refresh(&self) -> bool {
        matches!(self, EventType::Activate | EventType::Tick)
    }
}

/// An event plus the sub-second position it was raised at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FaceEvent {
    /// What happened
    pub event_type: EventType,
    /// Tick index within the current second (0 to rate - 1)
    pub subsecond: u8,
}

impl FaceEvent {
    /// Create an event
    pub const fn new(event_type: EventType, subsecond: u8) -> Self {
        Self {
            event_type,
            subsecond,
        }
    }

    /// Activation event (always at subsecond 0)
    pub const fn activate() -> Self {
        Self::new(EventType::Activate, 0)
    }

    /// Tick event at a sub-second position
    pub const fn tick(subsecond: u8) -> Self {
        Self::new(EventType::Tick, subsecond)
    }
}

impl From<EventType> for FaceEvent {
    fn from(event_type: EventType) -> Self {
        Self::new(event_type, 0)
    }
}
