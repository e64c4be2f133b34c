//! Watch face implementations

pub mod clock;
pub mod dozenal;

pub use clock::ClockFace;
pub use dozenal::{DozenalFace, DozenalState};

#[cfg(test)]
pub(crate) mod testing {
    //! Recording host used by face tests

    use heapless::Vec;

    use dozenal_display::{DisplayError, SegmentBuffer, SegmentDisplay};

    use crate::events::FaceEvent;
    use crate::time::WatchDateTime;
    use crate::traits::FaceHost;

    pub struct MockHost {
        pub now: WatchDateTime,
        pub display: SegmentBuffer,
        pub requested_hz: Option<u8>,
        pub defaulted: Vec<FaceEvent, 8>,
        pub default_result: bool,
        pub display_errors: Vec<DisplayError, 8>,
    }

    impl MockHost {
        pub fn at(hour: u8, minute: u8, second: u8) -> Self {
            Self {
                now: WatchDateTime {
                    year: 2024,
                    month: 6,
                    day: 9,
                    hour,
                    minute,
                    second,
                },
                display: SegmentBuffer::new(),
                requested_hz: None,
                defaulted: Vec::new(),
                default_result: true,
                display_errors: Vec::new(),
            }
        }
    }

    impl FaceHost for MockHost {
        fn date_time(&self) -> WatchDateTime {
            self.now
        }

        fn display(&mut self) -> &mut dyn SegmentDisplay {
            &mut self.display
        }

        fn request_tick_frequency(&mut self, hz: u8) {
            self.requested_hz = Some(hz);
        }

        fn default_loop_handler(&mut self, event: FaceEvent) -> bool {
            let _ = self.defaulted.push(event);
            self.default_result
        }

        fn report_display_error(&mut self, error: DisplayError) {
            let _ = self.display_errors.push(error);
        }
    }
}
