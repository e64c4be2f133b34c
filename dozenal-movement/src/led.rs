//! LED output

use embedded_hal::digital::OutputPin;

/// Trait for the watch LED
pub trait Led {
    /// Turn the LED on or off
    fn set_on(&mut self, on: bool);

    /// Check if the LED is currently on
    fn is_on(&self) -> bool;
}

/// LED driven by a GPIO pin (active high)
pub struct PinLed<P> {
    pin: P,
    on: bool,
}

impl<P: OutputPin> PinLed<P> {
    /// Wrap a pin, driving it low
    pub fn new(mut pin: P) -> Self {
        let _ = pin.set_low();
        Self { pin, on: false }
    }

    /// Release the pin
    pub fn into_inner(self) -> P {
        self.pin
    }
}

impl<P: OutputPin> Led for PinLed<P> {
    fn set_on(&mut self, on: bool) {
        let result = if on {
            self.pin.set_high()
        } else {
            self.pin.set_low()
        };
        // Only track the state the pin actually reached
        if result.is_ok() {
            self.on = on;
        }
    }

    fn is_on(&self) -> bool {
        self.on
    }
}

/// Placeholder for boards (and simulators) without an LED
#[derive(Debug, Clone, Copy, Default)]
pub struct NoLed;

impl Led for NoLed {
    fn set_on(&mut self, _on: bool) {}

    fn is_on(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::convert::Infallible;
    use embedded_hal::digital::ErrorType;

    #[derive(Default)]
    struct MockPin {
        high: bool,
        writes: u8,
    }

    impl ErrorType for MockPin {
        type Error = Infallible;
    }

    impl OutputPin for MockPin {
        fn set_low(&mut self) -> Result<(), Infallible> {
            self.high = false;
            self.writes += 1;
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), Infallible> {
            self.high = true;
            self.writes += 1;
            Ok(())
        }
    }

    #[test]
    fn test_pin_led_starts_low() {
        let led = PinLed::new(MockPin::default());
        assert!(!led.is_on());
        let pin = led.into_inner();
        assert!(!pin.high);
        assert_eq!(pin.writes, 1);
    }

    #[test]
    fn test_pin_led_follows_state() {
        let mut led = PinLed::new(MockPin::default());
        led.set_on(true);
        assert!(led.is_on());
        led.set_on(false);
        assert!(!led.is_on());
        assert!(!led.into_inner().high);
    }

    #[test]
    fn test_no_led() {
        let mut led = NoLed;
        led.set_on(true);
        assert!(!led.is_on());
    }
}
