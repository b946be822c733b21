use crate::config::SLOT_COUNT;
use embedded_hal::digital::v2::OutputPin;

/// The four game LEDs, lit when driven high
pub struct LedMatrix<P> {
    leds: [P; SLOT_COUNT],
}

impl<P: OutputPin> LedMatrix<P> {
    pub fn new(leds: [P; SLOT_COUNT]) -> Self {
        Self { leds }
    }

    pub fn set(&mut self, idx: usize, on: bool) {
        if let Some(led) = self.leds.get_mut(idx) {
            if on {
                led.set_high().ok();
            } else {
                led.set_low().ok();
            }
        }
    }

    pub fn release(self) -> [P; SLOT_COUNT] {
        self.leds
    }
}
