use crate::config::SLOT_COUNT;
use embedded_hal::digital::v2::InputPin;

/// The four game buttons, wired active low with pull-ups
pub struct ButtonHandler<P> {
    buttons: [P; SLOT_COUNT],
}

impl<P: InputPin> ButtonHandler<P> {
    pub fn new(buttons: [P; SLOT_COUNT]) -> Self {
        Self { buttons }
    }

    /// A pin that cannot be read counts as released
    pub fn is_pressed(&self, idx: usize) -> bool {
        self.buttons
            .get(idx)
            .map_or(false, |button| matches!(button.is_low(), Ok(true)))
    }

    pub fn release(self) -> [P; SLOT_COUNT] {
        self.buttons
    }
}
