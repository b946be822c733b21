use super::{Buzzer, ButtonHandler, LedMatrix};
use crate::game::{Color, Panel};
use embedded_hal::digital::v2::{InputPin, OutputPin};

/// The physical game: buttons, LEDs and buzzer addressed by color slot
pub struct SimonBoard<I, O, B> {
    buttons: ButtonHandler<I>,
    leds: LedMatrix<O>,
    buzzer: B,
}

impl<I, O, B> SimonBoard<I, O, B>
where
    I: InputPin,
    O: OutputPin,
    B: Buzzer,
{
    pub fn new(buttons: ButtonHandler<I>, leds: LedMatrix<O>, buzzer: B) -> Self {
        Self {
            buttons,
            leds,
            buzzer,
        }
    }

    pub fn release(self) -> (ButtonHandler<I>, LedMatrix<O>, B) {
        (self.buttons, self.leds, self.buzzer)
    }
}

impl<I, O, B> Panel for SimonBoard<I, O, B>
where
    I: InputPin,
    O: OutputPin,
    B: Buzzer,
{
    fn button_pressed(&mut self, color: Color) -> bool {
        self.buttons.is_pressed(color.index())
    }

    fn set_led(&mut self, color: Color, on: bool) {
        self.leds.set(color.index(), on);
    }

    fn play_tone(&mut self, freq_hz: u16, duration_ms: u16) {
        self.buzzer.tone(freq_hz, duration_ms);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal_mock::pin::{Mock as PinMock, State as PinState, Transaction as PinTransaction};

    #[derive(Default)]
    struct RecordingBuzzer {
        tones: Vec<(u16, u16)>,
    }

    impl Buzzer for RecordingBuzzer {
        fn tone(&mut self, freq_hz: u16, duration_ms: u16) {
            self.tones.push((freq_hz, duration_ms));
        }
    }

    fn pins(transactions: [&[PinTransaction]; 4]) -> [PinMock; 4] {
        transactions.map(|expected| PinMock::new(expected))
    }

    #[test]
    fn test_slots_share_index() {
        let buttons = pins([&[], &[], &[PinTransaction::get(PinState::Low)], &[]]);
        let leds = pins([&[], &[], &[PinTransaction::set(PinState::High)], &[]]);
        let mut board = SimonBoard::new(
            ButtonHandler::new(buttons),
            LedMatrix::new(leds),
            RecordingBuzzer::default(),
        );

        assert!(board.button_pressed(Color::Red));
        board.set_led(Color::Red, true);
        board.play_tone(Color::Red.note_hz(), 250);

        let (buttons, leds, buzzer) = board.release();
        assert_eq!(buzzer.tones, vec![(330, 250)]);
        for mut pin in buttons.release().into_iter().chain(leds.release()) {
            pin.done();
        }
    }
}
