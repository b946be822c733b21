//! Simon game logic
//!
//! Everything in here is hardware independent. The controller talks to the
//! board through [`Panel`] and keeps time through [`Clock`], so the whole
//! state machine runs unchanged against the simulated backend in tests.

mod controller;
mod session;

#[cfg(test)]
pub(crate) mod sim;

pub use controller::{GameResult, RoundOutcome, Simon};
pub use session::{seed_from_noise, Session, Solution};

use crate::config::{DIFFICULTY_ROUNDS, NOTES_HZ, SLOT_COUNT};
use embedded_hal::blocking::delay::DelayMs;

/// One of the four button/LED/pitch slots
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum Color {
    Green = 0,
    Yellow = 1,
    Red = 2,
    Blue = 3,
}

impl Color {
    /// Scan order of the buttons
    pub const ALL: [Color; SLOT_COUNT] = [Color::Green, Color::Yellow, Color::Red, Color::Blue];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Pitch played together with this color's LED
    #[inline]
    pub fn note_hz(self) -> u16 {
        NOTES_HZ[self.index()]
    }
}

/// Game length, chosen by the button pressed on the attract screen
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Difficulty {
    selector: Color,
}

impl Difficulty {
    pub fn from_selector(selector: Color) -> Self {
        Self { selector }
    }

    pub fn selector(self) -> Color {
        self.selector
    }

    /// Number of rounds needed to win
    pub fn rounds(self) -> u8 {
        DIFFICULTY_ROUNDS[self.selector.index()]
    }
}

/// Buttons, lights and buzzer as seen by the game
pub trait Panel {
    /// Current level of a button, `true` while held down
    fn button_pressed(&mut self, color: Color) -> bool;

    fn set_led(&mut self, color: Color, on: bool);

    /// Start a tone and return immediately; the hardware ends it after
    /// `duration_ms`
    fn play_tone(&mut self, freq_hz: u16, duration_ms: u16);
}

/// Millisecond time source with blocking delays
pub trait Clock: DelayMs<u16> {
    /// Milliseconds since startup, wrapping
    fn millis(&mut self) -> u32;
}
