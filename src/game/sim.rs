//! Simulated board and clock for exercising the controller on the host

use super::{Clock, Color, Panel};
use crate::config::SLOT_COUNT;
use core::convert::Infallible;
use embedded_hal::blocking::delay::DelayMs;
use std::cell::Cell;
use std::collections::VecDeque;
use std::rc::Rc;
use ufmt::uWrite;

/// Scans with nothing left to press before the player is declared stuck
const STALL_LIMIT: u32 = 1_000_000;

/// Shared simulated time in milliseconds
#[derive(Clone, Default)]
pub struct SimTime(Rc<Cell<u32>>);

impl SimTime {
    pub fn now(&self) -> u32 {
        self.0.get()
    }

    fn advance(&self, ms: u32) {
        self.0.set(self.0.get().wrapping_add(ms));
    }
}

/// Delays advance time instantly; each `millis` read costs `read_cost_ms`
pub struct SimClock {
    time: SimTime,
    read_cost_ms: u32,
}

impl SimClock {
    pub fn new(time: SimTime, read_cost_ms: u32) -> Self {
        Self { time, read_cost_ms }
    }
}

impl DelayMs<u16> for SimClock {
    fn delay_ms(&mut self, ms: u16) {
        self.time.advance(u32::from(ms));
    }
}

impl Clock for SimClock {
    fn millis(&mut self) -> u32 {
        let now = self.time.now();
        self.time.advance(self.read_cost_ms);
        now
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Event {
    Led(Color, bool),
    Tone(u16, u16),
}

struct Press {
    idle_scans: u32,
    held: u8,
}

/// A board whose buttons follow a script.
///
/// A scan starts whenever the green button is read. Each scripted press is
/// held from the scan it appears in until it has been reported once, then
/// released before the next scan.
pub struct SimPanel {
    time: SimTime,
    leds: [bool; SLOT_COUNT],
    events: Vec<(u32, Event)>,
    redundant_writes: usize,
    script: VecDeque<Press>,
    held: u8,
    reported: bool,
    stalled_scans: u32,
}

impl SimPanel {
    pub fn new(time: SimTime) -> Self {
        Self {
            time,
            leds: [false; SLOT_COUNT],
            events: Vec::new(),
            redundant_writes: 0,
            script: VecDeque::new(),
            held: 0,
            reported: false,
            stalled_scans: 0,
        }
    }

    /// Press `color` on the next scan
    pub fn press(&mut self, color: Color) -> &mut Self {
        self.press_after(0, &[color])
    }

    pub fn press_all(&mut self, colors: &[Color]) -> &mut Self {
        for &color in colors {
            self.press(color);
        }
        self
    }

    /// Hold `colors` together after `idle_scans` empty scans
    pub fn press_after(&mut self, idle_scans: u32, colors: &[Color]) -> &mut Self {
        let held = colors.iter().fold(0u8, |mask, c| mask | (1 << c.index()));
        self.script.push_back(Press { idle_scans, held });
        self
    }

    pub fn pending_presses(&self) -> usize {
        self.script.len()
    }

    pub fn events(&self) -> &[(u32, Event)] {
        &self.events
    }

    /// Colors switched on, in order
    pub fn lit(&self) -> Vec<Color> {
        self.events
            .iter()
            .filter_map(|(_, e)| match *e {
                Event::Led(color, true) => Some(color),
                _ => None,
            })
            .collect()
    }

    /// Times at which each LED was switched on
    pub fn lit_at(&self) -> Vec<(u32, Color)> {
        self.events
            .iter()
            .filter_map(|&(t, e)| match e {
                Event::Led(color, true) => Some((t, color)),
                _ => None,
            })
            .collect()
    }

    pub fn tones(&self) -> Vec<(u16, u16)> {
        self.events
            .iter()
            .filter_map(|(_, e)| match *e {
                Event::Tone(freq, ms) => Some((freq, ms)),
                _ => None,
            })
            .collect()
    }

    pub fn leds(&self) -> [bool; SLOT_COUNT] {
        self.leds
    }

    /// LED writes that did not change the output
    pub fn redundant_writes(&self) -> usize {
        self.redundant_writes
    }

    fn begin_scan(&mut self) {
        if self.reported {
            self.held = 0;
            self.reported = false;
        }
        if self.held != 0 {
            return;
        }

        match self.script.front_mut() {
            Some(press) if press.idle_scans == 0 => {
                self.held = press.held;
                self.script.pop_front();
            }
            Some(press) => press.idle_scans -= 1,
            None => {
                self.stalled_scans += 1;
                assert!(self.stalled_scans < STALL_LIMIT, "player script exhausted");
            }
        }
    }
}

impl Panel for SimPanel {
    fn button_pressed(&mut self, color: Color) -> bool {
        if color == Color::Green {
            self.begin_scan();
        }
        let pressed = self.held & (1 << color.index()) != 0;
        if pressed {
            self.reported = true;
        }
        pressed
    }

    fn set_led(&mut self, color: Color, on: bool) {
        let led = &mut self.leds[color.index()];
        if *led == on {
            self.redundant_writes += 1;
            return;
        }
        *led = on;
        self.events.push((self.time.now(), Event::Led(color, on)));
    }

    fn play_tone(&mut self, freq_hz: u16, duration_ms: u16) {
        self.events
            .push((self.time.now(), Event::Tone(freq_hz, duration_ms)));
    }
}

/// Collects log lines in memory
#[derive(Default)]
pub struct LogSink(pub String);

impl uWrite for LogSink {
    type Error = Infallible;

    fn write_str(&mut self, s: &str) -> Result<(), Self::Error> {
        self.0.push_str(s);
        Ok(())
    }
}
