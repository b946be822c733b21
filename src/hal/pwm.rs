//! Buzzer tones on Timer1 channel A
//!
//! Timer1 runs in CTC mode with OC1A toggling on every compare match, so
//! the waveform needs no CPU time. The millisecond interrupt ends each
//! tone once its deadline passes.

use super::gpio::{Output, Pin};
use super::timer::millis;
use crate::config::CPU_FREQ_HZ;
use crate::drivers::{tone_timing, Buzzer};
use avr_device::atmega128a::TC1;
use avr_device::interrupt::{self, CriticalSection, Mutex};
use core::cell::Cell;
use embedded_hal::digital::v2::OutputPin;

// TCCR1A: COM1A0, toggle OC1A on compare match
const TOGGLE_OC1A: u8 = 1 << 6;
// TCCR1B: WGM12, CTC with OCR1A as top
const CTC_OCR1A: u8 = 1 << 3;

static TONE_DEADLINE: Mutex<Cell<Option<u32>>> = Mutex::new(Cell::new(None));

fn stop_timer() {
    unsafe {
        let p = TC1::ptr();
        (*p).tccr1b.write(|w| w.bits(0));
        (*p).tccr1a.write(|w| w.bits(0));
    }
}

/// Called from the millisecond interrupt
pub(crate) fn expire(cs: CriticalSection, now: u32) {
    let deadline = TONE_DEADLINE.borrow(cs);
    if let Some(end) = deadline.get() {
        if now.wrapping_sub(end) < u32::MAX / 2 {
            stop_timer();
            deadline.set(None);
        }
    }
}

pub struct Tone {
    pin: Pin<Output>,
}

impl Tone {
    pub fn new(pin: Pin<Output>) -> Self {
        stop_timer();
        Self { pin }
    }

    fn silence(&mut self) {
        interrupt::free(|cs| TONE_DEADLINE.borrow(cs).set(None));
        stop_timer();
        self.pin.set_low().ok();
    }
}

impl Buzzer for Tone {
    fn tone(&mut self, freq_hz: u16, duration_ms: u16) {
        let timing = match tone_timing(freq_hz, CPU_FREQ_HZ) {
            Some(timing) if duration_ms > 0 => timing,
            _ => return self.silence(),
        };

        let end = millis().wrapping_add(u32::from(duration_ms));
        interrupt::free(|cs| {
            stop_timer();
            unsafe {
                let p = TC1::ptr();
                (*p).tcnt1.write(|w| w.bits(0));
                (*p).ocr1a.write(|w| w.bits(timing.compare));
                (*p).tccr1a.write(|w| w.bits(TOGGLE_OC1A));
                (*p).tccr1b.write(|w| w.bits(CTC_OCR1A | timing.clock_select));
            }
            TONE_DEADLINE.borrow(cs).set(Some(end));
        });
    }
}
