//! Millisecond system clock on Timer0
//!
//! Timer0 runs in CTC mode at 16MHz/64 = 250kHz and matches every 250
//! ticks, so the compare interrupt fires once per millisecond.

use crate::game::Clock;
use avr_device::atmega128a::TC0;
use avr_device::interrupt::{self, Mutex};
use core::cell::Cell;
use embedded_hal::blocking::delay::DelayMs;

const TICKS_PER_MS: u8 = 250;

// TCCR0: WGM01 (CTC) | CS02 (clk/64 on the asynchronous Timer0)
const TCCR0_CTC_DIV64: u8 = (1 << 3) | 0x04;
// TIMSK: OCIE0
const OCIE0: u8 = 1 << 1;

static MILLIS: Mutex<Cell<u32>> = Mutex::new(Cell::new(0));

/// Milliseconds since [`SystemClock::start`], wrapping after ~49 days
pub fn millis() -> u32 {
    interrupt::free(|cs| MILLIS.borrow(cs).get())
}

/// Busy wait on the millisecond counter
pub fn delay_ms(ms: u16) {
    let start = millis();
    while millis().wrapping_sub(start) < u32::from(ms) {}
}

pub struct SystemClock {
    _private: (),
}

impl SystemClock {
    /// Start the 1ms tick; interrupts must be enabled afterwards
    pub fn start() -> Self {
        unsafe {
            let p = TC0::ptr();
            (*p).tccr0.write(|w| w.bits(0));
            (*p).tcnt0.write(|w| w.bits(0));
            (*p).ocr0.write(|w| w.bits(TICKS_PER_MS - 1));
            (*p).timsk.modify(|r, w| w.bits(r.bits() | OCIE0));
            (*p).tccr0.write(|w| w.bits(TCCR0_CTC_DIV64));
        }
        Self { _private: () }
    }
}

impl DelayMs<u16> for SystemClock {
    fn delay_ms(&mut self, ms: u16) {
        delay_ms(ms);
    }
}

impl Clock for SystemClock {
    fn millis(&mut self) -> u32 {
        millis()
    }
}

#[avr_device::interrupt(atmega128a)]
fn TIMER0_COMP() {
    interrupt::free(|cs| {
        let counter = MILLIS.borrow(cs);
        let now = counter.get().wrapping_add(1);
        counter.set(now);
        super::pwm::expire(cs, now);
    });
}
