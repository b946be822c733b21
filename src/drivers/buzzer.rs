//! Piezo buzzer driven by a timer in CTC toggle mode
//!
//! The output pin toggles on every compare match, so the tone frequency is
//! `cpu / (2 * divider * (compare + 1))`.

/// Square wave tone source
pub trait Buzzer {
    /// Start a tone; it stops on its own after `duration_ms`
    fn tone(&mut self, freq_hz: u16, duration_ms: u16);
}

/// Timer1 clock select bits and their prescaler divider
const DIVIDERS: [(u8, u32); 5] = [(1, 1), (2, 8), (3, 64), (4, 256), (5, 1024)];

/// Timer settings for one frequency
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ToneTiming {
    /// Value for the CS1x bits
    pub clock_select: u8,
    /// Value for OCR1A
    pub compare: u16,
}

/// Smallest prescaler that fits `freq_hz` into a 16-bit compare register.
/// `None` for 0 Hz or a frequency the timer cannot reach.
pub fn tone_timing(freq_hz: u16, cpu_hz: u32) -> Option<ToneTiming> {
    if freq_hz == 0 {
        return None;
    }

    DIVIDERS.iter().find_map(|&(clock_select, divider)| {
        let ticks = cpu_hz / (2 * divider * u32::from(freq_hz));
        if (1..=0x1_0000).contains(&ticks) {
            Some(ToneTiming {
                clock_select,
                compare: (ticks - 1) as u16,
            })
        } else {
            None
        }
    })
}
