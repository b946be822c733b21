use avr_device::atmega128a::ADC;

/// Input selected in ADMUX
#[derive(Clone, Copy)]
#[repr(u8)]
pub enum AdcChannel {
    Adc0 = 0,
}

pub struct Adc {
    _private: (),
}

impl Adc {
    pub fn new() -> Self {
        unsafe {
            let p = ADC::ptr();
            // Enable ADC, prescaler div128 (125kHz @ 16MHz)
            (*p).adcsra.write(|w| w.bits(0x87));
            // Reference voltage = AVCC
            (*p).admux.write(|w| w.bits(0x40));
        }
        Self { _private: () }
    }

    /// Blocking single conversion, 10-bit result
    pub fn read_channel(&mut self, channel: AdcChannel) -> u16 {
        unsafe {
            let p = ADC::ptr();

            (*p).admux.modify(|r, w| w.bits((r.bits() & 0xE0) | (channel as u8)));

            // Start conversion and wait for ADSC to clear
            (*p).adcsra.modify(|r, w| w.bits(r.bits() | 0x40));
            while (*p).adcsra.read().bits() & 0x40 != 0 {}

            (*p).adc.read().bits()
        }
    }

    /// Switch the converter off again
    pub fn disable(self) {
        unsafe {
            (*ADC::ptr()).adcsra.write(|w| w.bits(0));
        }
    }
}

