use avr_device::atmega128a::{PORTA, PORTB};
use core::convert::Infallible;
use core::marker::PhantomData;
use embedded_hal::digital::v2::{InputPin, OutputPin};

pub struct Input;
pub struct Output;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Port {
    A,
    B,
}

impl Port {
    unsafe fn set_direction(self, mask: u8, output: bool) {
        let apply = |bits: u8| if output { bits | mask } else { bits & !mask };
        match self {
            Port::A => (*PORTA::ptr()).ddra.modify(|r, w| w.bits(apply(r.bits()))),
            Port::B => (*PORTB::ptr()).ddrb.modify(|r, w| w.bits(apply(r.bits()))),
        }
    }

    unsafe fn set_level(self, mask: u8, high: bool) {
        let apply = |bits: u8| if high { bits | mask } else { bits & !mask };
        match self {
            Port::A => (*PORTA::ptr()).porta.modify(|r, w| w.bits(apply(r.bits()))),
            Port::B => (*PORTB::ptr()).portb.modify(|r, w| w.bits(apply(r.bits()))),
        }
    }

    unsafe fn read(self) -> u8 {
        match self {
            Port::A => (*PORTA::ptr()).pina.read().bits(),
            Port::B => (*PORTB::ptr()).pinb.read().bits(),
        }
    }
}

/// A single port pin whose port and bit are chosen at runtime, so pins of
/// one mode can share an array
#[derive(Debug)]
pub struct Pin<MODE> {
    port: Port,
    mask: u8,
    _mode: PhantomData<MODE>,
}

impl<MODE> Pin<MODE> {
    fn configure(port: Port, bit: u8) -> Self {
        Pin {
            port,
            mask: 1 << (bit & 0x07),
            _mode: PhantomData,
        }
    }
}

impl Pin<Input> {
    /// Input with the internal pull-up enabled
    pub fn into_pull_up_input(port: Port, bit: u8) -> Self {
        let pin = Self::configure(port, bit);
        unsafe {
            pin.port.set_direction(pin.mask, false);
            pin.port.set_level(pin.mask, true);
        }
        pin
    }
}

impl Pin<Output> {
    /// Output, driven low
    pub fn into_output(port: Port, bit: u8) -> Self {
        let pin = Self::configure(port, bit);
        unsafe {
            pin.port.set_level(pin.mask, false);
            pin.port.set_direction(pin.mask, true);
        }
        pin
    }
}

impl InputPin for Pin<Input> {
    type Error = Infallible;

    #[inline]
    fn is_high(&self) -> Result<bool, Self::Error> {
        Ok(unsafe { self.port.read() } & self.mask != 0)
    }

    #[inline]
    fn is_low(&self) -> Result<bool, Self::Error> {
        self.is_high().map(|high| !high)
    }
}

impl OutputPin for Pin<Output> {
    type Error = Infallible;

    #[inline]
    fn set_high(&mut self) -> Result<(), Self::Error> {
        unsafe { self.port.set_level(self.mask, true) };
        Ok(())
    }

    #[inline]
    fn set_low(&mut self) -> Result<(), Self::Error> {
        unsafe { self.port.set_level(self.mask, false) };
        Ok(())
    }
}

// BigAVR2 board wiring for the Simon panel
pub mod board {
    use super::*;

    /// LEDs on PA0..PA3: green, yellow, red, blue
    pub fn leds() -> [Pin<Output>; 4] {
        [0, 1, 2, 3].map(|bit| Pin::into_output(Port::A, bit))
    }

    /// Buttons on PB0..PB3, same order as the LEDs
    pub fn buttons() -> [Pin<Input>; 4] {
        [0, 1, 2, 3].map(|bit| Pin::into_pull_up_input(Port::B, bit))
    }

    /// OC1A
    pub fn buzzer() -> Pin<Output> {
        Pin::into_output(Port::B, 5)
    }
}
