use crate::config::CPU_FREQ_HZ;
use avr_device::atmega128a::USART0;
use core::convert::Infallible;
use embedded_hal::serial::Write;

// UCSR0A
const UDRE0: u8 = 1 << 5;
const TXC0: u8 = 1 << 6;
// UCSR0B
const TXEN0: u8 = 1 << 3;
// UCSR0C: 8 data bits, no parity, 1 stop bit
const FRAME_8N1: u8 = 0x06;

/// Transmit-only USART0
pub struct Uart {
    _private: (),
}

impl Uart {
    pub fn new(baud: u32) -> Self {
        // (16_000_000 / (16 * 9600)) - 1 = 103
        let ubrr = (CPU_FREQ_HZ / (16 * baud) - 1) as u16;
        unsafe {
            let p = USART0::ptr();
            (*p).ubrr0h.write(|w| w.bits((ubrr >> 8) as u8));
            (*p).ubrr0l.write(|w| w.bits(ubrr as u8));
            (*p).ucsr0c.write(|w| w.bits(FRAME_8N1));
            (*p).ucsr0b.write(|w| w.bits(TXEN0));
        }
        Self { _private: () }
    }
}

impl Write<u8> for Uart {
    type Error = Infallible;

    fn write(&mut self, byte: u8) -> nb::Result<(), Self::Error> {
        unsafe {
            let p = USART0::ptr();
            if (*p).ucsr0a.read().bits() & UDRE0 == 0 {
                return Err(nb::Error::WouldBlock);
            }
            // Clear TXC0 (write one) so flush can wait for this byte
            (*p).ucsr0a.modify(|r, w| w.bits(r.bits() | TXC0));
            (*p).udr0.write(|w| w.bits(byte));
        }
        Ok(())
    }

    fn flush(&mut self) -> nb::Result<(), Self::Error> {
        unsafe {
            let p = USART0::ptr();
            if (*p).ucsr0a.read().bits() & TXC0 == 0 {
                return Err(nb::Error::WouldBlock);
            }
        }
        Ok(())
    }
}
