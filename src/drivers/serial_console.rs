use embedded_hal::serial::Write;
use ufmt::uWrite;

/// Line oriented text output over a serial port.
///
/// Writes block until the UART accepts each byte. Implements `uWrite` so
/// the game can log with `uwriteln!`.
pub struct SerialConsole<W> {
    uart: W,
}

impl<W: Write<u8>> SerialConsole<W> {
    pub fn new(uart: W) -> Self {
        Self { uart }
    }

    pub fn write_byte(&mut self, byte: u8) -> Result<(), W::Error> {
        nb::block!(self.uart.write(byte))
    }

    pub fn write_line(&mut self, s: &str) -> Result<(), W::Error> {
        self.write_str(s)?;
        self.write_str("\r\n")
    }

    pub fn flush(&mut self) -> Result<(), W::Error> {
        nb::block!(self.uart.flush())
    }

    pub fn release(self) -> W {
        self.uart
    }
}

impl<W: Write<u8>> uWrite for SerialConsole<W> {
    type Error = W::Error;

    fn write_str(&mut self, s: &str) -> Result<(), Self::Error> {
        for byte in s.bytes() {
            self.write_byte(byte)?;
        }
        Ok(())
    }
}
