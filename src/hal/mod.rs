//! ATmega128 peripherals used by the game

pub mod adc;
pub mod gpio;
pub mod pwm;
pub mod timer;
pub mod uart;

// Re-export commonly used types
pub use adc::{Adc, AdcChannel};
pub use gpio::board;
pub use gpio::{Input, Output, Pin, Port};
pub use pwm::Tone;
pub use timer::{delay_ms, millis, SystemClock};
pub use uart::Uart;
