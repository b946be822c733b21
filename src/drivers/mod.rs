pub mod board;
pub mod button_handler;
pub mod buzzer;
pub mod led_matrix;
pub mod serial_console;

pub use board::SimonBoard;
pub use button_handler::ButtonHandler;
pub use buzzer::{tone_timing, Buzzer, ToneTiming};
pub use led_matrix::LedMatrix;
pub use serial_console::SerialConsole;
