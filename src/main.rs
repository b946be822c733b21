#![cfg_attr(target_arch = "avr", no_std)]
#![cfg_attr(target_arch = "avr", no_main)]

#[cfg(target_arch = "avr")]
use panic_halt as _;

#[cfg(target_arch = "avr")]
#[avr_device::entry]
fn main() -> ! {
    use rand::rngs::SmallRng;
    use rand::SeedableRng;
    use simon_firmware::config::{SEED_SAMPLES, UART_BAUD};
    use simon_firmware::drivers::{ButtonHandler, LedMatrix, SerialConsole, SimonBoard};
    use simon_firmware::game::{seed_from_noise, Simon};
    use simon_firmware::hal::{board, Adc, AdcChannel, SystemClock, Tone, Uart};

    let clock = SystemClock::start();

    // Enable interrupts globally
    unsafe { avr_device::interrupt::enable() };

    let mut console = SerialConsole::new(Uart::new(UART_BAUD));
    console.write_line("Simon v0.1.0").ok();
    // Let the banner drain before sampling noise
    console.flush().ok();

    // ADC0 is left floating; its noise seeds the game once per power-up
    let mut adc = Adc::new();
    let seed = seed_from_noise((0..SEED_SAMPLES).map(|_| adc.read_channel(AdcChannel::Adc0)));
    adc.disable();

    let panel = SimonBoard::new(
        ButtonHandler::new(board::buttons()),
        LedMatrix::new(board::leds()),
        Tone::new(board::buzzer()),
    );

    let mut simon = Simon::new(panel, clock, SmallRng::seed_from_u64(seed), console);
    simon.run()
}

#[cfg(not(target_arch = "avr"))]
fn main() {}
