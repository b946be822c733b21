//! Configuration constants for the Simon firmware

/// CPU frequency in Hz
pub const CPU_FREQ_HZ: u32 = 16_000_000;

/// UART baud rate
pub const UART_BAUD: u32 = 9600;

/// Number of color slots (button + LED + pitch)
pub const SLOT_COUNT: usize = 4;

/// Pitch of each slot in Hz: green, yellow, red, blue
pub const NOTES_HZ: [u16; SLOT_COUNT] = [262, 294, 330, 349];

/// Rounds to win, indexed by the button pressed on the attract screen
pub const DIFFICULTY_ROUNDS: [u8; SLOT_COUNT] = [16, 6, 10, 4];

/// Longest possible solution
pub const MAX_ROUNDS: usize = 16;

/// Number of ADC readings folded into the random seed
pub const SEED_SAMPLES: u8 = 16;

/// Attract screen timing
pub mod attract {
    /// A new frame is drawn once more than this has elapsed
    pub const FRAME_MS: u32 = 250;
    /// Frames that also sound their note
    pub const VOICED_FRAMES: u32 = 4;
    pub const TONE_MS: u16 = 50;
}

/// Clue playback and guess timing
pub mod round {
    pub const CLUE_TONE_MS: u16 = 250;
    pub const CLUE_HOLD_MS: u16 = 500;
    pub const CLUE_GAP_MS: u16 = 250;

    pub const GUESS_TONE_MS: u16 = 250;
    pub const GUESS_HOLD_MS: u16 = 250;
    /// Silent gap after each guess
    pub const DEBOUNCE_MS: u16 = 100;

    /// Pause after the player picks a difficulty
    pub const START_DELAY_MS: u16 = 1000;
    /// Pause between completed rounds
    pub const NEXT_ROUND_MS: u16 = 1000;
}

/// End of game feedback
pub mod feedback {
    /// (frequency Hz, tone ms, wait ms)
    pub type Note = (u16, u16, u16);

    pub const WIN_SONG: [Note; 9] = [
        (294, 250, 200),
        (294, 250, 200),
        (294, 250, 200),
        (392, 500, 500),
        (392, 250, 200),
        (440, 250, 200),
        (392, 250, 200),
        (440, 250, 200),
        (494, 500, 0),
    ];

    pub const LOSE_SONG: [Note; 3] = [(98, 250, 250), (93, 250, 250), (87, 250, 250)];

    /// LED order of one spin lap
    pub const SPIN_ORDER: [usize; 8] = [0, 1, 2, 3, 3, 2, 1, 0];
    pub const SPIN_LAPS: usize = 3;
    pub const SPIN_STEP_MS: u16 = 75;

    pub const FLASH_COUNT: u8 = 3;
    pub const FLASH_MS: u16 = 200;

    pub const WIN_LEAD_MS: u16 = 500;
    pub const WIN_PAUSE_MS: u16 = 1000;
    pub const LOSE_LEAD_MS: u16 = 100;
    pub const LOSE_PAUSE_MS: u16 = 200;
    pub const ANSWER_TONE_MS: u16 = 250;
    pub const ANSWER_HOLD_MS: u16 = 500;
    pub const TAIL_MS: u16 = 1000;
}
