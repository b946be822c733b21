use super::{Clock, Color, Difficulty, Panel, Session};
use crate::config::{self, attract, feedback};
use rand::RngCore;
use ufmt::{uWrite, uwriteln};

/// Result of one playback + guess cycle
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RoundOutcome {
    /// Prefix repeated correctly, more rounds to go
    Complete,
    /// Prefix repeated correctly in the last round
    Won,
    /// Wrong button at this position of the prefix
    Missed(usize),
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GameResult {
    Won,
    Lost { position: usize, expected: Color },
}

/// The game controller.
///
/// Owns the board, the clock, the random source and a diagnostic log
/// sink. Every wait is a busy scan of the buttons or a blocking delay;
/// nothing here can be interrupted once started.
pub struct Simon<P, C, R, L> {
    panel: P,
    clock: C,
    rng: R,
    log: L,
}

impl<P, C, R, L> Simon<P, C, R, L>
where
    P: Panel,
    C: Clock,
    R: RngCore,
    L: uWrite,
{
    /// `rng` must already be seeded; it is never reseeded between games
    pub fn new(panel: P, clock: C, rng: R, log: L) -> Self {
        Self {
            panel,
            clock,
            rng,
            log,
        }
    }

    pub fn panel(&self) -> &P {
        &self.panel
    }

    pub fn panel_mut(&mut self) -> &mut P {
        &mut self.panel
    }

    pub fn log(&self) -> &L {
        &self.log
    }

    /// Play games forever
    pub fn run(&mut self) -> ! {
        loop {
            self.run_once();
        }
    }

    /// Attract screen, one full game and its end of game feedback
    pub fn run_once(&mut self) -> GameResult {
        let difficulty = self.select_difficulty();
        let session = Session::new(difficulty, &mut self.rng);
        uwriteln!(
            &mut self.log,
            "difficulty {} ({} rounds)",
            session.difficulty().selector() as u8,
            session.rounds() as u8
        )
        .ok();
        self.clock.delay_ms(config::round::START_DELAY_MS);

        let result = self.play_game(&session);
        match result {
            GameResult::Won => {
                uwriteln!(&mut self.log, "won").ok();
                self.celebrate();
            }
            GameResult::Lost { position, expected } => {
                uwriteln!(&mut self.log, "lost at {}", position as u8).ok();
                self.commiserate(expected);
            }
        }
        result
    }

    /// Cycle the lights until a button is pressed; that button picks the
    /// difficulty.
    pub fn select_difficulty(&mut self) -> Difficulty {
        let mut previous = self.clock.millis();
        let mut frame: u32 = 0;

        let pushed = loop {
            if let Some(color) = self.scan() {
                break color;
            }

            if self.clock.millis().wrapping_sub(previous) > attract::FRAME_MS {
                let color = Color::ALL[(frame % 4) as usize];
                self.show(Some(color));
                if frame < attract::VOICED_FRAMES {
                    self.panel.play_tone(color.note_hz(), attract::TONE_MS);
                }
                previous = self.clock.millis();
                frame = frame.wrapping_add(1);
            }
        };

        self.show(None);
        Difficulty::from_selector(pushed)
    }

    /// Play every round of `session` until the player wins or misses
    pub fn play_game(&mut self, session: &Session) -> GameResult {
        for round in 0..session.rounds() {
            uwriteln!(&mut self.log, "round {}", (round + 1) as u8).ok();
            match self.play_round(session, round) {
                RoundOutcome::Complete => self.clock.delay_ms(config::round::NEXT_ROUND_MS),
                RoundOutcome::Won => return GameResult::Won,
                RoundOutcome::Missed(position) => {
                    let expected = session.solution().prefix(round)[position];
                    return GameResult::Lost { position, expected };
                }
            }
        }
        GameResult::Won
    }

    /// Show the clue for `round` and check the player's answer
    pub fn play_round(&mut self, session: &Session, round: usize) -> RoundOutcome {
        self.play_clue(session, round);

        for (position, &goal) in session.solution().prefix(round).iter().enumerate() {
            if !self.check_guess(goal) {
                return RoundOutcome::Missed(position);
            }
        }

        if session.is_final_round(round) {
            RoundOutcome::Won
        } else {
            RoundOutcome::Complete
        }
    }

    /// Light and sound the first `round + 1` colors of the solution
    pub fn play_clue(&mut self, session: &Session, round: usize) {
        self.show(None);

        for &color in session.solution().prefix(round) {
            self.show(Some(color));
            self.panel.play_tone(color.note_hz(), config::round::CLUE_TONE_MS);
            self.clock.delay_ms(config::round::CLUE_HOLD_MS);
            self.show(None);
            self.clock.delay_ms(config::round::CLUE_GAP_MS);
        }
    }

    /// Wait for one button press, echo it, and compare it with `goal`
    pub fn check_guess(&mut self, goal: Color) -> bool {
        let pushed = self.await_button();

        self.show(Some(pushed));
        self.panel.play_tone(pushed.note_hz(), config::round::GUESS_TONE_MS);
        self.clock.delay_ms(config::round::GUESS_HOLD_MS);
        self.show(None);
        self.clock.delay_ms(config::round::DEBOUNCE_MS);

        pushed == goal
    }

    /// Win melody, spinning lights and a final flash
    pub fn celebrate(&mut self) {
        self.clock.delay_ms(feedback::WIN_LEAD_MS);
        self.play_song(&feedback::WIN_SONG);
        self.spin();
        self.clock.delay_ms(feedback::WIN_PAUSE_MS);
        self.flash_all(feedback::FLASH_COUNT);
        self.clock.delay_ms(feedback::TAIL_MS);
    }

    /// Losing jingle, then the answer the player should have given
    pub fn commiserate(&mut self, expected: Color) {
        self.clock.delay_ms(feedback::LOSE_LEAD_MS);
        self.play_song(&feedback::LOSE_SONG);
        self.clock.delay_ms(feedback::LOSE_PAUSE_MS);

        self.panel.play_tone(expected.note_hz(), feedback::ANSWER_TONE_MS);
        self.show(Some(expected));
        self.clock.delay_ms(feedback::ANSWER_HOLD_MS);

        self.flash_all(feedback::FLASH_COUNT);
        self.clock.delay_ms(feedback::TAIL_MS);
    }

    /// All LEDs on then off, `times` times
    pub fn flash_all(&mut self, times: u8) {
        for _ in 0..times {
            self.set_all(true);
            self.clock.delay_ms(feedback::FLASH_MS);
            self.set_all(false);
            self.clock.delay_ms(feedback::FLASH_MS);
        }
    }

    /// Light only `lit`, or nothing
    pub fn show(&mut self, lit: Option<Color>) {
        for color in Color::ALL {
            self.panel.set_led(color, Some(color) == lit);
        }
    }

    /// First pressed button in scan order
    fn scan(&mut self) -> Option<Color> {
        Color::ALL
            .into_iter()
            .find(|&color| self.panel.button_pressed(color))
    }

    fn await_button(&mut self) -> Color {
        loop {
            if let Some(color) = self.scan() {
                return color;
            }
        }
    }

    fn set_all(&mut self, on: bool) {
        for color in Color::ALL {
            self.panel.set_led(color, on);
        }
    }

    fn spin(&mut self) {
        for _ in 0..feedback::SPIN_LAPS {
            for &index in &feedback::SPIN_ORDER {
                let color = Color::ALL[index];
                self.panel.set_led(color, true);
                self.clock.delay_ms(feedback::SPIN_STEP_MS);
                self.panel.set_led(color, false);
                self.clock.delay_ms(feedback::SPIN_STEP_MS);
            }
        }
    }

    fn play_song(&mut self, notes: &[feedback::Note]) {
        for &(freq_hz, tone_ms, wait_ms) in notes {
            self.panel.play_tone(freq_hz, tone_ms);
            self.clock.delay_ms(wait_ms);
        }
    }
}
