use std::time::{Duration, Instant};

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum State {
    Playing,
    Paused,
    GameOver,
}

/// Decouples the game's tick rate from the display's frame rate,
/// catching up on ticks missed during slow frames
pub struct Control {
    tick_interval: Duration,

    last_tick: Instant,
    // fractional ticks carried over between frames
    remainder: f64,
    // ticks left to run for the current frame
    missed_ticks: Option<usize>,

    state: State,
}

impl Control {
    pub fn new(tick_interval: Duration) -> Self {
        Self {
            tick_interval,
            last_tick: Instant::now(),
            remainder: 0.,
            missed_ticks: None,
            state: State::Playing,
        }
    }

    /// Call in a loop in update, run one game tick per `true`
    pub fn can_update(&mut self) -> bool {
        if self.state != State::Playing {
            return false;
        }

        match self.missed_ticks.as_mut() {
            Some(0) => {
                self.missed_ticks = None;
                false
            }
            Some(missed) => {
                *missed -= 1;
                true
            }
            None => {
                let elapsed = self.last_tick.elapsed().as_secs_f64();
                let ticks = elapsed / self.tick_interval.as_secs_f64() + self.remainder;
                let missed = ticks as usize;
                if missed == 0 {
                    return false;
                }

                self.remainder = ticks % 1.;
                self.last_tick = Instant::now();
                self.missed_ticks = Some(missed - 1);
                true
            }
        }
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn play(&mut self) {
        self.state = State::Playing;
        // don't catch up on ticks that would have occurred while paused
        self.last_tick = Instant::now();
        self.remainder = 0.;
    }

    pub fn pause(&mut self) {
        self.state = State::Paused;
        self.missed_ticks = None;
    }

    pub fn game_over(&mut self) {
        self.state = State::GameOver;
        self.missed_ticks = None;
    }
}
