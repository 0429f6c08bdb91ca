use std::time::Instant;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::{ConfigError, SimConfig};
use crate::filter::{round_half_up, Window};
use crate::signal::SignalGenerator;

pub struct DisplayState {
    pub last_display: f64,
    interval: f64,
}

impl DisplayState {
    pub fn new(display_rate: f64) -> Self {
        Self {
            last_display: 0.0,
            interval: 1.0 / display_rate,
        }
    }

    /// True once strictly more than one display interval has passed since the
    /// last refresh. Records `now` when it fires.
    pub fn due(&mut self, now: f64) -> bool {
        if now - self.last_display > self.interval {
            self.last_display = now;
            true
        } else {
            false
        }
    }
}

// Main loop state
pub struct App {
    generator: SignalGenerator,
    pub window: Window,
    pub display: DisplayState,
    rng: StdRng,
    start: Instant,
    pub ticks: u64,
    pub last_reading: Option<i64>,
}

impl App {
    pub fn new(config: &SimConfig) -> Result<App, ConfigError> {
        Self::build(config, StdRng::from_entropy())
    }

    #[cfg(test)]
    pub fn with_seed(config: &SimConfig, seed: u64) -> Result<App, ConfigError> {
        Self::build(config, StdRng::seed_from_u64(seed))
    }

    fn build(config: &SimConfig, rng: StdRng) -> Result<App, ConfigError> {
        config.validate()?;
        Ok(App {
            generator: SignalGenerator::from_config(config)?,
            window: Window::new(config.filter_size),
            display: DisplayState::new(config.display_rate),
            rng,
            start: Instant::now(),
            ticks: 0,
            last_reading: None,
        })
    }

    pub fn elapsed(&self) -> f64 {
        self.start.elapsed().as_secs_f64()
    }

    pub fn tick(&mut self) -> Option<i64> {
        let now = self.elapsed();
        self.on_tick(now)
    }

    /// One tick at `now` seconds since start. Returns the smoothed readout
    /// when the display is due.
    pub fn on_tick(&mut self, now: f64) -> Option<i64> {
        let sample = self.generator.sample(now, &mut self.rng);
        self.window.push(sample);
        self.ticks += 1;

        if !self.display.due(now) {
            return None;
        }
        let reading = round_half_up(self.window.mean()?);
        self.last_reading = Some(reading);
        Some(reading)
    }
}
