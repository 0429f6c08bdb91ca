use std::f64::consts::TAU;

use rand::Rng;
use rand_distr::{Distribution, Normal};

use crate::config::{Component, ConfigError, SimConfig};

/// Phase angle in radians, wrapped to [0, 2π).
pub fn phase(t: f64, freq: f64) -> f64 {
    (TAU * t * freq).rem_euclid(TAU)
}

/// Synthetic RPM source: centre plus two sinusoids plus Gaussian noise.
pub struct SignalGenerator {
    centre: f64,
    components: [Component; 2],
    noise: Normal<f64>,
}

impl SignalGenerator {
    pub fn from_config(config: &SimConfig) -> Result<Self, ConfigError> {
        let noise = Normal::new(0.0, config.noise_stddev)
            .map_err(|_| ConfigError::InvalidNoise(config.noise_stddev))?;
        Ok(Self {
            centre: config.centre,
            components: config.components,
            noise,
        })
    }

    pub fn clean_value(&self, t: f64) -> f64 {
        self.components
            .iter()
            .fold(self.centre, |acc, c| acc + c.range * phase(t, c.freq).sin())
    }

    // fresh noise on every call
    pub fn sample<R: Rng + ?Sized>(&self, t: f64, rng: &mut R) -> f64 {
        self.clean_value(t) + self.noise.sample(rng)
    }
}
