use std::time::Duration;

use thiserror::Error;

use crate::constants::{
    CENTRE, DISPLAY_RATE_HZ, FREQ1, FREQ2, LOOP_RATE_HZ, NOISE_STDDEV, RANGE1, RANGE2,
};

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("loop rate must be at least 1 Hz")]
    ZeroLoopRate,
    #[error("filter window must hold at least one sample")]
    ZeroFilterSize,
    #[error("display rate must be a positive finite number of Hz, got {0}")]
    InvalidDisplayRate(f64),
    #[error("noise standard deviation must be finite and non-negative, got {0}")]
    InvalidNoise(f64),
    #[error("{name} must be finite, got {value}")]
    NotFinite { name: &'static str, value: f64 },
}

/// One sinusoidal component of the synthetic signal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Component {
    pub range: f64,
    pub freq: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SimConfig {
    pub centre: f64,
    pub components: [Component; 2],
    pub noise_stddev: f64,
    pub loop_rate: u32,
    pub display_rate: f64,
    pub filter_size: usize,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            centre: CENTRE,
            components: [
                Component { range: RANGE1, freq: FREQ1 },
                Component { range: RANGE2, freq: FREQ2 },
            ],
            noise_stddev: NOISE_STDDEV,
            loop_rate: 0,
            display_rate: DISPLAY_RATE_HZ,
            filter_size: 0,
        }
        .with_loop_rate(LOOP_RATE_HZ)
    }
}

impl SimConfig {
    // A fifth of a second of samples
    pub fn filter_size_for(loop_rate: u32) -> usize {
        (loop_rate / 5) as usize
    }

    pub fn with_loop_rate(mut self, loop_rate: u32) -> Self {
        self.loop_rate = loop_rate;
        self.filter_size = Self::filter_size_for(loop_rate);
        self
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.loop_rate as f64)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.loop_rate == 0 {
            return Err(ConfigError::ZeroLoopRate);
        }
        if self.filter_size == 0 {
            return Err(ConfigError::ZeroFilterSize);
        }
        if !(self.display_rate.is_finite() && self.display_rate > 0.0) {
            return Err(ConfigError::InvalidDisplayRate(self.display_rate));
        }
        if !(self.noise_stddev.is_finite() && self.noise_stddev >= 0.0) {
            return Err(ConfigError::InvalidNoise(self.noise_stddev));
        }
        check_finite("centre", self.centre)?;
        for c in &self.components {
            check_finite("range", c.range)?;
            check_finite("frequency", c.freq)?;
        }
        Ok(())
    }
}

fn check_finite(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NotFinite { name, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_constants() {
        let config = SimConfig::default();
        assert_eq!(config.centre, 1400.0);
        assert_eq!(config.loop_rate, 100);
        assert_eq!(config.filter_size, 20);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_filter_size_truncates() {
        assert_eq!(SimConfig::filter_size_for(100), 20);
        assert_eq!(SimConfig::filter_size_for(49), 9);
        assert_eq!(SimConfig::filter_size_for(4), 0);
    }

    #[test]
    fn test_slow_loop_rate_rejected() {
        let config = SimConfig::default().with_loop_rate(4);
        assert_eq!(config.validate(), Err(ConfigError::ZeroFilterSize));

        let config = SimConfig::default().with_loop_rate(0);
        assert_eq!(config.validate(), Err(ConfigError::ZeroLoopRate));
    }

    #[test]
    fn test_bad_rates_and_noise_rejected() {
        let mut config = SimConfig::default();
        config.display_rate = 0.0;
        assert_eq!(config.validate(), Err(ConfigError::InvalidDisplayRate(0.0)));

        let mut config = SimConfig::default();
        config.noise_stddev = -1.0;
        assert_eq!(config.validate(), Err(ConfigError::InvalidNoise(-1.0)));

        let mut config = SimConfig::default();
        config.components[1].freq = f64::INFINITY;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NotFinite { name: "frequency", .. })
        ));
    }

    #[test]
    fn test_intervals() {
        let config = SimConfig::default();
        assert_eq!(config.tick_interval(), Duration::from_millis(10));
    }
}
