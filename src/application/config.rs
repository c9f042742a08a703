use crate::domain::Algorithm;

/// Smallest allowed tick interval; keeps the step rate bounded
pub const MIN_INTERVAL_MS: f64 = 1.0;

/// Settings a simulation is constructed from
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimulationConfig {
    pub width: usize,
    pub height: usize,
    pub tick_interval_ms: f64,
    pub algorithm: Algorithm,
}

impl SimulationConfig {
    pub fn new(height: usize, width: usize, tick_interval_ms: f64) -> Self {
        Self {
            width,
            height,
            tick_interval_ms,
            ..Self::default()
        }
    }

    /// Set the generation algorithm (builder pattern)
    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Set the tick interval (builder pattern)
    pub fn with_tick_interval(mut self, tick_interval_ms: f64) -> Self {
        self.tick_interval_ms = tick_interval_ms;
        self
    }

    /// The configured interval, clamped to `MIN_INTERVAL_MS`
    pub fn clamped_interval(&self) -> f64 {
        clamp_interval(self.tick_interval_ms)
    }
}

impl Default for SimulationConfig {
    /// A 150x150 board stepping every 100ms
    fn default() -> Self {
        Self {
            width: 150,
            height: 150,
            tick_interval_ms: 100.0,
            algorithm: Algorithm::default(),
        }
    }
}

/// NaN falls back to the minimum as well
pub(crate) fn clamp_interval(interval_ms: f64) -> f64 {
    interval_ms.max(MIN_INTERVAL_MS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_board_settings() {
        let config = SimulationConfig::default();
        assert_eq!((config.height, config.width), (150, 150));
        assert_eq!(config.tick_interval_ms, 100.0);
        assert_eq!(config.algorithm, Algorithm::Serial);
    }

    #[test]
    fn test_builder() {
        let config = SimulationConfig::new(20, 30, 50.0)
            .with_algorithm(Algorithm::Parallel)
            .with_tick_interval(-5.0);
        assert_eq!((config.height, config.width), (20, 30));
        assert_eq!(config.algorithm, Algorithm::Parallel);
        assert_eq!(config.clamped_interval(), MIN_INTERVAL_MS);
    }

    #[test]
    fn test_clamp_interval() {
        assert_eq!(clamp_interval(0.0), MIN_INTERVAL_MS);
        assert_eq!(clamp_interval(f64::NAN), MIN_INTERVAL_MS);
        assert_eq!(clamp_interval(250.0), 250.0);
    }
}
