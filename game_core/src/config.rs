use crate::{GameError, Params};

/// Game configuration
///
/// Holds the unit-free tuning values. Everything that scales with the
/// viewport lives on [`crate::PlayField`] instead.
#[derive(Debug, Clone)]
pub struct Config {
    pub cpu_speed: f32,
    pub cpu_dead_zone: f32,
    pub ball_serve_speed: f32,
    pub ball_serve_vy_range: f32,
    pub ball_speed_multiplier: f32,
    pub ball_max_speed: f32,
    pub max_vertical_deflection: f32,
    pub tick_delay_ms: u32,
    pub ms_per_delta_unit: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cpu_speed: Params::CPU_SPEED,
            cpu_dead_zone: Params::CPU_DEAD_ZONE,
            ball_serve_speed: Params::BALL_SERVE_SPEED,
            ball_serve_vy_range: Params::BALL_SERVE_VY_RANGE,
            ball_speed_multiplier: Params::BALL_SPEED_MULTIPLIER,
            ball_max_speed: Params::BALL_MAX_SPEED,
            max_vertical_deflection: Params::MAX_VERTICAL_DEFLECTION,
            tick_delay_ms: Params::TICK_DELAY_MS,
            ms_per_delta_unit: Params::MS_PER_DELTA_UNIT,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject values that would stall or destabilise the simulation
    pub fn validate(&self) -> Result<(), GameError> {
        let positive = [
            ("cpu_speed", self.cpu_speed),
            ("ball_serve_speed", self.ball_serve_speed),
            ("ball_max_speed", self.ball_max_speed),
        ];
        for (field, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(GameError::InvalidConfig { field, value });
            }
        }

        let non_negative = [
            ("cpu_dead_zone", self.cpu_dead_zone),
            ("ball_serve_vy_range", self.ball_serve_vy_range),
            ("ball_speed_multiplier", self.ball_speed_multiplier),
            ("max_vertical_deflection", self.max_vertical_deflection),
        ];
        for (field, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(GameError::InvalidConfig { field, value });
            }
        }

        if !self.ms_per_delta_unit.is_finite() || self.ms_per_delta_unit <= 0.0 {
            return Err(GameError::InvalidConfig {
                field: "ms_per_delta_unit",
                value: self.ms_per_delta_unit as f32,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::new();
        assert!(config.validate().is_ok());
        assert_eq!(config.ball_max_speed, 5.0);
        assert_eq!(config.tick_delay_ms, 7);
    }

    #[test]
    fn test_validate_rejects_zero_cpu_speed() {
        let config = Config {
            cpu_speed: 0.0,
            ..Config::default()
        };
        assert_eq!(
            config.validate(),
            Err(GameError::InvalidConfig {
                field: "cpu_speed",
                value: 0.0
            })
        );
    }

    #[test]
    fn test_validate_rejects_negative_dead_zone() {
        let config = Config {
            cpu_dead_zone: -1.0,
            ..Config::default()
        };
        assert!(matches!(
            config.validate(),
            Err(GameError::InvalidConfig {
                field: "cpu_dead_zone",
                ..
            })
        ));
    }

    #[test]
    fn test_validate_rejects_zero_ms_per_delta_unit() {
        let config = Config {
            ms_per_delta_unit: 0.0,
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }
}
