use core::fmt;

/// Conditions the simulation recognises but swallows.
///
/// None of these abort a tick. Callers log or ignore them; naming them keeps
/// the decision visible at every call site.
#[derive(Clone, Debug, PartialEq)]
pub enum GameError {
    InputOutOfRange { y: f32, min: f32, max: f32 },
    ResizeBeforeStart,
    ClockSkew { elapsed_ms: f64 },
    InvalidViewport { width: f32, height: f32 },
    NotRunning,
    LoopStopped,
    InvalidConfig { field: &'static str, value: f32 },
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InputOutOfRange { y, min, max } => write!(
                f,
                "paddle input out of range: y={y:.1} (accepted {min:.1}..={max:.1})"
            ),
            Self::ResizeBeforeStart => {
                write!(f, "resize before game start: field dimensions only")
            }
            Self::ClockSkew { elapsed_ms } => {
                write!(f, "clock went backwards by {:.1} ms", -elapsed_ms)
            }
            Self::InvalidViewport { width, height } => {
                write!(f, "invalid viewport size: {width}x{height}")
            }
            Self::NotRunning => write!(f, "no game is running"),
            Self::LoopStopped => write!(f, "game loop has been stopped"),
            Self::InvalidConfig { field, value } => {
                write!(f, "invalid config value for {field}: {value}")
            }
        }
    }
}

impl std::error::Error for GameError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_the_condition() {
        let err = GameError::InputOutOfRange {
            y: 10.0,
            min: 40.0,
            max: 440.0,
        };
        assert_eq!(
            err.to_string(),
            "paddle input out of range: y=10.0 (accepted 40.0..=440.0)"
        );
        assert_eq!(
            GameError::ClockSkew { elapsed_ms: -5.0 }.to_string(),
            "clock went backwards by 5.0 ms"
        );
    }
}
