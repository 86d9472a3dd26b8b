use std::fmt;

/// Invariant violations raised by the simulation.
///
/// Neither is expected under a sane configuration; when one is returned the
/// current tick stops before touching any entity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SimError {
    /// Paddle deflection requested while the ball has no horizontal speed
    ZeroHorizontalSpeed,
    /// Random integer requested from an empty range
    InvertedRange { min: i32, max: i32 },
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroHorizontalSpeed => write!(f, "cannot bounce ball with zero horizontal speed"),
            Self::InvertedRange { min, max } => {
                write!(f, "random range inverted: min {min} > max {max}")
            }
        }
    }
}

impl std::error::Error for SimError {}

#[derive(Debug)]
pub enum ConfigError {
    /// The JSON text could not be parsed
    Parse(serde_json::Error),
    /// The values parsed but describe an impossible setup
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "configuration parse error: {e}"),
            Self::Invalid(reason) => write!(f, "invalid configuration: {reason}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Invalid(_) => None,
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        Self::Parse(e)
    }
}
