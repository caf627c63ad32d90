use std::fmt;

/// Fatal configuration problems, detected once when a session is built.
#[derive(Debug)]
pub enum ConfigError {
    /// Rejection sampling needs strictly more lanes than enemies.
    TooFewLanes { lanes: usize, max_enemies: usize },
    InvalidSpeedRange { min: f64, max: f64 },
    NonPositive { field: &'static str },
    PlayfieldTooSmall { width: f64, player_width: f64 },
    ZeroLives,
    /// A hand-placed board put two enemies in one lane.
    SharedLane { lane: usize },
    Io(std::io::Error),
    Parse(serde_json::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooFewLanes { lanes, max_enemies } => write!(
                f,
                "too few lanes: {lanes} lanes cannot hold {max_enemies} enemies with a free slot"
            ),
            Self::InvalidSpeedRange { min, max } => {
                write!(f, "invalid enemy speed range: [{min}, {max})")
            }
            Self::NonPositive { field } => write!(f, "`{field}` must be greater than zero"),
            Self::PlayfieldTooSmall {
                width,
                player_width,
            } => write!(
                f,
                "playfield width {width} cannot fit a player {player_width} wide"
            ),
            Self::ZeroLives => write!(f, "initial lives must be at least 1"),
            Self::SharedLane { lane } => write!(f, "two enemies share lane {lane}"),
            Self::Io(err) => write!(f, "cannot read config: {err}"),
            Self::Parse(err) => write!(f, "cannot parse config: {err}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Parse(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err)
    }
}
