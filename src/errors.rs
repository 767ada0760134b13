/// Error type representing the failures that can occur while loading or ranking players.
///
/// The ranking algorithms themselves cannot fail; errors only come from the edges:
/// a stream that is asked for more players than it holds, or input that cannot be read
/// or parsed.
#[derive(Debug)]
pub enum RankError {
    /// A stream was asked for its next player while reporting zero remaining.
    ///
    /// This is a caller bug, surfaced loudly instead of returning a sentinel player.
    StreamExhausted,

    /// Represents underlying I/O errors from the standard library.
    ///
    /// This variant wraps [`std::io::Error`] and is used when a player file
    /// cannot be opened or read.
    IoError(std::io::Error),

    /// A player record could not be parsed.
    ///
    /// Contains a description of the offending record.
    ParseError(String),

    /// A configuration value was rejected.
    ConfigError(String),
}

impl From<std::io::Error> for RankError {
    /// Converts a [`std::io::Error`] into a [`RankError`].
    ///
    /// # Examples
    /// ```
    /// use std::fs::File;
    /// use leaderboard::errors::RankError;
    ///
    /// fn read_file() -> Result<(), RankError> {
    ///     let _file = File::open("nonexistent.txt")?;
    ///     Ok(())
    /// }
    /// assert!(matches!(read_file(), Err(RankError::IoError(_))));
    /// ```
    fn from(err: std::io::Error) -> Self {
        RankError::IoError(err)
    }
}

impl std::fmt::Display for RankError {
    /// Formats the error for display purposes.
    ///
    /// # Examples
    /// ```
    /// use leaderboard::errors::RankError;
    /// let err = RankError::ParseError("missing level".to_string());
    /// assert_eq!(format!("{}", err), "Parse error: missing level");
    /// ```
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RankError::StreamExhausted => write!(f, "Stream error: no players remaining"),
            RankError::IoError(e) => write!(f, "IO error: {}", e),
            RankError::ParseError(e) => write!(f, "Parse error: {}", e),
            RankError::ConfigError(e) => write!(f, "Config error: {}", e),
        }
    }
}

impl std::error::Error for RankError {
    /// Returns the lower-level source of this error, if any.
    ///
    /// Only [`RankError::IoError`] wraps another error type.
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RankError::IoError(e) => Some(e),
            _ => None,
        }
    }
}
