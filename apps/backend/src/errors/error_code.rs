//! Error codes for the quiz backend.
//!
//! Add new codes here; never pass ad-hoc strings as error codes. Every code
//! is SCREAMING_SNAKE_CASE and maps 1:1 to the string in HTTP responses.

use core::fmt;

/// Centralized error codes carried in ProblemDetails responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Request Validation
    /// Player name missing or empty on round start
    MissingPlayerName,
    /// Difficulty level missing on round start
    MissingLevel,
    /// Difficulty level is not one of the supported tiers
    InvalidLevel,
    /// Remaining time missing or not an integer on submit
    InvalidTimeleft,
    /// Request body could not be decoded
    BadRequest,

    // System Errors
    /// Database error
    DbError,
    /// Database unavailable
    DbUnavailable,
    /// Internal server error
    Internal,
    /// Configuration error
    ConfigError,
}

impl ErrorCode {
    /// Returns the canonical SCREAMING_SNAKE_CASE string for this error code.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::MissingPlayerName => "MISSING_PLAYER_NAME",
            Self::MissingLevel => "MISSING_LEVEL",
            Self::InvalidLevel => "INVALID_LEVEL",
            Self::InvalidTimeleft => "INVALID_TIMELEFT",
            Self::BadRequest => "BAD_REQUEST",

            Self::DbError => "DB_ERROR",
            Self::DbUnavailable => "DB_UNAVAILABLE",
            Self::Internal => "INTERNAL",
            Self::ConfigError => "CONFIG_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
