//! Error types for deck construction and configuration.
//!
//! Runtime deck operations never fail: resolution misses, empty decks, and
//! advancing past the end are reported through outcome values instead.

use thiserror::Error;

/// Errors from building a deck.
#[derive(Error, Debug)]
pub enum DeckError {
    /// The supplied configuration is unusable.
    #[error("invalid deck config: {0}")]
    InvalidConfig(#[from] ConfigError),
}

/// Errors from loading or validating a [`DeckConfig`](crate::DeckConfig).
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A deck needs room for at least the front card.
    #[error("window_size must be at least 1")]
    ZeroWindow,

    /// A distance, factor, or duration that must be strictly positive.
    #[error("{field} must be positive, got {value}")]
    NonPositive { field: &'static str, value: f32 },

    /// A distance or angle that may be zero but not negative.
    #[error("{field} must not be negative, got {value}")]
    Negative { field: &'static str, value: f32 },

    /// NaN or infinite.
    #[error("{field} must be finite, got {value}")]
    NonFinite { field: &'static str, value: f32 },

    /// A factor that must stay inside `0.0..=1.0`.
    #[error("{field} must be within 0..=1, got {value}")]
    OutOfUnitRange { field: &'static str, value: f32 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("RON parse error: {0}")]
    Ron(#[from] ron::error::SpannedError),
}

/// Result type for deck construction.
pub type Result<T> = std::result::Result<T, DeckError>;
