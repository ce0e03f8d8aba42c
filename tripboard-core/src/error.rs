//! # Error handling for Tripboard Core
//!
//! This module defines the error and result types used by the layout engine,
//! its storage backends and the configuration loader.
//!
//! Most of the layout engine never surfaces these errors to its callers:
//! storage failures degrade to the default layout and are only logged. The
//! types exist so that the storage and configuration layers can report
//! precisely what went wrong before that degradation happens.

use thiserror::Error;

/// Result type used throughout Tripboard Core.
///
/// # Example
///
/// ```rust
/// use tripboard_core::{Result, Error};
///
/// fn example_function() -> Result<String> {
///     Ok("Success".to_string())
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for Tripboard Core.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Key-value storage errors
    #[error("Storage error: {message}")]
    Storage { message: String },

    /// Layout decoding or encoding errors
    #[error("Layout error: {message}")]
    Layout { message: String },

    /// File I/O errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML deserialization errors
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Validation errors
    #[error("Validation error: {field}: {message}")]
    Validation { field: String, message: String },
}

impl Error {
    /// Create a new configuration error.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tripboard_core::Error;
    ///
    /// let error = Error::config("Invalid configuration file format");
    /// assert!(error.is_config());
    /// ```
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new storage error.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tripboard_core::Error;
    ///
    /// let error = Error::storage("Layout slot is not writable");
    /// assert!(error.is_storage());
    /// ```
    pub fn storage<S: Into<String>>(message: S) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }

    /// Create a new layout error.
    pub fn layout<S: Into<String>>(message: S) -> Self {
        Self::Layout {
            message: message.into(),
        }
    }

    /// Create a new validation error.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tripboard_core::Error;
    ///
    /// let error = Error::validation("ui.theme", "Unknown theme");
    /// assert!(error.is_validation());
    /// ```
    pub fn validation<S: Into<String>>(field: S, message: S) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Check if this error is a configuration error.
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config { .. })
    }

    /// Check if this error is a storage error.
    pub fn is_storage(&self) -> bool {
        matches!(self, Self::Storage { .. })
    }

    /// Check if this error is an I/O error.
    pub fn is_io(&self) -> bool {
        matches!(self, Self::Io(_))
    }

    /// Check if this error is a validation error.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }

    /// Get the error category as a string.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tripboard_core::Error;
    ///
    /// let error = Error::storage("disk full");
    /// assert_eq!(error.category(), "Storage");
    /// ```
    pub fn category(&self) -> &'static str {
        match self {
            Self::Config { .. } => "Config",
            Self::Storage { .. } => "Storage",
            Self::Layout { .. } => "Layout",
            Self::Io(_) => "IO",
            Self::Json(_) => "JSON",
            Self::Toml(_) => "TOML",
            Self::Validation { .. } => "Validation",
        }
    }
}

/// Convenience macro for creating configuration errors.
///
/// # Example
///
/// ```rust
/// use tripboard_core::{config_error, Error};
///
/// let err = config_error!("Invalid value for {}: {}", "splitter_thickness", "-1");
/// assert!(err.is_config());
/// ```
#[macro_export]
macro_rules! config_error {
    ($($arg:tt)*) => {
        $crate::Error::config(format!($($arg)*))
    };
}

/// Convenience macro for creating storage errors.
///
/// # Example
///
/// ```rust
/// use tripboard_core::{storage_error, Error};
///
/// let err = storage_error!("Failed to write slot '{}'", "myhome_layout_v1");
/// assert!(err.is_storage());
/// ```
#[macro_export]
macro_rules! storage_error {
    ($($arg:tt)*) => {
        $crate::Error::storage(format!($($arg)*))
    };
}
