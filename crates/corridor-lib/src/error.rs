use std::path::PathBuf;

use thiserror::Error;

/// Convenient result alias for the corridor library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Dataset could not be located at the resolved path.
    #[error("dataset not found at {path}")]
    DatasetNotFound { path: PathBuf },

    /// No suitable project directories could be resolved for this platform.
    #[error("failed to resolve project directories for the dataset location")]
    ProjectDirsUnavailable,

    /// Raised when a dataset document could not be decoded.
    #[error("failed to parse network dataset: {0}")]
    DatasetParse(#[from] serde_json::Error),

    /// Raised when two hubs share the same name.
    #[error("duplicate hub name encountered: {name}")]
    DuplicateHub { name: String },

    /// Raised when a corridor references a hub that is not part of the dataset.
    #[error("corridor {corridor} references unknown hub {hub}")]
    UnknownEndpoint { corridor: String, hub: String },

    /// Raised when a corridor attribute lies outside its permitted range.
    #[error("invalid corridor {corridor}: {message}")]
    InvalidCorridor { corridor: String, message: String },

    /// Raised when a hub pair carries more than one corridor of the same class.
    #[error("hubs {from} and {to} already have a {class} corridor ({existing})")]
    DuplicateCorridor {
        from: String,
        to: String,
        class: &'static str,
        existing: String,
    },

    /// Raised when a weather snapshot carries unusable values.
    #[error("invalid weather snapshot: {message}")]
    InvalidWeather { message: String },

    /// Raised when a routing mode name is not recognised.
    #[error("unknown route mode {value}; expected safest or shortcut")]
    UnknownRouteMode { value: String },

    /// Raised when a hub name could not be found in the dataset.
    #[error("unknown hub name: {name}{}", format_suggestions(.suggestions))]
    UnknownHub {
        name: String,
        suggestions: Vec<String>,
    },

    /// Raised when a summary is requested for a route without hubs.
    #[error("route contains no hubs")]
    EmptyRoute,

    /// Raised by explanation collaborators that could not produce a rationale.
    #[error("route explanation unavailable: {message}")]
    ExplanationUnavailable { message: String },

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

fn format_suggestions(suggestions: &[String]) -> String {
    match suggestions {
        [] => String::new(),
        [only] => format!(". Did you mean '{only}'?"),
        many => format!(
            ". Did you mean one of: {}?",
            many.iter()
                .map(|s| format!("'{s}'"))
                .collect::<Vec<_>>()
                .join(", ")
        ),
    }
}
