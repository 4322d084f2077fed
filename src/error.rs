//! Error types for Folio-GUI
//!
//! Centralized error handling using snafu for ergonomic error definitions.
//! Nothing in the page itself can fail; these cover the ambient plumbing
//! around it (config file, platform directories, the image HTTP client,
//! window creation).

use snafu::Snafu;

/// Main error type for the application
#[derive(Debug, Snafu)]
pub enum Error {
    /// Invalid input or configuration
    #[snafu(display("Invalid: {message}"))]
    Invalid { message: String },

    /// IO error (config file, log directory)
    #[snafu(display("IO error: {source}"))]
    Io { source: std::io::Error },

    /// TOML deserialization error
    #[snafu(display("TOML parse error: {source}"))]
    TomlDe { source: toml::de::Error },

    /// HTTP client could not be built
    #[snafu(display("HTTP client error: {message}"))]
    Http { message: String },

    /// Window could not be opened
    #[snafu(display("Window error: {message}"))]
    Window { message: String },
}

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io { source }
    }
}

impl From<toml::de::Error> for Error {
    fn from(source: toml::de::Error) -> Self {
        Error::TomlDe { source }
    }
}

/// Result type alias for convenience
pub type Result<T, E = Error> = std::result::Result<T, E>;
