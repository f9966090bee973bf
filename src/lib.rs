//! Spotify Now-Playing Service Library
//!
//! This library implements the Spotify integration backing a personal
//! website: an OAuth authorization initiator, the one-time authorization
//! callback used to bootstrap a refresh token, and a stateless now-playing
//! endpoint polled by the site's frontend.
//!
//! # Modules
//!
//! - `api` - HTTP API endpoints served by the application
//! - `config` - Configuration management and environment variables
//! - `server` - HTTP server bootstrap and routing
//! - `spotify` - Spotify Web API client implementation
//! - `types` - Data structures and type definitions

pub mod api;
pub mod config;
pub mod server;
pub mod spotify;
pub mod types;

/// A convenient Result type alias for operations that may fail.
///
/// Provides a standard error handling pattern throughout the application
/// using a boxed dynamic error trait object. This allows for flexible
/// error handling while maintaining Send + Sync bounds for async contexts.
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational message with a blue bullet point.
///
/// Used for general information and status updates, e.g. server startup.
/// Accepts the same arguments as `println!`.
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// Accepts the same arguments as `println!`.
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Reserved for unrecoverable bootstrap errors; request handlers log with
/// `warning!` instead and answer with an HTTP error.
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// Used for upstream failures that are surfaced to callers as generic HTTP
/// errors; the detail ends up here and nowhere else.
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
