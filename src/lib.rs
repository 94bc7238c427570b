//! Spotify Listening Summary Library
//!
//! This library builds a short, fixed-width summary of a user's Spotify
//! listening activity (top tracks, top artists or recently played tracks) and
//! publishes it into a single GitHub gist, replacing its content and
//! description on every run.
//!
//! # Modules
//!
//! - `cli` - Run orchestration behind the command-line subcommands
//! - `config` - Configuration management and environment variables
//! - `error` - Error type shared by the API clients and the publisher
//! - `gist` - GitHub gist client
//! - `publish` - Gist update logic
//! - `spotify` - Spotify Web API client implementation
//! - `summary` - Summary producers and mode selection
//! - `types` - Data structures and type definitions
//! - `utils` - Text formatting helpers
//!
//! # Example
//!
//! ```
//! use spotgist::{cli, config, gist::GistClient, spotify::SpotifyClient};
//!
//! #[tokio::main]
//! async fn main() -> spotgist::Res<()> {
//!     config::load_env()?;
//!     let settings = config::Settings::from_env()?;
//!     let mut music = SpotifyClient::new(&settings);
//!     let gists = GistClient::new(&settings);
//!     cli::publish(&mut music, &gists, &settings).await?;
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod gist;
pub mod publish;
pub mod spotify;
pub mod summary;
pub mod types;
pub mod utils;

/// A convenient Result type alias for operations that may fail.
///
/// Used at the top of the run where errors of different origins meet. The
/// boxed error keeps the Send + Sync bounds needed in async contexts.
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational message with a blue bullet point.
///
/// # Example
///
/// ```
/// info!("Refreshing Spotify access token...");
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// # Example
///
/// ```
/// success!("Gist {} updated", gist_id);
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Terminates the process with exit code 1. Only the binary's top level uses
/// it; library code returns errors instead.
///
/// # Example
///
/// ```
/// error!("Run failed: {}", e);
/// // Program exits here - code after this will not execute
/// ```
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
/// Used for failures the run survives, such as a producer whose section is
/// left empty.
///
/// # Example
///
/// ```
/// warning!("Error getting top tracks: {}", e);
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
