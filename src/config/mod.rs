//! Configuration module for html-insight
//!
//! This module handles loading, parsing, and validating TOML configuration files.
//! A missing file section or key falls back to its default, so an empty file is
//! a valid configuration.
//!
//! # Example
//!
//! ```no_run
//! use html_insight::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("html-insight.toml")).unwrap();
//! println!("Fetching as: {}", config.fetcher.user_agent);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{
    Config, FetcherConfig, LinkConfig, LinkErrorPolicy, DEFAULT_TIMEOUT_MS, DEFAULT_USER_AGENT,
};

// Re-export parser functions
pub use parser::{compute_config_hash, load_config, load_config_with_hash, parse_config};
