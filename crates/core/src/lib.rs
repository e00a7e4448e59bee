//! Core utilities for Memeboard tools
//!
//! This crate provides shared functionality used by the search front-ends:
//!
//! - **Error handling**: Structured errors with codes, context, and recovery suggestions
//! - **Configuration**: TOML-based configuration with validation
//!
//! # Example
//!
//! ```rust,no_run
//! use memeboard_core::config::Config;
//!
//! let config = Config::load(None).expect("invalid configuration");
//! println!("threshold = {}", config.schema.search.threshold);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod error;

pub use error::{Error, ErrorCode, Result, ResultExt};
