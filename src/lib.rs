// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! cmlint - Typed Commit-Message Lint Configuration
//!
//! The configuration record a commit-message linter reads, as a typed,
//! immutable Rust value.
//!
//! # Features
//!
//! - **Canonical Record**: The authored rule set, with and without a help URL
//! - **Loading**: Discovery and parsing of `.commitlintrc.json` and TOML files
//! - **Rendering**: JSON, TOML, and ES module output in the linter's shape
//! - **Checks**: Unknown rules and mistyped parameters reported before the linter runs
//!
//! # Example
//!
//! ```
//! use cmlint::config::{ConfigFormat, LintConfig};
//!
//! let config = LintConfig::load();
//! assert!(!config.default_ignores());
//!
//! let rule = config.rule("header-max-length").unwrap();
//! assert_eq!(rule.value.as_integer(), Some(50));
//!
//! let json = cmlint::config::render(&config, ConfigFormat::Json).unwrap();
//! assert!(json.contains("\"header-case\""));
//!
//! assert!(cmlint::rules::validate(&config).is_valid());
//! ```

// Module declarations
pub mod config;
pub mod error;
pub mod rules;

// Re-exports for convenience
pub use config::LintConfig;
pub use error::{CmlintError, Result};
