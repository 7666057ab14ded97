// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration module for cmlint.
//!
//! This module defines the lint configuration record and handles loading,
//! parsing, merging, and writing it.

pub mod default;
mod loader;
mod render;
mod schema;

pub use default::{canonical, canonical_without_help_url};
pub use loader::{
    find_config_file, find_config_file_from, load_config, load_config_from, merge_configs,
    parse_config,
};
pub use render::{render, write_config, ConfigFormat};
pub use schema::*;
