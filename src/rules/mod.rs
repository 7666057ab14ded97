// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Rule catalog and configuration checks.
//!
//! This module knows which rules the commit linter accepts and what
//! parameter each rule reads, and reports records that do not fit.

mod catalog;
mod validator;

pub use catalog::{CaseStyle, KnownRule, ParamKind};
pub use validator::{validate, ConfigIssue, ValidationReport};
