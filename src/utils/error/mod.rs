//! Error handling for the permission system
//!
//! This module defines the crate-wide error type and the permission failure
//! taxonomy that the boolean public API folds into a denial.

#![allow(missing_docs)]

mod helpers;
#[cfg(test)]
mod tests;
mod types;

pub use types::{PermissionError, ReadyroomError, Result};
