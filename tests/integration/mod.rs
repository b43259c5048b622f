//! Integration tests for readyroom
//!
//! These tests drive the public API end to end over in-memory sources.

pub mod config_tests;
pub mod debrief_tests;
pub mod resolver_tests;
pub mod session_tests;
