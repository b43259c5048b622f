//! Utility modules for readyroom
//!
//! - **error**: Error types and the permission failure taxonomy
//! - **logging**: Subscriber setup and security event logging

pub mod error;
pub mod logging;

pub use error::{PermissionError, ReadyroomError, Result};
pub use logging::{SecurityLogger, init_logging};
