//! Logging utilities
//!
//! Subscriber installation and structured security event logging.

mod security_logger;
mod subscriber;

pub use security_logger::SecurityLogger;
pub use subscriber::init_logging;
