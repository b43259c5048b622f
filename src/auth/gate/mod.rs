//! Permission gates
//!
//! Consumer-side wrappers deciding how a guarded element is presented for a
//! given check state, plus cancellable asynchronous checks for consumers that
//! can go away before the answer arrives.

mod pending;
mod types;

pub use pending::PendingCheck;
pub use types::{GateMode, GateRender, GateState, Gated, PermissionGate};
