//! Permission resolution
//!
//! Answers "does user U hold permission P for context C", composing the scope
//! matcher with the debrief finalize lock and the delegation fallback. Every
//! failure along the way is logged and answered with a denial.

mod debrief;
mod system;

pub use system::PermissionResolver;
