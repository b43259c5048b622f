/// Debrief entity module
pub mod debrief;
/// Debrief delegation entity module
pub mod debrief_delegation;
/// Pilot assignment entity module
pub mod pilot_assignment;
/// Role entity module
pub mod role;
/// Role permission entity module
pub mod role_permission;
/// User role entity module
pub mod user_role;

pub use debrief::Entity as Debrief;
pub use debrief_delegation::Entity as DebriefDelegation;
pub use pilot_assignment::Entity as PilotAssignment;
pub use role::Entity as Role;
pub use role_permission::Entity as RolePermission;
pub use user_role::Entity as UserRole;
