//! Well-known permission names

/// Roster administration
pub const MANAGE_ROSTER: &str = "manage_roster";
/// Event scheduling
pub const MANAGE_EVENTS: &str = "manage_events";
/// Publishing events to Discord
pub const PUBLISH_EVENTS: &str = "publish_events";
/// Training syllabus authoring
pub const MANAGE_SYLLABUS: &str = "manage_syllabus";
/// Read access to the attendance / grading grid
pub const VIEW_PTR_GRID: &str = "view_ptr_grid";
/// Grading entries in the attendance / grading grid
pub const GRADE_TRAINING: &str = "grade_training";
/// Flight assignment for events
pub const ASSIGN_FLIGHTS: &str = "assign_flights";
/// Editing mission debriefs; the only permission with a delegation fallback
pub const EDIT_DEBRIEFS: &str = "edit_debriefs";
/// Finalizing mission debriefs
pub const FINALIZE_DEBRIEFS: &str = "finalize_debriefs";
/// Administration tools page
pub const ACCESS_ADMIN_TOOLS: &str = "access_admin_tools";
/// Role and permission management
pub const MANAGE_ROLES: &str = "manage_roles";

/// All well-known permission names
pub const ALL: &[&str] = &[
    MANAGE_ROSTER,
    MANAGE_EVENTS,
    PUBLISH_EVENTS,
    MANAGE_SYLLABUS,
    VIEW_PTR_GRID,
    GRADE_TRAINING,
    ASSIGN_FLIGHTS,
    EDIT_DEBRIEFS,
    FINALIZE_DEBRIEFS,
    ACCESS_ADMIN_TOOLS,
    MANAGE_ROLES,
];
