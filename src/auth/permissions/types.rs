//! Permission type definitions

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One scope-qualified grant of a permission.
///
/// Serialized as an internally tagged object, e.g.
/// `{"type": "squadron", "squadron_id": "sq-1"}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PermissionGrant {
    /// Unconditional access
    Global,
    /// Access only within one wing
    #[serde(rename = "wing")]
    ScopedToWing { wing_id: String },
    /// Access only within one squadron
    #[serde(rename = "squadron")]
    ScopedToSquadron { squadron_id: String },
    /// Access through an explicit delegation tied to one pilot.
    ///
    /// Never satisfied by scope matching alone; see the resolver's delegation
    /// fallback.
    #[serde(rename = "flight")]
    ScopedToFlight { pilot_id: String },
}

impl PermissionGrant {
    pub fn wing(wing_id: impl Into<String>) -> Self {
        Self::ScopedToWing {
            wing_id: wing_id.into(),
        }
    }

    pub fn squadron(squadron_id: impl Into<String>) -> Self {
        Self::ScopedToSquadron {
            squadron_id: squadron_id.into(),
        }
    }

    pub fn flight(pilot_id: impl Into<String>) -> Self {
        Self::ScopedToFlight {
            pilot_id: pilot_id.into(),
        }
    }
}

/// Resolved value of one permission: either a plain flag or a list of
/// scope-qualified grants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PermissionValue {
    /// Unconditional grant or deny
    Flag(bool),
    /// Grant qualified by scope, OR-composed
    Scoped(Vec<PermissionGrant>),
}

impl From<bool> for PermissionValue {
    fn from(flag: bool) -> Self {
        Self::Flag(flag)
    }
}

impl From<Vec<PermissionGrant>> for PermissionValue {
    fn from(grants: Vec<PermissionGrant>) -> Self {
        Self::Scoped(grants)
    }
}

/// Resolved permissions of one user for one session.
///
/// Keyed by permission name, so a name can never be both a flag and a grant
/// list. Sets are immutable once built; a role change produces a new set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PermissionSet {
    entries: HashMap<String, PermissionValue>,
}

impl PermissionSet {
    /// Create an empty set (denies everything)
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insertion used when assembling a set
    pub fn with(mut self, name: impl Into<String>, value: impl Into<PermissionValue>) -> Self {
        self.entries.insert(name.into(), value.into());
        self
    }

    /// Look up a permission by name
    pub fn get(&self, name: &str) -> Option<&PermissionValue> {
        self.entries.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Permission names in the set
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

impl FromIterator<(String, PermissionValue)> for PermissionSet {
    fn from_iter<I: IntoIterator<Item = (String, PermissionValue)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// Description of the resource being accessed
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessContext {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wing_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub squadron_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pilot_id: Option<String>,
    /// Debrief being accessed, used by the delegation fallback
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub debrief_id: Option<String>,
}

impl AccessContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn wing(mut self, wing_id: impl Into<String>) -> Self {
        self.wing_id = Some(wing_id.into());
        self
    }

    pub fn squadron(mut self, squadron_id: impl Into<String>) -> Self {
        self.squadron_id = Some(squadron_id.into());
        self
    }

    pub fn pilot(mut self, pilot_id: impl Into<String>) -> Self {
        self.pilot_id = Some(pilot_id.into());
        self
    }

    pub fn debrief(mut self, debrief_id: impl Into<String>) -> Self {
        self.debrief_id = Some(debrief_id.into());
        self
    }
}

/// Explicit per-debrief edit delegation to one pilot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DelegationRecord {
    pub debrief_id: String,
    pub delegated_to_pilot_id: String,
    pub revoked: bool,
}

/// Lifecycle state of a mission debrief. `Finalized` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DebriefStatus {
    Draft,
    Finalized,
}

impl DebriefStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Finalized => "finalized",
        }
    }

    /// Parse the stored representation; unknown strings yield `None`
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "draft" => Some(Self::Draft),
            "finalized" => Some(Self::Finalized),
            _ => None,
        }
    }
}

/// Current state of a debrief together with its owning unit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DebriefRecord {
    pub debrief_id: String,
    pub status: DebriefStatus,
    pub wing_id: Option<String>,
    pub squadron_id: Option<String>,
}

impl DebriefRecord {
    /// Access context describing this debrief for a given pilot
    pub fn access_context(&self, pilot_id: Option<&str>) -> AccessContext {
        AccessContext {
            wing_id: self.wing_id.clone(),
            squadron_id: self.squadron_id.clone(),
            pilot_id: pilot_id.map(str::to_string),
            debrief_id: Some(self.debrief_id.clone()),
        }
    }
}
