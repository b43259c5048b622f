//! Permission set construction from role assignments
//!
//! Roles grant permissions at a scope *level* ("own squadron", "own wing").
//! The builder resolves those levels against the user's pilot assignment into
//! concrete grants.

use crate::utils::error::{ReadyroomError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

use super::types::{PermissionGrant, PermissionSet, PermissionValue};

/// Scope level at which a role grants a permission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScopeLevel {
    /// Plain boolean permission, no scope
    Flag,
    Global,
    OwnWing,
    OwnSquadron,
    /// Delegation-only access for the user's own pilot
    Flight,
}

impl ScopeLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Flag => "flag",
            Self::Global => "global",
            Self::OwnWing => "own_wing",
            Self::OwnSquadron => "own_squadron",
            Self::Flight => "flight",
        }
    }
}

impl fmt::Display for ScopeLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScopeLevel {
    type Err = ReadyroomError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "flag" => Ok(Self::Flag),
            "global" => Ok(Self::Global),
            "own_wing" => Ok(Self::OwnWing),
            "own_squadron" => Ok(Self::OwnSquadron),
            "flight" => Ok(Self::Flight),
            other => Err(ReadyroomError::validation(format!(
                "Unknown scope level: {}",
                other
            ))),
        }
    }
}

/// Where a user sits in the org chart
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PilotAssignment {
    pub user_id: String,
    pub pilot_id: Option<String>,
    pub wing_id: Option<String>,
    pub squadron_id: Option<String>,
}

/// One permission granted by one role
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RolePermission {
    pub role: String,
    pub permission: String,
    pub scope: ScopeLevel,
}

/// Accumulates role permissions into a [`PermissionSet`]
#[derive(Debug)]
pub struct PermissionSetBuilder<'a> {
    assignment: &'a PilotAssignment,
    flags: HashMap<String, bool>,
    scoped: HashMap<String, Vec<PermissionGrant>>,
}

impl<'a> PermissionSetBuilder<'a> {
    pub fn new(assignment: &'a PilotAssignment) -> Self {
        Self {
            assignment,
            flags: HashMap::new(),
            scoped: HashMap::new(),
        }
    }

    /// Add one role permission row
    pub fn add(&mut self, row: &RolePermission) -> &mut Self {
        let grant = match row.scope {
            ScopeLevel::Flag => {
                self.flags.insert(row.permission.clone(), true);
                return self;
            }
            ScopeLevel::Global => Some(PermissionGrant::Global),
            ScopeLevel::OwnWing => self.assignment.wing_id.clone().map(PermissionGrant::wing),
            ScopeLevel::OwnSquadron => self
                .assignment
                .squadron_id
                .clone()
                .map(PermissionGrant::squadron),
            ScopeLevel::Flight => self.assignment.pilot_id.clone().map(PermissionGrant::flight),
        };

        let grants = self.scoped.entry(row.permission.clone()).or_default();
        match grant {
            Some(grant) if !grants.contains(&grant) => grants.push(grant),
            Some(_) => {}
            None => debug!(
                "User {} has no {} for {} grant of {}",
                self.assignment.user_id,
                match row.scope {
                    ScopeLevel::OwnWing => "wing",
                    ScopeLevel::OwnSquadron => "squadron",
                    _ => "pilot",
                },
                row.scope,
                row.permission
            ),
        }
        self
    }

    pub fn extend<'r, I>(&mut self, rows: I) -> &mut Self
    where
        I: IntoIterator<Item = &'r RolePermission>,
    {
        for row in rows {
            self.add(row);
        }
        self
    }

    /// Finish the set.
    ///
    /// A permission that received both flag and scoped rows cannot be
    /// represented and is reported as malformed grant data.
    pub fn build(self) -> Result<PermissionSet> {
        if let Some(name) = self.flags.keys().find(|name| self.scoped.contains_key(*name)) {
            return Err(ReadyroomError::grant_lookup(format!(
                "Permission {} is granted both as a flag and with a scope",
                name
            )));
        }

        let set: PermissionSet = self
            .flags
            .into_iter()
            .map(|(name, flag)| (name, PermissionValue::Flag(flag)))
            .chain(
                self.scoped
                    .into_iter()
                    .map(|(name, grants)| (name, PermissionValue::Scoped(grants))),
            )
            .collect();

        debug!(
            "Built permission set with {} entries for user {}",
            set.len(),
            self.assignment.user_id
        );
        Ok(set)
    }
}
