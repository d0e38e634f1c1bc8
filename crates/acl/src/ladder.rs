//! Ordered role ladders

use std::collections::HashSet;

use dashchart_shared::{DashChartsError, DashChartsResult, OrgRole};
use serde::{Deserialize, Serialize};

/// Roles from lowest to highest privilege; list position is the privilege level
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct RoleLadder {
    roles: Vec<String>,
}

impl RoleLadder {
    /// Build a ladder, rejecting repeated role ids
    pub fn new<I, S>(roles: I) -> DashChartsResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let roles: Vec<String> = roles.into_iter().map(Into::into).collect();

        let mut seen = HashSet::with_capacity(roles.len());
        for role in &roles {
            if !seen.insert(role.as_str()) {
                return Err(DashChartsError::DuplicateRole { role: role.clone() });
            }
        }

        Ok(Self { roles })
    }

    /// Ladder from an organization's `availableRoles`
    pub fn from_org_roles(roles: &[OrgRole]) -> DashChartsResult<Self> {
        Self::new(roles.iter().map(|r| r.id.clone()))
    }

    /// Privilege level of `role`, `None` if the ladder does not know it
    pub fn position(&self, role: &str) -> Option<usize> {
        self.roles.iter().position(|r| r == role)
    }

    pub fn contains(&self, role: &str) -> bool {
        self.position(role).is_some()
    }

    pub fn len(&self) -> usize {
        self.roles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.roles.iter().map(String::as_str)
    }
}

impl TryFrom<Vec<String>> for RoleLadder {
    type Error = DashChartsError;

    fn try_from(roles: Vec<String>) -> Result<Self, Self::Error> {
        Self::new(roles)
    }
}

impl From<RoleLadder> for Vec<String> {
    fn from(ladder: RoleLadder) -> Self {
        ladder.roles
    }
}
