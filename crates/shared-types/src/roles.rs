//! Organization roles and the acting user, as delivered by the backend

use serde::{Deserialize, Serialize};

/// One entry of an organization's `availableRoles`, lowest privilege first
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrgRole {
    pub id: String,
    #[serde(default)]
    pub name: String,
}

impl OrgRole {
    pub fn new(id: &str, name: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
        }
    }
}

/// The user whose access is being checked
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Actor {
    /// Role held in the current organization, if any
    #[serde(default)]
    pub current_role: Option<String>,
    /// Active superuser session
    #[serde(default)]
    pub is_superuser: bool,
}

impl Actor {
    pub fn with_role(role: &str) -> Self {
        Self {
            current_role: Some(role.to_string()),
            is_superuser: false,
        }
    }

    pub fn superuser() -> Self {
        Self {
            current_role: None,
            is_superuser: true,
        }
    }

    /// Treats an empty role string the same as no role
    pub fn role(&self) -> Option<&str> {
        self.current_role.as_deref().filter(|r| !r.is_empty())
    }
}

/// Argument handed to dynamic role-gated content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleRenderProps {
    pub has_role: bool,
}
