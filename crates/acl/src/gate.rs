//! Role checks and role-gated content

use std::fmt;

use dashchart_shared::{Actor, RoleRenderProps};

use crate::ladder::RoleLadder;

/// Does `actor` hold `required_role` or anything above it?
///
/// Superusers always pass. An actor without a role, or a role (required or
/// held) missing from the ladder, never passes.
pub fn has_required_role(ladder: &RoleLadder, required_role: &str, actor: &Actor) -> bool {
    if actor.is_superuser {
        return true;
    }

    let Some(current_role) = actor.role() else {
        return false;
    };

    match (ladder.position(required_role), ladder.position(current_role)) {
        (Some(required), Some(current)) => current >= required,
        _ => {
            log::debug!(
                "Role check denied: '{current_role}' or '{required_role}' not in ladder"
            );
            false
        }
    }
}

/// Content guarded by a role check
pub enum RenderMode<T> {
    /// Shown only when the role is held
    Static(T),
    /// Always called, told whether the role is held
    Dynamic(Box<dyn Fn(RoleRenderProps) -> T>),
}

impl<T> RenderMode<T> {
    pub fn dynamic(render: impl Fn(RoleRenderProps) -> T + 'static) -> Self {
        RenderMode::Dynamic(Box::new(render))
    }

    pub fn resolve(self, has_role: bool) -> Option<T> {
        match self {
            RenderMode::Static(content) => has_role.then_some(content),
            RenderMode::Dynamic(render) => Some(render(RoleRenderProps { has_role })),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for RenderMode<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderMode::Static(content) => f.debug_tuple("Static").field(content).finish(),
            RenderMode::Dynamic(_) => f.write_str("Dynamic(..)"),
        }
    }
}

/// A minimum role checked against one organization's ladder
#[derive(Debug, Clone)]
pub struct RoleGate {
    ladder: RoleLadder,
    required_role: String,
}

impl RoleGate {
    pub fn new(ladder: RoleLadder, required_role: &str) -> Self {
        Self {
            ladder,
            required_role: required_role.to_string(),
        }
    }

    pub fn required_role(&self) -> &str {
        &self.required_role
    }

    /// No signed-in user means no access
    pub fn has_role(&self, actor: Option<&Actor>) -> bool {
        actor.is_some_and(|actor| has_required_role(&self.ladder, &self.required_role, actor))
    }

    pub fn render<T>(&self, actor: Option<&Actor>, mode: RenderMode<T>) -> Option<T> {
        mode.resolve(self.has_role(actor))
    }
}
