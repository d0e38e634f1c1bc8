//! Role-based access checks for organization members
//!
//! Roles form an ordered ladder; holding a role grants everything below it.

pub mod gate;
pub mod ladder;

pub use gate::{has_required_role, RenderMode, RoleGate};
pub use ladder::RoleLadder;
