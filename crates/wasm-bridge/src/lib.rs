//! WASM bridge for dashchart
//! Exposes the tooltip engine and role checks to the dashboard's JavaScript

use std::fmt::Display;

use dashchart_acl::{RoleGate, RoleLadder};
use dashchart_shared::{Actor, DashChartsError, ErrorResponse, OrgRole};
use wasm_bindgen::prelude::*;

pub mod dom;
pub mod engine;

pub use engine::TooltipEngine;

/// Initialize the WASM module
#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Info);
    }
    log::info!("dashchart WASM bridge initialized");
}

/// Role check for an organization's `availableRoles` and the current actor.
/// Anything missing or malformed denies access.
#[wasm_bindgen(js_name = hasRequiredRole)]
pub fn has_required_role(available_roles: JsValue, required_role: &str, actor: JsValue) -> bool {
    let roles: Option<Vec<OrgRole>> = serde_wasm_bindgen::from_value(available_roles)
        .map_err(|e| log::warn!("Unreadable availableRoles: {e}"))
        .ok()
        .flatten();
    let actor: Option<Actor> = serde_wasm_bindgen::from_value(actor)
        .map_err(|e| log::warn!("Unreadable actor: {e}"))
        .ok()
        .flatten();

    check_role(roles.as_deref(), required_role, actor.as_ref())
}

fn check_role(roles: Option<&[OrgRole]>, required_role: &str, actor: Option<&Actor>) -> bool {
    if actor.is_some_and(|actor| actor.is_superuser) {
        return true;
    }

    let Some(roles) = roles else {
        return false;
    };
    match RoleLadder::from_org_roles(roles) {
        Ok(ladder) => RoleGate::new(ladder, required_role).has_role(actor),
        Err(err) => {
            log::warn!("Rejecting role check: {err}");
            false
        }
    }
}

fn error_json(component: &str, operation: &str, err: impl Display) -> String {
    ErrorResponse::new(DashChartsError::JsInterop {
        message: err.to_string(),
    })
    .with_context(component, operation)
    .to_json()
}

pub(crate) fn to_js_error(component: &str, operation: &str, err: impl Display) -> JsValue {
    JsValue::from_str(&error_json(component, operation, err))
}
