use crate::auth::use_auth;
use crate::routes::{dashboard_for, Route};
use dioxus::prelude::*;
use session::manager::AuthPhase;
use shared_types::Role;

/// What the authentication check decided.
#[derive(Debug, Clone, PartialEq)]
pub enum GateOutcome {
    Pending,
    Allow,
    ToLogin,
}

/// Decide whether a protected route may render for the given phase.
pub fn authentication_gate(phase: &AuthPhase) -> GateOutcome {
    match phase {
        AuthPhase::Loading => GateOutcome::Pending,
        AuthPhase::Authenticated(_) => GateOutcome::Allow,
        AuthPhase::Unauthenticated => GateOutcome::ToLogin,
    }
}

/// What the role check decided. `Bounce` carries the dashboard the
/// signed-in user belongs on.
#[derive(Debug, Clone, PartialEq)]
pub enum RoleOutcome {
    Pending,
    Allow,
    ToLogin,
    Bounce(Route),
}

/// Decide whether a role-restricted surface may render.
///
/// Fails closed: an empty allow list admits no one, and a session whose
/// role is missing from the list bounces to that role's own dashboard.
pub fn authorization_gate(phase: &AuthPhase, allow: &[Role]) -> RoleOutcome {
    let user = match phase {
        AuthPhase::Loading => return RoleOutcome::Pending,
        AuthPhase::Unauthenticated => return RoleOutcome::ToLogin,
        AuthPhase::Authenticated(user) => user,
    };

    let role = Role::parse(user.role_name());
    // An empty allow list admits no one.
    if allow.is_empty() {
        return RoleOutcome::Bounce(dashboard_for(role));
    }
    match role {
        Some(role) if allow.contains(&role) => RoleOutcome::Allow,
        _ => RoleOutcome::Bounce(dashboard_for(role)),
    }
}

/// Auth guard layout — redirects to /login if not authenticated.
#[component]
pub fn AuthGuard() -> Element {
    let auth = use_auth();
    let phase = auth.phase();

    match authentication_gate(&phase) {
        GateOutcome::Allow => rsx! { Outlet::<Route> {} },
        GateOutcome::ToLogin => {
            navigator().push(Route::Login {});
            rsx! {
                div { class: "auth-guard-loading",
                    p { "Redirecting to login..." }
                }
            }
        }
        GateOutcome::Pending => {
            rsx! {
                div { class: "auth-guard-loading",
                    p { "Loading..." }
                }
            }
        }
    }
}

/// Conditionally render a role-restricted surface.
/// Signed-in users outside the allow list land on their own dashboard.
#[component]
pub fn RoleGuard(allow: Vec<Role>, children: Element) -> Element {
    let auth = use_auth();
    let phase = auth.phase();

    match authorization_gate(&phase, &allow) {
        RoleOutcome::Allow => rsx! { {children} },
        RoleOutcome::Bounce(target) => {
            navigator().push(target);
            rsx! {
                div { class: "auth-guard-loading",
                    p { "Redirecting..." }
                }
            }
        }
        RoleOutcome::ToLogin => {
            navigator().push(Route::Login {});
            rsx! {
                div { class: "auth-guard-loading",
                    p { "Redirecting to login..." }
                }
            }
        }
        RoleOutcome::Pending => {
            rsx! {
                div { class: "auth-guard-loading",
                    p { "Loading..." }
                }
            }
        }
    }
}
