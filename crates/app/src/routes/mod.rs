pub mod dashboard;
pub mod landing;
pub mod login;
pub mod not_found;

use crate::auth::use_auth;
use crate::components::{Badge, BadgeVariant};
use crate::guards::AuthGuard;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdCalendarDays, LdLogOut};
use dioxus_free_icons::Icon;
use shared_types::Role;

use dashboard::{AdminDashboard, OrganizerDashboard, ParticipantDashboard};
use landing::Landing;
use login::Login;
use not_found::NotFound;

/// Application routes.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[route("/")]
    Landing {},
    #[route("/login")]
    Login {},
    #[layout(AuthGuard)]
    #[layout(AppLayout)]
    #[route("/admin")]
    AdminDashboard {},
    #[route("/organizer")]
    OrganizerDashboard {},
    #[route("/participant")]
    ParticipantDashboard {},
    #[end_layout]
    #[end_layout]
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

/// The dashboard a signed-in role lands on. Used for post-login
/// navigation and as the bounce target when a role is turned away.
pub fn dashboard_for(role: Option<Role>) -> Route {
    match role {
        Some(Role::Administrator) => Route::AdminDashboard {},
        Some(Role::Organizer) => Route::OrganizerDashboard {},
        Some(Role::Participant) => Route::ParticipantDashboard {},
        None => Route::Landing {},
    }
}

/// Main app layout with the top navbar.
#[component]
fn AppLayout() -> Element {
    let route: Route = use_route();
    let mut auth = use_auth();

    let email = auth.current_user().map(|u| u.email).unwrap_or_default();

    let page_title = match &route {
        Route::AdminDashboard {} => "Administration",
        Route::OrganizerDashboard {} => "My Events",
        Route::ParticipantDashboard {} => "My Registrations",
        _ => "",
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./layout.css") }

        div { class: "app-shell",
            header { class: "navbar-bar",
                div { class: "navbar-brand",
                    Icon::<LdCalendarDays> { icon: LdCalendarDays, width: 20, height: 20 }
                    span { class: "navbar-brand-name", "Eventra" }
                }

                span { class: "navbar-title", "{page_title}" }

                // Spacer
                div { class: "navbar-spacer" }

                RoleBadge {}

                if !email.is_empty() {
                    span { class: "navbar-email", "{email}" }
                }

                button {
                    class: "navbar-signout",
                    onclick: move |_| {
                        auth.sign_out();
                        navigator().push(Route::Login {});
                    },
                    Icon::<LdLogOut> { icon: LdLogOut, width: 16, height: 16 }
                    "Sign Out"
                }
            }

            // Page content
            div { class: "page-content",
                Outlet::<Route> {}
            }
        }
    }
}

/// Displays the signed-in user's role as a badge in the navbar.
#[component]
fn RoleBadge() -> Element {
    let auth = use_auth();
    let role = use_memo(move || auth.manager.read().current_role());

    let variant = match role() {
        Some(Role::Administrator) => BadgeVariant::Destructive,
        Some(Role::Organizer) => BadgeVariant::Primary,
        Some(Role::Participant) => BadgeVariant::Secondary,
        None => BadgeVariant::Outline,
    };
    let label = role().map(|r| r.label()).unwrap_or("Guest");

    rsx! {
        Badge { variant: variant, "{label}" }
    }
}
