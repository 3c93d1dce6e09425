use dioxus::prelude::*;
use shared_types::Role;

use crate::auth::use_auth;
use crate::components::{Card, CardContent, CardHeader};
use crate::guards::RoleGuard;

#[component]
pub fn OrganizerDashboard() -> Element {
    let auth = use_auth();
    let email = auth.current_user().map(|u| u.email).unwrap_or_default();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./dashboard.css") }

        RoleGuard { allow: vec![Role::Organizer],
            div { class: "dashboard-page",
                h2 { class: "dashboard-title", "My Events" }
                p { class: "dashboard-greeting", "Signed in as {email}" }

                div { class: "dashboard-stats-grid",
                    Card {
                        CardHeader { "Upcoming" }
                        CardContent {
                            span { class: "stat-value", "\u{2014}" }
                            span { class: "stat-label", "Scheduled Events" }
                        }
                    }
                    Card {
                        CardHeader { "Registrations" }
                        CardContent {
                            span { class: "stat-value", "\u{2014}" }
                            span { class: "stat-label", "Across All Events" }
                        }
                    }
                    Card {
                        CardHeader { "Certificates" }
                        CardContent {
                            span { class: "stat-value", "\u{2014}" }
                            span { class: "stat-label", "Ready to Issue" }
                        }
                    }
                }

                div { class: "dashboard-quick-actions",
                    h3 { "Quick Actions" }
                    div { class: "quick-action-grid",
                        button { class: "quick-action-btn", "Create Event" }
                        button { class: "quick-action-btn", "Take Attendance" }
                        button { class: "quick-action-btn", "Issue Certificates" }
                    }
                }
            }
        }
    }
}
