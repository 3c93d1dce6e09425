use dioxus::prelude::*;
use shared_types::Role;

use crate::components::{Card, CardContent, CardHeader};
use crate::guards::RoleGuard;

#[component]
pub fn ParticipantDashboard() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./dashboard.css") }

        RoleGuard { allow: vec![Role::Participant],
            div { class: "dashboard-page",
                h2 { class: "dashboard-title", "My Registrations" }

                div { class: "dashboard-stats-grid",
                    Card {
                        CardHeader { "Registered" }
                        CardContent {
                            span { class: "stat-value", "\u{2014}" }
                            span { class: "stat-label", "Upcoming Events" }
                        }
                    }
                    Card {
                        CardHeader { "Attended" }
                        CardContent {
                            span { class: "stat-value", "\u{2014}" }
                            span { class: "stat-label", "Past Events" }
                        }
                    }
                    Card {
                        CardHeader { "Certificates" }
                        CardContent {
                            span { class: "stat-value", "\u{2014}" }
                            span { class: "stat-label", "Earned" }
                        }
                    }
                }

                div { class: "dashboard-quick-actions",
                    h3 { "Quick Actions" }
                    div { class: "quick-action-grid",
                        button { class: "quick-action-btn", "Browse Events" }
                        button { class: "quick-action-btn", "Download Certificates" }
                    }
                }
            }
        }
    }
}
