use dioxus::prelude::*;
use shared_types::Role;

use crate::components::{Card, CardContent, CardHeader};
use crate::guards::RoleGuard;

/// Administration dashboard, restricted to administrators.
#[component]
pub fn AdminDashboard() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./dashboard.css") }

        RoleGuard { allow: vec![Role::Administrator],
            div { class: "dashboard-page",
                h2 { class: "dashboard-title", "Administration" }

                div { class: "dashboard-stats-grid",
                    Card {
                        CardHeader { "Accounts" }
                        CardContent {
                            span { class: "stat-value", "\u{2014}" }
                            span { class: "stat-label", "Registered Users" }
                        }
                    }
                    Card {
                        CardHeader { "Events" }
                        CardContent {
                            span { class: "stat-value", "\u{2014}" }
                            span { class: "stat-label", "Published" }
                        }
                    }
                    Card {
                        CardHeader { "Certificates" }
                        CardContent {
                            span { class: "stat-value", "\u{2014}" }
                            span { class: "stat-label", "Issued" }
                        }
                    }
                }

                div { class: "dashboard-quick-actions",
                    h3 { "Quick Actions" }
                    div { class: "quick-action-grid",
                        button { class: "quick-action-btn", "Manage Users" }
                        button { class: "quick-action-btn", "Review Events" }
                        button { class: "quick-action-btn", "Platform Settings" }
                    }
                }
            }
        }
    }
}
