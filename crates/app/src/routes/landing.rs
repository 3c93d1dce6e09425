use crate::auth::use_auth;
use crate::routes::{dashboard_for, Route};
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdAward, LdCalendarDays, LdUsers};
use dioxus_free_icons::Icon;

/// Public landing page.
#[component]
pub fn Landing() -> Element {
    let auth = use_auth();

    // An active session turns the call to action into a shortcut home
    let (cta_target, cta_label) = if auth.is_authenticated() {
        (dashboard_for(auth.current_role()), "Open Dashboard")
    } else {
        (Route::Login {}, "Sign In")
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./landing.css") }

        div { class: "landing-page",
            header { class: "landing-hero",
                Icon::<LdCalendarDays> { icon: LdCalendarDays, width: 48, height: 48 }
                h1 { class: "landing-title", "Eventra" }
                p { class: "landing-tagline",
                    "Organize events, register participants and issue certificates in one place."
                }
                div { class: "landing-cta",
                    Link { to: cta_target,
                        span { class: "button", "{cta_label}" }
                    }
                }
            }

            section { class: "landing-features",
                div { class: "landing-feature",
                    Icon::<LdCalendarDays> { icon: LdCalendarDays, width: 28, height: 28 }
                    h2 { "Events" }
                    p { "Plan sessions, publish schedules and keep every edition in order." }
                }
                div { class: "landing-feature",
                    Icon::<LdUsers> { icon: LdUsers, width: 28, height: 28 }
                    h2 { "Registrations" }
                    p { "Participants sign up online and track their own attendance." }
                }
                div { class: "landing-feature",
                    Icon::<LdAward> { icon: LdAward, width: 28, height: 28 }
                    h2 { "Certificates" }
                    p { "Issue verifiable certificates as soon as an event wraps up." }
                }
            }
        }
    }
}
