use crate::auth::use_auth;
use crate::components::{
    Card, CardContent, CardDescription, CardFooter, CardHeader, CardTitle, Input,
};
use crate::routes::{dashboard_for, Route};
use dioxus::prelude::*;
use shared_types::{LoginRequest, Role};
use std::collections::HashMap;

/// Login page with email/password credentials.
/// Signed-in visitors are sent straight to their dashboard; the login
/// surface is never shown over an active session.
#[component]
pub fn Login() -> Element {
    let mut auth = use_auth();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut remember_me = use_signal(|| false);
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut field_errors = use_signal(HashMap::<String, String>::new);
    let mut loading = use_signal(|| false);

    // Redirect to the role dashboard if already authenticated
    if auth.is_authenticated() {
        navigator().push(dashboard_for(auth.current_role()));
    }

    let handle_login = move |evt: FormEvent| async move {
        evt.prevent_default();
        loading.set(true);
        error_msg.set(None);
        field_errors.set(HashMap::new());

        let request = LoginRequest {
            email: email(),
            password: password(),
            remember_me: remember_me(),
        };

        let form = request.form_errors();
        if !form.is_empty() {
            field_errors.set(form);
            loading.set(false);
            return;
        }

        match auth.sign_in(request).await {
            Ok(user) => {
                navigator().push(dashboard_for(Role::parse(user.role_name())));
            }
            Err(err) => {
                // A superseded attempt has nothing to report; the
                // attempt that replaced it speaks for the form.
                let msg = err.friendly_message();
                if !msg.is_empty() {
                    error_msg.set(Some(msg));
                }
            }
        }
        loading.set(false);
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./login.css") }

        div { class: "auth-page",
            Card { class: "auth-card",

                CardHeader {
                    CardTitle { "Sign In" }
                    CardDescription { "Enter your credentials to access your account" }
                }

                CardContent {
                    if let Some(err) = error_msg() {
                        div { class: "auth-error", "{err}" }
                    }

                    form { onsubmit: handle_login,
                        div { class: "auth-field",
                            Input {
                                input_type: "email",
                                id: "email",
                                label: "Email",
                                placeholder: "user@example.com",
                                value: email(),
                                on_input: move |e: FormEvent| email.set(e.value()),
                            }
                            if let Some(err) = field_errors().get("email") {
                                div { class: "auth-field-error", "{err}" }
                            }
                        }
                        div { class: "auth-field",
                            Input {
                                input_type: "password",
                                id: "password",
                                label: "Password",
                                placeholder: "Enter your password",
                                value: password(),
                                on_input: move |e: FormEvent| password.set(e.value()),
                            }
                            if let Some(err) = field_errors().get("password") {
                                div { class: "auth-field-error", "{err}" }
                            }
                        }
                        label { class: "auth-remember",
                            input {
                                r#type: "checkbox",
                                checked: remember_me(),
                                onchange: move |e: FormEvent| remember_me.set(e.checked()),
                            }
                            "Keep me signed in"
                        }
                        button {
                            r#type: "submit",
                            class: "auth-submit button",
                            disabled: loading(),
                            if loading() { "Signing in..." } else { "Sign In" }
                        }
                    }
                }

                CardFooter {
                    p { class: "auth-link",
                        Link { to: Route::Landing {}, "Back to events" }
                    }
                }
            }
        }
    }
}
