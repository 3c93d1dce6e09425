use dioxus::prelude::*;
use session::manager::AuthPhase;

mod auth;
mod components;
mod guards;
mod routes;

use auth::{use_auth, AuthState};
use routes::Route;

const MAIN_CSS: Asset = asset!("/assets/main.css");
const THEME_CSS: Asset = asset!("/assets/theme.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    use_context_provider(AuthState::new);

    let mut auth = use_auth();

    // Restore the persisted session once, after the first frame; the
    // guards show their pending state until then.
    use_effect(move || {
        let pending = matches!(auth.manager.peek().phase(), AuthPhase::Loading);
        if pending {
            auth.restore();
        }
    });

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Link { rel: "stylesheet", href: THEME_CSS }
        Router::<Route> {}
    }
}
