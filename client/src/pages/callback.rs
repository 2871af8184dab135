//! OAuth return page — consumes the one-time bearer token.
//!
//! SYSTEM CONTEXT
//! ==============
//! The provider redirects back here with `?token=`. The token is
//! persisted, the session re-fetched, and history replaced so
//! back-navigation cannot return to the token URL. The app shell's
//! bootstrap knows the same trick, so a token landing on any route is
//! still consumed.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::session::SessionState;

#[component]
pub fn CallbackPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    let started = RwSignal::new(false);
    Effect::new(move || {
        if started.get() {
            return;
        }
        started.set(true);

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                if let Some(token) = crate::util::auth::consume_callback_token() {
                    crate::util::auth::store_bearer(&token);
                }
                crate::state::session::load(session).await;
                let options = leptos_router::NavigateOptions { replace: true, ..leptos_router::NavigateOptions::default() };
                match session.get_untracked().role() {
                    Some(role) => navigate(role.dashboard_path(), options),
                    None => navigate(gate::LOGIN_PATH, options),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&navigate, session);
        }
    });

    view! {
        <div class="callback-page">
            <p>"Signing you in..."</p>
        </div>
    }
}
