//! Employer dashboard — authenticated landing for hiring organizations.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::session::SessionState;

#[component]
pub fn EmployerDashboardPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    let identity = move || {
        session
            .get()
            .principal
            .map(|p| p.email)
            .unwrap_or_default()
    };

    let on_sign_out = Callback::new(move |_| {
        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                crate::state::session::sign_out(session).await;
                navigate(gate::LOGIN_PATH, leptos_router::NavigateOptions::default());
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&navigate, session);
        }
    });

    view! {
        <Show
            when=move || session.get().is_authenticated()
            fallback=move || {
                view! {
                    <div class="dashboard-page">
                        <p>{move || if session.get().loading { "Loading..." } else { "Redirecting to login..." }}</p>
                    </div>
                }
            }
        >
            <div class="dashboard-page">
                <header class="dashboard-page__header">
                    <span class="dashboard-page__title">"Hiring overview"</span>
                    <span class="dashboard-page__identity">{identity}</span>
                    <button class="dashboard-page__signout" on:click=move |_| on_sign_out.run(())>
                        "Sign out"
                    </button>
                </header>
                <nav class="dashboard-page__nav">
                    <a href="/jobs">"Your postings"</a>
                    <a href="/applications">"Incoming applications"</a>
                </nav>
                <p class="dashboard-page__hint">
                    "Post a new opening to start receiving applications."
                </p>
            </div>
        </Show>
    }
}
