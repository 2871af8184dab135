//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
    hooks::use_navigate,
};

use crate::pages::{
    callback::CallbackPage, complete_doctor::CompleteDoctorProfilePage,
    complete_employer::CompleteEmployerProfilePage, dashboard_candidate::CandidateDashboardPage,
    dashboard_employer::EmployerDashboardPage, home::HomePage, jobs::JobsPage, login::LoginPage,
    signup::SignupPage,
};
use crate::state::session::SessionState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session context and sets up client-side routing. The
/// session container lives here, at the shell root, so every page reads
/// one source of truth for the tab's lifetime.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::default());
    provide_context(session);

    view! {
        <Stylesheet id="leptos" href="/pkg/medmatch.css"/>
        <Title text="MedMatch"/>

        <Router>
            <SessionBoundary/>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=(StaticSegment("auth"), StaticSegment("login")) view=LoginPage/>
                <Route path=(StaticSegment("auth"), StaticSegment("signup")) view=SignupPage/>
                <Route path=(StaticSegment("auth"), StaticSegment("callback")) view=CallbackPage/>
                <Route path=(StaticSegment("dashboard"), StaticSegment("candidate")) view=CandidateDashboardPage/>
                <Route path=(StaticSegment("dashboard"), StaticSegment("employer")) view=EmployerDashboardPage/>
                <Route
                    path=(StaticSegment("profile"), StaticSegment("doctor"), StaticSegment("complete"))
                    view=CompleteDoctorProfilePage
                />
                <Route
                    path=(StaticSegment("profile"), StaticSegment("employer"), StaticSegment("complete"))
                    view=CompleteEmployerProfilePage
                />
                <Route path=StaticSegment("jobs") view=JobsPage/>
            </Routes>
        </Router>
    }
}

/// Invisible boundary that bootstraps the session once per tab and
/// installs the passive route guard. Rendered inside the router so
/// navigation is available.
#[component]
fn SessionBoundary() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    crate::util::auth::install_route_guard(session, navigate.clone());

    let bootstrapped = RwSignal::new(false);
    Effect::new(move || {
        if bootstrapped.get() {
            return;
        }
        bootstrapped.set(true);

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                // Post-OAuth entry on any route: consume the one-time token,
                // then land on the role dashboard with history replaced so
                // back-navigation cannot return to the token URL.
                if let Some(token) = crate::util::auth::consume_callback_token() {
                    crate::util::auth::store_bearer(&token);
                    crate::state::session::load(session).await;
                    if let Some(role) = session.get_untracked().role() {
                        navigate(
                            role.dashboard_path(),
                            leptos_router::NavigateOptions { replace: true, ..leptos_router::NavigateOptions::default() },
                        );
                    }
                } else {
                    crate::state::session::load(session).await;
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&navigate, session);
        }
    });
}
