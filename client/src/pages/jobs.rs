//! Job-board page listing open postings.

use leptos::prelude::*;

use crate::components::job_card::JobCard;
use crate::net::types::JobSummary;
use crate::state::session::SessionState;

#[component]
pub fn JobsPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let jobs = RwSignal::new(Vec::<JobSummary>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);

    let fetched = RwSignal::new(false);
    Effect::new(move || {
        if fetched.get() {
            return;
        }
        fetched.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_jobs().await {
                Ok(items) => jobs.set(items),
                Err(e) => error.set(Some(e)),
            }
            loading.set(false);
        });
    });

    view! {
        <Show
            when=move || session.get().is_authenticated()
            fallback=move || {
                view! {
                    <div class="jobs-page">
                        <p>{move || if session.get().loading { "Loading..." } else { "Redirecting to login..." }}</p>
                    </div>
                }
            }
        >
            <div class="jobs-page">
                <header class="jobs-page__header">
                    <h1>"Open positions"</h1>
                </header>
                <Show when=move || error.get().is_some()>
                    <p class="jobs-page__error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <Show when=move || loading.get()>
                    <p>"Loading positions..."</p>
                </Show>
                <Show when=move || !loading.get() && error.get().is_none() && jobs.get().is_empty()>
                    <p class="jobs-page__empty">"No open positions right now. Check back soon."</p>
                </Show>
                <ul class="jobs-page__list">
                    <For
                        each=move || jobs.get()
                        key=|job| job.id.clone()
                        children=move |job| {
                            view! { <JobCard job=job/> }
                        }
                    />
                </ul>
            </div>
        </Show>
    }
}
