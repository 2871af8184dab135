//! Employer profile-completion page.

#[cfg(test)]
#[path = "complete_employer_test.rs"]
mod tests;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::net::types::EmployerProfileDraft;

/// Trim and require every profile field.
fn validate_employer_profile(organization: &str, city: &str) -> Result<EmployerProfileDraft, &'static str> {
    let organization_name = organization.trim().to_owned();
    let city = city.trim().to_owned();
    if organization_name.is_empty() || city.is_empty() {
        return Err("Fill in organization name and city.");
    }
    Ok(EmployerProfileDraft { organization_name, city })
}

#[component]
pub fn CompleteEmployerProfilePage() -> impl IntoView {
    let organization = RwSignal::new(String::new());
    let city = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let draft = match validate_employer_profile(&organization.get(), &city.get()) {
            Ok(draft) => draft,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Saving your profile...".to_owned());

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::create_employer_profile(&draft).await {
                    Ok(()) => {
                        let target = crate::util::auth::continue_target(gate::Role::Employer);
                        navigate(&target, leptos_router::NavigateOptions::default());
                    }
                    Err(e) => {
                        info.set(e);
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&navigate, &draft);
        }
    };

    view! {
        <div class="complete-page">
            <div class="complete-card">
                <h1>"Almost there"</h1>
                <p class="complete-card__subtitle">"Tell candidates about your organization"</p>
                <form class="complete-form" on:submit=on_submit>
                    <input
                        class="complete-input"
                        type="text"
                        placeholder="Organization name"
                        prop:value=move || organization.get()
                        on:input=move |ev| organization.set(event_target_value(&ev))
                    />
                    <input
                        class="complete-input"
                        type="text"
                        placeholder="City"
                        prop:value=move || city.get()
                        on:input=move |ev| city.set(event_target_value(&ev))
                    />
                    <button class="complete-button" type="submit" disabled=move || busy.get()>
                        "Save profile"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="complete-message">{move || info.get()}</p>
                </Show>
            </div>
        </div>
    }
}
