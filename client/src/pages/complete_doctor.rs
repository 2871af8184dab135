//! Doctor profile-completion page.
//!
//! SYSTEM CONTEXT
//! ==============
//! The edge guard parks freshly signed-up candidates here until a profile
//! record exists; on success we follow `?next=` back to wherever they
//! were headed, defaulting to the dashboard.

#[cfg(test)]
#[path = "complete_doctor_test.rs"]
mod tests;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::net::types::DoctorProfileDraft;

/// Trim and require every profile field.
fn validate_doctor_profile(specialty: &str, registration: &str, city: &str) -> Result<DoctorProfileDraft, &'static str> {
    let specialty = specialty.trim().to_owned();
    let registration_number = registration.trim().to_owned();
    let city = city.trim().to_owned();
    if specialty.is_empty() || registration_number.is_empty() || city.is_empty() {
        return Err("Fill in specialty, registration number and city.");
    }
    Ok(DoctorProfileDraft { specialty, registration_number, city })
}

#[component]
pub fn CompleteDoctorProfilePage() -> impl IntoView {
    let specialty = RwSignal::new(String::new());
    let registration = RwSignal::new(String::new());
    let city = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let draft = match validate_doctor_profile(&specialty.get(), &registration.get(), &city.get()) {
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
                match crate::net::api::create_doctor_profile(&draft).await {
                    Ok(()) => {
                        let target = crate::util::auth::continue_target(gate::Role::Doctor);
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
                <p class="complete-card__subtitle">"Tell employers who you are"</p>
                <form class="complete-form" on:submit=on_submit>
                    <input
                        class="complete-input"
                        type="text"
                        placeholder="Specialty (e.g. cardiology)"
                        prop:value=move || specialty.get()
                        on:input=move |ev| specialty.set(event_target_value(&ev))
                    />
                    <input
                        class="complete-input"
                        type="text"
                        placeholder="Registration number"
                        prop:value=move || registration.get()
                        on:input=move |ev| registration.set(event_target_value(&ev))
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
