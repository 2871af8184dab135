//! Signup page — account creation for candidates and employers.

#[cfg(test)]
#[path = "signup_test.rs"]
mod tests;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use gate::Role;

use crate::state::session::SessionState;

/// Map the role `<select>` value to a signup role.
fn parse_role_choice(choice: &str) -> Option<Role> {
    match choice {
        "candidate" => Some(Role::Candidate),
        "employer" => Some(Role::Employer),
        _ => None,
    }
}

/// Trim and require all signup fields, mapping the role choice.
fn validate_signup_input(email: &str, password: &str, choice: &str) -> Result<(String, String, Role), &'static str> {
    let email = email.trim().to_owned();
    if email.is_empty() || password.is_empty() {
        return Err("Enter both email and password.");
    }
    if password.len() < 8 {
        return Err("Password must be at least 8 characters.");
    }
    let role = parse_role_choice(choice).ok_or("Choose whether you are hiring or looking for work.")?;
    Ok((email, password.to_owned(), role))
}

/// Where a fresh account lands: the role's profile-completion form.
fn post_signup_target(role: Role) -> String {
    role.completion_path().unwrap_or_else(|| role.dashboard_path()).to_owned()
}

#[component]
pub fn SignupPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let role_choice = RwSignal::new("candidate".to_owned());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (email_value, password_value, role) =
            match validate_signup_input(&email.get(), &password.get(), &role_choice.get()) {
                Ok(values) => values,
                Err(message) => {
                    info.set(message.to_owned());
                    return;
                }
            };
        busy.set(true);
        info.set("Creating your account...".to_owned());

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::state::session::sign_up(session, &email_value, &password_value, role).await {
                    Ok(role) => {
                        navigate(&post_signup_target(role), leptos_router::NavigateOptions::default());
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
            let _ = (&navigate, &email_value, &password_value, role, session);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"MedMatch"</h1>
                <p class="login-card__subtitle">"Create an account"</p>
                <form class="login-form" on:submit=on_submit>
                    <select
                        class="login-input"
                        prop:value=move || role_choice.get()
                        on:change=move |ev| role_choice.set(event_target_value(&ev))
                    >
                        <option value="candidate">"I am looking for work"</option>
                        <option value="employer">"I am hiring"</option>
                    </select>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password (8+ characters)"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Sign up"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                <p class="login-card__footer">
                    "Already have an account? " <a href="/auth/login">"Sign in"</a>
                </p>
            </div>
        </div>
    }
}
