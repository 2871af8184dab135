//! Public landing page.

use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-page">
            <div class="home-page__hero">
                <h1>"MedMatch"</h1>
                <p class="home-page__tagline">
                    "Where healthcare talent meets the clinics that need it."
                </p>
                <div class="home-page__actions">
                    <a class="home-page__cta" href="/auth/login">
                        "Sign in"
                    </a>
                    <a class="home-page__cta home-page__cta--primary" href="/auth/signup">
                        "Create an account"
                    </a>
                </div>
            </div>
        </div>
    }
}
