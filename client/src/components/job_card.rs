//! Card rendering one job posting in list views.

use leptos::prelude::*;

use crate::net::types::JobSummary;

#[component]
pub fn JobCard(job: JobSummary) -> impl IntoView {
    let detail_href = format!("/jobs/{}", job.id);
    let subtitle = [job.specialty, job.employer_name]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(" · ");

    view! {
        <li class="job-card">
            <a class="job-card__link" href=detail_href>
                <span class="job-card__title">{job.title}</span>
                {(!subtitle.is_empty()).then(|| view! { <span class="job-card__subtitle">{subtitle.clone()}</span> })}
                <span class="job-card__location">{job.location}</span>
                {job.salary_range.map(|salary| view! { <span class="job-card__salary">{salary}</span> })}
            </a>
        </li>
    }
}
