//! Project Card Component

use leptos::prelude::*;
use showcase_core::Project;

use super::VotingWidget;

#[component]
pub fn ProjectCard(
    project: Project,
    /// Two-digit position in the filtered list
    #[prop(into)] ordinal: Signal<String>,
    on_vibe_score: Callback<(String, i64)>,
) -> impl IntoView {
    let status_class = format!("status-badge {}", project.status.as_str());
    let badge = format!("{} {}", project.status.symbol(), project.status.label());
    let added = project.date_added.format("%Y-%m-%d").to_string();

    let thumbnail = if project.has_thumbnail() {
        view! { <img class="thumbnail" src=project.image_url.clone() alt=project.title.clone() loading="lazy" /> }
            .into_any()
    } else {
        view! { <div class="thumbnail initials">{project.initials()}</div> }.into_any()
    };

    let creator = match project.creator_link() {
        Some(url) => view! {
            <a href=url.to_string() target="_blank" rel="noopener noreferrer">{project.creator.clone()}</a>
        }
        .into_any(),
        None => view! { <span>{project.creator.clone()}</span> }.into_any(),
    };

    let repo = (!project.repo_url.is_empty()).then(|| view! {
        <a class="card-link" href=project.repo_url.clone() target="_blank" rel="noopener noreferrer">"[CODE]"</a>
    });

    view! {
        <article class="project-card">
            <header class="card-header">
                <span class="card-ordinal">{move || ordinal.get()}</span>
                <span class=status_class>{badge}</span>
            </header>
            {thumbnail}
            <h3 class="card-title">{project.title.clone()}</h3>
            <p class="card-description">{project.description.clone()}</p>
            <div class="card-meta">
                <span class="card-creator">"by " {creator}</span>
                <span class="card-date">{added}</span>
            </div>
            <div class="card-links">
                <a class="card-link" href=project.project_url.clone() target="_blank" rel="noopener noreferrer">"[LAUNCH]"</a>
                {repo}
            </div>
            <VotingWidget project_id=project.id.clone() on_vibe_score=on_vibe_score />
        </article>
    }
}
