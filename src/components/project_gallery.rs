//! Project Gallery Component
//!
//! Controls, the current page of cards and the pager.

use leptos::prelude::*;

use super::{GalleryControls, Pagination, ProjectCard};
use crate::store::{page_memo, store_set_vibe_score, use_gallery_store, GalleryStateStoreFields};

#[component]
pub fn ProjectGallery() -> impl IntoView {
    let store = use_gallery_store();
    let page = page_memo(store);

    let on_vibe_score = Callback::new(move |(id, score): (String, i64)| {
        store_set_vibe_score(&store, id, score);
    });

    view! {
        <section class="gallery">
            {move || store.load_error().get().map(|err| view! {
                <div class="banner error">"Failed to load projects: " {err}</div>
            })}
            <GalleryControls />
            <p class="gallery-count">
                {move || page.with(|p| format!("{} PROJECTS", p.matching))}
            </p>
            <Show
                when=move || page.with(|p| !p.cards.is_empty())
                fallback=|| view! { <p class="gallery-empty">"No projects match this filter."</p> }
            >
                <div class="project-grid">
                    <For
                        each=move || page.get().cards
                        key=|(_, project)| project.id.clone()
                        children=move |(_, project)| {
                            // Cards are keyed by id, so the ordinal follows re-sorts reactively
                            let id = project.id.clone();
                            let ordinal = Signal::derive(move || {
                                page.with(|p| {
                                    p.cards
                                        .iter()
                                        .find(|(_, card)| card.id == id)
                                        .map(|(ordinal, _)| ordinal.clone())
                                        .unwrap_or_default()
                                })
                            });
                            view! { <ProjectCard project=project ordinal=ordinal on_vibe_score=on_vibe_score /> }
                        }
                    />
                </div>
            </Show>
            <Pagination page=page />
        </section>
    }
}
