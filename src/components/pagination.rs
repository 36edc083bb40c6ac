//! Pagination Component

use leptos::prelude::*;

use crate::store::{store_update_query, use_gallery_store, GalleryPage};

/// Prev / page numbers / next, hidden when everything fits on one page
#[component]
pub fn Pagination(page: Memo<GalleryPage>) -> impl IntoView {
    let store = use_gallery_store();
    let total = move || page.with(|p| p.total_pages);

    view! {
        <Show when=move || { total() > 1 }>
            <nav class="pagination">
                <button
                    class="page-btn"
                    disabled=move || !page.with(GalleryPage::has_prev)
                    on:click=move |_| store_update_query(&store, |q| q.prev_page())
                >
                    "◀ PREV"
                </button>
                {move || (1..=total()).map(|n| {
                    let current = page.with(|p| p.page) == n;
                    view! {
                        <button
                            class=if current { "page-btn current" } else { "page-btn" }
                            on:click=move |_| {
                                let total = page.with_untracked(|p| p.total_pages);
                                store_update_query(&store, |q| q.go_to(n, total));
                            }
                        >
                            {format!("{:02}", n)}
                        </button>
                    }
                }).collect_view()}
                <button
                    class="page-btn"
                    disabled=move || !page.with(GalleryPage::has_next)
                    on:click=move |_| {
                        let total = page.with_untracked(|p| p.total_pages);
                        store_update_query(&store, |q| q.next_page(total));
                    }
                >
                    "NEXT ▶"
                </button>
                <span class="page-info">
                    {move || page.with(|p| format!("PAGE {} / {} · {} MORE", p.page, p.total_pages, p.remaining))}
                </span>
            </nav>
        </Show>
    }
}
