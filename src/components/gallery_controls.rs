//! Gallery Controls Component
//!
//! Status filter and sort selects above the project grid.

use leptos::prelude::*;
use showcase_core::gallery::{SortOrder, StatusFilter, SORT_OPTIONS, STATUS_OPTIONS};

use crate::store::{store_update_query, use_gallery_store, GalleryStateStoreFields};

#[component]
pub fn GalleryControls() -> impl IntoView {
    let store = use_gallery_store();

    let on_status = move |ev: web_sys::Event| {
        let value = event_target_value(&ev);
        match StatusFilter::parse(&value) {
            Some(status) => store_update_query(&store, |q| q.set_status(status)),
            None => log::warn!("Unknown status filter '{}'", value),
        }
    };

    let on_sort = move |ev: web_sys::Event| {
        let value = event_target_value(&ev);
        match SortOrder::parse(&value) {
            Some(sort) => store_update_query(&store, |q| q.set_sort(sort)),
            None => log::warn!("Unknown sort option '{}'", value),
        }
    };

    view! {
        <div class="gallery-controls">
            <label class="control">
                <span class="control-label">"FILTER:"</span>
                <select
                    prop:value=move || store.query().get().status.as_str()
                    on:change=on_status
                >
                    {STATUS_OPTIONS.iter().map(|(value, label)| view! {
                        <option value=*value>{*label}</option>
                    }).collect_view()}
                </select>
            </label>
            <label class="control">
                <span class="control-label">"SORT:"</span>
                <select
                    prop:value=move || store.query().get().sort.as_value()
                    on:change=on_sort
                >
                    {SORT_OPTIONS.iter().map(|(value, label)| view! {
                        <option value=*value>{*label}</option>
                    }).collect_view()}
                </select>
            </label>
        </div>
    }
}
