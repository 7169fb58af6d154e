//! Menu Grid Component
//!
//! Card grid for a list of dishes. Each entry optionally carries its owning
//! category name (shown as a caption in the filtered results view).

use leptos::prelude::*;

use crate::format::format_price;
use crate::models::MenuItem;
use crate::store::{open_item, use_app_store, AppStateStoreFields};

#[component]
pub fn MenuGrid(entries: Vec<(MenuItem, Option<String>)>) -> impl IntoView {
    view! {
        <div class="menu-grid">
            {entries
                .into_iter()
                .map(|(item, category)| view! { <MenuCard item=item category=category /> })
                .collect_view()}
        </div>
    }
}

#[component]
fn MenuCard(item: MenuItem, category: Option<String>) -> impl IntoView {
    let store = use_app_store();
    let MenuItem { id, name, price, veg, .. } = item;

    view! {
        <button class="menu-card" on:click=move |_| open_item(&store, id.clone())>
            <div class="menu-card-head">
                <div>
                    <div class="menu-card-name">{name}</div>
                    {category.map(|name| view! { <div class="menu-card-category">{name}</div> })}
                </div>
                <div class="menu-card-price">
                    {move || format_price(price, store.lang().get())}
                </div>
            </div>
            <div class="menu-card-tags">
                <Show when=move || veg>
                    <span class="badge badge-veg-small">"veg"</span>
                </Show>
            </div>
        </button>
    }
}
