//! Menu Controls Component
//!
//! Sticky search input plus the vegetarian-only toggle.

use leptos::prelude::*;

use crate::i18n;
use crate::store::{set_query, toggle_veg_only, use_app_store, AppStateStoreFields};

#[component]
pub fn MenuControls() -> impl IntoView {
    let store = use_app_store();
    let strings = move || i18n::strings(store.lang().get());

    let toggle_class = move || {
        if store.veg_only().get() {
            "veg-toggle active"
        } else {
            "veg-toggle"
        }
    };

    view! {
        <section class="menu-controls">
            <div class="menu-controls-inner">
                <input
                    class="search-input"
                    type="text"
                    placeholder=move || strings().search_placeholder
                    prop:value=move || store.query().get()
                    on:input=move |ev| set_query(&store, event_target_value(&ev))
                />
                <button class=toggle_class on:click=move |_| toggle_veg_only(&store)>
                    {move || strings().veg_only}
                </button>
            </div>
        </section>
    }
}
