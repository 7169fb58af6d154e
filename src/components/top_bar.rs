//! Top Bar Component
//!
//! Sticky header with the brand block and the change-language button.

use leptos::prelude::*;

use crate::i18n;
use crate::store::{reopen_gate, use_app_store, AppStateStoreFields};

#[component]
pub fn TopBar() -> impl IntoView {
    let store = use_app_store();
    let strings = move || i18n::strings(store.lang().get());

    view! {
        <header class="top-bar">
            <div class="top-bar-inner">
                <div class="brand">
                    <div class="brand-mark"></div>
                    <div class="brand-text">
                        <div class="brand-name">"BOBOY"</div>
                        <div class="brand-subtitle">{move || strings().topbar_subtitle}</div>
                    </div>
                </div>
                <button class="lang-switch-btn" on:click=move |_| reopen_gate(&store)>
                    {move || strings().change_language}
                </button>
            </div>
        </header>
    }
}
