//! Language Gate Component
//!
//! Full-screen overlay asking the visitor to pick a language. Shown on first
//! visit (no stored preference) and whenever the top-bar button reopens it.

use leptos::prelude::*;

use crate::models::Lang;
use crate::store::{select_lang, use_app_store, AppStateStoreFields};

#[component]
pub fn LanguageGate() -> impl IntoView {
    let store = use_app_store();

    view! {
        <Show when=move || store.show_gate().get()>
            <div class="lang-gate-overlay">
                <div class="lang-gate-card">
                    <div class="lang-gate-brand">"BOBOY"</div>
                    <h3 class="lang-gate-title">
                        "Choose language / Tilni tanlang / Выберите язык"
                    </h3>
                    <div class="lang-gate-options">
                        {Lang::ALL
                            .into_iter()
                            .map(|lang| view! { <LangButton lang=lang /> })
                            .collect_view()}
                    </div>
                    <p class="lang-gate-note">"We store your choice only in your browser."</p>
                </div>
            </div>
        </Show>
    }
}

#[component]
fn LangButton(lang: Lang) -> impl IntoView {
    let store = use_app_store();

    view! {
        <button class="lang-btn" on:click=move |_| select_lang(&store, lang)>
            <div class="lang-btn-label">{lang.label()}</div>
            <div class="lang-btn-code">{lang.as_tag()}</div>
        </button>
    }
}
