//! Menu Browser Component
//!
//! Category sections when nothing is filtered; a single flat "Results" grid
//! once a query or the vegetarian filter is active.

use leptos::prelude::*;

use crate::i18n;
use crate::models::{MenuCategory, MenuItem};
use crate::store::{use_app_store, AppStateStoreFields};

use super::MenuGrid;

#[component]
pub fn MenuBrowser(
    categories: Memo<Vec<MenuCategory>>,
    filtered: Memo<Vec<(MenuItem, String)>>,
) -> impl IntoView {
    let store = use_app_store();
    let strings = move || i18n::strings(store.lang().get());
    let filtering = move || !store.query().get().is_empty() || store.veg_only().get();

    view! {
        <main class="menu-browser">
            {move || if filtering() {
                let entries: Vec<(MenuItem, Option<String>)> = filtered
                    .get()
                    .into_iter()
                    .map(|(item, category)| (item, Some(category)))
                    .collect();
                view! {
                    <section class="results-section">
                        <h2 class="section-title">{strings().results}</h2>
                        <MenuGrid entries=entries />
                    </section>
                }
                .into_any()
            } else {
                view! {
                    <For
                        each=move || categories.get()
                        key=|cat| cat.id.clone()
                        children=move |cat| {
                            let entries: Vec<(MenuItem, Option<String>)> = cat
                                .items
                                .iter()
                                .cloned()
                                .map(|item| (item, None))
                                .collect();
                            view! {
                                <section class="menu-category" id=cat.id.clone()>
                                    <h2 class="section-title">{cat.name.clone()}</h2>
                                    <MenuGrid entries=entries />
                                </section>
                            }
                        }
                    />
                }
                .into_any()
            }}
        </main>
    }
}
