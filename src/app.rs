//! Boboy Site App
//!
//! Root component: builds the catalog once, seeds state from the stored
//! language preference, derives the featured dish and the filtered item list,
//! and composes the page sections.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::catalog::Catalog;
use crate::components::{
    Hero, ItemModal, LanguageGate, MenuBrowser, MenuControls, SiteFooter, TopBar,
};
use crate::models::{MenuCategory, MenuItem};
use crate::query;
use crate::storage;
use crate::store::{AppState, AppStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    // Built once, immutable for the lifetime of the page.
    let catalog = StoredValue::new(Catalog::build());

    let store = Store::new(AppState::new(storage::load_lang()));
    provide_context(store);

    // The active locale's categories, recomputed only on language change.
    let categories = Memo::new(move |_| {
        let lang = store.lang().get();
        catalog.with_value(|catalog| catalog.categories(lang).to_vec())
    });

    // Featured dish. The date is read once per recomputation; a session
    // crossing midnight keeps the previous pick until the next state change.
    let dish = Memo::new(move |_| {
        let day = js_sys::Date::new_0().get_date();
        categories.with(|categories| query::dish_of_day(categories, day).cloned())
    });

    let filtered = Memo::new(move |_| {
        let text = store.query().get();
        let veg_only = store.veg_only().get();
        categories.with(|categories| {
            query::filter_items(categories, &text, veg_only)
                .into_iter()
                .map(|(item, category)| (item.clone(), category.to_string()))
                .collect::<Vec<(MenuItem, String)>>()
        })
    });

    // Resolve the open modal item from its id in the active locale.
    let active_item = Memo::new(move |_| {
        let id = store.open_item().get()?;
        categories.with(|categories: &Vec<MenuCategory>| {
            categories
                .iter()
                .flat_map(|cat| cat.items.iter())
                .find(|item| item.id == id)
                .cloned()
        })
    });

    view! {
        <div class="site">
            <LanguageGate />
            <TopBar />
            <Hero dish=dish />
            <MenuControls />
            <MenuBrowser categories=categories filtered=filtered />
            <SiteFooter />
            <ItemModal active=active_item />
        </div>
    }
}
