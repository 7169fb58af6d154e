//! Application State Store
//!
//! The single runtime-mutable state record, held in a Leptos reactive store
//! and mutated only through the named transitions below. Everything else
//! (the catalog, the UI strings) is immutable after startup.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::Lang;
use crate::storage;

/// All runtime-mutable state with field-level reactivity.
#[derive(Clone, Debug, Store)]
pub struct AppState {
    /// Active display language.
    pub lang: Lang,
    /// Whether the language-selection gate overlay is visible.
    pub show_gate: bool,
    /// Free-text menu search query.
    pub query: String,
    /// Vegetarian-only filter flag.
    pub veg_only: bool,
    /// Id of the item open in the detail modal, if any.
    pub open_item: Option<String>,
}

impl AppState {
    /// Seed state from the stored preference: no valid stored language means
    /// the gate is shown, with Russian as the provisional display language.
    pub fn new(stored: Option<Lang>) -> Self {
        Self {
            lang: stored.unwrap_or(Lang::Ru),
            show_gate: stored.is_none(),
            query: String::new(),
            veg_only: false,
            open_item: None,
        }
    }
}

pub type AppStore = Store<AppState>;

/// Get the app store from context.
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Named state transitions
// ========================

/// Apply a language choice, close the gate and persist the choice.
pub fn select_lang(store: &AppStore, lang: Lang) {
    store.lang().set(lang);
    store.show_gate().set(false);
    storage::store_lang(lang);
}

/// Bring the gate back (the "change language" button).
pub fn reopen_gate(store: &AppStore) {
    store.show_gate().set(true);
}

pub fn set_query(store: &AppStore, query: String) {
    store.query().set(query);
}

pub fn toggle_veg_only(store: &AppStore) {
    let veg_field = store.veg_only();
    let mut veg = veg_field.write();
    *veg = !*veg;
}

pub fn open_item(store: &AppStore, id: String) {
    store.open_item().set(Some(id));
}

pub fn close_item(store: &AppStore) {
    store.open_item().set(None);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_visit_shows_gate_with_russian_provisional() {
        let state = AppState::new(None);
        assert!(state.show_gate);
        assert_eq!(state.lang, Lang::Ru);
        assert!(state.query.is_empty());
        assert!(!state.veg_only);
        assert!(state.open_item.is_none());
    }

    #[test]
    fn stored_language_suppresses_gate() {
        let state = AppState::new(Some(Lang::En));
        assert!(!state.show_gate);
        assert_eq!(state.lang, Lang::En);
    }
}
