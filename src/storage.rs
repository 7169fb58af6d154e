//! Locale Preference Store
//!
//! One key in the browser's per-origin local storage. Absence (or an
//! unrecognized value) means "show the language gate". Storage failures
//! degrade to the same: no panic, no error surfaced to the user.

use crate::models::Lang;

const LANG_KEY: &str = "boboy_lang";

/// Whether the gate must be shown for a raw stored value.
/// Unknown tags count as absent (fail-safe for corrupted storage).
pub fn gate_required(stored: Option<&str>) -> bool {
    stored.and_then(Lang::from_tag).is_none()
}

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// Read the persisted language choice, if any valid one exists.
pub fn load_lang() -> Option<Lang> {
    let raw = local_storage()?.get_item(LANG_KEY).ok().flatten()?;
    Lang::from_tag(&raw)
}

/// Persist the language choice. A failed write is logged and otherwise
/// ignored; the selection still applies for the session.
pub fn store_lang(lang: Lang) {
    let Some(storage) = local_storage() else {
        log::warn!("local storage unavailable, language choice not persisted");
        return;
    };
    if storage.set_item(LANG_KEY, lang.as_tag()).is_err() {
        log::warn!("failed to persist language choice");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gate_shown_without_stored_value() {
        assert!(gate_required(None));
    }

    #[test]
    fn gate_suppressed_by_valid_value() {
        assert!(!gate_required(Some("en")));
        assert!(!gate_required(Some("ru")));
        assert!(!gate_required(Some("uz")));
    }

    #[test]
    fn corrupted_value_counts_as_absent() {
        assert!(gate_required(Some("klingon")));
        assert!(gate_required(Some("")));
    }
}
