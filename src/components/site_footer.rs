//! Site Footer Component
//!
//! Brand copy, branch addresses and phone numbers, Instagram handle.

use leptos::prelude::*;

use crate::i18n;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn SiteFooter() -> impl IntoView {
    let store = use_app_store();
    let strings = move || i18n::strings(store.lang().get());

    view! {
        <footer class="site-footer">
            <div class="site-footer-inner">
                <div class="footer-brand">
                    <div class="footer-brand-name">"BOBOY"</div>
                    <p class="footer-copy">{move || strings().footer_copy}</p>
                </div>
                <div class="footer-locations">
                    <div class="footer-heading">{move || strings().locations}</div>
                    <ul class="footer-list">
                        <li>"Tashkent City Mall, 3rd Floor"</li>
                        <li>"+998 77 109 88 77"</li>
                        <li>"Taras Shevchenko Street, 38A"</li>
                        <li>"+998 77 235 88 77"</li>
                    </ul>
                </div>
                <div class="footer-social">
                    <div class="footer-heading">"Instagram"</div>
                    <a class="footer-link" href="#">"@boboycafe_uz"</a>
                    <p class="allergy-note">{move || strings().allergy_note}</p>
                </div>
            </div>
        </footer>
    }
}
