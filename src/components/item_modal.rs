//! Item Modal Component
//!
//! Dish detail overlay: price, vegetarian badge, ingredient list (or the
//! "coming soon" copy while none are published) and the allergy note.
//! Clicking the backdrop or the close button dismisses it.

use leptos::prelude::*;

use crate::format::format_price;
use crate::i18n;
use crate::models::MenuItem;
use crate::store::{close_item, use_app_store, AppStateStoreFields};

#[component]
pub fn ItemModal(active: Memo<Option<MenuItem>>) -> impl IntoView {
    let store = use_app_store();
    let strings = move || i18n::strings(store.lang().get());

    view! {
        {move || {
            active.get().map(|item| {
                let price = format_price(item.price, store.lang().get());
                let veg_badge = if item.veg {
                    view! { <span class="badge badge-veg">{strings().vegetarian}</span> }
                        .into_any()
                } else {
                    view! { <span class="badge badge-plain">{strings().not_vegetarian}</span> }
                        .into_any()
                };
                let ingredients = if item.ingredients.is_empty() {
                    view! { <p class="ingredients-soon">{strings().ingredients_soon}</p> }
                        .into_any()
                } else {
                    view! {
                        <ul class="ingredients-list">
                            {item
                                .ingredients
                                .iter()
                                .map(|ing| view! { <li>{ing.clone()}</li> })
                                .collect_view()}
                        </ul>
                    }
                    .into_any()
                };

                view! {
                    <div class="modal-layer">
                        <div class="modal-backdrop" on:click=move |_| close_item(&store)></div>
                        <div class="modal-card">
                            <div class="modal-head">
                                <div>
                                    <div class="modal-title">{item.name.clone()}</div>
                                    <div class="modal-price">{price}</div>
                                </div>
                                <button
                                    class="modal-close-btn"
                                    on:click=move |_| close_item(&store)
                                >
                                    "×"
                                </button>
                            </div>
                            <div class="modal-body">
                                <div class="modal-tags">{veg_badge}</div>
                                <div class="modal-ingredients">
                                    <div class="modal-ingredients-title">
                                        {strings().ingredients}
                                    </div>
                                    {ingredients}
                                    <p class="allergy-note">{strings().allergy_note}</p>
                                </div>
                            </div>
                        </div>
                    </div>
                }
            })
        }}
    }
}
