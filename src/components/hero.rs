//! Hero Component
//!
//! The dish-of-the-day panel. `dish` is `None` only for an empty catalog; the
//! hero then renders its frame without content instead of crashing.

use leptos::prelude::*;

use crate::format::format_price;
use crate::i18n;
use crate::models::MenuItem;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn Hero(dish: Memo<Option<MenuItem>>) -> impl IntoView {
    let store = use_app_store();
    let strings = move || i18n::strings(store.lang().get());
    let dish_name = move || dish.get().map(|item| item.name).unwrap_or_default();

    view! {
        <section class="hero">
            <div class="hero-inner">
                <div class="hero-copy">
                    <div class="hero-badge">{move || strings().dish_of_day}</div>
                    <h1 class="hero-title">{dish_name}</h1>
                    <p class="hero-desc">{move || strings().dish_of_day_desc}</p>
                    <div class="hero-tags">
                        <Show when=move || dish.get().is_some_and(|item| item.veg)>
                            <span class="badge badge-veg">{move || strings().vegetarian}</span>
                        </Show>
                        {move || {
                            dish.get().map(|item| {
                                let price = format_price(item.price, store.lang().get());
                                view! { <span class="badge badge-price">{price}</span> }
                            })
                        }}
                    </div>
                </div>
                <div class="hero-plate">
                    <div class="hero-plate-caption">
                        <div class="hero-plate-label">{move || strings().chef_recommends}</div>
                        <div class="hero-plate-name">{dish_name}</div>
                    </div>
                </div>
            </div>
        </section>
    }
}
