//! Query / Selection Engine
//!
//! The dish-of-the-day pick and the search/vegetarian filter. Both are pure
//! functions over one locale's built categories; the caller passes the day of
//! month explicitly so selection stays deterministic and testable.

use crate::data::FEATURED_IDS;
use crate::models::{MenuCategory, MenuItem};

/// Deterministic featured dish for a calendar day.
///
/// `day_of_month` is 1-31; the curated list rotates once every
/// `FEATURED_IDS.len()` days and the mapping repeats every month.
/// Returns `None` only for an empty catalog.
pub fn dish_of_day(categories: &[MenuCategory], day_of_month: u32) -> Option<&MenuItem> {
    let idx = day_of_month as usize % FEATURED_IDS.len();
    let id = FEATURED_IDS[idx];

    if let Some(item) = find_by_id(categories, id) {
        return Some(item);
    }

    // Curated id missing from the catalog: data-integrity defect, fall back
    // to the first item rather than render an empty hero.
    log::warn!("featured dish id {id:?} not found in catalog, using first item");
    categories.first().and_then(|cat| cat.items.first())
}

fn find_by_id<'a>(categories: &'a [MenuCategory], id: &str) -> Option<&'a MenuItem> {
    categories
        .iter()
        .flat_map(|cat| cat.items.iter())
        .find(|item| item.id == id)
}

/// Flatten the categories into (item, category name) pairs, keeping category
/// order then item order, and apply the text query and vegetarian filter.
///
/// Matching is case-insensitive substring over name + ingredients + category
/// name, so a query hitting only an ingredient still matches. Empty query with
/// the filter off returns the full list unchanged.
pub fn filter_items<'a>(
    categories: &'a [MenuCategory],
    query: &str,
    veg_only: bool,
) -> Vec<(&'a MenuItem, &'a str)> {
    let needle = query.to_lowercase();

    categories
        .iter()
        .flat_map(|cat| cat.items.iter().map(move |item| (item, cat.name.as_str())))
        .filter(|(item, cat_name)| {
            if veg_only && !item.veg {
                return false;
            }
            needle.is_empty() || haystack(item, cat_name).contains(&needle)
        })
        .collect()
}

fn haystack(item: &MenuItem, cat_name: &str) -> String {
    let mut text = String::with_capacity(item.name.len() + cat_name.len() + 32);
    text.push_str(&item.name);
    for ing in &item.ingredients {
        text.push(' ');
        text.push_str(ing);
    }
    text.push(' ');
    text.push_str(cat_name);
    text.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::models::Lang;

    #[test]
    fn featured_pick_is_deterministic() {
        let catalog = Catalog::build();
        let categories = catalog.categories(Lang::Ru);
        for day in 1..=31 {
            let a = dish_of_day(categories, day).expect("catalog is not empty");
            let b = dish_of_day(categories, day).expect("catalog is not empty");
            assert_eq!(a.id, b.id);
        }
    }

    #[test]
    fn featured_pick_resolves_for_every_day_and_locale() {
        let catalog = Catalog::build();
        for lang in Lang::ALL {
            let categories = catalog.categories(lang);
            for day in 1..=31 {
                let idx = day as usize % FEATURED_IDS.len();
                assert!(idx < FEATURED_IDS.len());
                let picked = dish_of_day(categories, day).expect("catalog is not empty");
                assert_eq!(picked.id, FEATURED_IDS[idx]);
            }
        }
    }

    #[test]
    fn featured_rotation_cycles() {
        let catalog = Catalog::build();
        let categories = catalog.categories(Lang::En);
        let day1 = dish_of_day(categories, 1).unwrap();
        let day7 = dish_of_day(categories, 7).unwrap();
        assert_eq!(day1.id, day7.id);
    }

    #[test]
    fn missing_featured_id_falls_back_to_first_item() {
        // A catalog that contains none of the curated ids.
        let categories = vec![MenuCategory {
            id: "starters".into(),
            name: "Starters".into(),
            items: vec![MenuItem {
                id: "suzma".into(),
                name: "Suzma".into(),
                price: 25_000,
                veg: true,
                ingredients: vec![],
            }],
        }];
        let picked = dish_of_day(&categories, 5).expect("fallback should resolve");
        assert_eq!(picked.id, "suzma");
    }

    #[test]
    fn empty_catalog_yields_none() {
        assert!(dish_of_day(&[], 12).is_none());
    }

    #[test]
    fn empty_query_returns_full_flattened_list() {
        let catalog = Catalog::build();
        let categories = catalog.categories(Lang::En);
        let all = filter_items(categories, "", false);
        let expected: usize = categories.iter().map(|cat| cat.items.len()).sum();
        assert_eq!(all.len(), expected);

        // Original order preserved: category order, then item order.
        let flat_ids: Vec<&str> = categories
            .iter()
            .flat_map(|cat| cat.items.iter().map(|item| item.id.as_str()))
            .collect();
        let result_ids: Vec<&str> = all.iter().map(|(item, _)| item.id.as_str()).collect();
        assert_eq!(flat_ids, result_ids);
    }

    #[test]
    fn veg_filter_keeps_only_vegetarian_items() {
        let catalog = Catalog::build();
        let results = filter_items(catalog.categories(Lang::En), "", true);
        assert!(results.iter().all(|(item, _)| item.veg));
        let ids: Vec<&str> = results.iter().map(|(item, _)| item.id.as_str()).collect();
        assert!(ids.contains(&"fries"));
        assert!(!ids.contains(&"kazan_kebab"));
    }

    #[test]
    fn text_query_is_case_insensitive_substring() {
        let catalog = Catalog::build();
        let results = filter_items(catalog.categories(Lang::En), "LAGMAN", false);
        let ids: Vec<&str> = results.iter().map(|(item, _)| item.id.as_str()).collect();
        assert!(ids.contains(&"lagman_uyghur"));
        assert!(ids.contains(&"fried_lagman"));
        assert!(!ids.contains(&"festive_pilaf"));
    }

    #[test]
    fn query_matches_ingredients_not_just_names() {
        let catalog = Catalog::build();
        // "барбарис" appears only in the pilaf ingredient preset.
        let results = filter_items(catalog.categories(Lang::En), "барбарис", false);
        let ids: Vec<&str> = results.iter().map(|(item, _)| item.id.as_str()).collect();
        assert_eq!(ids, ["festive_pilaf"]);
    }

    #[test]
    fn query_matches_category_names() {
        let catalog = Catalog::build();
        let results = filter_items(catalog.categories(Lang::En), "desserts", false);
        let expected = catalog
            .categories(Lang::En)
            .iter()
            .find(|cat| cat.id == "desserts")
            .map(|cat| cat.items.len())
            .unwrap();
        assert_eq!(results.len(), expected);
    }

    #[test]
    fn query_and_veg_filter_combine() {
        let catalog = Catalog::build();
        let results = filter_items(catalog.categories(Lang::En), "lagman", true);
        assert!(results.is_empty());
    }

    #[test]
    fn filter_carries_owning_category_name() {
        let catalog = Catalog::build();
        let results = filter_items(catalog.categories(Lang::En), "fries", false);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].1, "Kebabs & Sides");
    }
}
