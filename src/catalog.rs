//! Catalog Builder
//!
//! Builds the per-locale menus from the static source tables, once at startup.

use crate::data::{self, CategoryDef};
use crate::models::{Lang, MenuCategory, MenuItem};

/// The three parallel locale menus. Immutable after `build`.
///
/// Structural invariant: category ids and per-category item id sequences are
/// identical across locales; only display text differs.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    uz: Vec<MenuCategory>,
    ru: Vec<MenuCategory>,
    en: Vec<MenuCategory>,
}

impl Catalog {
    /// Instantiate every category for every locale. Pure and deterministic:
    /// the same source tables always produce a structurally equal catalog.
    pub fn build() -> Self {
        Self {
            uz: build_locale(Lang::Uz),
            ru: build_locale(Lang::Ru),
            en: build_locale(Lang::En),
        }
    }

    pub fn categories(&self, lang: Lang) -> &[MenuCategory] {
        match lang {
            Lang::Uz => &self.uz,
            Lang::Ru => &self.ru,
            Lang::En => &self.en,
        }
    }
}

fn build_locale(lang: Lang) -> Vec<MenuCategory> {
    data::CATEGORIES.iter().map(|cat| build_category(cat, lang)).collect()
}

fn build_category(cat: &CategoryDef, lang: Lang) -> MenuCategory {
    MenuCategory {
        id: cat.id.to_string(),
        name: cat.name.get(lang).to_string(),
        items: cat
            .items
            .iter()
            .map(|item| MenuItem {
                id: item.id.to_string(),
                name: item.name.get(lang).to_string(),
                price: item.price,
                veg: item.veg,
                ingredients: item.ingredients.iter().map(|s| s.to_string()).collect(),
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id_skeleton(categories: &[MenuCategory]) -> Vec<(String, Vec<String>)> {
        categories
            .iter()
            .map(|cat| {
                (
                    cat.id.clone(),
                    cat.items.iter().map(|item| item.id.clone()).collect(),
                )
            })
            .collect()
    }

    #[test]
    fn locales_are_structurally_identical() {
        let catalog = Catalog::build();
        let ru = id_skeleton(catalog.categories(Lang::Ru));
        for lang in [Lang::Uz, Lang::En] {
            assert_eq!(ru, id_skeleton(catalog.categories(lang)));
        }
    }

    #[test]
    fn rebuild_is_idempotent() {
        assert_eq!(Catalog::build(), Catalog::build());
    }

    #[test]
    fn category_order_follows_source() {
        let catalog = Catalog::build();
        let ids: Vec<&str> = catalog
            .categories(Lang::En)
            .iter()
            .map(|cat| cat.id.as_str())
            .collect();
        assert_eq!(
            ids,
            ["starters", "salads", "soups", "mains", "kebabs", "desserts", "drinks"]
        );
    }

    #[test]
    fn names_are_localized() {
        let catalog = Catalog::build();
        let find = |lang: Lang| {
            catalog.categories(lang)[0]
                .items
                .iter()
                .find(|item| item.id == "kulcha")
                .map(|item| item.name.clone())
                .unwrap()
        };
        assert_eq!(find(Lang::En), "House Bread (Kulcha)");
        assert_eq!(find(Lang::Ru), "Домашний хлеб (кулча)");
        assert_eq!(find(Lang::Uz), "Non (Kulcha)");
    }
}
