//! UI Chrome Strings
//!
//! Static per-locale strings for everything around the menu content itself.

use crate::models::Lang;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UiStrings {
    pub topbar_subtitle: &'static str,
    pub change_language: &'static str,
    pub dish_of_day: &'static str,
    pub dish_of_day_desc: &'static str,
    pub chef_recommends: &'static str,
    pub vegetarian: &'static str,
    pub not_vegetarian: &'static str,
    pub search_placeholder: &'static str,
    pub veg_only: &'static str,
    pub results: &'static str,
    pub ingredients: &'static str,
    pub ingredients_soon: &'static str,
    pub locations: &'static str,
    pub footer_copy: &'static str,
    pub allergy_note: &'static str,
}

pub fn strings(lang: Lang) -> &'static UiStrings {
    match lang {
        Lang::Ru => &RU,
        Lang::En => &EN,
        Lang::Uz => &UZ,
    }
}

static RU: UiStrings = UiStrings {
    topbar_subtitle: "Национальная кухня Узбекистана",
    change_language: "Язык",
    dish_of_day: "Блюдо дня",
    dish_of_day_desc: "Сегодня шеф рекомендует фирменное блюдо с домашними специями и сезонными продуктами.",
    chef_recommends: "Рекомендует шеф",
    vegetarian: "Вегетарианское",
    not_vegetarian: "Содержит мясо/птицу/рыбу",
    search_placeholder: "Поиск по меню…",
    veg_only: "Только вегетарианское",
    results: "Результаты",
    ingredients: "Ингредиенты",
    ingredients_soon: "Состав скоро будет указан. Уточните у официанта.",
    locations: "Адреса",
    footer_copy: "Атмосфера Узбекистана: уникальные ароматы и вкусы.",
    allergy_note: "Пожалуйста, предупредите нас о любых аллергиях. Состав блюд может незначительно отличаться.",
};

static EN: UiStrings = UiStrings {
    topbar_subtitle: "Uzbek national cuisine",
    change_language: "Language",
    dish_of_day: "Dish of the Day",
    dish_of_day_desc: "Chef’s special prepared with house spices and seasonal produce.",
    chef_recommends: "Chef recommends",
    vegetarian: "Vegetarian",
    not_vegetarian: "Contains meat/poultry/fish",
    search_placeholder: "Search the menu…",
    veg_only: "Vegetarian only",
    results: "Results",
    ingredients: "Ingredients",
    ingredients_soon: "Ingredients coming soon. Please ask your server.",
    locations: "Locations",
    footer_copy: "Immerse yourself in Uzbekistan’s unique tastes and aromas.",
    allergy_note: "Please let us know about any allergies. Ingredients may vary slightly.",
};

static UZ: UiStrings = UiStrings {
    topbar_subtitle: "Oʻzbek milliy taomlari",
    change_language: "Til",
    dish_of_day: "Kun taomi",
    dish_of_day_desc: "Shefning uy ziravorlari va mavsumiy mahsulotlardan tayyorlangan maxsus taomi.",
    chef_recommends: "Shef tavsiya qiladi",
    vegetarian: "Vegetarian",
    not_vegetarian: "Goʻsht/tovuq/baliq bor",
    search_placeholder: "Menyu bo‘yicha qidirish…",
    veg_only: "Faqat vegetarian",
    results: "Natijalar",
    ingredients: "Tarkibi",
    ingredients_soon: "Tarkib tez orada qoʻshiladi. Ofitsiantdan soʻrang.",
    locations: "Manzillar",
    footer_copy: "Oʻzbekistonning oʻziga xos tamlari va hidlari.",
    allergy_note: "Allergiyangiz bo‘lsa, oldindan ayting. Tarkib biroz farq qilishi mumkin.",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_locale_has_complete_copy() {
        for lang in Lang::ALL {
            let s = strings(lang);
            assert!(!s.topbar_subtitle.is_empty());
            assert!(!s.dish_of_day.is_empty());
            assert!(!s.search_placeholder.is_empty());
            assert!(!s.allergy_note.is_empty());
        }
    }

    #[test]
    fn copy_is_single_line() {
        for lang in Lang::ALL {
            let s = strings(lang);
            assert!(!s.dish_of_day_desc.contains('\n'));
            assert!(!s.footer_copy.contains('\n'));
        }
    }
}
