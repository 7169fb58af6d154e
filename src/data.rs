//! Static Menu Source Data
//!
//! The authored menu content: localized names, prices, vegetarian flags and
//! ingredient lists, grouped into the fixed category order. `catalog` builds
//! the per-locale runtime model from these tables.
//!
//! Ingredient lists are authored once and shared identically by all locales.

use crate::models::Lang;

/// A per-locale string triple. Every display name goes through this type,
/// even when the text is identical in all three languages.
#[derive(Debug, Clone, Copy)]
pub struct Tr {
    pub ru: &'static str,
    pub en: &'static str,
    pub uz: &'static str,
}

impl Tr {
    pub fn get(&self, lang: Lang) -> &'static str {
        match lang {
            Lang::Ru => self.ru,
            Lang::En => self.en,
            Lang::Uz => self.uz,
        }
    }
}

const fn tr(ru: &'static str, en: &'static str, uz: &'static str) -> Tr {
    Tr { ru, en, uz }
}

type Ing = &'static [&'static str];

/// Source definition of one dish.
#[derive(Debug, Clone, Copy)]
pub struct ItemDef {
    pub id: &'static str,
    pub name: Tr,
    pub price: u64,
    pub veg: bool,
    pub ingredients: Ing,
}

const fn dish(id: &'static str, name: Tr, price: u64, ingredients: Ing) -> ItemDef {
    ItemDef { id, name, price, veg: false, ingredients }
}

const fn veg_dish(id: &'static str, name: Tr, price: u64, ingredients: Ing) -> ItemDef {
    ItemDef { id, name, price, veg: true, ingredients }
}

/// Source definition of one category with its authorial item order.
#[derive(Debug, Clone, Copy)]
pub struct CategoryDef {
    pub id: &'static str,
    pub name: Tr,
    pub items: &'static [ItemDef],
}

/// Curated dish-of-the-day rotation, in rotation order.
pub const FEATURED_IDS: [&str; 6] = [
    "festive_pilaf",
    "lagman_uyghur",
    "kazan_kebab",
    "norin",
    "san_sebastian",
    "passion_mango_lemonade",
];

// Shared ingredient presets (approximate; verified on site).
const PILAF: Ing = &["рис", "морковь", "лук", "зира", "барбарис", "говядина/баранина"];
const LAGMAN: Ing = &["ручная лапша", "говядина", "овощи", "перец", "лук", "помидор"];
const KAZAN_KEBAB: Ing = &["баранина", "картофель", "лук", "зира", "масло"];
const NORIN: Ing = &["лапша", "конина/говядина", "лук", "перец"];
const SOMSA_MEAT: Ing = &["тесто", "говядина", "лук", "зира"];
const KHACHAPURI: Ing = &["тесто", "сыр сулугуни", "яйцо (аджар)", "масло"];
const CHEBUREK_BEEF: Ing = &["тесто", "говядина", "лук", "специи"];
const CHEBUREK_CHEESE: Ing = &["тесто", "сыр", "зелень"];
const GREEK: Ing = &["огурец", "помидор", "оливки", "сыр фета", "лук", "оливковое масло"];
const CAESAR: Ing = &["курица", "салат ромен", "пармезан", "крутоны", "соус цезарь"];
const EGGPLANT_TEMPURA: Ing = &["бакинский баклажан", "тесто темпура", "соус", "зелень"];
const ASSORTED_VEG: Ing = &["сезонные овощи"];
const LENTIL_SOUP: Ing = &["чечевица", "овощи", "специи"];
const MANPAR: Ing = &["домашняя лапша", "бульон", "говядина", "овощи"];
const CHUCHVARA: Ing = &["пельмени", "говядина", "лук", "бульон"];
const SAY_BEEF: Ing = &["говядина", "болгарский перец", "лук", "специи"];
const SAY_CHICKEN: Ing = &["курица", "перец", "лук", "специи"];
const DOLMA: Ing = &["виноградные листья", "фарш", "рис", "соус"];
const BESHBARMAK: Ing = &["тесто", "мясо", "лук"];
const MANTI: Ing = &["тесто", "фарш", "лук", "специи"];
const SOKORO: Ing = &["тушёное мясо", "овощи", "специи"];
const SOMBORO: Ing = &["овощи", "яйцо", "специи"];
const FRIES: Ing = &["картофель", "масло", "соль"];
const RICE: Ing = &["рис", "масло", "соль"];
const VEG_KEBAB: Ing = &["овощи гриль", "перец", "кабачок", "баклажан", "лук"];
const LIVER: Ing = &["печень", "лук", "специи"];
const WAGURI: Ing = &["мраморная говядина", "специи"];
const KHALIM: Ing = &["пшеница", "мясо", "лук", "масло"];
const TUSHENKA: Ing = &["говядина", "специи"];
const NOHOT: Ing = &["нут", "мясо", "лук", "специи"];
const BAKHLAVA: Ing = &["слоёное тесто", "орехи", "мёд"];
const TIRAMISU: Ing = &["маскарпоне", "савоярди", "эспрессо"];
const NAPOLEON: Ing = &["слоёное тесто", "крем"];
const SAN_SEB: Ing = &["сырный крем", "печёная корочка"];
const NONE: Ing = &[];

const STARTERS: &[ItemDef] = &[
    veg_dish("suzma", tr("Сузма", "Suzma", "Suzma"), 25_000, &["кисломолочный соус", "зелень"]),
    veg_dish("marinated_veg", tr("Маринованные овощи", "Marinated Vegetables", "Tuzlangan sabzavotlar"), 38_000, ASSORTED_VEG),
    veg_dish("kulcha", tr("Домашний хлеб (кулча)", "House Bread (Kulcha)", "Non (Kulcha)"), 15_000, &["пшеничная лепёшка", "кунжут"]),
    veg_dish("garlic_nan", tr("Чесночный нан", "Garlic Nan", "Sarimsoqli non"), 28_000, &["лепёшка", "чесночное масло", "зелень"]),
    veg_dish("khach_ap", tr("Хачапури по-аджарски", "Khachapuri (Adjarian)", "Xachapuri-Ajar"), 73_000, KHACHAPURI),
    veg_dish("khach_meg", tr("Хачапури по-мегрельски", "Khachapuri (Megrelian)", "Xachapuri-Megrel"), 73_000, KHACHAPURI),
    dish("cheb_beef", tr("Мини-чебурек с говядиной (4 шт)", "Mini Cheburek with Beef (4 pcs)", "Mini cheburek (go‘shtli) (4 dona)"), 40_000, CHEBUREK_BEEF),
    veg_dish("cheb_cheese", tr("Мини-чебурек с сыром (4 шт)", "Mini Cheburek with Cheese (4 pcs)", "Mini cheburek (pishloqli) (4 dona)"), 35_000, CHEBUREK_CHEESE),
    dish("somsa_trad", tr("Самса традиционная (1 шт)", "Somsa Traditional (1 pc)", "Tandir somsa (1 dona)"), 20_000, SOMSA_MEAT),
    dish("somsa_olot", tr("Самса Олот (1 шт)", "Somsa Olot (1 pc)", "Olot somsa (1 dona)"), 15_000, SOMSA_MEAT),
    dish("turkish_meze", tr("Турецкий мезе сет", "Turkish Meze Set", "Turkcha mezze seti"), 95_000, &["ачылы эзме", "оливки", "хумус", "суджук", "хайдари", "нан"]),
];

const SALADS: &[ItemDef] = &[
    veg_dish("achik", tr("Ачик-чучук", "Achik Chuchuk", "Achik chuchuk"), 29_000, &["помидор", "лук", "перец", "зелень"]),
    dish("caesar", tr("Салат Цезарь с курицей", "Caesar Salad with Chicken", "Salat Sezar tovuqli"), 79_000, CAESAR),
    veg_dish("greek", tr("Греческий салат", "Greek Salad", "Greck salad"), 45_000, GREEK),
    veg_dish("bakhor", tr("Салат Бахор", "Salad Bakhor", "Bahor salati"), 63_000, &["сезонные овощи", "зелень", "соус"]),
    dish("olivier", tr("Оливье", "Olivier Salad", "Salat Olivye"), 69_000, &["овощи", "майонез", "ветчина/курица"]),
    veg_dish("eggplant_tempura", tr("Салат с баклажаном темпура", "Eggplant Tempura Salad", "Qarsildoq baqlajon"), 69_000, EGGPLANT_TEMPURA),
    veg_dish("choban", tr("Чобан салад", "Choban Salad", "Choban salat"), 49_000, &["помидор", "огурец", "перец", "лук", "зелень"]),
    veg_dish("assorted_fresh", tr("Овощное ассорти", "Assorted Fresh Vegetables", "Sabzavot assortisi"), 49_000, ASSORTED_VEG),
    dish("chirokchi", tr("Салат Чирокчи", "Chirokchi Salad", "Salat Chiroqchi"), 63_000, &["овощи", "сыр/мясо", "соус"]),
    dish("smak", tr("Салат Смак", "Smak Salad", "Smak salat"), 67_000, &["овощи", "соус", "мясо"]),
    dish("muzh", tr("Мужской каприз", "Mujskoy Kapriz", "Salat Mujskoy Kapriz"), 75_000, &["мясо", "яйцо", "сыр", "майонез"]),
    dish("tulum", tr("Салат Тулум", "Salad Tulum", "Salat Tulum"), 93_000, &["сыр тулум", "овощи", "соус"]),
    dish("thai_beef", tr("Тёплый тайский с говядиной", "Thai Warm Beef Salad", "Mol go‘shtli TAI salati"), 79_000, &["говядина", "тайский соус", "овощи", "зелень"]),
];

const SOUPS: &[ItemDef] = &[
    dish("kainatma", tr("Кайнатма шурпа", "Kainatma Shurpa", "Qaynatma sho‘rva"), 63_000, &["баранина", "овощи", "бульон"]),
    dish("lagman_uyghur", tr("Лагман уйгурский", "Lagman Uyghur", "Uyg‘ur lag‘mon"), 55_000, LAGMAN),
    dish("mastava", tr("Мастава", "Mastava", "Mastava"), 49_000, &["рис", "овощи", "мясо", "бульон"]),
    dish("chicken_noodle", tr("Куриный суп с лапшой", "Chicken Noodle Soup", "Tovuqli sho‘rva"), 61_000, &["курица", "лапша", "овощи"]),
    dish("chuchvara", tr("Чучвара", "Chuchvara", "Chuchvara"), 65_000, CHUCHVARA),
    dish("moshxurda", tr("Мошхурда", "Moshxurda", "Moshxo‘rda"), 40_000, &["маш", "мясо", "овощи"]),
    veg_dish("lentil", tr("Чечевичный суп", "Lentil Soup", "Chechevichniy sho‘rva"), 69_000, LENTIL_SOUP),
    dish("shurpa_jug", tr("Шурпа в кувшине", "Shurpa in a Jug", "Ko‘za sho‘rva"), 75_000, &["мясо", "овощи", "бульон"]),
    dish("manpar", tr("Манпар", "Manpar Soup", "Manpar"), 75_000, MANPAR),
];

const MAINS: &[ItemDef] = &[
    dish("festive_pilaf", tr("Праздничный плов", "Festive Pilaf", "Osh"), 50_000, PILAF),
    dish("say_beef", tr("Сай говяжий", "Beef SAY", "Go‘shtli Say"), 89_000, SAY_BEEF),
    dish("manti", tr("Манты (1 шт)", "Manti (1 pc)", "Manti (1 dona)"), 19_000, MANTI),
    dish("waguri", tr("Вагури (300 г)", "Waguri (300 g)", "Vaguri (300 g)"), 249_000, WAGURI),
    dish("dolma", tr("Долма (Ток ош)", "Dolma (Tok Osh)", "Do‘lma (Tok osh)"), 85_000, DOLMA),
    dish("kazan_kebab", tr("Казан-кабоб", "Kazan Kebab", "Qozon kabob"), 159_000, KAZAN_KEBAB),
    dish("assorted_boboy", tr("Ассорти Boboy", "Assorted Boboy Set", "Assorti Boboy"), 150_000, &["сеты горячих блюд"]),
    dish("sokoro", tr("Сокоро", "Sokoro", "Sokoro"), 109_000, SOKORO),
    dish("somboro", tr("Сомборо", "Somboro", "Somboro"), 109_000, SOMBORO),
    dish("fried_lagman", tr("Лагман жареный", "Fried Lagman", "Qovurma lag‘mon"), 73_000, LAGMAN),
    dish("beshbarmak", tr("Бешбармак", "Beshbarmak", "Beshbarmoq"), 139_000, BESHBARMAK),
    dish("nohot", tr("Нохот шурак", "Nohot Shurak", "Noxot sho‘rak"), 79_000, NOHOT),
    dish("tushenka", tr("Тушёнка (говядина)", "Tushenka", "Tushonka (mol go‘shti)"), 115_000, TUSHENKA),
    dish("khalim", tr("Халим", "Khalim", "Xalim"), 75_000, KHALIM),
    dish("norin", tr("Норин", "Norin", "Norin"), 93_000, NORIN),
    dish("say_chicken", tr("Сай куриный", "SAY with Chicken", "Tovuqli Say"), 73_000, SAY_CHICKEN),
    dish("say_beef_egg", tr("Сай с говядиной и яйцом", "SAY with Beef & Egg", "Tuxum va go‘shtli Say"), 89_000, SAY_BEEF),
];

const KEBABS: &[ItemDef] = &[
    dish("minced_beef", tr("Кийма (фарш) шашлык", "Minced Beef Kebab", "Qiyma kabob"), 35_000, &["фарш говяжий", "лук", "специи"]),
    dish("beef_kebab", tr("Мол жиз (шашлык)", "Beef Kebab", "Mol jaz"), 43_000, NONE),
    dish("lamb_kebab", tr("Кой жиз (шашлык)", "Lamb Kebab", "Qo‘y jaz"), 45_000, NONE),
    dish("lamb_chops", tr("Каре ягнёнка", "Lamb chops", "Qo‘zi qovurg‘asi"), 75_000, NONE),
    dish("chicken_wings", tr("Куриные крылья", "Chicken Wings", "Tovuq qanoti"), 42_000, NONE),
    dish("chicken_thighs", tr("Куриное бедро (жиз)", "Chicken Thighs", "Tovuq jaz"), 42_000, NONE),
    dish("liver", tr("Печень", "Liver", "Jigar"), 35_000, LIVER),
    veg_dish("veg_kebab", tr("Овощной шашлык", "Vegetarian Kebab", "Sabzavotli kabob"), 35_000, VEG_KEBAB),
    dish("lamb_ribs", tr("Хрустящие бараньи рёбра", "Lamb Crispy Ribs", "Qo‘y qovurg‘a jaz"), 60_000, NONE),
    dish("rolls", tr("Рулет", "Rolls", "Rulet"), 43_000, NONE),
    dish("charvi", tr("Чарви кебаб", "Charvi Kebab", "Charvi kabob"), 39_000, NONE),
    veg_dish("fries", tr("Картофель фри", "French Fries", "Kartoshka fri"), 35_000, FRIES),
    veg_dish("rice", tr("Гарнир рис", "Rice", "Guruch"), 24_000, RICE),
];

const DESSERTS: &[ItemDef] = &[
    veg_dish("napoleon", tr("Наполеон", "Napoleon", "Napoleon"), 69_000, NAPOLEON),
    veg_dish("oreshky", tr("Орешки (6 шт)", "Oreshky (6 pcs)", "Oreshkalar (6 dona)"), 50_000, NONE),
    veg_dish("honey_cake", tr("Медовик", "Honey Cake", "Medovik"), 72_000, NONE),
    veg_dish("meringue", tr("Меренга рулеты", "Meringue Rolls", "Merenga"), 69_000, NONE),
    veg_dish("afghan", tr("Афганский десерт", "Afghan dessert", "Afg‘on shirinlik"), 69_000, NONE),
    veg_dish("san_sebastian", tr("Сан-Себастьян чизкейк", "San Sebastian Cheesecake", "San Sebastyan chiskeyk"), 79_000, SAN_SEB),
    veg_dish("tiramisu", tr("Тирамису", "Tiramisu", "Tiramisu"), 83_000, TIRAMISU),
    veg_dish("kiev", tr("Киев", "Kiev", "Kievskiy tort"), 75_000, NONE),
    veg_dish("snickers", tr("Сникерс роллы", "Snickers Rolls", "Snikers tort"), 79_000, NONE),
    veg_dish("fondue", tr("Шоколадное фондю", "Chocolate Fondue", "Shokoladli fondyu"), 105_000, NONE),
    veg_dish("profiteroles", tr("Профитроли", "Profiteroles", "Profitroli"), 69_000, NONE),
    veg_dish("bakhlava", tr("Пахлава", "Bakhlava", "Paxlava"), 59_000, BAKHLAVA),
    veg_dish("matilda", tr("Матильда", "Matilda", "Matilda"), 75_000, NONE),
    veg_dish("chak_chak", tr("Чак-чак чизкейк", "Chak Chak Cheesecake", "Chak Chak chiskeyk"), 75_000, NONE),
    veg_dish("assorted_milliy", tr("Ассорти Миллий сет", "Assorted Milliy Set", "Assorti Milliy"), 87_000, NONE),
];

const DRINKS: &[ItemDef] = &[
    veg_dish("iced_tea", tr("Айсти (ассорти)", "Iced Tea", "Aysti"), 31_000, NONE),
    veg_dish("americano", tr("Американо", "Americano", "Americano"), 35_000, NONE),
    veg_dish("cappuccino", tr("Капучино", "Cappuccino", "Cappuccino"), 42_000, NONE),
    veg_dish("latte", tr("Латте", "Latte", "Latte"), 52_000, NONE),
    veg_dish("mojito", tr("Мохито классический", "Classic Mojito", "Klassik moxito"), 65_000, NONE),
    veg_dish("passion_mango_lemonade", tr("Лимонад маракуйя-манго", "Passionfruit Mango Lemonade", "Marakuya Mango limonad"), 57_000, NONE),
];

/// The whole menu, in presentation order.
pub static CATEGORIES: &[CategoryDef] = &[
    CategoryDef { id: "starters", name: tr("Закуски", "Starters", "Yaxna taomlar"), items: STARTERS },
    CategoryDef { id: "salads", name: tr("Салаты", "Salads", "Salatlar"), items: SALADS },
    CategoryDef { id: "soups", name: tr("Супы", "Soups", "Sho‘rvalar"), items: SOUPS },
    CategoryDef { id: "mains", name: tr("Горячие блюда", "Main Courses", "Asosiy taomlar"), items: MAINS },
    CategoryDef { id: "kebabs", name: tr("Шашлыки и гарниры", "Kebabs & Sides", "Kaboblar va qo‘shimchalar"), items: KEBABS },
    CategoryDef { id: "desserts", name: tr("Десерты", "Desserts", "Shirinliklar"), items: DESSERTS },
    CategoryDef { id: "drinks", name: tr("Напитки (выбор)", "Drinks (selection)", "Ichimliklar (tanlov)"), items: DRINKS },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn item_ids_are_unique() {
        let mut seen = HashSet::new();
        for cat in CATEGORIES {
            for item in cat.items {
                assert!(seen.insert(item.id), "duplicate item id: {}", item.id);
            }
        }
    }

    #[test]
    fn featured_ids_exist_in_source() {
        for id in FEATURED_IDS {
            let found = CATEGORIES
                .iter()
                .any(|cat| cat.items.iter().any(|item| item.id == id));
            assert!(found, "featured id missing from menu: {id}");
        }
    }

    #[test]
    fn every_category_has_items() {
        assert!(CATEGORIES.len() >= 5);
        for cat in CATEGORIES {
            assert!(!cat.items.is_empty(), "empty category: {}", cat.id);
        }
    }

    #[test]
    fn prices_are_positive() {
        for cat in CATEGORIES {
            for item in cat.items {
                assert!(item.price > 0, "zero price: {}", item.id);
            }
        }
    }
}
