//! Item-code driven storefront taxonomy: category paths and merchandise groups.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Item code whose category path depends on [`Sleeve`].
pub const TOP_ITEM_CODE: &str = "2";

const TOP_LONG_PATH: &str = "스포츠/레저>등산>등산의류>긴팔티셔츠";
const TOP_SHORT_PATH: &str = "스포츠/레저>등산>등산의류>반팔티셔츠";

const CATEGORY_PATHS: &[(&str, &str)] = &[
    ("1", "스포츠/레저>등산>등산의류>재킷"),
    ("3", "스포츠/레저>등산>등산의류>바지"),
    ("4", "스포츠/레저>등산>등산의류>패딩"),
    ("5", "스포츠/레저>등산>등산의류>조끼"),
    ("6", "스포츠/레저>등산>등산의류>플리스"),
    ("7", "스포츠/레저>등산>등산의류>셔츠"),
    ("8", "스포츠/레저>등산>등산의류>치마"),
    ("9", "스포츠/레저>등산>등산의류>레깅스"),
    ("A", "스포츠/레저>등산>등산화"),
    ("S", "스포츠/레저>등산>등산잡화>샌들"),
    ("N", "스포츠/레저>등산>트레킹화"),
    ("B", "스포츠/레저>등산>등산가방>배낭"),
    ("C", "스포츠/레저>등산>등산가방>보조가방"),
    ("T", "스포츠/레저>캠핑>텐트"),
    ("V", "스포츠/레저>등산>등산장비>스틱"),
    ("G", "스포츠/레저>등산>등산잡화>장갑"),
    ("M", "스포츠/레저>등산>등산잡화>모자"),
];

const APPAREL: &[&str] = &["1", "2", "3", "4", "5", "6", "7", "8", "9"];
const FOOTWEAR: &[&str] = &["A", "S", "N"];
const BAGS: &[&str] = &["B", "C"];
const SPORTING_GOODS: &[&str] = &["T", "V"];

/// Sleeve subtype for the top item code.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sleeve {
    #[default]
    Long,
    Short,
}

impl FromStr for Sleeve {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "long" | "긴팔" => Ok(Sleeve::Long),
            "short" | "반팔" => Ok(Sleeve::Short),
            other => Err(format!("unknown sleeve \"{other}\"; expected long or short")),
        }
    }
}

/// Resolves the storefront category path for an item code.
///
/// Returns `None` for codes with no known category; callers show an empty
/// path rather than treating it as an error.
#[must_use]
pub fn category_path(item_code: &str, sleeve: Sleeve) -> Option<&'static str> {
    let code = item_code.trim();
    if code == TOP_ITEM_CODE {
        return Some(match sleeve {
            Sleeve::Long => TOP_LONG_PATH,
            Sleeve::Short => TOP_SHORT_PATH,
        });
    }
    CATEGORY_PATHS
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, path)| *path)
}

/// Coarse merchandise category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductGroup {
    Apparel,
    Footwear,
    Bags,
    SportingGoods,
    /// Catch-all for every code outside the named sets.
    Accessories,
}

impl ProductGroup {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            ProductGroup::Apparel => "의류",
            ProductGroup::Footwear => "신발",
            ProductGroup::Bags => "가방",
            ProductGroup::SportingGoods => "스포츠용품",
            ProductGroup::Accessories => "잡화",
        }
    }
}

impl std::fmt::Display for ProductGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Classifies an item code. Never fails: unknown codes are accessories.
#[must_use]
pub fn product_group(item_code: &str) -> ProductGroup {
    let code = item_code.trim();
    if APPAREL.contains(&code) {
        ProductGroup::Apparel
    } else if FOOTWEAR.contains(&code) {
        ProductGroup::Footwear
    } else if BAGS.contains(&code) {
        ProductGroup::Bags
    } else if SPORTING_GOODS.contains(&code) {
        ProductGroup::SportingGoods
    } else {
        ProductGroup::Accessories
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::CodeTables;

    #[test]
    fn top_path_depends_on_sleeve() {
        assert_eq!(
            category_path("2", Sleeve::Short),
            Some("스포츠/레저>등산>등산의류>반팔티셔츠")
        );
        assert_eq!(
            category_path("2", Sleeve::Long),
            Some("스포츠/레저>등산>등산의류>긴팔티셔츠")
        );
        assert_eq!(category_path("2", Sleeve::default()), category_path("2", Sleeve::Long));
    }

    #[test]
    fn sleeve_is_ignored_for_other_items() {
        assert_eq!(
            category_path("1", Sleeve::Short),
            category_path("1", Sleeve::Long)
        );
    }

    #[test]
    fn unknown_item_has_no_path() {
        assert_eq!(category_path("Z", Sleeve::Long), None);
        assert_eq!(category_path("", Sleeve::Long), None);
    }

    #[test]
    fn every_table_item_has_a_path() {
        let tables = CodeTables::standard();
        for code in APPAREL
            .iter()
            .chain(FOOTWEAR)
            .chain(BAGS)
            .chain(SPORTING_GOODS)
            .chain(&["G", "M"])
        {
            let c = code.chars().next().unwrap_or_default();
            assert!(tables.item(c).is_some(), "{code} missing from item table");
            assert!(category_path(code, Sleeve::Long).is_some(), "{code} has no path");
        }
    }

    #[test]
    fn groups_partition_item_codes() {
        assert_eq!(product_group("1"), ProductGroup::Apparel);
        assert_eq!(product_group("9"), ProductGroup::Apparel);
        assert_eq!(product_group("A"), ProductGroup::Footwear);
        assert_eq!(product_group("N"), ProductGroup::Footwear);
        assert_eq!(product_group("B"), ProductGroup::Bags);
        assert_eq!(product_group("T"), ProductGroup::SportingGoods);
        assert_eq!(product_group("G"), ProductGroup::Accessories);
        assert_eq!(product_group("M"), ProductGroup::Accessories);
        assert_eq!(product_group("?"), ProductGroup::Accessories);
    }

    #[test]
    fn sleeve_parses_english_and_korean() {
        assert_eq!("SHORT".parse::<Sleeve>(), Ok(Sleeve::Short));
        assert_eq!("긴팔".parse::<Sleeve>(), Ok(Sleeve::Long));
        assert!("medium".parse::<Sleeve>().is_err());
    }

    #[test]
    fn group_labels_are_korean() {
        assert_eq!(ProductGroup::SportingGoods.to_string(), "스포츠용품");
        let json = serde_json::to_string(&ProductGroup::SportingGoods).expect("serialize");
        assert_eq!(json, "\"sporting_goods\"");
    }
}
