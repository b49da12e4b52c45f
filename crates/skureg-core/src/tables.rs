//! Static code tables for the classification axes encoded in a product code.
//!
//! Each axis is keyed by a single uppercase character. The tables are plain
//! `'static` slices so they can be inspected in tests; [`CodeTables::standard`]
//! builds hash maps over them once per process.

use std::collections::HashMap;
use std::sync::LazyLock;

const AGE: &[(char, &str)] = &[('D', "아이더 성인"), ('J', "아이더 키즈")];

/// Brand label printed at the front of a composed product name.
const BRAND: &[(char, &str)] = &[('D', "아이더"), ('J', "아이더 키즈")];

const GENDER: &[(char, &str)] = &[('M', "남성"), ('W', "여성"), ('U', "공용")];

/// Storefront wording for the gender axis; differs from [`GENDER`] for unisex.
const GENDER_DISPLAY: &[(char, &str)] = &[('M', "남성"), ('W', "여성"), ('U', "남녀공용")];

const SEASON: &[(char, &str)] = &[
    ('P', "봄"),
    ('M', "여름"),
    ('U', "가을"),
    ('W', "겨울"),
    ('S', "봄/여름"),
    ('F', "가을/겨울"),
    ('A', "사계절"),
];

const ITEM: &[(char, &str)] = &[
    ('1', "자켓"),
    ('2', "티셔츠"),
    ('3', "팬츠"),
    ('4', "다운"),
    ('5', "베스트"),
    ('6', "플리스"),
    ('7', "셔츠"),
    ('8', "스커트"),
    ('9', "레깅스"),
    ('A', "등산화"),
    ('S', "샌들"),
    ('N', "트레킹화"),
    ('B', "백팩"),
    ('C', "크로스백"),
    ('T', "텐트"),
    ('V', "스틱"),
    ('G', "장갑"),
    ('M', "모자"),
];

static STANDARD: LazyLock<CodeTables> = LazyLock::new(CodeTables::build);

/// Lookup maps for every classification axis.
#[derive(Debug)]
pub struct CodeTables {
    age: HashMap<char, &'static str>,
    brand: HashMap<char, &'static str>,
    gender: HashMap<char, &'static str>,
    gender_display: HashMap<char, &'static str>,
    season: HashMap<char, &'static str>,
    item: HashMap<char, &'static str>,
}

impl CodeTables {
    /// The process-wide tables, built on first access.
    #[must_use]
    pub fn standard() -> &'static CodeTables {
        &STANDARD
    }

    fn build() -> Self {
        fn map(entries: &[(char, &'static str)]) -> HashMap<char, &'static str> {
            entries.iter().copied().collect()
        }

        Self {
            age: map(AGE),
            brand: map(BRAND),
            gender: map(GENDER),
            gender_display: map(GENDER_DISPLAY),
            season: map(SEASON),
            item: map(ITEM),
        }
    }

    #[must_use]
    pub fn age(&self, code: char) -> Option<&'static str> {
        self.age.get(&code).copied()
    }

    #[must_use]
    pub fn brand(&self, code: char) -> Option<&'static str> {
        self.brand.get(&code).copied()
    }

    #[must_use]
    pub fn gender(&self, code: char) -> Option<&'static str> {
        self.gender.get(&code).copied()
    }

    #[must_use]
    pub fn gender_display(&self, code: char) -> Option<&'static str> {
        self.gender_display.get(&code).copied()
    }

    #[must_use]
    pub fn season(&self, code: char) -> Option<&'static str> {
        self.season.get(&code).copied()
    }

    #[must_use]
    pub fn item(&self, code: char) -> Option<&'static str> {
        self.item.get(&code).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_age_code_has_a_brand_label() {
        let tables = CodeTables::standard();
        for (code, _) in AGE {
            assert!(tables.brand(*code).is_some(), "missing brand for {code}");
        }
    }

    #[test]
    fn every_gender_code_has_a_display_label() {
        let tables = CodeTables::standard();
        for (code, _) in GENDER {
            assert!(
                tables.gender_display(*code).is_some(),
                "missing display label for {code}"
            );
        }
    }

    #[test]
    fn item_table_has_no_duplicate_codes() {
        assert_eq!(CodeTables::standard().item.len(), ITEM.len());
    }

    #[test]
    fn lookups_are_case_sensitive() {
        let tables = CodeTables::standard();
        assert_eq!(tables.age('D'), Some("아이더 성인"));
        assert_eq!(tables.age('d'), None);
    }

    #[test]
    fn unisex_display_differs_from_axis_label() {
        let tables = CodeTables::standard();
        assert_eq!(tables.gender('U'), Some("공용"));
        assert_eq!(tables.gender_display('U'), Some("남녀공용"));
    }
}
