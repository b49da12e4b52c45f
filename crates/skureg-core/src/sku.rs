//! Fixed-width product code parsing.
//!
//! A product code is eight characters:
//!
//! ```text
//! D  M  U  2 6  1  0 1
//! |  |  |  |    |  |
//! |  |  |  |    |  +-- line (2 digits, 1-99)
//! |  |  |  |    +----- item
//! |  |  |  +---------- year (2 digits, 20xx)
//! |  |  +------------- season
//! |  +---------------- gender
//! +------------------- age
//! ```
//!
//! Validation is all-or-nothing: a [`ParsedSku`] only exists when every field
//! resolved, otherwise the first failing check is returned as a [`SkuError`].

use std::str::FromStr;

use serde::Serialize;

use crate::error::SkuError;
use crate::line::{line_group, LineGroup};
use crate::tables::CodeTables;

/// Number of characters in a product code.
pub const SKU_LEN: usize = 8;

/// The six positional fields of a product code, in source order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SkuField {
    Age,
    Gender,
    Season,
    Year,
    Item,
    Line,
}

impl SkuField {
    /// 1-based character positions covered by the field.
    #[must_use]
    pub fn positions(self) -> (usize, usize) {
        match self {
            SkuField::Age => (1, 1),
            SkuField::Gender => (2, 2),
            SkuField::Season => (3, 3),
            SkuField::Year => (4, 5),
            SkuField::Item => (6, 6),
            SkuField::Line => (7, 8),
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            SkuField::Age => "age",
            SkuField::Gender => "gender",
            SkuField::Season => "season",
            SkuField::Year => "year",
            SkuField::Item => "item",
            SkuField::Line => "line",
        }
    }
}

impl std::fmt::Display for SkuField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.positions() {
            (start, end) if start == end => write!(f, "{} (position {start})", self.name()),
            (start, end) => write!(f, "{} (positions {start}-{end})", self.name()),
        }
    }
}

/// A raw code paired with its human-readable label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CodeLabel {
    pub code: String,
    pub label: String,
}

impl CodeLabel {
    fn new(code: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            label: label.into(),
        }
    }
}

/// Convenience values derived from the parsed fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkuMeta {
    /// `2000 + yy`.
    pub full_year: u16,
    /// Storefront wording for the gender code, e.g. `"남녀공용"` for `U`.
    pub gender_display: String,
    pub item_code: String,
    pub line_number: u32,
    pub line_group: LineGroup,
}

/// A fully validated product code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedSku {
    /// Trimmed, uppercased input.
    pub normalized: String,
    pub age: CodeLabel,
    pub gender: CodeLabel,
    pub season: CodeLabel,
    pub year: CodeLabel,
    pub item: CodeLabel,
    /// Line digits; the label is the line-group letter.
    pub line: CodeLabel,
    pub meta: SkuMeta,
}

impl ParsedSku {
    /// The six fields in positional order.
    #[must_use]
    pub fn fields(&self) -> [(SkuField, &CodeLabel); 6] {
        [
            (SkuField::Age, &self.age),
            (SkuField::Gender, &self.gender),
            (SkuField::Season, &self.season),
            (SkuField::Year, &self.year),
            (SkuField::Item, &self.item),
            (SkuField::Line, &self.line),
        ]
    }
}

impl FromStr for ParsedSku {
    type Err = SkuError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_sku(s)
    }
}

/// Parses and validates a product code.
///
/// # Errors
///
/// Returns the first failing check as a [`SkuError`]; see the module docs for
/// the field layout.
pub fn parse_sku(raw: &str) -> Result<ParsedSku, SkuError> {
    let normalized = raw.trim().to_uppercase();
    let chars: Vec<char> = normalized.chars().collect();
    if chars.len() != SKU_LEN {
        return Err(SkuError::Length { len: chars.len() });
    }

    let age = chars[0];
    let gender = chars[1];
    let season = chars[2];
    let year_digits: String = chars[3..5].iter().collect();
    let item = chars[5];
    let line_digits: String = chars[6..8].iter().collect();

    let year_number = two_digits(SkuField::Year, &year_digits)?;
    let line_number = two_digits(SkuField::Line, &line_digits)?;

    let tables = CodeTables::standard();
    let age_label = lookup(SkuField::Age, age, tables.age(age))?;
    let gender_label = lookup(SkuField::Gender, gender, tables.gender(gender))?;
    let season_label = lookup(SkuField::Season, season, tables.season(season))?;
    let item_label = lookup(SkuField::Item, item, tables.item(item))?;

    let group = line_group(line_number).ok_or(SkuError::Range {
        field: SkuField::Line,
        value: line_number,
    })?;

    // Two decimal digits always fit; 2000 + 99 is well inside u16.
    let full_year = 2000 + u16::try_from(year_number).unwrap_or_default();

    Ok(ParsedSku {
        age: CodeLabel::new(age, age_label),
        gender: CodeLabel::new(gender, gender_label),
        season: CodeLabel::new(season, season_label),
        year: CodeLabel::new(year_digits, format!("{full_year}년도")),
        item: CodeLabel::new(item, item_label),
        line: CodeLabel::new(line_digits, group.code()),
        meta: SkuMeta {
            full_year,
            gender_display: tables
                .gender_display(gender)
                .unwrap_or(gender_label)
                .to_string(),
            item_code: item.to_string(),
            line_number,
            line_group: group,
        },
        normalized,
    })
}

fn two_digits(field: SkuField, value: &str) -> Result<u32, SkuError> {
    let format_error = || SkuError::Format {
        field,
        value: value.to_string(),
    };
    if value.chars().count() != 2 || !value.chars().all(|c| c.is_ascii_digit()) {
        return Err(format_error());
    }
    value.parse::<u32>().map_err(|_| format_error())
}

fn lookup(
    field: SkuField,
    code: char,
    label: Option<&'static str>,
) -> Result<&'static str, SkuError> {
    label.ok_or(SkuError::Lookup { field, code })
}

#[cfg(test)]
#[path = "sku_test.rs"]
mod tests;
