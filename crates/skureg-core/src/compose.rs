//! Storefront display-name composition.

use crate::identity::SkuIdentity;
use crate::sku::SKU_LEN;
use crate::tables::CodeTables;

/// Leading token added when the digit at [`POP_DIGIT_INDEX`] is `8` or `9`.
pub const POP_PREFIX: &str = "POP";

/// Index of the digit that decides the POP prefix. The composer reads its
/// line window as characters 5..7, one position ahead of the parser's.
pub const POP_DIGIT_INDEX: usize = 5;

/// Builds the display name for the current identity and an external title.
///
/// Token order: optional `POP` (character at index 5 is `8` or `9`), brand
/// (age code), gender display, item label, title, then `"<code> <color>"`.
/// Codes missing from a table contribute no token. Whitespace runs collapse
/// to one space.
/// When the code is not exactly eight characters the title is returned as is.
#[must_use]
pub fn compose_product_name(identity: &SkuIdentity, title: &str) -> String {
    let code = identity.code();
    let chars: Vec<char> = code.chars().collect();
    if chars.len() != SKU_LEN {
        return title.to_string();
    }

    let tables = CodeTables::standard();
    let suffix = format!("{code} {}", identity.color());

    let mut tokens: Vec<&str> = Vec::with_capacity(6);
    if matches!(chars[POP_DIGIT_INDEX], '8' | '9') {
        tokens.push(POP_PREFIX);
    }
    tokens.extend(tables.brand(chars[0]));
    tokens.extend(tables.gender_display(chars[1]));
    tokens.extend(tables.item(chars[5]));
    tokens.push(title.trim());
    tokens.push(&suffix);

    collapse_whitespace(&tokens.join(" "))
}

fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}
