use serde::Serialize;

use crate::sku::SKU_LEN;

/// A folder name split into product code and color sub-code.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FolderToken {
    pub code: String,
    pub color: String,
}

/// Splits a combined identifier such as a folder name (`"DMU2680105"`) into a
/// code and a trailing color, by length alone.
///
/// - 10 or more characters: the last two are the color, the code is the first
///   eight of what remains.
/// - 9 characters: the first eight are the code, the ninth is the color.
/// - 8 characters or fewer: the whole token is the code.
///
/// Nothing is validated here; run the code through [`crate::parse_sku`].
#[must_use]
pub fn split_folder_token(token: &str) -> FolderToken {
    let normalized = token.trim().to_uppercase();
    let chars: Vec<char> = normalized.chars().collect();
    let len = chars.len();

    if len >= SKU_LEN + 2 {
        let head = &chars[..len - 2];
        FolderToken {
            code: head.iter().take(SKU_LEN).collect(),
            color: chars[len - 2..].iter().collect(),
        }
    } else if len > SKU_LEN {
        FolderToken {
            code: chars[..SKU_LEN].iter().collect(),
            color: chars[SKU_LEN..].iter().collect(),
        }
    } else {
        FolderToken {
            code: normalized,
            color: String::new(),
        }
    }
}
