//! The active code/color pair for a registration session.

use serde::Serialize;

use crate::error::{IdentityError, SkuError};
use crate::sku::{parse_sku, ParsedSku, SKU_LEN};
use crate::token::{split_folder_token, FolderToken};

/// Maximum characters in a color sub-code.
pub const COLOR_LEN: usize = 2;

/// Code and color the name composer reads from.
///
/// Every write trims, uppercases and truncates. Once the pair has been taken
/// from a folder token the identity is locked so the displayed code cannot
/// drift away from the description record loaded for that folder.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SkuIdentity {
    code: String,
    color: String,
    locked: bool,
}

impl SkuIdentity {
    #[must_use]
    pub fn new(code: &str, color: &str) -> Self {
        Self {
            code: clamp(code, SKU_LEN),
            color: clamp(color, COLOR_LEN),
            locked: false,
        }
    }

    /// Builds a locked identity from a folder token.
    #[must_use]
    pub fn from_folder_token(token: &str) -> Self {
        let mut identity = Self::default();
        identity.apply_folder_token(token);
        identity
    }

    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    #[must_use]
    pub fn color(&self) -> &str {
        &self.color
    }

    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// # Errors
    ///
    /// Returns [`IdentityError::Locked`] while the identity is locked.
    pub fn set_code(&mut self, raw: &str) -> Result<(), IdentityError> {
        self.ensure_unlocked()?;
        self.code = clamp(raw, SKU_LEN);
        Ok(())
    }

    /// # Errors
    ///
    /// Returns [`IdentityError::Locked`] while the identity is locked.
    pub fn set_color(&mut self, raw: &str) -> Result<(), IdentityError> {
        self.ensure_unlocked()?;
        self.color = clamp(raw, COLOR_LEN);
        Ok(())
    }

    /// Replaces both fields from a folder token and locks the identity.
    ///
    /// A new folder pick always wins, even over an existing lock.
    pub fn apply_folder_token(&mut self, token: &str) -> FolderToken {
        let split = split_folder_token(token);
        self.code = clamp(&split.code, SKU_LEN);
        self.color = clamp(&split.color, COLOR_LEN);
        self.locked = true;
        split
    }

    pub fn lock(&mut self) {
        self.locked = true;
    }

    pub fn unlock(&mut self) {
        self.locked = false;
    }

    /// Parses the current code.
    ///
    /// # Errors
    ///
    /// Returns the first validation failure, see [`parse_sku`].
    pub fn parse(&self) -> Result<ParsedSku, SkuError> {
        parse_sku(&self.code)
    }

    fn ensure_unlocked(&self) -> Result<(), IdentityError> {
        if self.locked {
            Err(IdentityError::Locked)
        } else {
            Ok(())
        }
    }
}

fn clamp(raw: &str, max: usize) -> String {
    raw.trim().to_uppercase().chars().take(max).collect()
}
