//! Assembly of every derived field shown on the review screen.

use serde::Serialize;

use crate::category::{category_path, product_group, ProductGroup, Sleeve};
use crate::compose::compose_product_name;
use crate::date::normalize_year_month;
use crate::identity::SkuIdentity;
use crate::record::ProductRecord;
use crate::sku::ParsedSku;

/// Derived registration fields for one identity, ready for human review.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegistrationDraft {
    pub code: String,
    pub color: String,
    pub locked: bool,
    /// `None` when the code failed validation; see `validation_error`.
    pub sku: Option<ParsedSku>,
    pub validation_error: Option<String>,
    pub category_path: Option<String>,
    pub product_group: Option<ProductGroup>,
    pub product_name: String,
    pub list_price: Option<i64>,
    pub sale_price: Option<i64>,
    pub made_in: Option<String>,
    /// Normalized to `YYYY.MM.01` when the record's date could be read.
    pub manufactured: Option<String>,
}

impl RegistrationDraft {
    /// Derives all fields. Category and group come only from a valid code; a
    /// missing record leaves the record-backed fields empty.
    #[must_use]
    pub fn prepare(identity: &SkuIdentity, record: Option<&ProductRecord>, sleeve: Sleeve) -> Self {
        let (sku, validation_error) = match identity.parse() {
            Ok(parsed) => (Some(parsed), None),
            Err(e) => (None, Some(e.to_string())),
        };

        let item_code = sku.as_ref().map(|s| s.meta.item_code.as_str());
        let category = item_code
            .and_then(|item| category_path(item, sleeve))
            .map(str::to_string);
        let group = item_code.map(product_group);

        let title = record.and_then(|r| r.title.as_deref()).unwrap_or_default();
        let manufactured = record
            .and_then(|r| r.manufactured.as_deref())
            .map(normalize_year_month)
            .filter(|d| !d.is_empty());

        Self {
            code: identity.code().to_string(),
            color: identity.color().to_string(),
            locked: identity.is_locked(),
            category_path: category,
            product_group: group,
            product_name: compose_product_name(identity, title),
            list_price: record.and_then(|r| r.list_price),
            sale_price: record.and_then(|r| r.sale_price),
            made_in: record.and_then(|r| r.made_in.clone()),
            manufactured,
            sku,
            validation_error,
        }
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.sku.is_some()
    }
}
