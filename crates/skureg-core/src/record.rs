//! Description records produced by the product-page collector.
//!
//! The collector writes one `product.json` per product. Only a handful of its
//! keys matter here and any of them may be missing or oddly typed, so the
//! record is read field by field from a [`serde_json::Value`] instead of
//! through a strict `Deserialize` impl.

use serde::Serialize;
use serde_json::Value;

/// Top-level key holding the manufacturing country.
pub const MADE_IN_KEY: &str = "제조국";

/// Two-level path to the manufacturing year/month inside the product notice.
pub const MANUFACTURED_PATH: [&str; 2] = ["gvnt_info", "제조연월(수입연월)"];

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProductRecord {
    pub code: Option<String>,
    pub title: Option<String>,
    /// Prices are whole won.
    pub list_price: Option<i64>,
    pub sale_price: Option<i64>,
    pub source_url: Option<String>,
    pub made_in: Option<String>,
    /// Raw manufacturing date as the collector found it, e.g. `"2024년 03월"`.
    pub manufactured: Option<String>,
}

impl ProductRecord {
    /// Reads a record from collector JSON. Never fails; unusable fields are `None`.
    #[must_use]
    pub fn from_value(value: &Value) -> Self {
        let [notice_key, date_key] = MANUFACTURED_PATH;
        let manufactured = text(value.get(notice_key).and_then(|n| n.get(date_key)))
            .or_else(|| text(value.get(date_key)));

        Self {
            code: text(value.get("code")),
            title: text(value.get("title")),
            list_price: price(value.get("list_price")),
            sale_price: price(value.get("sale_price")),
            source_url: text(value.get("source_url")),
            made_in: text(value.get(MADE_IN_KEY)),
            manufactured,
        }
    }

    /// # Errors
    ///
    /// Returns the `serde_json` error when `raw` is not JSON at all.
    pub fn from_json_str(raw: &str) -> Result<Self, serde_json::Error> {
        let value: Value = serde_json::from_str(raw)?;
        Ok(Self::from_value(&value))
    }
}

fn text(value: Option<&Value>) -> Option<String> {
    let s = match value? {
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        _ => return None,
    };
    (!s.is_empty()).then_some(s)
}

/// Whole-won price. Negative or unreadable amounts are `None`.
#[allow(clippy::cast_possible_truncation)]
fn price(value: Option<&Value>) -> Option<i64> {
    let amount = match value? {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f.round() as i64)),
        // "129,000", "129,000원" or "59,000.00"
        Value::String(s) => {
            let cleaned: String = s
                .trim()
                .trim_end_matches('원')
                .chars()
                .filter(|c| *c != ',' && !c.is_whitespace())
                .collect();
            cleaned
                .parse::<f64>()
                .ok()
                .filter(|f| f.is_finite())
                .map(|f| f.round() as i64)
        }
        _ => None,
    };
    amount.filter(|p| *p >= 0)
}
