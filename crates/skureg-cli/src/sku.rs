//! Stateless code-table commands: parse, split, category, compose, date.

use serde::Serialize;
use skureg_core::{
    category_path, compose_product_name, normalize_year_month, parse_sku, product_group,
    split_folder_token, ProductGroup, SkuIdentity, Sleeve,
};

use crate::print_json;

#[derive(Debug, Serialize)]
struct CategoryOutput<'a> {
    item: &'a str,
    sleeve: Sleeve,
    /// Empty when the item code has no known category.
    category_path: &'a str,
    product_group: ProductGroup,
}

/// # Errors
///
/// Returns the validation failure so the process exits non-zero.
pub(crate) fn run_parse(code: &str, json: bool) -> anyhow::Result<()> {
    let parsed = parse_sku(code)?;
    if json {
        return print_json(&parsed);
    }

    println!("code      {}", parsed.normalized);
    for (field, value) in parsed.fields() {
        println!("{:<9} {:<3} {}", field.name(), value.code, value.label);
    }
    println!("full year {}", parsed.meta.full_year);
    Ok(())
}

pub(crate) fn run_split(token: &str, json: bool) -> anyhow::Result<()> {
    let split = split_folder_token(token);
    if json {
        return print_json(&split);
    }
    println!("code  {}", split.code);
    println!("color {}", split.color);
    Ok(())
}

pub(crate) fn run_category(item: &str, sleeve: Sleeve, json: bool) -> anyhow::Result<()> {
    let output = CategoryOutput {
        item: item.trim(),
        sleeve,
        category_path: category_path(item, sleeve).unwrap_or_default(),
        product_group: product_group(item),
    };
    if json {
        return print_json(&output);
    }
    if output.category_path.is_empty() {
        tracing::warn!(item = output.item, "no category path for item code");
    }
    println!("category {}", output.category_path);
    println!("group    {}", output.product_group);
    Ok(())
}

pub(crate) fn run_compose(code: &str, color: &str, title: &str, json: bool) -> anyhow::Result<()> {
    let identity = SkuIdentity::new(code, color);
    let name = compose_product_name(&identity, title);
    if json {
        return print_json(&serde_json::json!({ "product_name": name }));
    }
    println!("{name}");
    Ok(())
}

pub(crate) fn run_date(raw: &str, json: bool) -> anyhow::Result<()> {
    let normalized = normalize_year_month(raw);
    if json {
        return print_json(&serde_json::json!({ "manufactured": normalized }));
    }
    println!("{normalized}");
    Ok(())
}
