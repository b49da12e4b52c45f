//! Commands that read the collector output folder.

use std::path::Path;

use skureg_core::{
    executable_dir, resolve_out_root, DirectoryStore, ProductRecord, RecordStore,
    RegistrationDraft, SkuIdentity, Sleeve, SubmissionPayload,
};

use crate::print_json;

/// How the identity for `prepare` was given on the command line.
#[derive(Debug, Default)]
pub(crate) struct IdentityArgs {
    pub token: Option<String>,
    pub code: Option<String>,
    pub color: Option<String>,
}

impl IdentityArgs {
    pub(crate) fn identity(&self) -> SkuIdentity {
        match &self.token {
            Some(token) => SkuIdentity::from_folder_token(token),
            None => SkuIdentity::new(
                self.code.as_deref().unwrap_or_default(),
                self.color.as_deref().unwrap_or_default(),
            ),
        }
    }
}

fn open_store(out_root: Option<&Path>) -> anyhow::Result<DirectoryStore> {
    let cwd = std::env::current_dir()?;
    let root = resolve_out_root(out_root, &cwd, executable_dir().as_deref())?;
    tracing::debug!(root = %root.display(), "using collector output folder");
    Ok(DirectoryStore::new(root))
}

/// # Errors
///
/// Returns an error when no output folder can be found or listed.
pub(crate) fn run_records(out_root: Option<&Path>, json: bool) -> anyhow::Result<()> {
    let store = open_store(out_root)?;
    let codes = store.list_codes()?;
    if json {
        return print_json(&codes);
    }
    for code in &codes {
        println!("{code}");
    }
    tracing::info!(count = codes.len(), "listed description records");
    Ok(())
}

/// Loads the description record for `code`, treating every failure as
/// "no record" so the draft can still be reviewed.
fn load_record(out_root: Option<&Path>, code: &str) -> Option<ProductRecord> {
    let store = match open_store(out_root) {
        Ok(store) => store,
        Err(e) => {
            tracing::warn!(error = %e, "description records unavailable");
            return None;
        }
    };
    match store.fetch(code) {
        Ok(record) => record,
        Err(e) => {
            tracing::warn!(code, error = %e, "ignoring unreadable description record");
            None
        }
    }
}

/// # Errors
///
/// Returns the validation message when the code is invalid, after printing
/// the draft so the remaining fields can still be reviewed.
pub(crate) fn run_prepare(
    args: &IdentityArgs,
    sleeve: Sleeve,
    out_root: Option<&Path>,
    json: bool,
) -> anyhow::Result<()> {
    let identity = args.identity();
    let record = load_record(out_root, identity.code());
    let draft = RegistrationDraft::prepare(&identity, record.as_ref(), sleeve);

    if json {
        print_json(&draft)?;
    } else {
        print_draft(&draft);
    }

    if let Some(message) = &draft.validation_error {
        anyhow::bail!("{message}");
    }
    if SubmissionPayload::from_draft(&draft).is_err() {
        tracing::warn!("draft has nothing to submit");
    }
    Ok(())
}

fn print_draft(draft: &RegistrationDraft) {
    let or_dash = |v: Option<String>| v.unwrap_or_else(|| "-".to_string());

    println!("code          {}", draft.code);
    println!("color         {}", draft.color);
    if let Some(sku) = &draft.sku {
        for (field, value) in sku.fields() {
            println!("{:<13} {} ({})", field.name(), value.label, value.code);
        }
    }
    println!("category      {}", or_dash(draft.category_path.clone()));
    println!(
        "group         {}",
        or_dash(draft.product_group.map(|g| g.to_string()))
    );
    println!("product name  {}", draft.product_name);
    println!("list price    {}", or_dash(draft.list_price.map(|p| p.to_string())));
    println!("sale price    {}", or_dash(draft.sale_price.map(|p| p.to_string())));
    println!("made in       {}", or_dash(draft.made_in.clone()));
    println!("manufactured  {}", or_dash(draft.manufactured.clone()));
}
