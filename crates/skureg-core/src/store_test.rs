use std::fs;

use super::*;

/// Fresh directory under the system temp dir; removed by the guard on drop.
struct TempRoot(PathBuf);

impl TempRoot {
    fn new() -> Self {
        let path = std::env::temp_dir().join(format!("skureg-store-{}", uuid::Uuid::new_v4()));
        fs::create_dir_all(&path).expect("create temp root");
        Self(path)
    }

    fn write(&self, rel: &str, body: &str) {
        let path = self.0.join(rel);
        fs::create_dir_all(path.parent().expect("parent")).expect("create parent");
        fs::write(path, body).expect("write fixture");
    }
}

impl Drop for TempRoot {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.0);
    }
}

#[test]
fn fetch_reads_primary_layout() {
    let root = TempRoot::new();
    root.write(
        "DMU26101/product.json",
        r#"{"title":"자켓","sale_price":1000}"#,
    );
    let store = DirectoryStore::new(&root.0);
    let record = store.fetch("DMU26101").expect("fetch").expect("record");
    assert_eq!(record.title.as_deref(), Some("자켓"));
    assert_eq!(record.sale_price, Some(1000));
}

#[test]
fn fetch_falls_back_to_json_layouts() {
    let root = TempRoot::new();
    root.write("JSON/vDMU26101/product.json", r#"{"title":"v-prefixed"}"#);
    root.write("JSON/JWF24B15/product.json", r#"{"title":"plain"}"#);
    let store = DirectoryStore::new(&root.0);
    assert_eq!(
        store.fetch("DMU26101").expect("fetch").and_then(|r| r.title),
        Some("v-prefixed".to_string())
    );
    assert_eq!(
        store.fetch("JWF24B15").expect("fetch").and_then(|r| r.title),
        Some("plain".to_string())
    );
}

#[test]
fn fetch_missing_record_is_none() {
    let root = TempRoot::new();
    let store = DirectoryStore::new(&root.0);
    assert!(store.fetch("DMU26101").expect("fetch").is_none());
}

#[test]
fn fetch_rejects_blank_code() {
    let root = TempRoot::new();
    let store = DirectoryStore::new(&root.0);
    assert!(matches!(store.fetch("  "), Err(StoreError::EmptyCode)));
}

#[test]
fn fetch_ignores_path_traversal() {
    let root = TempRoot::new();
    root.write("product.json", "{}");
    let store = DirectoryStore::new(root.0.join("sub"));
    assert!(store.fetch("..").expect("fetch").is_none());
    assert!(store.fetch("../x").expect("fetch").is_none());
}

#[test]
fn fetch_reports_unparseable_json() {
    let root = TempRoot::new();
    root.write("DMU26101/product.json", "{broken");
    let store = DirectoryStore::new(&root.0);
    assert!(matches!(
        store.fetch("DMU26101"),
        Err(StoreError::Parse { .. })
    ));
}

#[test]
fn list_codes_is_sorted_and_skips_folders_without_records() {
    let root = TempRoot::new();
    root.write("JWF24B15/product.json", "{}");
    root.write("DMU26101/product.json", "{}");
    root.write("empty/readme.txt", "x");
    root.write("loose.json", "{}");
    let store = DirectoryStore::new(&root.0);
    assert_eq!(
        store.list_codes().expect("list"),
        vec!["DMU26101".to_string(), "JWF24B15".to_string()]
    );
}

#[test]
fn resolve_out_root_prefers_explicit_directory() {
    let root = TempRoot::new();
    root.write("kv_mvp/out/.keep", "");
    let explicit = root.0.join("elsewhere");
    fs::create_dir_all(&explicit).expect("mkdir");
    assert_eq!(
        resolve_out_root(Some(&explicit), &root.0, None).expect("resolve"),
        explicit
    );
}

#[test]
fn resolve_out_root_falls_back_to_kv_mvp_out() {
    let root = TempRoot::new();
    root.write("kv_mvp/out/.keep", "");
    let missing = root.0.join("missing");
    assert_eq!(
        resolve_out_root(Some(&missing), &root.0, None).expect("resolve"),
        root.0.join("kv_mvp").join("out")
    );
}

#[test]
fn resolve_out_root_fails_when_nothing_exists() {
    let root = TempRoot::new();
    let cwd = root.0.join("a").join("b");
    fs::create_dir_all(&cwd).expect("mkdir");
    assert!(matches!(
        resolve_out_root(None, &cwd, Some(&cwd)),
        Err(StoreError::OutRootNotFound)
    ));
}

#[test]
fn resolve_out_root_checks_sibling_kv_checkout() {
    let root = TempRoot::new();
    root.write("kv/kv_mvp/out/.keep", "");
    let cwd = root.0.join("server");
    fs::create_dir_all(&cwd).expect("mkdir");
    assert_eq!(
        resolve_out_root(None, &cwd, None).expect("resolve"),
        cwd.join("..").join("kv").join("kv_mvp").join("out")
    );
}

#[test]
fn resolve_out_root_falls_back_to_executable_dir() {
    let root = TempRoot::new();
    root.write("bin/kv_mvp/out/.keep", "");
    let cwd = root.0.join("elsewhere");
    fs::create_dir_all(&cwd).expect("mkdir");
    let exe_dir = root.0.join("bin");
    assert_eq!(
        resolve_out_root(None, &cwd, Some(&exe_dir)).expect("resolve"),
        exe_dir.join("kv_mvp").join("out")
    );
}

#[test]
fn resolve_out_root_checks_nested_checkout_beside_executable() {
    let root = TempRoot::new();
    root.write("kv_mvp/kv_mvp/out/.keep", "");
    let exe_dir = root.0.join("bin");
    fs::create_dir_all(&exe_dir).expect("mkdir");
    assert_eq!(
        resolve_out_root(None, &exe_dir, Some(&exe_dir)).expect("resolve"),
        exe_dir.join("..").join("kv_mvp").join("kv_mvp").join("out")
    );
}

#[test]
fn resolve_out_root_ignores_bare_out_folder() {
    let root = TempRoot::new();
    root.write("out/.keep", "");
    assert!(matches!(
        resolve_out_root(None, &root.0, None),
        Err(StoreError::OutRootNotFound)
    ));
}
