//! Product-code decoding and registration-field derivation for storefront
//! catalog entry.

pub mod app_config;
pub mod category;
pub mod compose;
pub mod config;
pub mod date;
pub mod draft;
pub mod error;
pub mod identity;
pub mod line;
pub mod record;
pub mod sku;
pub mod store;
pub mod submission;
pub mod tables;
pub mod token;

pub use app_config::{AppConfig, Environment};
pub use category::{category_path, product_group, ProductGroup, Sleeve};
pub use compose::compose_product_name;
pub use config::{load_app_config, load_app_config_from_env};
pub use date::normalize_year_month;
pub use draft::RegistrationDraft;
pub use error::{ConfigError, IdentityError, SkuError, StoreError, SubmissionError};
pub use identity::SkuIdentity;
pub use line::{line_group, LineGroup};
pub use record::ProductRecord;
pub use sku::{parse_sku, CodeLabel, ParsedSku, SkuField, SkuMeta};
pub use store::{executable_dir, resolve_out_root, DirectoryStore, RecordStore};
pub use submission::{SubmissionPayload, SubmissionSink};
pub use tables::CodeTables;
pub use token::{split_folder_token, FolderToken};
