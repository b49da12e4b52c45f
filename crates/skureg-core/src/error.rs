use thiserror::Error;

use crate::sku::SkuField;

/// The single validation failure reported for a rejected product code.
///
/// Variants are checked in a fixed order (length, year digits, line digits,
/// age, gender, season, item, line range) and only the first is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SkuError {
    #[error("product code must be exactly 8 characters, got {len}")]
    Length { len: usize },

    #[error("{field} must be two digits, got \"{value}\"")]
    Format { field: SkuField, value: String },

    #[error("unknown {field} code \"{code}\"")]
    Lookup { field: SkuField, code: char },

    #[error("{field} must be between 1 and 99, got {value}")]
    Range { field: SkuField, value: u32 },
}

impl SkuError {
    /// The positional field that failed, if the failure is tied to one.
    #[must_use]
    pub fn field(&self) -> Option<SkuField> {
        match self {
            SkuError::Length { .. } => None,
            SkuError::Format { field, .. }
            | SkuError::Lookup { field, .. }
            | SkuError::Range { field, .. } => Some(*field),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdentityError {
    #[error("product code is locked to the loaded folder; unlock it before editing")]
    Locked,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmissionError {
    #[error("category path, product name and sale price are all empty")]
    Empty,

    #[error("submission sink rejected the payload: {0}")]
    Sink(String),
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("description output folder not found; set SKUREG_OUT_ROOT or create kv_mvp/out")]
    OutRootNotFound,

    #[error("product code is empty")]
    EmptyCode,

    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
