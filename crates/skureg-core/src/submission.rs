//! Hand-off of reviewed fields to the storefront registration form.

use serde::Serialize;

use crate::draft::RegistrationDraft;
use crate::error::SubmissionError;

/// Fields typed into the registration form. At least one is always present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmissionPayload {
    pub category_path: Option<String>,
    pub product_name: Option<String>,
    pub sale_price: Option<i64>,
}

impl SubmissionPayload {
    /// Trims the text fields and drops empty ones.
    ///
    /// # Errors
    ///
    /// Returns [`SubmissionError::Empty`] when nothing is left to submit.
    pub fn new(
        category_path: Option<&str>,
        product_name: Option<&str>,
        sale_price: Option<i64>,
    ) -> Result<Self, SubmissionError> {
        let non_empty = |s: Option<&str>| {
            s.map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
        };
        let payload = Self {
            category_path: non_empty(category_path),
            product_name: non_empty(product_name),
            sale_price,
        };
        if payload.category_path.is_none()
            && payload.product_name.is_none()
            && payload.sale_price.is_none()
        {
            return Err(SubmissionError::Empty);
        }
        Ok(payload)
    }

    /// # Errors
    ///
    /// Returns [`SubmissionError::Empty`] when the draft has no category, name
    /// or sale price.
    pub fn from_draft(draft: &RegistrationDraft) -> Result<Self, SubmissionError> {
        Self::new(
            draft.category_path.as_deref(),
            Some(draft.product_name.as_str()),
            draft.sale_price,
        )
    }
}

/// Receiver for reviewed payloads, typically the browser automation that
/// fills in the storefront form.
pub trait SubmissionSink {
    /// Called at most once per user action.
    ///
    /// # Errors
    ///
    /// Returns [`SubmissionError::Sink`] when the receiver refuses the payload.
    fn submit(&self, payload: &SubmissionPayload) -> Result<(), SubmissionError>;
}
