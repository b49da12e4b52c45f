use skureg_core::{SubmissionError, SubmissionPayload, SubmissionSink};

/// Records each hand-off in the log. The storefront automation that types
/// these fields into the registration form runs outside this service.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingSink;

impl SubmissionSink for LoggingSink {
    fn submit(&self, payload: &SubmissionPayload) -> Result<(), SubmissionError> {
        tracing::info!(
            category_path = payload.category_path.as_deref().unwrap_or_default(),
            product_name = payload.product_name.as_deref().unwrap_or_default(),
            sale_price = ?payload.sale_price,
            "registration payload handed off"
        );
        Ok(())
    }
}
