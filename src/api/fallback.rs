// file: src/api/fallback.rs
// description: uniform remote-call-or-placeholder policy
// reference: UI resilience behavior of the Document Analysis dashboard

use crate::error::Result;
use tracing::warn;

/// Resilience policy applied to every data-fetching call: attempt the
/// remote call; on any failure, log it and return the declared
/// placeholder value. When placeholders are disabled the error is
/// propagated unchanged.
pub async fn or_placeholder<T, F>(what: &str, enabled: bool, call: F, placeholder: fn() -> T) -> Result<T>
where
    F: Future<Output = Result<T>>,
{
    match call.await {
        Ok(value) => Ok(value),
        Err(e) if enabled => {
            warn!("{} unavailable, using placeholder data: {}", what, e);
            Ok(placeholder())
        }
        Err(e) => Err(e),
    }
}
