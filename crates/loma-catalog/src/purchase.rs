use loma_types::ListingId;
use serde::Serialize;

use crate::{Error, Result};

/// Receipt returned by a purchase or booking flow
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PurchaseConfirmation {
    pub listing_id: ListingId,
    pub reference: String,
}

/// Hook behind the page's call-to-action control.
///
/// Payment and booking are handled by an external service; the page only
/// hands it the listing id and shows whatever comes back.
pub trait PurchaseHook {
    fn initiate(&self, listing_id: ListingId) -> Result<PurchaseConfirmation>;
}

/// Hook used when no purchase service is configured
#[derive(Debug, Clone, Copy, Default)]
pub struct UnavailablePurchaseHook;

impl PurchaseHook for UnavailablePurchaseHook {
    fn initiate(&self, listing_id: ListingId) -> Result<PurchaseConfirmation> {
        tracing::debug!(%listing_id, "call-to-action pressed without a purchase service");
        Err(Error::Unavailable(
            "purchase flow is not available".to_string(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unavailable_hook_always_errors() {
        let err = UnavailablePurchaseHook.initiate(ListingId(1)).unwrap_err();
        assert_eq!(err.to_string(), "Unavailable: purchase flow is not available");
    }
}
