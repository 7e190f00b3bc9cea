/// View paths and mutation effect signals
///
/// The presentation layer caches rendered views. After a successful
/// mutation the API tells it which cached views are now stale and,
/// optionally, which view to navigate to. Both signals travel inside
/// the mutation response body as [`MutationEffects`].
use serde::{Deserialize, Serialize};

/// Logical path of the invoice listing view
pub const DASHBOARD_INVOICES: &str = "/dashboard/invoices";

/// Cache-invalidation and navigation signals emitted by a mutation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MutationEffects {
    /// View paths whose cached renders are now stale
    pub invalidate: Vec<String>,

    /// View the caller should transition to, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub navigate: Option<String>,
}

impl MutationEffects {
    /// Effects after creating or updating an invoice: the listing view
    /// is stale and the caller returns to it.
    pub fn invoice_saved() -> Self {
        Self {
            invalidate: vec![DASHBOARD_INVOICES.to_string()],
            navigate: Some(DASHBOARD_INVOICES.to_string()),
        }
    }

    /// Effects after deleting an invoice: the listing view is stale but
    /// the caller is already on it, so there is no navigation.
    pub fn invoice_deleted() -> Self {
        Self {
            invalidate: vec![DASHBOARD_INVOICES.to_string()],
            navigate: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invoice_saved_navigates_to_listing() {
        let effects = MutationEffects::invoice_saved();
        assert_eq!(effects.invalidate, vec![DASHBOARD_INVOICES]);
        assert_eq!(effects.navigate.as_deref(), Some(DASHBOARD_INVOICES));
    }

    #[test]
    fn test_invoice_deleted_does_not_navigate() {
        let effects = MutationEffects::invoice_deleted();
        assert_eq!(effects.invalidate, vec![DASHBOARD_INVOICES]);
        assert!(effects.navigate.is_none());
    }

    #[test]
    fn test_navigate_omitted_when_absent() {
        let json = serde_json::to_value(MutationEffects::invoice_deleted()).unwrap();
        assert!(json.get("navigate").is_none());
    }
}
