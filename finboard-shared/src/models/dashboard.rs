/// Dashboard summary cards
///
/// The four headline metrics shown on the dashboard. The three queries
/// run independently without a shared transaction: these are advisory
/// metrics, not financial truth, and read skew between them under
/// concurrent writes is accepted.
use serde::Serialize;
use sqlx::PgPool;

use crate::money::format_currency;

/// Aggregate metrics for the dashboard cards
#[derive(Debug, Clone, Serialize)]
pub struct DashboardCards {
    pub invoice_count: i64,
    pub customer_count: i64,

    /// Sum of paid invoice amounts, currency-formatted
    pub total_paid: String,

    /// Sum of pending invoice amounts, currency-formatted
    pub total_pending: String,
}

impl DashboardCards {
    /// Fetches the card metrics
    ///
    /// NULL sums (no invoices at all) default to zero before formatting.
    pub async fn fetch(pool: &PgPool) -> Result<Self, sqlx::Error> {
        let (invoice_count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM invoices")
            .fetch_one(pool)
            .await?;

        let (customer_count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM customers")
            .fetch_one(pool)
            .await?;

        let (paid, pending): (i64, i64) = sqlx::query_as(
            r#"
            SELECT
                COALESCE(SUM(CASE WHEN status = 'paid' THEN amount ELSE 0 END), 0)::BIGINT AS paid,
                COALESCE(SUM(CASE WHEN status = 'pending' THEN amount ELSE 0 END), 0)::BIGINT AS pending
            FROM invoices
            "#,
        )
        .fetch_one(pool)
        .await?;

        Ok(Self {
            invoice_count,
            customer_count,
            total_paid: format_currency(paid),
            total_pending: format_currency(pending),
        })
    }
}
