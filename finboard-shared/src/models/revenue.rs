/// Revenue reference table
///
/// Read-only monthly revenue figures for the dashboard summary chart.
/// Populated only by the seeding routine.
use serde::Serialize;
use sqlx::PgPool;

/// One month of revenue
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Revenue {
    /// Short month code, e.g. "Jan"
    pub month: String,

    /// Revenue for the month, in whole currency units
    pub revenue: i64,
}

impl Revenue {
    /// Fetches all revenue rows
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Self>, sqlx::Error> {
        let rows = sqlx::query_as::<_, Revenue>("SELECT month, revenue FROM revenue")
            .fetch_all(pool)
            .await?;

        Ok(rows)
    }
}
