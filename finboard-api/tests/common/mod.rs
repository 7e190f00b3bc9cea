/// Common test utilities for integration tests
///
/// Shared infrastructure for API integration tests: test database
/// setup, seeded customers/users, and request helpers. The tests that
/// use this module require a running PostgreSQL database configured via
/// the DB_* environment variables.
use finboard_api::app::{build_router, AppState};
use finboard_api::config::Config;
use finboard_shared::auth::password::hash_password;
use finboard_shared::db::migrations::run_migrations;
use finboard_shared::db::pool::create_pool;
use sqlx::PgPool;
use uuid::Uuid;

/// Test context containing all necessary resources
pub struct TestContext {
    pub db: PgPool,
    pub app: axum::Router,
}

impl TestContext {
    /// Creates a new test context with a migrated database
    pub async fn new() -> anyhow::Result<Self> {
        let config = Config::from_env()?;

        let db = create_pool(config.database.clone()).await?;
        run_migrations(&db).await?;

        let state = AppState::new(db.clone(), config);
        let app = build_router(state);

        Ok(TestContext { db, app })
    }

    /// Seeds a customer row directly; the runtime never creates
    /// customers, so tests do it by hand.
    pub async fn seed_customer(&self, name: &str) -> anyhow::Result<Uuid> {
        let id = Uuid::new_v4();
        sqlx::query(
            "INSERT INTO customers (id, name, email, image_url) VALUES ($1, $2, $3, $4)",
        )
        .bind(id)
        .bind(name)
        .bind(format!("{}@example.com", id))
        .bind("/customers/avatar.png")
        .execute(&self.db)
        .await?;
        Ok(id)
    }

    /// Seeds a user with a hashed password for login tests
    pub async fn seed_user(&self, email: &str, password: &str) -> anyhow::Result<Uuid> {
        let id = Uuid::new_v4();
        let hash = hash_password(password)?;
        sqlx::query(
            "INSERT INTO users (id, name, email, password_hash) VALUES ($1, $2, $3, $4)",
        )
        .bind(id)
        .bind("Test User")
        .bind(email)
        .bind(hash)
        .execute(&self.db)
        .await?;
        Ok(id)
    }

    /// Removes a seeded customer and its invoices
    pub async fn cleanup_customer(&self, id: Uuid) -> anyhow::Result<()> {
        sqlx::query("DELETE FROM invoices WHERE customer_id = $1")
            .bind(id)
            .execute(&self.db)
            .await?;
        sqlx::query("DELETE FROM customers WHERE id = $1")
            .bind(id)
            .execute(&self.db)
            .await?;
        Ok(())
    }

    /// Removes a seeded user
    pub async fn cleanup_user(&self, id: Uuid) -> anyhow::Result<()> {
        sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.db)
            .await?;
        Ok(())
    }

    /// Counts invoices for a customer
    pub async fn invoice_count(&self, customer_id: Uuid) -> anyhow::Result<i64> {
        let (count,): (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM invoices WHERE customer_id = $1")
                .bind(customer_id)
                .fetch_one(&self.db)
                .await?;
        Ok(count)
    }
}
