//! Test harness with testcontainers for integration testing.
//!
//! The Postgres container is shared across all tests in a binary; each test
//! gets its own freshly-migrated database so exact-count assertions hold
//! under parallel execution.

use anyhow::{Context, Result};
use sqlx::PgPool;
use std::sync::atomic::{AtomicU32, Ordering};
use test_context::AsyncTestContext;
use testcontainers::runners::AsyncRunner;
use testcontainers::{ContainerAsync, ImageExt};
use testcontainers_modules::postgres::Postgres;
use tokio::sync::OnceCell;

/// Shared test infrastructure that persists across all tests.
struct SharedTestInfra {
    host: String,
    port: u16,
    admin_pool: PgPool,
    // Keep the container alive for the entire test run
    _postgres: ContainerAsync<Postgres>,
}

/// Global shared infrastructure - initialized once, reused by all tests.
static SHARED_INFRA: OnceCell<SharedTestInfra> = OnceCell::const_new();

static NEXT_DB: AtomicU32 = AtomicU32::new(0);

impl SharedTestInfra {
    async fn init() -> Result<Self> {
        // Respect RUST_LOG; try_init() avoids panicking if already set up.
        // Run tests with: RUST_LOG=debug cargo test -- --nocapture
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();

        let postgres = Postgres::default()
            .with_tag("16")
            .with_cmd(["-c", "max_connections=200"])
            .start()
            .await
            .context("Failed to start Postgres container")?;

        let host = postgres.get_host().await?.to_string();
        let port = postgres.get_host_port_ipv4(5432).await?;

        let admin_url = format!("postgresql://postgres:postgres@{}:{}/postgres", host, port);
        let admin_pool = PgPool::connect(&admin_url)
            .await
            .context("Failed to connect to Postgres for database creation")?;

        Ok(Self {
            host,
            port,
            admin_pool,
            _postgres: postgres,
        })
    }

    async fn get() -> &'static Self {
        SHARED_INFRA
            .get_or_init(|| async {
                Self::init()
                    .await
                    .expect("Failed to initialize shared test infrastructure")
            })
            .await
    }
}

/// Test harness that manages test infrastructure.
///
/// # Example using test-context
///
/// ```ignore
/// use test_context::test_context;
///
/// #[test_context(TestHarness)]
/// #[tokio::test]
/// async fn my_test(ctx: &TestHarness) {
///     let app = ctx.app();
///     // ... test code
/// }
/// ```
pub struct TestHarness {
    /// Pool on this test's private database - use it for fixtures and
    /// direct repository assertions.
    pub db_pool: PgPool,
}

impl AsyncTestContext for TestHarness {
    async fn setup() -> Self {
        Self::new().await.expect("Failed to create test harness")
    }

    async fn teardown(self) {
        // Database pool is automatically dropped
    }
}

impl TestHarness {
    /// Creates a new test harness: shared container, private database,
    /// migrations applied.
    pub async fn new() -> Result<Self> {
        let infra = SharedTestInfra::get().await;

        let db_name = format!("directory_test_{}", NEXT_DB.fetch_add(1, Ordering::Relaxed));
        sqlx::query(&format!(r#"CREATE DATABASE "{}""#, db_name))
            .execute(&infra.admin_pool)
            .await
            .context("Failed to create test database")?;

        let db_url = format!(
            "postgresql://postgres:postgres@{}:{}/{}",
            infra.host, infra.port, db_name
        );
        let db_pool = PgPool::connect(&db_url)
            .await
            .context("Failed to connect to test database")?;

        sqlx::migrate!("./migrations")
            .run(&db_pool)
            .await
            .context("Failed to run migrations")?;

        Ok(Self { db_pool })
    }

    /// A fresh router over this test's database.
    pub fn app(&self) -> axum::Router {
        server_core::server::build_app(self.db_pool.clone())
    }
}
