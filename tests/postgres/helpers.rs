//! Shared test helpers for `PostgreSQL` integration tests.

use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, CustomizeConnection, Pool};
use pg_embedded_setup_unpriv::{TestCluster, test_support::shared_test_cluster};
use rstest::fixture;
use todo_grpc::todo::adapters::postgres::{PostgresTodoRepository, TodoPgPool};
use tokio::runtime::Runtime;

/// Environment variable naming an existing database to use instead of the
/// embedded cluster.
pub const TEST_DATABASE_URL_VAR: &str = "TODO_SERVICE_TEST_DATABASE_URL";

/// Template database holding the `todos` table.
const TEMPLATE_DB: &str = "todo_grpc_test_template";

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Creates a tokio runtime for async operations in tests.
pub fn test_runtime() -> Runtime {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("failed to create test runtime")
}

/// Opens every pooled connection inside a transaction that never commits.
#[derive(Debug)]
struct RollbackOnRelease;

impl CustomizeConnection<PgConnection, diesel::r2d2::Error> for RollbackOnRelease {
    fn on_acquire(&self, connection: &mut PgConnection) -> Result<(), diesel::r2d2::Error> {
        connection
            .begin_test_transaction()
            .map_err(diesel::r2d2::Error::QueryError)
    }
}

/// Drops a per-test database even when the test panics.
struct CleanupGuard {
    cluster: &'static TestCluster,
    db_name: String,
}

impl Drop for CleanupGuard {
    fn drop(&mut self) {
        if let Err(e) = self.cluster.drop_database(self.db_name.as_str()) {
            eprintln!("Warning: failed to drop test database {}: {e}", self.db_name);
        }
    }
}

/// Repository under test, its pool and a runtime to drive it.
///
/// Fields drop in declaration order, so every connection is closed before
/// the per-test database is dropped.
pub struct TestDatabase {
    /// Repository under test.
    pub repository: PostgresTodoRepository,
    /// Single-connection pool shared with the repository.
    pub pool: TodoPgPool,
    /// Runtime for the async port calls.
    pub runtime: Runtime,
    _cleanup: Option<CleanupGuard>,
}

impl TestDatabase {
    /// Uses a fresh database cloned from the schema template.
    fn embedded(cluster: &'static TestCluster) -> Result<Self, BoxError> {
        ensure_template(cluster)?;
        let db_name = format!("test_todo_{}", uuid::Uuid::new_v4().simple());
        cluster
            .create_database_from_template(db_name.as_str(), TEMPLATE_DB)
            .map_err(|e| Box::new(e) as BoxError)?;
        let cleanup = CleanupGuard {
            cluster,
            db_name: db_name.clone(),
        };
        let url = cluster.connection().database_url(&db_name);
        let pool = Pool::builder()
            .max_size(1)
            .build(ConnectionManager::<PgConnection>::new(url))?;
        Ok(Self {
            repository: PostgresTodoRepository::new(pool.clone()),
            pool,
            runtime: test_runtime(),
            _cleanup: Some(cleanup),
        })
    }

    /// Uses `url` inside a transaction that is rolled back on release.
    fn external(url: &str) -> Result<Self, BoxError> {
        let pool = Pool::builder()
            .max_size(1)
            .connection_customizer(Box::new(RollbackOnRelease))
            .build(ConnectionManager::<PgConnection>::new(url))?;
        let repository = PostgresTodoRepository::new(pool.clone());
        let runtime = test_runtime();
        runtime.block_on(repository.ensure_schema())?;
        Ok(Self {
            repository,
            pool,
            runtime,
            _cleanup: None,
        })
    }
}

/// Ensures the template database exists with the `todos` table.
fn ensure_template(cluster: &TestCluster) -> Result<(), BoxError> {
    cluster
        .ensure_template_exists(TEMPLATE_DB, |db_name| {
            let url = cluster.connection().database_url(db_name);
            let pool = Pool::builder()
                .max_size(1)
                .build(ConnectionManager::<PgConnection>::new(url))
                .map_err(|e| eyre::eyre!("{e}"))?;
            test_runtime()
                .block_on(PostgresTodoRepository::new(pool).ensure_schema())
                .map_err(|e| eyre::eyre!("{e}"))?;
            Ok(())
        })
        .map_err(|e| Box::new(e) as BoxError)?;
    Ok(())
}

/// Database for one test: the embedded cluster, or the database named by
/// [`TEST_DATABASE_URL_VAR`] when it is set.
#[fixture]
pub fn todo_database() -> TestDatabase {
    let database = match std::env::var(TEST_DATABASE_URL_VAR) {
        Ok(url) => TestDatabase::external(&url),
        Err(_) => TestDatabase::embedded(shared_test_cluster::default()),
    };
    database.expect("test database setup")
}

/// Inserts a raw row, bypassing domain validation.
pub fn insert_raw_name(pool: &TodoPgPool, name: &str) -> i32 {
    let mut connection = pool.get().expect("pooled connection");
    diesel::sql_query("INSERT INTO todos (name) VALUES ($1) RETURNING id")
        .bind::<diesel::sql_types::Varchar, _>(name)
        .get_result::<InsertedId>(&mut connection)
        .expect("raw insert")
        .id
}

#[derive(QueryableByName)]
struct InsertedId {
    #[diesel(sql_type = diesel::sql_types::Int4)]
    id: i32,
}
