#[macro_use]
extern crate diesel;

use anyhow::Result as Fallible;
use dalil_core::usecases as uc;
use diesel::{r2d2, sqlite::SqliteConnection};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::{
    cell::{RefCell, RefMut},
    sync::Arc,
};

mod models;
mod repo_impl;
mod schema;

const MIGRATIONS: EmbeddedMigrations = embed_migrations!("./migrations");

type Connection = SqliteConnection;

type ConnectionManager = r2d2::ConnectionManager<Connection>;
type ConnectionPool = r2d2::Pool<ConnectionManager>;
type PooledConnection = r2d2::PooledConnection<ConnectionManager>;

type SharedConnectionPool = Arc<RwLock<ConnectionPool>>;

/// A pooled connection that shares the pool with other readers.
///
/// Listings, searches and conversation views only need this kind of
/// access and may run concurrently with each other.
pub struct DbReadOnly<'a> {
    _locked_pool: RwLockReadGuard<'a, ConnectionPool>,
    conn: RefCell<PooledConnection>,
}

impl<'a> DbReadOnly<'a> {
    fn try_new(pool: &'a SharedConnectionPool) -> Fallible<Self> {
        let locked_pool = pool.read();
        let conn = locked_pool.get().inspect_err(|err| {
            log::error!("Failed to obtain pooled database connection for read-only access: {err}");
        })?;
        Ok(Self {
            _locked_pool: locked_pool,
            conn: RefCell::new(conn),
        })
    }
}

/// The only connection that may modify the database.
///
/// While it is alive no other connection (neither reading nor writing)
/// can be checked out of the pool. Keep it short-lived and never call
/// external services like the hosting gateways while holding it.
pub struct DbReadWrite<'a> {
    _locked_pool: RwLockWriteGuard<'a, ConnectionPool>,
    conn: RefCell<PooledConnection>,
}

/// The connection as seen from inside of [`DbReadWrite::transaction`].
pub struct DbConnection<'a> {
    conn: RefCell<&'a mut SqliteConnection>,
}

impl<'a> DbConnection<'a> {
    fn new(conn: &'a mut SqliteConnection) -> Self {
        Self {
            conn: RefCell::new(conn),
        }
    }
}

impl<'a> DbReadWrite<'a> {
    fn try_new(pool: &'a SharedConnectionPool) -> Fallible<Self> {
        let locked_pool = pool.write();
        let conn = locked_pool.get().inspect_err(|err| {
            log::error!("Failed to obtain pooled database connection for read/write access: {err}");
        })?;
        Ok(Self {
            _locked_pool: locked_pool,
            conn: RefCell::new(conn),
        })
    }

    /// Run all repository operations of `f` within a single transaction.
    ///
    /// Any error returned by `f` rolls back the transaction. Multi-step
    /// operations like redeeming a promo code while subscribing or
    /// accepting an employee request rely on this to never leave
    /// counters or request states half updated.
    pub fn transaction<T, F, E>(&mut self, f: F) -> Result<T, uc::Error>
    where
        F: FnOnce(&DbConnection) -> Result<T, E>,
        E: Into<uc::Error>,
    {
        // Diesel only knows its own error type. The use case error is
        // parked here and replaces the rollback marker afterwards.
        let mut usecase_error = None;
        use diesel::Connection;
        self.conn
            .borrow_mut()
            .transaction(|conn| {
                f(&DbConnection::new(conn))
                    .map_err(Into::into)
                    .map_err(|err| {
                        usecase_error = Some(err);
                        diesel::result::Error::RollbackTransaction
                    })
            })
            .map_err(|err| {
                if let Some(usecase_error) = usecase_error {
                    debug_assert!(matches!(err, diesel::result::Error::RollbackTransaction));
                    usecase_error
                } else {
                    uc::Error::Repo(repo_impl::from_diesel_err(err))
                }
            })
    }

    fn sqlite_conn(&self) -> RefMut<PooledConnection> {
        self.conn.borrow_mut()
    }
}

#[derive(Clone)]
pub struct Connections {
    // SQLite allows a single writer only. Instead of waiting for
    // SQLITE_BUSY/SQLITE_LOCKED ("database is locked") errors
    // the write access is serialized here: `exclusive()` takes
    // the write lock, `shared()` a read lock. A view counter
    // update therefore never fails because a customer is
    // sending a message at the same time.
    pool: SharedConnectionPool,
}

/// Configure the database engine
///
/// Deleting a product cascades to its images, videos and variants,
/// which only works while foreign keys are enforced.
/// The text encoding can only be chosen once when the database file
/// is created; Arabic names and messages are stored as UTF-8.
pub fn initialize_database(connection: &mut SqliteConnection) -> Fallible<()> {
    use diesel::connection::SimpleConnection as _;
    connection.batch_execute(r#"
PRAGMA journal_mode = WAL;        -- better write-concurrency
PRAGMA synchronous = NORMAL;      -- fsync only in critical moments, safe for journal_mode = WAL
PRAGMA wal_autocheckpoint = 1000; -- write WAL changes back every 1000 pages (default, about 1MB)
PRAGMA wal_checkpoint(TRUNCATE);  -- free some space by truncating possibly massive WAL files from the last run
PRAGMA secure_delete = 0;         -- avoid some disk I/O
PRAGMA automatic_index = 1;       -- detect and log missing indexes
PRAGMA foreign_keys = 1;          -- check foreign key constraints
PRAGMA defer_foreign_keys = 1;    -- delay enforcement of foreign key constraints until commit
PRAGMA recursive_triggers = 1;    -- for recursive ON CASCADE DELETE actions
PRAGMA encoding = 'UTF-8';
"#)?;
    Ok(())
}

impl Connections {
    pub fn init(url: &str, pool_size: u32) -> Fallible<Self> {
        // A wrong path in `DATABASE_URL` should stop the server right
        // away instead of letting r2d2 retry and log in the background.
        use diesel::Connection as _;
        let _ = diesel::SqliteConnection::establish(url)?;
        log::debug!("Creating a pool of {pool_size} connection(s) to {url}");
        let manager = ConnectionManager::new(url);
        let pool = ConnectionPool::builder()
            .max_size(pool_size)
            .build(manager)?;
        initialize_database(&mut *pool.get()?)?;
        Ok(Self::new(pool))
    }

    fn new(pool: ConnectionPool) -> Self {
        Self {
            pool: Arc::new(RwLock::new(pool)),
        }
    }

    pub fn shared(&self) -> Fallible<DbReadOnly> {
        DbReadOnly::try_new(&self.pool)
    }

    pub fn exclusive(&self) -> Fallible<DbReadWrite> {
        DbReadWrite::try_new(&self.pool)
    }
}

/// Bring the schema up to date.
///
/// Must be called with exclusive access before the web server starts.
pub fn run_embedded_database_migrations(conn: DbReadWrite<'_>) -> Fallible<()> {
    log::info!("Running embedded database migrations");
    conn.sqlite_conn()
        .run_pending_migrations(MIGRATIONS)
        .map_err(|err| anyhow::anyhow!("Failed to run database migrations: {err}"))?;
    Ok(())
}
