//! WarehouseCursor over an odbc-api connection
//!
//! odbc-api is blocking, so every call runs on the blocking thread pool.

use anyhow::{Context, Result};
use async_trait::async_trait;
use odbc_api::{Connection, ConnectionOptions, Environment};
use std::sync::{Arc, Mutex, OnceLock};

use crate::domain::repositories::warehouse::WarehouseCursor;

/// プロセス全体で共有するODBC環境
static ODBC_ENV: OnceLock<Environment> = OnceLock::new();

fn odbc_environment() -> Result<&'static Environment> {
    if let Some(env) = ODBC_ENV.get() {
        return Ok(env);
    }
    let env = Environment::new().context("Failed to initialise ODBC environment")?;
    // 競合した場合は先に登録された環境を使う
    Ok(ODBC_ENV.get_or_init(|| env))
}

pub struct OdbcCursor {
    connection: Arc<Mutex<Connection<'static>>>,
}

impl OdbcCursor {
    pub async fn connect(connection_string: &str) -> Result<Self> {
        let connection_string = connection_string.to_string();
        let connection = tokio::task::spawn_blocking(move || -> Result<Connection<'static>> {
            let env = odbc_environment()?;
            env.connect_with_connection_string(&connection_string, ConnectionOptions::default())
                .context("Failed to connect to Vertica")
        })
        .await
        .map_err(|e| anyhow::anyhow!("Failed to spawn blocking task: {}", e))??;

        Ok(Self {
            connection: Arc::new(Mutex::new(connection)),
        })
    }

    async fn with_connection<T, F>(&self, f: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&Connection<'static>) -> Result<T> + Send + 'static,
    {
        let connection = Arc::clone(&self.connection);
        tokio::task::spawn_blocking(move || {
            let guard = connection
                .lock()
                .map_err(|_| anyhow::anyhow!("ODBC connection lock poisoned"))?;
            f(&guard)
        })
        .await
        .map_err(|e| anyhow::anyhow!("Failed to spawn blocking task: {}", e))?
    }
}

#[async_trait]
impl WarehouseCursor for OdbcCursor {
    async fn execute(&self, sql: &str) -> Result<Option<u64>> {
        let sql = sql.to_string();
        self.with_connection(move |conn| {
            let mut statement = conn.preallocate().context("Failed to allocate statement")?;
            let cursor = statement
                .execute(&sql, ())
                .with_context(|| format!("Statement failed: {}", sql))?;
            // 結果セットは不要。row_count の前に statement の借用を解放する
            drop(cursor);
            let rows = statement.row_count().context("Failed to read row count")?;
            Ok(rows.map(|n| n as u64))
        })
        .await
    }

    async fn begin(&self) -> Result<()> {
        self.with_connection(|conn| {
            conn.set_autocommit(false)
                .context("Failed to disable autocommit")
        })
        .await
    }

    async fn commit(&self) -> Result<()> {
        self.with_connection(|conn| {
            conn.commit().context("COMMIT failed")?;
            conn.set_autocommit(true)
                .context("Failed to re-enable autocommit")
        })
        .await
    }

    async fn rollback(&self) -> Result<()> {
        self.with_connection(|conn| {
            conn.rollback().context("ROLLBACK failed")?;
            conn.set_autocommit(true)
                .context("Failed to re-enable autocommit")
        })
        .await
    }
}
