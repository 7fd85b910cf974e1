// SQLite QueueStore Implementation

use crate::error::map_sqlx_error;
use async_trait::async_trait;
use qms_core::domain::{Queue, QueueId};
use qms_core::error::Result;
use qms_core::port::{ExecOutcome, QueueStore, SqlArg, Statement};
use sqlx::SqlitePool;

pub struct SqliteQueueStore {
    pool: SqlitePool,
}

impl SqliteQueueStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl QueueStore for SqliteQueueStore {
    async fn get_queue(&self, id: QueueId) -> Result<Option<Queue>> {
        let row = sqlx::query_as::<_, QueueRow>("SELECT id, name FROM queues WHERE id = ?1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(row.map(|r| Queue::new(r.id, r.name)))
    }

    async fn list_client_names(&self, statement: &Statement) -> Result<Vec<String>> {
        let mut query = sqlx::query_scalar::<_, String>(statement.sql());
        for arg in statement.args() {
            query = match arg {
                SqlArg::Integer(v) => query.bind(*v),
                SqlArg::Text(s) => query.bind(s.as_str()),
            };
        }

        query.fetch_all(&self.pool).await.map_err(map_sqlx_error)
    }

    async fn execute(&self, statement: &Statement) -> Result<ExecOutcome> {
        let mut query = sqlx::query(statement.sql());
        for arg in statement.args() {
            query = match arg {
                SqlArg::Integer(v) => query.bind(*v),
                SqlArg::Text(s) => query.bind(s.as_str()),
            };
        }

        let result = query.execute(&self.pool).await.map_err(map_sqlx_error)?;

        Ok(ExecOutcome {
            rows_affected: result.rows_affected(),
            last_insert_id: result.last_insert_rowid(),
        })
    }
}

/// SQLite row representation
#[derive(Debug, sqlx::FromRow)]
struct QueueRow {
    id: i64,
    name: String,
}
