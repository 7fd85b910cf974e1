//! Shared fixtures for the QMS integration tests

use qms_core::application::QueueService;
use qms_core::domain::QueueId;
use qms_infra_sqlite::{create_pool, run_migrations, SqliteQueueStore};
use std::sync::Arc;

/// QueueService over a migrated SQLite database at `database_url`
pub async fn service_for(database_url: &str) -> Arc<QueueService> {
    let pool = create_pool(database_url).await.unwrap();
    run_migrations(&pool).await.unwrap();
    Arc::new(QueueService::new(Arc::new(SqliteQueueStore::new(pool))))
}

/// Fresh in-memory service
pub async fn memory_service() -> Arc<QueueService> {
    service_for("sqlite::memory:").await
}

/// Create a queue named `name` holding `clients` in registration order
pub async fn seed_queue(service: &QueueService, name: &str, clients: &[&str]) -> QueueId {
    let created = service.create_queue(name).await.unwrap();
    for client in clients {
        service
            .register_client(created.queue.id, client)
            .await
            .unwrap();
    }
    created.queue.id
}
