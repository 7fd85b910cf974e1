//! Concurrent callers sharing one QueueService and one file-backed store

use qms_core::application::queue::QueueStatusRequest;
use qms_core::domain::ClientListing;
use qms_integration_tests::{seed_queue, service_for};
use std::collections::HashSet;
use std::path::PathBuf;
use tokio::task::JoinSet;

/// Temporary database file, removed (with WAL side files) on drop
struct TempDb(PathBuf);

impl TempDb {
    fn new(name: &str) -> Self {
        let path = std::env::temp_dir().join(format!("qms_{}_{}.db", name, std::process::id()));
        let db = Self(path);
        db.cleanup();
        db
    }

    fn url(&self) -> String {
        self.0.to_string_lossy().into_owned()
    }

    fn cleanup(&self) {
        for suffix in ["", "-wal", "-shm"] {
            let mut path = self.0.clone().into_os_string();
            path.push(suffix);
            let _ = std::fs::remove_file(path);
        }
    }
}

impl Drop for TempDb {
    fn drop(&mut self) {
        self.cleanup();
    }
}

#[tokio::test]
async fn test_concurrent_creates_get_unique_ids() {
    let db = TempDb::new("concurrent_create");
    let service = service_for(&db.url()).await;

    let mut tasks = JoinSet::new();
    for i in 0..20 {
        let service = service.clone();
        tasks.spawn(async move { service.create_queue(&format!("Queue {}", i)).await });
    }

    let mut ids = HashSet::new();
    while let Some(result) = tasks.join_next().await {
        let created = result.unwrap().unwrap();
        assert!(ids.insert(created.queue.id), "duplicate id {}", created.queue.id);
    }
    assert_eq!(ids.len(), 20);
}

#[tokio::test]
async fn test_concurrent_registrations_get_unique_ids() {
    let db = TempDb::new("concurrent_register");
    let service = service_for(&db.url()).await;
    let queue_id = seed_queue(&service, "Busy Queue", &[]).await;

    let mut tasks = JoinSet::new();
    for i in 0..20 {
        let service = service.clone();
        tasks.spawn(async move {
            service
                .register_client(queue_id, &format!("Client {:02}", i))
                .await
        });
    }

    let mut ids = HashSet::new();
    while let Some(result) = tasks.join_next().await {
        ids.insert(result.unwrap().unwrap().client.id);
    }
    assert_eq!(ids.len(), 20);

    let status = service
        .get_queue_status(&QueueStatusRequest {
            queue_id,
            listing: ClientListing::default(),
        })
        .await
        .unwrap();
    assert_eq!(status.clients.len(), 20);
}

#[tokio::test]
async fn test_concurrent_status_reads_agree() {
    let db = TempDb::new("concurrent_status");
    let service = service_for(&db.url()).await;
    let queue_id = seed_queue(&service, "Test Queue", &["Client A", "Client B", "Client C"]).await;

    let request = QueueStatusRequest {
        queue_id,
        listing: ClientListing {
            sort_by: Some("name".to_string()),
            sort_order: Some("desc".to_string()),
            limit: Some(2),
            ..Default::default()
        },
    };

    let mut tasks = JoinSet::new();
    for _ in 0..10 {
        let service = service.clone();
        let request = request.clone();
        tasks.spawn(async move { service.get_queue_status(&request).await });
    }

    while let Some(result) = tasks.join_next().await {
        let status = result.unwrap().unwrap();
        assert_eq!(status.clients, vec!["Client C", "Client B"]);
    }
}
