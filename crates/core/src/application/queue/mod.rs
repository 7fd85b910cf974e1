// Queue Service - Core use cases for queue management

pub mod compose;
pub mod enrollment;
pub mod lifecycle;
pub mod status;

pub use compose::compose_client_listing;
pub use enrollment::RegisteredClient;
pub use lifecycle::{CreatedQueue, MutationOutcome};
pub use status::{QueueStatus, QueueStatusRequest};

use crate::domain::QueueId;
use crate::error::{AppError, Result};
use crate::port::QueueStore;
use std::sync::Arc;

/// Wrap a store failure as Internal, logging the cause for operators
pub(crate) fn store_failure(operation: &'static str, err: AppError) -> AppError {
    tracing::error!(operation, error = %err, "Queue store call failed");
    AppError::Internal(format!("{} failed: {}", operation, err))
}

/// Queue Service
///
/// Holds no per-call state; share it behind `Arc` across concurrent callers.
pub struct QueueService {
    store: Arc<dyn QueueStore>,
}

impl QueueService {
    pub fn new(store: Arc<dyn QueueStore>) -> Self {
        Self { store }
    }

    pub async fn create_queue(&self, name: &str) -> Result<CreatedQueue> {
        lifecycle::create(self.store.as_ref(), name).await
    }

    pub async fn update_queue(&self, id: QueueId, name: &str) -> Result<MutationOutcome> {
        lifecycle::update(self.store.as_ref(), id, name).await
    }

    pub async fn delete_queue(&self, id: QueueId) -> Result<MutationOutcome> {
        lifecycle::delete(self.store.as_ref(), id).await
    }

    /// Queue metadata plus its filtered, ordered, paginated client names
    pub async fn get_queue_status(&self, req: &QueueStatusRequest) -> Result<QueueStatus> {
        status::execute(self.store.as_ref(), req).await
    }

    pub async fn register_client(&self, queue_id: QueueId, name: &str) -> Result<RegisteredClient> {
        enrollment::register_client(self.store.as_ref(), queue_id, name).await
    }
}
