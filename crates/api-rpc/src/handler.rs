//! RPC Method Handlers
//!
//! Translates each JSON-RPC method into a QueueService call.

use crate::error::to_rpc_error;
use crate::types::{
    CreateQueueRequest, CreateQueueResponse, DeleteQueueRequest, MutationResponse,
    QueueStatusRequest, QueueStatusResponse, RegisterClientRequest, RegisterClientResponse,
    UpdateQueueRequest,
};
use jsonrpsee::types::ErrorObjectOwned;
use qms_core::application::queue::QueueStatusRequest as StatusQuery;
use qms_core::application::QueueService;
use qms_core::domain::ClientListing;
use std::sync::Arc;

/// RPC Handler with injected dependencies
pub struct RpcHandler {
    service: Arc<QueueService>,
}

impl RpcHandler {
    pub fn new(service: Arc<QueueService>) -> Self {
        Self { service }
    }

    /// queue.create.v1
    pub async fn create_queue(
        &self,
        params: CreateQueueRequest,
    ) -> Result<CreateQueueResponse, ErrorObjectOwned> {
        let created = self
            .service
            .create_queue(&params.name)
            .await
            .map_err(to_rpc_error)?;

        Ok(CreateQueueResponse {
            success: true,
            id: created.queue.id,
            message: created.message,
        })
    }

    /// queue.update.v1
    pub async fn update_queue(
        &self,
        params: UpdateQueueRequest,
    ) -> Result<MutationResponse, ErrorObjectOwned> {
        let outcome = self
            .service
            .update_queue(params.id, &params.name)
            .await
            .map_err(to_rpc_error)?;

        Ok(MutationResponse {
            success: true,
            message: outcome.message,
        })
    }

    /// queue.delete.v1
    pub async fn delete_queue(
        &self,
        params: DeleteQueueRequest,
    ) -> Result<MutationResponse, ErrorObjectOwned> {
        let outcome = self
            .service
            .delete_queue(params.id)
            .await
            .map_err(to_rpc_error)?;

        Ok(MutationResponse {
            success: true,
            message: outcome.message,
        })
    }

    /// queue.status.v1
    pub async fn queue_status(
        &self,
        params: QueueStatusRequest,
    ) -> Result<QueueStatusResponse, ErrorObjectOwned> {
        let query = StatusQuery {
            queue_id: params.id,
            listing: ClientListing {
                name_filter: params.client_name_filter,
                sort_by: params.sort_by,
                sort_order: params.sort_order,
                limit: params.limit,
                offset: params.offset,
            },
        };

        let status = self
            .service
            .get_queue_status(&query)
            .await
            .map_err(to_rpc_error)?;

        Ok(QueueStatusResponse {
            success: true,
            id: status.id,
            name: status.name,
            clients: status.clients,
            message: status.message,
        })
    }

    /// client.register.v1
    pub async fn register_client(
        &self,
        params: RegisterClientRequest,
    ) -> Result<RegisterClientResponse, ErrorObjectOwned> {
        let registered = self
            .service
            .register_client(params.queue_id, &params.name)
            .await
            .map_err(to_rpc_error)?;

        Ok(RegisterClientResponse {
            success: true,
            client_id: registered.client.id,
            message: registered.message,
        })
    }
}
