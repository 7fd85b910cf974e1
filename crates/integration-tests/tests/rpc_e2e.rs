//! End-to-end JSON-RPC tests: HTTP client -> RpcServer -> QueueService -> SQLite

use jsonrpsee::core::client::{ClientT, Error as ClientError};
use jsonrpsee::core::params::ObjectParams;
use jsonrpsee::http_client::{HttpClient, HttpClientBuilder};
use jsonrpsee::server::ServerHandle;
use qms_api_rpc::error::code;
use qms_api_rpc::server::RpcServerConfig;
use qms_api_rpc::types::{
    CreateQueueResponse, MutationResponse, QueueStatusResponse, RegisterClientResponse,
};
use qms_api_rpc::RpcServer;
use qms_integration_tests::memory_service;

async fn start() -> (HttpClient, ServerHandle) {
    let service = memory_service().await;
    let config = RpcServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
    };
    let (addr, handle) = RpcServer::new(config, service).start().await.unwrap();
    let client = HttpClientBuilder::default()
        .build(format!("http://{}", addr))
        .unwrap();
    (client, handle)
}

fn params(pairs: &[(&str, serde_json::Value)]) -> ObjectParams {
    let mut params = ObjectParams::new();
    for (key, value) in pairs {
        params.insert(key, value.clone()).unwrap();
    }
    params
}

#[tokio::test]
async fn test_queue_round_trip_over_rpc() {
    let (client, handle) = start().await;

    let created: CreateQueueResponse = client
        .request("queue.create.v1", params(&[("name", "Test Queue".into())]))
        .await
        .unwrap();
    assert!(created.success);

    for name in ["Client A", "Client B", "Client C"] {
        let registered: RegisterClientResponse = client
            .request(
                "client.register.v1",
                params(&[("queue_id", created.id.into()), ("name", name.into())]),
            )
            .await
            .unwrap();
        assert!(registered.success);
    }

    let status: QueueStatusResponse = client
        .request(
            "queue.status.v1",
            params(&[
                ("id", created.id.into()),
                ("sort_by", "name".into()),
                ("sort_order", "desc".into()),
            ]),
        )
        .await
        .unwrap();
    assert_eq!(status.name, "Test Queue");
    assert_eq!(status.clients, vec!["Client C", "Client B", "Client A"]);

    let renamed: MutationResponse = client
        .request(
            "queue.update.v1",
            params(&[("id", created.id.into()), ("name", "Renamed".into())]),
        )
        .await
        .unwrap();
    assert_eq!(renamed.message, "Queue updated successfully");

    let deleted: MutationResponse = client
        .request("queue.delete.v1", params(&[("id", created.id.into())]))
        .await
        .unwrap();
    assert!(deleted.success);

    handle.stop().unwrap();
}

#[tokio::test]
async fn test_error_codes_over_rpc() {
    let (client, handle) = start().await;

    let err = client
        .request::<QueueStatusResponse, _>("queue.status.v1", params(&[("id", 999.into())]))
        .await
        .unwrap_err();
    match err {
        ClientError::Call(obj) => {
            assert_eq!(obj.code(), code::NOT_FOUND);
            assert_eq!(obj.message(), "Queue not found");
        }
        other => panic!("unexpected error: {other:?}"),
    }

    let err = client
        .request::<QueueStatusResponse, _>(
            "queue.status.v1",
            params(&[("id", 1.into()), ("sort_by", "secret".into())]),
        )
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::Call(ref obj) if obj.code() == code::INVALID_ARGUMENT));

    let err = client
        .request::<CreateQueueResponse, _>("queue.create.v1", params(&[("name", "  ".into())]))
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::Call(ref obj) if obj.message() == "Queue name is required"));

    handle.stop().unwrap();
}
