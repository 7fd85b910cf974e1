//! QMS CLI - Command-line interface for the queue management service

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tabled::{Table, Tabled};

const DEFAULT_RPC_URL: &str = "http://127.0.0.1:9530";

#[derive(Parser)]
#[command(name = "qms")]
#[command(about = "Queue management service CLI", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// RPC server URL
    #[arg(long, env = "QMS_RPC_URL", default_value = DEFAULT_RPC_URL)]
    rpc_url: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a queue
    Create {
        /// Queue display name
        name: String,
    },

    /// Rename a queue
    Update {
        /// Queue ID
        id: i64,

        /// New display name
        name: String,
    },

    /// Delete a queue (its waiting clients go with it)
    Delete {
        /// Queue ID
        id: i64,
    },

    /// Show a queue and the clients waiting in it
    Status {
        /// Queue ID
        id: i64,

        /// Only clients whose name contains this text (case-insensitive)
        #[arg(short, long)]
        filter: Option<String>,

        /// Sort column: name or id
        #[arg(long)]
        sort_by: Option<String>,

        /// Sort direction: asc or desc
        #[arg(long)]
        order: Option<String>,

        /// Page size
        #[arg(short, long)]
        limit: Option<i64>,

        /// Clients to skip
        #[arg(short, long)]
        offset: Option<i64>,
    },

    /// Add a client to a queue
    Register {
        /// Queue ID
        queue_id: i64,

        /// Client name
        name: String,
    },
}

#[derive(Serialize)]
struct JsonRpcRequest {
    jsonrpc: String,
    method: String,
    params: serde_json::Value,
    id: u64,
}

#[derive(Deserialize)]
struct JsonRpcResponse {
    result: Option<serde_json::Value>,
    error: Option<JsonRpcError>,
}

#[derive(Deserialize)]
struct JsonRpcError {
    code: i32,
    message: String,
}

#[derive(Deserialize)]
struct QueueStatusResult {
    id: i64,
    name: String,
    clients: Vec<String>,
    message: String,
}

#[derive(Tabled)]
struct ClientRow {
    #[tabled(rename = "#")]
    position: usize,
    name: String,
}

async fn call_rpc(url: &str, method: &str, params: serde_json::Value) -> Result<serde_json::Value> {
    let request = JsonRpcRequest {
        jsonrpc: "2.0".to_string(),
        method: method.to_string(),
        params,
        id: 1,
    };

    let client = reqwest::Client::new();
    let response: JsonRpcResponse = client
        .post(url)
        .json(&request)
        .send()
        .await
        .context("Failed to connect to daemon")?
        .json()
        .await
        .context("Failed to parse response")?;

    if let Some(error) = response.error {
        anyhow::bail!("RPC error ({}): {}", error.code, error.message);
    }

    response
        .result
        .ok_or_else(|| anyhow::anyhow!("No result in response"))
}

/// queue.status.v1 params; absent options are left out entirely
fn status_params(
    id: i64,
    filter: Option<String>,
    sort_by: Option<String>,
    order: Option<String>,
    limit: Option<i64>,
    offset: Option<i64>,
) -> serde_json::Value {
    let mut params = json!({ "id": id });
    let optional = [
        ("client_name_filter", filter.map(serde_json::Value::from)),
        ("sort_by", sort_by.map(serde_json::Value::from)),
        ("sort_order", order.map(serde_json::Value::from)),
        ("limit", limit.map(serde_json::Value::from)),
        ("offset", offset.map(serde_json::Value::from)),
    ];
    for (key, value) in optional {
        if let Some(value) = value {
            params[key] = value;
        }
    }
    params
}

fn message_of(result: &serde_json::Value) -> String {
    result["message"].as_str().unwrap_or("OK").to_string()
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Create { name } => {
            let result = call_rpc(&cli.rpc_url, "queue.create.v1", json!({ "name": name })).await?;

            println!("{}", format!("✓ {}", message_of(&result)).green().bold());
            println!("  {} {}", "Queue ID:".bold(), result["id"]);
        }

        Commands::Update { id, name } => {
            let params = json!({ "id": id, "name": name });
            let result = call_rpc(&cli.rpc_url, "queue.update.v1", params).await?;

            println!("{}", format!("✓ {}", message_of(&result)).green().bold());
        }

        Commands::Delete { id } => {
            let result = call_rpc(&cli.rpc_url, "queue.delete.v1", json!({ "id": id })).await?;

            println!("{}", format!("✓ {}", message_of(&result)).green().bold());
        }

        Commands::Status {
            id,
            filter,
            sort_by,
            order,
            limit,
            offset,
        } => {
            let params = status_params(id, filter, sort_by, order, limit, offset);
            let result = call_rpc(&cli.rpc_url, "queue.status.v1", params).await?;
            let status: QueueStatusResult =
                serde_json::from_value(result).context("Unexpected status payload")?;

            println!(
                "{} {} {}",
                "Queue".cyan().bold(),
                status.id,
                format!("({})", status.name).cyan()
            );
            println!();

            if status.clients.is_empty() {
                println!("  {}", status.message.yellow());
            } else {
                let rows: Vec<ClientRow> = status
                    .clients
                    .into_iter()
                    .enumerate()
                    .map(|(i, name)| ClientRow {
                        position: i + 1,
                        name,
                    })
                    .collect();
                println!("{}", Table::new(rows));
            }
        }

        Commands::Register { queue_id, name } => {
            let params = json!({ "queue_id": queue_id, "name": name });
            let result = call_rpc(&cli.rpc_url, "client.register.v1", params).await?;

            println!("{}", format!("✓ {}", message_of(&result)).green().bold());
            println!("  {} {}", "Client ID:".bold(), result["client_id"]);
        }
    }

    Ok(())
}
