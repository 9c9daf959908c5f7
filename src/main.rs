use catalog_service::catalog::store::CatalogStore;
use catalog_service::rest;
use catalog_service::rpc::server::RpcServer;
use std::net::SocketAddr;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let args: Vec<String> = std::env::args().collect();

    let mut http_addr: SocketAddr = "0.0.0.0:5000".parse()?;
    let mut rpc_addr: SocketAddr = "0.0.0.0:50051".parse()?;
    let mut data_path = "books.json".to_string();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--http" => {
                http_addr = args[i + 1].parse()?;
                i += 2;
            }
            "--rpc" => {
                rpc_addr = args[i + 1].parse()?;
                i += 2;
            }
            "--data" => {
                data_path = args[i + 1].clone();
                i += 2;
            }
            "--help" => {
                eprintln!(
                    "Usage: {} [--http <addr:port>] [--rpc <addr:port>] [--data <path>]",
                    args[0]
                );
                eprintln!("Example: {} --http 0.0.0.0:5000 --rpc 0.0.0.0:50051 --data books.json", args[0]);
                std::process::exit(0);
            }
            _ => {
                i += 1;
            }
        }
    }

    tracing::info!("Catalog file: {}", data_path);

    // 1. The shared record store. Both front-ends hold the same Arc, so every
    //    record is visible to both protocols the moment it is persisted.
    let store = Arc::new(CatalogStore::new(&data_path));

    // 2. Binary RPC front-end:
    let rpc_listener = tokio::net::TcpListener::bind(rpc_addr).await?;
    tracing::info!("RPC server listening on {}", rpc_addr);

    let rpc_server = RpcServer::new(store.clone());
    tokio::spawn(async move {
        if let Err(e) = rpc_server.serve(rpc_listener).await {
            tracing::error!("RPC server terminated: {}", e);
        }
    });

    // 3. HTTP/JSON front-end:
    let app = rest::router(store);

    tracing::info!("HTTP server listening on {}", http_addr);
    tracing::info!("Press Ctrl+C to shutdown");

    let listener = tokio::net::TcpListener::bind(http_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
