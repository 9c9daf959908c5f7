//! REST vs RPC Benchmark
//!
//! Drives both front-ends of the catalog service with the same logical
//! operations (add a book, list all books) and reports the latency and
//! payload-size difference between the JSON and the binary encoding.
//!
//! Byte counts cover the serialized message payloads in both directions:
//! JSON body bytes for REST, bincode payload bytes (without the 4-byte
//! frame header) for RPC.

use anyhow::{Result, bail};
use std::time::{Duration, Instant};

use catalog_bench::seeder::{CatalogSeeder, DEFAULT_BOOKS};
use catalog_bench::{rest_url_from_env, rpc_addr_from_env};
use catalog_service::catalog::types::Book;
use catalog_service::rpc::client::RpcClient;
use catalog_service::rpc::protocol::{CatalogRequest, CatalogResponse};

/// One measured round trip.
struct Sample {
    latency_ms: f64,
    total_bytes: usize,
}

async fn rest_add_book(
    http: &reqwest::Client,
    url: &str,
    title: &str,
    author: &str,
    year: i32,
) -> Result<(Sample, Book)> {
    let payload = serde_json::json!({
        "title": title,
        "author": author,
        "year": year,
    });
    let req_bytes = serde_json::to_vec(&payload)?.len();

    let start = Instant::now();
    let response = http.post(url).json(&payload).send().await?.error_for_status()?;
    let body = response.bytes().await?;
    let elapsed = start.elapsed();

    let book = serde_json::from_slice(&body)?;
    Ok((
        Sample {
            latency_ms: elapsed.as_secs_f64() * 1000.0,
            total_bytes: req_bytes + body.len(),
        },
        book,
    ))
}

async fn rest_list(http: &reqwest::Client, url: &str) -> Result<(Sample, Vec<Book>)> {
    let req_bytes = url.len();

    let start = Instant::now();
    let response = http.get(url).send().await?.error_for_status()?;
    let body = response.bytes().await?;
    let elapsed = start.elapsed();

    let books = serde_json::from_slice(&body)?;
    Ok((
        Sample {
            latency_ms: elapsed.as_secs_f64() * 1000.0,
            total_bytes: req_bytes + body.len(),
        },
        books,
    ))
}

async fn rpc_add_book(
    addr: &str,
    title: &str,
    author: &str,
    year: i32,
) -> Result<(Sample, Book)> {
    // Connection setup stays outside the timed section: the measurement is
    // the round trip for one call, matching the REST side's reused client.
    let mut client = RpcClient::connect(addr).await?;
    let request = CatalogRequest::AddBook {
        title: title.to_string(),
        author: author.to_string(),
        year,
    };

    let start = Instant::now();
    let (response, req_bytes, resp_bytes) = client.call(&request).await?;
    let elapsed = start.elapsed();

    let book = match response {
        CatalogResponse::Added { book } => book,
        CatalogResponse::Error { message } => bail!("RPC add failed: {}", message),
        other => bail!("unexpected response to AddBook: {:?}", other),
    };

    Ok((
        Sample {
            latency_ms: elapsed.as_secs_f64() * 1000.0,
            total_bytes: req_bytes + resp_bytes,
        },
        book,
    ))
}

async fn rpc_list(addr: &str) -> Result<(Sample, Vec<Book>)> {
    let mut client = RpcClient::connect(addr).await?;

    let start = Instant::now();
    let (response, req_bytes, resp_bytes) = client.call(&CatalogRequest::ListBooks).await?;
    let elapsed = start.elapsed();

    let books = match response {
        CatalogResponse::Books { books } => books,
        CatalogResponse::Error { message } => bail!("RPC list failed: {}", message),
        other => bail!("unexpected response to ListBooks: {:?}", other),
    };

    Ok((
        Sample {
            latency_ms: elapsed.as_secs_f64() * 1000.0,
            total_bytes: req_bytes + resp_bytes,
        },
        books,
    ))
}

/// One throwaway request per front-end so the first measurement does not pay
/// for cold sockets or lazily initialized server state.
async fn warmup(http: &reqwest::Client, rest_url: &str, rpc_addr: &str) {
    tracing::info!("Warming up servers...");

    let _ = http.get(rest_url).send().await;
    if let Ok(mut client) = RpcClient::connect(rpc_addr).await {
        let _ = client.list_books().await;
    }

    tokio::time::sleep(Duration::from_secs(1)).await;
}

fn print_comparison(label: &str, rest: &Sample, rpc: &Sample) {
    println!("REST {} -> {:.2} ms, total {} bytes", label, rest.latency_ms, rest.total_bytes);
    println!("RPC  {} -> {:.2} ms, total {} bytes", label, rpc.latency_ms, rpc.total_bytes);
    println!(
        "Speedup: {:.1}x, Size reduction: {:.1}x",
        rest.latency_ms / rpc.latency_ms,
        rest.total_bytes as f64 / rpc.total_bytes as f64
    );
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let rest_url = rest_url_from_env();
    let rpc_addr = rpc_addr_from_env();
    let http = reqwest::Client::new();

    warmup(&http, &rest_url, &rpc_addr).await;

    // Identical starting state for both measurement passes.
    let mut seeder = CatalogSeeder::new(&rest_url, &rpc_addr);
    seeder.seed_both(DEFAULT_BOOKS).await?;

    println!("\n=== Adding a book ===");
    let (rest_add, _) =
        rest_add_book(&http, &rest_url, "gRPC Up and Running", "Ming Shen", 2020).await?;
    let (rpc_add, _) = rpc_add_book(&rpc_addr, "gRPC Up and Running", "Ming Shen", 2020).await?;
    print_comparison("add ", &rest_add, &rpc_add);

    println!("\n=== Listing books ===");
    let (rest_list_sample, rest_books) = rest_list(&http, &rest_url).await?;
    let (rpc_list_sample, rpc_books) = rpc_list(&rpc_addr).await?;
    print_comparison("list", &rest_list_sample, &rpc_list_sample);

    // Both front-ends read the same store, so the listings must agree.
    if rest_books != rpc_books {
        bail!(
            "front-ends disagree: REST returned {} books, RPC returned {}",
            rest_books.len(),
            rpc_books.len()
        );
    }

    Ok(())
}
