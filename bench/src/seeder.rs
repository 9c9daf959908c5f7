use anyhow::Result;

use catalog_service::catalog::types::Book;
use catalog_service::rpc::client::RpcClient;

/// Sample catalog used for benchmarking and manual testing.
pub const DEFAULT_BOOKS: &[(&str, &str, i32)] = &[
    ("Clean Code", "Robert C. Martin", 2008),
    ("The Pragmatic Programmer", "Andrew Hunt", 1999),
    ("Design Patterns", "Gang of Four", 1994),
    ("gRPC Up and Running", "Kasun Indrasiri", 2020),
];

/// Seeds both front-ends of the catalog service with the same book list.
///
/// Holds a persistent HTTP client; the RPC connection is opened lazily on
/// first use so REST-only seeding never touches the RPC port.
pub struct CatalogSeeder {
    rest_url: String,
    rpc_addr: String,
    http: reqwest::Client,
    rpc: Option<RpcClient>,
}

impl CatalogSeeder {
    pub fn new(rest_url: impl Into<String>, rpc_addr: impl Into<String>) -> Self {
        Self {
            rest_url: rest_url.into(),
            rpc_addr: rpc_addr.into(),
            http: reqwest::Client::new(),
            rpc: None,
        }
    }

    async fn rpc_client(&mut self) -> Result<&mut RpcClient> {
        if self.rpc.is_none() {
            self.rpc = Some(RpcClient::connect(&self.rpc_addr).await?);
        }
        Ok(self.rpc.as_mut().expect("connected above"))
    }

    /// Adds every book through the REST front-end, returning the created
    /// records with their assigned ids.
    pub async fn seed_rest(&self, books: &[(&str, &str, i32)]) -> Result<Vec<Book>> {
        let mut created = Vec::with_capacity(books.len());

        for (title, author, year) in books {
            let payload = serde_json::json!({
                "title": title,
                "author": author,
                "year": year,
            });
            let response = self
                .http
                .post(&self.rest_url)
                .json(&payload)
                .send()
                .await?
                .error_for_status()?;
            created.push(response.json::<Book>().await?);
        }

        Ok(created)
    }

    /// Adds every book through the RPC front-end.
    pub async fn seed_rpc(&mut self, books: &[(&str, &str, i32)]) -> Result<Vec<Book>> {
        let mut created = Vec::with_capacity(books.len());

        for (title, author, year) in books {
            let client = self.rpc_client().await?;
            created.push(client.add_book(title, author, *year).await?);
        }

        Ok(created)
    }

    /// Seeds both front-ends with the same list, REST first.
    ///
    /// Both front-ends share one store, so afterwards the catalog holds two
    /// copies of the list with distinct ids, identically visible to both
    /// protocols.
    pub async fn seed_both(&mut self, books: &[(&str, &str, i32)]) -> Result<()> {
        tracing::info!("Seeding REST front-end...");
        self.seed_rest(books).await?;

        tracing::info!("Seeding RPC front-end...");
        self.seed_rpc(books).await?;

        tracing::info!("Added {} books through both front-ends", books.len());
        Ok(())
    }
}
