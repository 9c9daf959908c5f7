use anyhow::{Result, bail};
use tokio::net::TcpStream;

use super::protocol::{CatalogRequest, CatalogResponse, read_frame, write_frame};
use crate::catalog::types::Book;

/// Typed client for the binary RPC front-end.
///
/// Holds one connection and issues one call at a time over it. Used by the
/// seeder, the benchmark harness, and the integration tests.
pub struct RpcClient {
    stream: TcpStream,
}

impl RpcClient {
    pub async fn connect(addr: &str) -> Result<Self> {
        let stream = TcpStream::connect(addr).await?;
        Ok(Self { stream })
    }

    /// Sends one request and waits for its response.
    ///
    /// Returns the decoded response together with the request and response
    /// payload sizes in bytes, which the benchmark harness reports.
    pub async fn call(
        &mut self,
        request: &CatalogRequest,
    ) -> Result<(CatalogResponse, usize, usize)> {
        let sent = write_frame(&mut self.stream, request).await?;

        match read_frame(&mut self.stream).await? {
            Some((response, received)) => Ok((response, sent, received)),
            None => bail!("server closed the connection mid-call"),
        }
    }

    pub async fn list_books(&mut self) -> Result<Vec<Book>> {
        let (response, _, _) = self.call(&CatalogRequest::ListBooks).await?;

        match response {
            CatalogResponse::Books { books } => Ok(books),
            CatalogResponse::Error { message } => bail!("list rejected by server: {}", message),
            other => bail!("unexpected response to ListBooks: {:?}", other),
        }
    }

    pub async fn add_book(&mut self, title: &str, author: &str, year: i32) -> Result<Book> {
        let request = CatalogRequest::AddBook {
            title: title.to_string(),
            author: author.to_string(),
            year,
        };
        let (response, _, _) = self.call(&request).await?;

        match response {
            CatalogResponse::Added { book } => Ok(book),
            CatalogResponse::Error { message } => bail!("add rejected by server: {}", message),
            other => bail!("unexpected response to AddBook: {:?}", other),
        }
    }
}
