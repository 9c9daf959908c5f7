//! Binary RPC Wire Protocol
//!
//! Defines the request/response messages of the binary front-end and the
//! framing used to carry them over TCP.
//!
//! Every frame is a 4-byte little-endian payload length followed by the
//! bincode-serialized message. The message schema is a plain serialization
//! contract (field list + types); there is no generated service base to
//! inherit from.

use anyhow::{Result, bail};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};

use crate::catalog::types::Book;

/// Upper bound on a single frame payload. A whole catalog listing fits
/// comfortably; anything larger is a malformed or hostile peer.
pub const MAX_FRAME_LEN: u32 = 1024 * 1024;

/// Calls a client can issue against the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum CatalogRequest {
    /// Retrieve the full catalog. Carries no parameters.
    ListBooks,

    /// Append a new book. The id is assigned server-side.
    AddBook {
        title: String,
        author: String,
        year: i32,
    },
}

/// Server replies, one per request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum CatalogResponse {
    /// Reply to `ListBooks`: every record in insertion order.
    Books { books: Vec<Book> },

    /// Reply to `AddBook`: the stored record, id included.
    Added { book: Book },

    /// The request was rejected or the catalog store failed.
    Error { message: String },
}

/// Writes one length-prefixed frame, returning the payload size in bytes.
pub async fn write_frame<W, T>(writer: &mut W, msg: &T) -> Result<usize>
where
    W: AsyncWrite + Unpin,
    T: Serialize,
{
    let payload = bincode::serialize(msg)?;
    if payload.len() > MAX_FRAME_LEN as usize {
        bail!("frame of {} bytes exceeds limit of {}", payload.len(), MAX_FRAME_LEN);
    }

    writer.write_all(&(payload.len() as u32).to_le_bytes()).await?;
    writer.write_all(&payload).await?;
    writer.flush().await?;

    Ok(payload.len())
}

/// Reads one length-prefixed frame, returning the decoded message and the
/// payload size in bytes. `None` means the peer closed the connection
/// cleanly between frames.
pub async fn read_frame<R, T>(reader: &mut R) -> Result<Option<(T, usize)>>
where
    R: AsyncRead + Unpin,
    T: DeserializeOwned,
{
    let len = match reader.read_u32_le().await {
        Ok(len) => len,
        Err(e) if e.kind() == std::io::ErrorKind::UnexpectedEof => return Ok(None),
        Err(e) => return Err(e.into()),
    };

    if len > MAX_FRAME_LEN {
        bail!("peer announced a frame of {} bytes, limit is {}", len, MAX_FRAME_LEN);
    }

    let mut payload = vec![0u8; len as usize];
    reader.read_exact(&mut payload).await?;

    let msg = bincode::deserialize(&payload)?;
    Ok(Some((msg, payload.len())))
}
