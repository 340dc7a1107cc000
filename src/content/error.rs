use thiserror::Error;

/// Errors that can occur while fetching or decoding a collection.
///
/// Every variant is caught at the fetch boundary, logged, and degraded to
/// an empty collection; nothing here ever reaches the view layer.
#[derive(Debug, Error)]
pub enum SourceError {
    /// Failed to connect to the content API
    #[error("Connection failed for '{path}': {source}")]
    Connection {
        path: String,
        #[source]
        source: reqwest::Error,
    },

    /// Request exceeded the total timeout
    #[error("Request for '{path}' timed out after {duration}s")]
    Timeout { path: String, duration: u64 },

    /// Upstream answered with a non-success status
    #[error("Upstream returned {status} for '{path}'")]
    Status { path: String, status: u16 },

    /// Response body was not valid JSON
    #[error("Failed to decode response body for '{path}': {source}")]
    Decode {
        path: String,
        #[source]
        source: reqwest::Error,
    },

    /// A record in the collection failed to deserialize
    #[error("Malformed record at index {index}: {detail}")]
    MalformedRecord { index: usize, detail: String },
}
