//! Pluggable upload capability.

use std::path::Path;

use async_trait::async_trait;

use crate::client::Client;
use crate::error::Error;

/// Transfers video bytes to an upload link issued by the API.
///
/// The client only creates the upload ticket; the actual file transfer is
/// delegated here so callers can plug in a tus client, a test double, or
/// whatever transfer strategy fits their environment.
#[async_trait]
pub trait Uploader: Send + Sync {
    /// Uploads the file at `source` to `upload_link`.
    async fn upload(&self, client: &Client, upload_link: &str, source: &Path)
        -> Result<(), Error>;
}
