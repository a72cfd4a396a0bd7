//! Sequential bulk retrieval of record documents to local storage

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use tracing::{info, instrument, warn};

use crate::client::ArxivClient;
use crate::error::{ArxivError, Result};
use crate::record::Record;

/// Outcome of one download batch
///
/// `paths` lists the successfully saved files in the same relative order as
/// their source records; failed items are simply absent.
#[derive(Debug, Clone, Default)]
pub struct Manifest {
    pub paths: Vec<PathBuf>,
    pub total_bytes: u64,
    pub elapsed: Duration,
}

impl Manifest {
    /// Number of successfully saved files
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

/// Downloads record documents one at a time, in input order
///
/// A failed item is logged and skipped; the batch is never aborted by one bad
/// record. Only an unusable destination directory fails the whole batch.
pub struct Retriever<'a> {
    client: &'a ArxivClient,
}

impl<'a> Retriever<'a> {
    pub fn new(client: &'a ArxivClient) -> Self {
        Self { client }
    }

    /// Fetch each record's document into `<destination_dir>/<identifier>.pdf`
    ///
    /// Creates the destination directory (and parents) if absent; an existing
    /// directory is reused, and re-running overwrites the same paths.
    ///
    /// # Errors
    ///
    /// * `ArxivError::Destination` - if the destination collides with a
    ///   non-directory file or cannot be created
    #[instrument(skip(self, records, destination_dir), fields(count = records.len()))]
    pub async fn download<P: AsRef<Path>>(
        &self,
        records: &[Record],
        destination_dir: P,
    ) -> Result<Manifest> {
        let destination = destination_dir.as_ref();
        prepare_destination(destination).await?;

        let started = Instant::now();
        let total = records.len();
        let mut manifest = Manifest::default();

        for (index, record) in records.iter().enumerate() {
            info!(
                "[{}/{}] '{}' ({})",
                index + 1,
                total,
                record.title,
                record.identifier
            );
            match save_record(self.client, record, destination).await {
                Ok((path, size)) => {
                    manifest.paths.push(path);
                    manifest.total_bytes += size;
                }
                Err(e) => {
                    warn!(
                        identifier = %record.identifier,
                        error = %e,
                        "download failed, skipping item"
                    );
                }
            }
        }

        manifest.elapsed = started.elapsed();
        info!(
            saved = manifest.len(),
            total_bytes = manifest.total_bytes,
            elapsed_ms = manifest.elapsed.as_millis() as u64,
            "download batch complete"
        );
        Ok(manifest)
    }
}

/// Fetch one record's document and write it under `destination`
pub(crate) async fn save_record(
    client: &ArxivClient,
    record: &Record,
    destination: &Path,
) -> Result<(PathBuf, u64)> {
    let bytes = client.fetch_document(&record.pdf_url).await?;
    let path = destination.join(format!("{}.pdf", record.identifier));
    tokio::fs::write(&path, &bytes).await?;
    Ok((path, bytes.len() as u64))
}

pub(crate) async fn prepare_destination(path: &Path) -> Result<()> {
    if path.exists() && !path.is_dir() {
        return Err(ArxivError::Destination {
            path: path.to_path_buf(),
            message: "path exists and is not a directory".to_string(),
        });
    }
    tokio::fs::create_dir_all(path)
        .await
        .map_err(|e| ArxivError::Destination {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
}
