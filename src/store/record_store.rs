/// In-memory command list backed by an append-only CSV file
///
/// The file is opened, read in full and closed on load, then reopened and
/// appended to for every new record. No handle is kept between calls.

use crate::error::{CommandsError, Result};
use crate::store::codec;
use crate::store::models::Record;
use log::debug;
use std::io::{ErrorKind, SeekFrom};
use std::path::{Path, PathBuf};
use tokio::fs::{self, OpenOptions};
use tokio::io::{AsyncReadExt, AsyncSeekExt, AsyncWriteExt};

/// Ordered list of records and the file they persist to
#[derive(Debug, Clone)]
pub struct RecordStore {
    path: PathBuf,
    records: Vec<Record>,
}

impl RecordStore {
    /// Load every record from `path`
    ///
    /// # Returns
    /// * `Ok(RecordStore)` - Records in file order
    /// * `Err(CommandsError::FileNotFound)` - If the file does not exist
    /// * `Err(CommandsError)` - If the file is unreadable or malformed
    pub async fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        let bytes = match fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(CommandsError::FileNotFound(path));
            }
            Err(e) => return Err(e.into()),
        };

        let records = codec::decode(&bytes)?;
        debug!("loaded {} records from {}", records.len(), path.display());

        Ok(Self { path, records })
    }

    /// Like [`RecordStore::load`], but a missing file gives an empty store
    ///
    /// The file is created by the first `append`.
    pub async fn load_or_empty<P: AsRef<Path>>(path: P) -> Result<Self> {
        match Self::load(path).await {
            Err(CommandsError::FileNotFound(path)) => {
                debug!("{} does not exist yet, starting empty", path.display());
                Ok(Self::empty(path))
            }
            other => other,
        }
    }

    /// An empty store bound to `path`, without touching the file system
    pub fn empty<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            records: Vec::new(),
        }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Persist `record` as a new row, then add it to the in-memory list
    ///
    /// Writes the header first when the file is empty or missing. On error
    /// the in-memory list is left as it was.
    pub async fn append(&mut self, record: Record) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await?;
            }
        }

        let mut file = OpenOptions::new()
            .read(true)
            .append(true)
            .create(true)
            .open(&self.path)
            .await?;

        let len = file.metadata().await?.len();

        let mut chunk = Vec::new();
        if len > 0 {
            // A hand-edited file may lack the final line break
            file.seek(SeekFrom::End(-1)).await?;
            let mut last = [0u8; 1];
            file.read_exact(&mut last).await?;
            if last[0] != b'\n' && last[0] != b'\r' {
                chunk.extend_from_slice(b"\r\n");
            }
        }
        chunk.extend(codec::encode_row(&record, len == 0)?);

        file.write_all(&chunk).await?;
        file.flush().await?;
        file.sync_data().await?;

        debug!(
            "appended '{}' to {}{}",
            record.name(),
            self.path.display(),
            if len == 0 { " (with header)" } else { "" }
        );

        self.records.push(record);
        Ok(())
    }
}
