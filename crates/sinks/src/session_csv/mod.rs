//! Session CSV Sink - Per-session append-only CSV logs
//!
//! Every record is appended to a file named after its session and kind:
//!
//! ```text
//! data/
//! ├── k3x9_clicks.csv   # coin pickups for session k3x9
//! ├── k3x9_events.csv   # round/session lifecycle for session k3x9
//! └── p7q2_clicks.csv
//! ```
//!
//! Each file starts with its canonical header row, written exactly once.
//!
//! # Concurrency
//!
//! Nothing is cached or locked in process. Every append:
//!
//! 1. Encodes the complete row (CRLF-terminated) in memory
//! 2. Bootstraps the file if it does not exist yet
//! 3. Issues a single `write` on a descriptor opened with `O_APPEND`
//!
//! A new file is first written to a temp file in the data directory and then
//! linked into place without clobbering, so it never becomes visible without
//! its header. When several requests race to create the same file, exactly
//! one link succeeds and the others append behind it.
//!
//! A file that already exists but is empty gets header and row appended in the
//! same write. Two writers hitting that case at once can both add a header.

use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::Utc;
use cointrail_protocol::{Record, RecordKind, SessionId};
use tempfile::NamedTempFile;

use crate::SinkError;

/// Result type for session CSV operations
pub type Result<T> = std::result::Result<T, SinkError>;

/// Configuration for the session CSV sink
#[derive(Debug, Clone)]
pub struct SessionCsvConfig {
    /// Directory holding the session files
    pub path: PathBuf,
}

impl Default for SessionCsvConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("."),
        }
    }
}

impl SessionCsvConfig {
    /// Create config with custom path
    #[must_use]
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = path.into();
        self
    }
}

/// Outcome of a successful append
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Appended {
    /// File the row was appended to
    pub path: PathBuf,

    /// Server receive time written into the row (ms since Unix epoch)
    pub server_received_ms: i64,

    /// Whether this append wrote the header row
    pub created: bool,
}

/// Session CSV sink
///
/// Cheap to clone; clones share the data directory path.
#[derive(Debug, Clone)]
pub struct SessionCsvSink {
    dir: Arc<Path>,
}

impl SessionCsvSink {
    /// Create a new session CSV sink
    pub fn new(config: SessionCsvConfig) -> Self {
        Self {
            dir: Arc::from(config.path.into_boxed_path()),
        }
    }

    /// Data directory
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Create the data directory if it does not exist
    pub fn init(&self) -> Result<()> {
        fs::create_dir_all(&self.dir).map_err(|e| SinkError::Init {
            path: self.dir.display().to_string(),
            source: e,
        })
    }

    /// Path of a session's log of the given kind
    pub fn path_for(&self, session: &SessionId, kind: RecordKind) -> PathBuf {
        self.dir.join(kind.file_name(session))
    }

    /// Append one record to its session log (blocking)
    ///
    /// `server_received_ms` is taken from the system clock here, right before
    /// the row is encoded.
    pub fn append<R: Record>(&self, session: &SessionId, record: &R) -> Result<Appended> {
        let path = self.path_for(session, R::KIND);
        let server_received_ms = Utc::now().timestamp_millis();
        let row = encode_row(record.to_row(session, server_received_ms))?;

        let created = self.write_row(&path, R::KIND, &row)?;
        if created {
            tracing::debug!(
                session_id = %session,
                kind = %R::KIND,
                path = %path.display(),
                "created session log"
            );
        }

        Ok(Appended {
            path,
            server_received_ms,
            created,
        })
    }

    /// Append one record on the blocking thread pool
    pub async fn write<R>(&self, session: SessionId, record: R) -> Result<Appended>
    where
        R: Record + Send + 'static,
    {
        let sink = self.clone();
        tokio::task::spawn_blocking(move || sink.append(&session, &record))
            .await
            .map_err(|e| SinkError::Task(e.to_string()))?
    }

    /// Bootstrap the file if needed, then append the encoded row
    ///
    /// Returns `true` when this call wrote the header.
    fn write_row(&self, path: &Path, kind: RecordKind, row: &[u8]) -> Result<bool> {
        match fs::metadata(path) {
            Ok(meta) if meta.len() > 0 => {
                append_bytes(path, row)?;
                return Ok(false);
            }
            Ok(_) => {
                let mut bytes = encode_row(kind.header())?;
                bytes.extend_from_slice(row);
                append_bytes(path, &bytes)?;
                return Ok(true);
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => return Err(SinkError::io(path, e)),
        }

        let created = self.publish_header(path, kind)?;
        append_bytes(path, row)?;
        Ok(created)
    }

    /// Atomically create `path` containing only the header row
    ///
    /// Returns `false` if another writer created the file first.
    fn publish_header(&self, path: &Path, kind: RecordKind) -> Result<bool> {
        let header = encode_row(kind.header())?;

        let mut tmp = NamedTempFile::new_in(&self.dir).map_err(|e| SinkError::io(&self.dir, e))?;
        tmp.write_all(&header)
            .map_err(|e| SinkError::io(tmp.path(), e))?;

        match tmp.persist_noclobber(path) {
            Ok(_) => Ok(true),
            Err(e) if e.error.kind() == ErrorKind::AlreadyExists => Ok(false),
            Err(e) => Err(SinkError::io(path, e.error)),
        }
    }
}

/// Encode one CSV record, CRLF-terminated, minimal quoting
fn encode_row<I, T>(fields: I) -> Result<Vec<u8>>
where
    I: IntoIterator<Item = T>,
    T: AsRef<[u8]>,
{
    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::CRLF)
        .from_writer(Vec::with_capacity(128));
    writer.write_record(fields)?;
    writer
        .into_inner()
        .map_err(|e| SinkError::Encode(e.to_string()))
}

/// Append bytes with a single write on an `O_APPEND` descriptor
///
/// The file must already exist; a headerless log is never created here.
fn append_bytes(path: &Path, bytes: &[u8]) -> Result<()> {
    let mut file = OpenOptions::new()
        .append(true)
        .open(path)
        .map_err(|e| SinkError::io(path, e))?;
    file.write_all(bytes).map_err(|e| SinkError::io(path, e))
}
