//! Session persistence.
//!
//! A session is saved as the hex encoding of its [Snapshot] and restored by
//! replaying the snapshot through the engine.

use commonware_codec::{DecodeExt, Encode};
use commonware_utils::{from_hex, hex};
use navigator_execution::{Session, SessionError};
use navigator_types::Snapshot;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("io error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("session file is not hex")]
    InvalidHex,
    #[error("invalid snapshot: {0}")]
    Decode(#[from] commonware_codec::Error),
    #[error("snapshot rejected: {0}")]
    Session(#[from] SessionError),
}

/// Load a session, or an empty one if the file does not exist yet.
pub fn load(path: &Path) -> Result<Session, StoreError> {
    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "no saved session");
            return Ok(Session::new());
        }
        Err(source) => {
            return Err(StoreError::Io {
                path: path.display().to_string(),
                source,
            })
        }
    };
    let bytes = from_hex(contents.trim()).ok_or(StoreError::InvalidHex)?;
    let snapshot = Snapshot::decode(bytes.as_slice())?;
    let session = Session::restore(&snapshot)?;
    debug!(path = %path.display(), hands = session.ledger().count(), "session loaded");
    Ok(session)
}

/// Overwrite the file with the current session.
pub fn save(path: &Path, session: &Session) -> Result<(), StoreError> {
    let encoded = session.snapshot().encode();
    std::fs::write(path, hex(&encoded)).map_err(|source| StoreError::Io {
        path: path.display().to_string(),
        source,
    })?;
    debug!(path = %path.display(), hands = session.ledger().count(), "session saved");
    Ok(())
}
