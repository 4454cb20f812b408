// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Artifact persistence — direct path writes and provider-mediated inserts.
//
// Both writers move bytes in bounded chunks and guarantee that a failure
// mid-write leaves no partial artifact behind: direct writes remove the
// half-written file, provider writes abort the insert session (which closes
// the stream and deletes the partial record).

use std::fs;
use std::io::Write;
use std::path::Path;

use tracing::{info, instrument, warn};

use assistencia_core::error::{AssistenciaError, Result};
use assistencia_core::types::{ArtifactLocation, PersistedArtifact};

/// Bytes moved per write call.
pub const WRITE_CHUNK: usize = 64 * 1024;

/// One provider-mediated insert in progress.
///
/// Implementations wrap the platform's media-store output stream. `commit`
/// finalises the record and returns its content URI; `abort` closes the
/// stream and deletes the partial record. A sink dropped without either is
/// an implementation bug — the writer below always consumes it.
pub trait ProviderSink: Send {
    fn write_chunk(&mut self, chunk: &[u8]) -> Result<()>;

    /// Finalise the record. On failure the implementation must clean up its
    /// own partial record before returning.
    fn commit(self: Box<Self>) -> Result<String>;

    /// Discard the record and everything written so far.
    fn abort(self: Box<Self>);
}

/// Write `bytes` to `<dir>/<display_name>` on a direct filesystem path.
///
/// The directory is created when missing; failure to create it is
/// [`AssistenciaError::StorageUnavailable`]. Any write failure removes the
/// partial file before surfacing as an I/O error.
#[instrument(skip(bytes), fields(dir = %dir.display(), name = display_name, len = bytes.len()))]
pub fn write_direct(
    dir: &Path,
    display_name: &str,
    mime: &str,
    bytes: &[u8],
) -> Result<PersistedArtifact> {
    fs::create_dir_all(dir).map_err(|e| {
        AssistenciaError::StorageUnavailable(format!("cannot create {}: {e}", dir.display()))
    })?;

    let path = dir.join(display_name);
    let mut file = fs::File::create(&path)?;

    for chunk in bytes.chunks(WRITE_CHUNK) {
        if let Err(e) = file.write_all(chunk) {
            drop(file);
            if let Err(cleanup) = fs::remove_file(&path) {
                warn!(path = %path.display(), error = %cleanup, "failed to remove partial file");
            }
            return Err(e.into());
        }
    }

    info!(path = %path.display(), "artifact written");
    Ok(PersistedArtifact {
        location: ArtifactLocation::File(path),
        mime: mime.to_string(),
        display_name: display_name.to_string(),
    })
}

/// Stream `bytes` into a provider insert session.
///
/// A failed chunk aborts the session so the provider record is deleted; the
/// sink is consumed on every exit path, so the output stream never leaks.
#[instrument(skip(sink, bytes), fields(name = display_name, len = bytes.len()))]
pub fn write_provider(
    mut sink: Box<dyn ProviderSink>,
    display_name: &str,
    mime: &str,
    bytes: &[u8],
) -> Result<PersistedArtifact> {
    for chunk in bytes.chunks(WRITE_CHUNK) {
        if let Err(e) = sink.write_chunk(chunk) {
            sink.abort();
            return Err(e);
        }
    }

    let uri = sink.commit()?;
    info!(uri = %uri, "artifact inserted via provider");
    Ok(PersistedArtifact {
        location: ArtifactLocation::Provider(uri),
        mime: mime.to_string(),
        display_name: display_name.to_string(),
    })
}
