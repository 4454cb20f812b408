// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Content exposure — wrapping persisted artifacts behind shareable
// references and launching the system chooser on them.

use tracing::warn;

use assistencia_core::error::Result;
use assistencia_core::types::{ArtifactLocation, PersistedArtifact, ShareableReference};

use crate::host::PlatformHost;

/// Wrap a persisted artifact behind a read-only reference another process
/// can open.
///
/// Direct-path files go through the host's content resolver for a URI with
/// a read grant; provider-inserted artifacts already carry their content URI.
pub fn expose(host: &dyn PlatformHost, artifact: &PersistedArtifact) -> Result<ShareableReference> {
    let uri = match &artifact.location {
        ArtifactLocation::File(path) => host.shareable_uri(path)?,
        ArtifactLocation::Provider(uri) => uri.clone(),
    };
    Ok(ShareableReference {
        uri,
        mime: artifact.mime.clone(),
    })
}

/// Launch the system chooser on a reference. Launch failures are logged
/// and swallowed; nothing reports whether the user went through with
/// viewing or sharing.
pub fn launch_chooser(host: &dyn PlatformHost, reference: &ShareableReference, title: &str) {
    if let Err(e) = host.launch_chooser(reference, title) {
        warn!(uri = %reference.uri, error = %e, "chooser launch failed");
    }
}
