// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Core domain types for the Assistencia native bridge.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use uuid::Uuid;

/// Opaque token matching an asynchronous OS callback (permission grant,
/// activity result) to the pending operation that created it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RequestToken(pub Uuid);

impl RequestToken {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for RequestToken {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for RequestToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// What kind of media an artifact request carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MediaKind {
    /// Generated document (receipt PDF, report).
    Document,
    /// Image destined for the gallery or an upload.
    Image,
}

/// What the web content asked the bridge to do with the artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeliveryIntent {
    /// Persist only; user feedback is a toast.
    SaveOnly,
    /// Persist, then launch a system chooser on the result.
    SaveAndShare,
    /// Persist into the device gallery (media store on scoped tiers).
    SaveToGallery,
}

/// Storage capability tier of the host OS version.
///
/// Gates which storage area, access mechanism, and permission set apply.
/// Deliberately coarser than an SDK version number so that new OS releases
/// map onto an existing tier until their policy actually diverges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CapabilityTier {
    /// No scoped storage — direct public paths behind broad storage permissions.
    Legacy,
    /// Scoped storage — app-scoped dirs are permission-exempt, shared media
    /// goes through the provider.
    Scoped,
    /// Scoped storage with the fine-grained media permissions replacing the
    /// broad storage ones.
    FineGrainedMedia,
}

/// Runtime permissions the bridge may need from the host OS.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PermissionId {
    Camera,
    ReadExternalStorage,
    WriteExternalStorage,
    ReadMediaImages,
}

impl PermissionId {
    /// Platform permission identifier string, as passed to the host
    /// permission subsystem.
    pub fn platform_name(&self) -> &'static str {
        match self {
            Self::Camera => "android.permission.CAMERA",
            Self::ReadExternalStorage => "android.permission.READ_EXTERNAL_STORAGE",
            Self::WriteExternalStorage => "android.permission.WRITE_EXTERNAL_STORAGE",
            Self::ReadMediaImages => "android.permission.READ_MEDIA_IMAGES",
        }
    }
}

/// Storage area a persisted artifact lands in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StorageArea {
    /// Shared Downloads collection (or the app-scoped downloads dir on
    /// scoped tiers — the host maps the area to a concrete directory).
    PublicDownloads,
    /// Shared Pictures collection via the media provider.
    ScopedPictures,
    /// App-private storage, never visible to other apps.
    AppPrivate,
}

/// How the bytes reach the storage area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccessMode {
    /// Plain filesystem path write.
    DirectPath,
    /// Provider-mediated insert returning a content URI.
    ProviderInsert,
}

/// Resolved destination for one artifact request.
///
/// Recomputed per request from `(CapabilityTier, MediaKind)`; never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageTarget {
    pub area: StorageArea,
    pub access: AccessMode,
}

/// One save/share/gallery request from the web content.
///
/// Immutable after construction and consumed exactly once by the pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtifactRequest {
    /// Either a full `data:<mime>;base64,<payload>` URI or a raw base64 blob
    /// (in which case `declared_mime` supplies the type).
    pub payload: String,
    pub declared_mime: String,
    pub suggested_name: String,
    pub kind: MediaKind,
    pub intent: DeliveryIntent,
}

/// Where a successfully written artifact lives.
///
/// The bridge holds only a reference — the filesystem or media store owns
/// the bytes from here on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ArtifactLocation {
    /// Direct filesystem path.
    File(PathBuf),
    /// Content URI handed back by the provider insert.
    Provider(String),
}

/// A successfully persisted artifact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedArtifact {
    pub location: ArtifactLocation,
    pub mime: String,
    pub display_name: String,
}

/// Read-only, process-scoped reference suitable for a chooser intent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShareableReference {
    pub uri: String,
    pub mime: String,
}

/// Raw outcome of the capture/pick activity, as delivered by the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityOutcome {
    /// Whether the activity finished with a success result code.
    pub succeeded: bool,
    /// URIs the user explicitly selected, if any.
    pub selected: Vec<String>,
}

impl ActivityOutcome {
    /// Outcome for a cancelled or failed activity.
    pub fn cancelled() -> Self {
        Self {
            succeeded: false,
            selected: Vec::new(),
        }
    }
}

/// Reconciled result of a capture/pick round trip, handed back to the web
/// content's file-chooser callback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Selection {
    /// User cancelled, or nothing usable came back.
    None,
    /// One or more content/file URIs.
    Uris(Vec<String>),
}
