// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for Assistencia.

use thiserror::Error;

/// Top-level error type for all bridge operations.
#[derive(Debug, Error)]
pub enum AssistenciaError {
    // -- Payload errors --
    #[error("malformed payload: {0}")]
    MalformedPayload(String),

    // -- Permission errors --
    #[error("permission denied: {0}")]
    PermissionDenied(String),

    /// A pending operation of the same single-slot kind is already outstanding.
    #[error("operation already in progress: {0}")]
    OperationInProgress(String),

    // -- Storage errors --
    #[error("storage unavailable: {0}")]
    StorageUnavailable(String),

    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Content-provider insert failed or handed back no record handle.
    /// Degenerate provider behaviour is reported here, never as a panic.
    #[error("provider write failed: {0}")]
    ProviderWrite(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    // -- Platform bridge --
    #[error("host platform error: {0}")]
    Host(String),

    #[error("feature not available on this platform")]
    PlatformUnavailable,
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, AssistenciaError>;
