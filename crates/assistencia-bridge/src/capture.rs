// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Capture coordination — the single in-flight camera/pick operation
// requested by the web content's file chooser.
//
// Invariant: at most one pending capture exists process-wide. Opening the
// chooser while one is pending hands the superseded token back so the old
// web callback can be resolved with an empty selection — the OS callback
// must never leak.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use tracing::debug;

use assistencia_artifact::naming;
use assistencia_core::types::{ActivityOutcome, RequestToken, Selection};

/// The one outstanding capture/pick round trip.
#[derive(Debug, Clone)]
pub struct PendingCapture {
    pub token: RequestToken,
    /// Pre-allocated camera destination; `None` when the capture directory
    /// was unavailable and the chooser offers only the pick branch.
    pub expected_capture_path: Option<PathBuf>,
}

/// What [`CaptureCoordinator::begin`] set up.
#[derive(Debug, Clone)]
pub struct CaptureStart {
    pub token: RequestToken,
    /// Token of a prior pending capture that must be resolved with an empty
    /// selection before the new chooser result is awaited.
    pub superseded: Option<RequestToken>,
}

/// Single-slot owner of the pending capture state.
#[derive(Default)]
pub struct CaptureCoordinator {
    pending: Option<PendingCapture>,
}

impl CaptureCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Camera destination of the pending capture, if any.
    pub fn expected_path(&self) -> Option<&Path> {
        self.pending
            .as_ref()
            .and_then(|p| p.expected_capture_path.as_deref())
    }

    /// Start a new capture/pick operation, replacing any pending one.
    ///
    /// The camera temp file is named `JPEG_<timestamp>_` inside
    /// `capture_dir`; when the directory is unavailable the camera branch is
    /// silently dropped and only the pick branch remains.
    pub fn begin(&mut self, now: DateTime<Utc>, capture_dir: Option<PathBuf>) -> CaptureStart {
        let superseded = self.pending.take().map(|stale| {
            debug!(token = %stale.token, "superseding unresolved capture");
            stale.token
        });

        let token = RequestToken::new();
        let expected_capture_path = capture_dir.map(|dir| dir.join(naming::capture_file_name(now)));
        self.pending = Some(PendingCapture {
            token,
            expected_capture_path,
        });

        CaptureStart { token, superseded }
    }

    /// Reconcile the activity result with the pending capture.
    ///
    /// An explicit selected item wins; otherwise a pre-registered capture
    /// path on success; otherwise nothing. Unknown or already-resolved
    /// tokens yield `Selection::None` so the caller can still satisfy
    /// whatever web callback is waiting.
    pub fn resolve(&mut self, token: RequestToken, outcome: &ActivityOutcome) -> Selection {
        let Some(pending) = self.pending.take_if(|p| p.token == token) else {
            debug!(%token, "activity result for unknown capture");
            return Selection::None;
        };

        if !outcome.selected.is_empty() {
            return Selection::Uris(outcome.selected.clone());
        }
        if outcome.succeeded {
            if let Some(path) = pending.expected_capture_path {
                // Camera result: no data payload, the photo landed at the
                // pre-wired destination.
                return Selection::Uris(vec![format!("file:{}", path.display())]);
            }
        }
        Selection::None
    }

    /// Discard the pending capture without resolving it (host teardown).
    pub fn cancel(&mut self) {
        if self.pending.take().is_some() {
            debug!("pending capture discarded");
        }
    }
}
