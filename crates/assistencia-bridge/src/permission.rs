// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Permission gate — suspend/resume coordination around the host's
// asynchronous permission prompts.
//
// One request may be outstanding at a time; the gate is the single slot
// that enforces it. Earlier revisions of the screen let overlapping
// requests race the OS callback, so a second request while one is pending
// now fails with `OperationInProgress` instead of being dropped silently.

use std::collections::HashSet;

use tracing::debug;

use assistencia_core::error::{AssistenciaError, Result};
use assistencia_core::types::{PermissionId, RequestToken};

use crate::host::HostPermissions;

/// Permissions one pending operation needs, split into those already held
/// and those the host was asked for. Lives only while the prompt is open.
#[derive(Debug, Clone)]
pub struct PermissionRequirement {
    pub permissions: Vec<PermissionId>,
    pub granted_so_far: HashSet<PermissionId>,
}

/// Immediate answer from [`PermissionGate::check_or_request`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    /// Everything already held — the caller proceeds now.
    Granted,
    /// The host was asked; resume when a result with this token arrives.
    Suspended(RequestToken),
}

/// Final answer once the host delivers the prompt result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateOutcome {
    Granted,
    /// Permissions still missing after the prompt.
    Denied(Vec<PermissionId>),
}

struct PendingPermission {
    token: RequestToken,
    requirement: PermissionRequirement,
}

/// Single-slot permission state machine: Unchecked → Requesting → Granted/Denied.
///
/// Owned by the bridge and touched only from the interaction thread.
#[derive(Default)]
pub struct PermissionGate {
    pending: Option<PendingPermission>,
}

impl PermissionGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a prompt is currently outstanding.
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Check the permission set, prompting for whatever is missing.
    ///
    /// Returns `Granted` without touching the host prompt when nothing is
    /// missing — even while another prompt is open, so permission-exempt
    /// operations are never blocked by an unrelated prompt. Fails with
    /// [`AssistenciaError::OperationInProgress`] only when a new prompt
    /// would be needed while a previous one has not resolved yet.
    pub fn check_or_request<H: HostPermissions + ?Sized>(
        &mut self,
        host: &H,
        permissions: &[PermissionId],
    ) -> Result<GateDecision> {
        let granted_so_far: HashSet<PermissionId> = permissions
            .iter()
            .copied()
            .filter(|p| host.is_granted(*p))
            .collect();
        let missing: Vec<PermissionId> = permissions
            .iter()
            .copied()
            .filter(|p| !granted_so_far.contains(p))
            .collect();

        if missing.is_empty() {
            return Ok(GateDecision::Granted);
        }

        if self.pending.is_some() {
            return Err(AssistenciaError::OperationInProgress(
                "a permission request is already outstanding".into(),
            ));
        }

        let token = RequestToken::new();
        host.request(&missing, token)?;
        debug!(%token, ?missing, "permission prompt issued");
        self.pending = Some(PendingPermission {
            token,
            requirement: PermissionRequirement {
                permissions: permissions.to_vec(),
                granted_so_far,
            },
        });
        Ok(GateDecision::Suspended(token))
    }

    /// Feed the host's prompt result back in.
    ///
    /// Results are matched by token, never by arrival order; a stale or
    /// unknown token returns `None` and leaves any live prompt untouched.
    pub fn on_result(
        &mut self,
        token: RequestToken,
        granted: &[PermissionId],
    ) -> Option<GateOutcome> {
        let Some(pending) = self.pending.take_if(|p| p.token == token) else {
            debug!(%token, "ignoring stale permission result");
            return None;
        };

        let denied: Vec<PermissionId> = pending
            .requirement
            .permissions
            .iter()
            .copied()
            .filter(|p| !pending.requirement.granted_so_far.contains(p) && !granted.contains(p))
            .collect();

        if denied.is_empty() {
            Some(GateOutcome::Granted)
        } else {
            Some(GateOutcome::Denied(denied))
        }
    }

    /// Discard any pending prompt without resolving it (host teardown).
    pub fn cancel(&mut self) {
        if self.pending.take().is_some() {
            debug!("pending permission prompt discarded");
        }
    }
}
