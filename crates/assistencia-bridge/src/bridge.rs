// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// The bridge facade — entry points callable from web content, plus the OS
// callback inlets the embedding screen forwards.
//
// All pending single-slot state (one permission prompt, one capture, one
// suspended save) lives here as owned fields, touched only from the
// interaction thread. Decode and file I/O run on a blocking worker; the
// result is marshalled back before any pending state changes.

use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, error, info, instrument};

use assistencia_artifact::payload::{decode_base64, decode_data_url};
use assistencia_artifact::{naming, policy, writer};
use assistencia_core::config::BridgeConfig;
use assistencia_core::error::{AssistenciaError, Result};
use assistencia_core::human_errors::humanize_error;
use assistencia_core::types::{
    AccessMode, ActivityOutcome, ArtifactRequest, DeliveryIntent, MediaKind, PermissionId,
    PersistedArtifact, RequestToken, Selection, StorageArea, StorageTarget,
};

use crate::capture::CaptureCoordinator;
use crate::download::{DownloadClass, classify};
use crate::expose;
use crate::host::PlatformHost;
use crate::permission::{GateDecision, GateOutcome, PermissionGate};

/// A save suspended behind a permission prompt, resumed with the same
/// request once the grant arrives.
struct PendingSave {
    token: RequestToken,
    request: ArtifactRequest,
}

/// The boundary object exposing native capabilities to hosted web content.
pub struct WebBridge {
    host: Arc<dyn PlatformHost>,
    config: BridgeConfig,
    gate: PermissionGate,
    capture: CaptureCoordinator,
    pending_save: Option<PendingSave>,
}

impl WebBridge {
    pub fn new(host: Arc<dyn PlatformHost>, config: BridgeConfig) -> Self {
        info!(platform = host.platform_name(), "bridge created");
        Self {
            host,
            config,
            gate: PermissionGate::new(),
            capture: CaptureCoordinator::new(),
            pending_save: None,
        }
    }

    // -----------------------------------------------------------------------
    // Entry points callable from web content
    // -----------------------------------------------------------------------

    /// Persist a document payload and, depending on `intent`, launch a
    /// chooser on the result.
    #[instrument(skip(self, payload), fields(name = %file_name, mime = %mime))]
    pub async fn save_or_share(
        &mut self,
        payload: String,
        file_name: String,
        mime: String,
        intent: DeliveryIntent,
    ) -> Result<()> {
        self.submit(ArtifactRequest {
            payload,
            declared_mime: mime,
            suggested_name: file_name,
            kind: MediaKind::Document,
            intent,
        })
        .await
    }

    /// Persist an image payload into the device gallery.
    #[instrument(skip(self, payload), fields(name = %file_name))]
    pub async fn save_image_to_gallery(
        &mut self,
        payload: String,
        file_name: String,
    ) -> Result<()> {
        self.submit(ArtifactRequest {
            payload,
            declared_mime: "image/jpeg".into(),
            suggested_name: file_name,
            kind: MediaKind::Image,
            intent: DeliveryIntent::SaveToGallery,
        })
        .await
    }

    /// Handle an in-page download notification.
    ///
    /// Embedded data payloads run through the save pipeline and end in a
    /// view chooser; external URLs are enqueued with the platform download
    /// manager.
    #[instrument(skip(self, url), fields(scheme = url.split(':').next().unwrap_or("")))]
    pub async fn notify_download(
        &mut self,
        url: String,
        mime_hint: Option<&str>,
        disposition_hint: Option<&str>,
    ) -> Result<()> {
        match classify(&url, mime_hint, disposition_hint) {
            Ok(DownloadClass::EmbeddedPayload { mime }) => {
                // Classification read only the URI header; the body is
                // decoded once, on the blocking worker.
                self.submit(ArtifactRequest {
                    payload: url,
                    declared_mime: mime,
                    suggested_name: String::new(),
                    kind: MediaKind::Document,
                    intent: DeliveryIntent::SaveAndShare,
                })
                .await
            }
            Ok(DownloadClass::ExternalDownload {
                url,
                suggested_name,
                mime,
            }) => {
                debug!(name = %suggested_name, "handing download to the platform manager");
                self.host
                    .enqueue_download(&url, &suggested_name, &mime)
                    .inspect_err(|e| self.report_failure(e))
            }
            Err(e) => {
                self.report_failure(&e);
                Err(e)
            }
        }
    }

    /// Open the combined camera/pick chooser for the web content's file
    /// chooser. Any still-pending capture is resolved with an empty
    /// selection first.
    #[instrument(skip(self))]
    pub fn open_file_chooser(&mut self) -> Result<RequestToken> {
        let capture_dir = self.host.capture_dir().ok();
        let start = self.capture.begin(Utc::now(), capture_dir);
        if let Some(stale) = start.superseded {
            self.host.deliver_selection(stale, Selection::None);
        }

        let capture_output = self.capture.expected_path().map(|p| p.to_path_buf());
        if let Err(e) = self.host.launch_capture_chooser(
            capture_output.as_deref(),
            &self.config.capture_chooser_title,
            start.token,
        ) {
            // The chooser never opened, so no activity result will arrive;
            // satisfy the web callback immediately.
            self.capture.resolve(start.token, &ActivityOutcome::cancelled());
            self.host.deliver_selection(start.token, Selection::None);
            self.report_failure(&e);
            return Err(e);
        }
        Ok(start.token)
    }

    /// Ask up front for the permissions the capture flow will need, the way
    /// the embedding screen does on creation.
    pub fn request_startup_permissions(&mut self) -> Result<()> {
        let permissions = policy::capture_permissions(self.host.capability_tier());
        match self.gate.check_or_request(self.host.as_ref(), permissions) {
            Ok(_) => Ok(()),
            Err(e) => {
                self.report_failure(&e);
                Err(e)
            }
        }
    }

    // -----------------------------------------------------------------------
    // OS callback inlets, forwarded by the embedding screen
    // -----------------------------------------------------------------------

    /// Deliver the result of a permission prompt.
    ///
    /// Matched by token; stale results are ignored. A grant resumes the
    /// suspended save with its original request, a denial fails it with a
    /// user-visible message.
    #[instrument(skip(self, granted), fields(%token))]
    pub async fn on_permission_result(
        &mut self,
        token: RequestToken,
        granted: &[PermissionId],
    ) -> Result<()> {
        let Some(outcome) = self.gate.on_result(token, granted) else {
            return Ok(());
        };

        let pending = self.pending_save.take_if(|p| p.token == token);
        match (outcome, pending) {
            (GateOutcome::Granted, Some(pending)) => self.run(pending.request).await,
            (GateOutcome::Granted, None) => Ok(()),
            (GateOutcome::Denied(denied), pending) => {
                let names: Vec<&str> = denied.iter().map(|p| p.platform_name()).collect();
                let err = AssistenciaError::PermissionDenied(names.join(", "));
                if pending.is_some() {
                    self.report_failure(&err);
                    Err(err)
                } else {
                    // Startup prompt with nothing suspended behind it.
                    debug!(error = %err, "startup permission prompt denied");
                    Ok(())
                }
            }
        }
    }

    /// Deliver the capture/pick activity result and satisfy the web
    /// content's chooser callback.
    #[instrument(skip(self, outcome), fields(%token))]
    pub fn on_activity_result(&mut self, token: RequestToken, outcome: ActivityOutcome) {
        let selection = self.capture.resolve(token, &outcome);
        self.host.deliver_selection(token, selection);
    }

    /// Discard all pending state. Called when the hosting screen is torn
    /// down; no stale callbacks are invoked afterwards.
    pub fn teardown(&mut self) {
        self.gate.cancel();
        self.capture.cancel();
        self.pending_save = None;
        debug!("bridge state discarded");
    }

    // -----------------------------------------------------------------------
    // Pipeline
    // -----------------------------------------------------------------------

    /// Gate a request behind its permission set, running it now or
    /// suspending it until the prompt resolves.
    async fn submit(&mut self, request: ArtifactRequest) -> Result<()> {
        let tier = self.host.capability_tier();
        let permissions = policy::required_permissions(tier, request.kind);

        match self.gate.check_or_request(self.host.as_ref(), permissions) {
            Ok(GateDecision::Granted) => self.run(request).await,
            Ok(GateDecision::Suspended(token)) => {
                debug!(%token, "save suspended behind permission prompt");
                self.pending_save = Some(PendingSave { token, request });
                Ok(())
            }
            Err(e) => {
                self.report_failure(&e);
                Err(e)
            }
        }
    }

    /// Decode, persist, and deliver one request, reporting failures through
    /// the toast collaborator.
    async fn run(&mut self, request: ArtifactRequest) -> Result<()> {
        let result = self.perform(request).await;
        if let Err(e) = &result {
            self.report_failure(e);
        }
        result
    }

    async fn perform(&mut self, request: ArtifactRequest) -> Result<()> {
        let kind = request.kind;
        let intent = request.intent;
        let target = policy::resolve(self.host.capability_tier(), kind);

        let host = Arc::clone(&self.host);
        let prefix = self.config.document_prefix.clone();
        let artifact = tokio::task::spawn_blocking(move || {
            write_request(host.as_ref(), &prefix, target, request)
        })
        .await
        .map_err(|e| AssistenciaError::Host(format!("worker task failed: {e}")))??;

        info!(name = %artifact.display_name, "artifact ready");
        match intent {
            DeliveryIntent::SaveOnly | DeliveryIntent::SaveToGallery => {
                self.host.notify(&self.config.saved_toast);
            }
            DeliveryIntent::SaveAndShare => {
                let reference = expose::expose(self.host.as_ref(), &artifact)?;
                let title = match kind {
                    MediaKind::Document => &self.config.view_chooser_title,
                    MediaKind::Image => &self.config.share_chooser_title,
                };
                expose::launch_chooser(self.host.as_ref(), &reference, title);
            }
        }
        Ok(())
    }

    fn report_failure(&self, err: &AssistenciaError) {
        let human = humanize_error(err);
        error!(error = %err, "bridge operation failed");
        self.host.notify(&human.message);
    }
}

/// Blocking half of the pipeline: decode the payload and persist it at the
/// resolved target. Decoding happens first, so a malformed payload never
/// reaches the filesystem.
fn write_request(
    host: &dyn PlatformHost,
    prefix: &str,
    target: StorageTarget,
    request: ArtifactRequest,
) -> Result<PersistedArtifact> {
    let decoded = if request.payload.starts_with("data:") {
        decode_data_url(&request.payload)?
    } else {
        decode_base64(&request.payload, &request.declared_mime)?
    };

    let display_name = if request.suggested_name.is_empty() {
        naming::timestamped_name(prefix, Utc::now().timestamp_millis(), &decoded.mime)
    } else {
        request.suggested_name
    };

    match target.access {
        AccessMode::DirectPath => {
            let dir = match target.area {
                StorageArea::PublicDownloads => host.downloads_dir()?,
                area => {
                    return Err(AssistenciaError::StorageUnavailable(format!(
                        "no direct directory for {area:?}"
                    )));
                }
            };
            writer::write_direct(&dir, &display_name, &decoded.mime, &decoded.bytes)
        }
        AccessMode::ProviderInsert => {
            let sink = host.begin_image_insert(&display_name, &decoded.mime)?;
            writer::write_provider(sink, &display_name, &decoded.mime, &decoded.bytes)
        }
    }
}
