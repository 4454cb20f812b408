// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Human-readable error messages for the toast layer.
//
// Every technical error is mapped to a plain message with a clear suggestion.
// The severity levels drive how the embedding screen presents the failure.

use crate::error::AssistenciaError;

/// Severity of an error from the user's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Worth trying again — disk hiccup, transient provider failure.
    Transient,
    /// User must do something (grant a permission, free up space).
    ActionRequired,
    /// Cannot be fixed by retrying — bad payload, unsupported platform.
    Permanent,
}

/// A human-readable error with a plain message and actionable suggestion.
#[derive(Debug, Clone)]
pub struct HumanError {
    /// Plain summary (shown as the toast text).
    pub message: String,
    /// What the user should try (shown as body text where the UI has room).
    pub suggestion: String,
    /// Whether re-invoking the same operation can reasonably succeed.
    pub retriable: bool,
    /// Severity level (drives icon/colour in the UI).
    pub severity: Severity,
}

/// Convert an `AssistenciaError` into a `HumanError` the toast layer can show.
pub fn humanize_error(err: &AssistenciaError) -> HumanError {
    match err {
        AssistenciaError::MalformedPayload(_) => HumanError {
            message: "The document could not be read.".into(),
            suggestion: "The page produced a damaged file. Try generating it again.".into(),
            retriable: false,
            severity: Severity::Permanent,
        },

        AssistenciaError::PermissionDenied(_) => HumanError {
            message: "The app doesn't have permission to save this.".into(),
            suggestion: "Allow storage or media access in your device settings, then try again."
                .into(),
            retriable: true,
            severity: Severity::ActionRequired,
        },

        AssistenciaError::OperationInProgress(_) => HumanError {
            message: "Another save is still in progress.".into(),
            suggestion: "Wait a moment for the previous operation to finish, then try again."
                .into(),
            retriable: true,
            severity: Severity::Transient,
        },

        AssistenciaError::StorageUnavailable(_) => HumanError {
            message: "Device storage isn't available right now.".into(),
            suggestion: "Check that your storage isn't full or ejected, then try again.".into(),
            retriable: true,
            severity: Severity::ActionRequired,
        },

        AssistenciaError::Io(io_err) => {
            if io_err.kind() == std::io::ErrorKind::StorageFull {
                HumanError {
                    message: "There isn't enough space to save the file.".into(),
                    suggestion: "Free up some storage space and try again.".into(),
                    retriable: true,
                    severity: Severity::ActionRequired,
                }
            } else if io_err.kind() == std::io::ErrorKind::PermissionDenied {
                HumanError {
                    message: "The app couldn't write to that folder.".into(),
                    suggestion: "Check the app's storage permission in your device settings."
                        .into(),
                    retriable: true,
                    severity: Severity::ActionRequired,
                }
            } else {
                HumanError {
                    message: "There was a problem saving the file.".into(),
                    suggestion: "Try again. If this keeps happening, restart the app.".into(),
                    retriable: true,
                    severity: Severity::Transient,
                }
            }
        }

        AssistenciaError::ProviderWrite(_) => HumanError {
            message: "The gallery couldn't store the image.".into(),
            suggestion: "Try again. If this keeps happening, your device's media storage may be full."
                .into(),
            retriable: true,
            severity: Severity::Transient,
        },

        AssistenciaError::Serialization(_) => HumanError {
            message: "The app had an internal data problem.".into(),
            suggestion: "Try again. If this keeps happening, please report it.".into(),
            retriable: true,
            severity: Severity::Transient,
        },

        AssistenciaError::Host(_) => HumanError {
            message: "A device feature didn't respond.".into(),
            suggestion: "Try again. Some features may not be available on all devices.".into(),
            retriable: true,
            severity: Severity::Transient,
        },

        AssistenciaError::PlatformUnavailable => HumanError {
            message: "This feature isn't available on your device.".into(),
            suggestion: "Saving and sharing require the mobile version of the app.".into(),
            retriable: false,
            severity: Severity::Permanent,
        },
    }
}
