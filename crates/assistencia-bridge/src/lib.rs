// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>

//! Platform bridge for the Assistencia web screen.
//!
//! The [`WebBridge`] facade owns all interaction state and talks to the
//! operating system exclusively through the [`host`] traits, so the whole
//! flow is testable against an in-memory host. Real platform backends
//! implement [`host::PlatformHost`]; [`StubHost`] stands in everywhere else.

pub mod bridge;
pub mod capture;
pub mod download;
pub mod expose;
pub mod host;
pub mod permission;
pub mod stub;

#[cfg(test)]
pub(crate) mod test_host;

pub use bridge::WebBridge;
pub use capture::CaptureCoordinator;
pub use download::{DownloadClass, classify};
pub use host::PlatformHost;
pub use permission::{GateDecision, GateOutcome, PermissionGate};
pub use stub::StubHost;
