// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// assistencia-artifact — Artifact mechanics for the native bridge.
//
// Provides payload decoding (data URIs and raw base64), the storage policy
// table (capability tier × media kind), filename construction, and the
// writers that persist decoded bytes either on a direct path or through a
// provider-mediated insert.

pub mod naming;
pub mod payload;
pub mod policy;
pub mod writer;

// Re-export the primary entry points so callers can use
// `assistencia_artifact::decode_data_url` etc.
pub use payload::{DataPayload, data_url_parts, decode_base64, decode_data_url};
pub use policy::{capture_permissions, required_permissions, resolve};
pub use writer::{ProviderSink, write_direct, write_provider};
