// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Filename construction.
//
// Generated documents are named `<prefix>_<epoch-millis>.<ext>` — the
// timestamp is the caller-supplied collision disambiguator, the writer never
// deduplicates. Gallery images keep the caller-supplied name unchanged.

use chrono::{DateTime, Utc};

/// File extension for the MIME types the bridge handles.
pub fn extension_for_mime(mime: &str) -> &'static str {
    match mime {
        "application/pdf" => "pdf",
        "image/jpeg" => "jpg",
        "image/png" => "png",
        "image/webp" => "webp",
        "text/plain" => "txt",
        _ => "bin",
    }
}

/// Name for a generated document: `<prefix>_<epoch-millis>.<ext>`.
pub fn timestamped_name(prefix: &str, epoch_millis: i64, mime: &str) -> String {
    format!("{prefix}_{epoch_millis}.{}", extension_for_mime(mime))
}

/// Name for a camera capture temp file: `JPEG_<yyyymmdd_hhmmss>_.jpg`.
pub fn capture_file_name(now: DateTime<Utc>) -> String {
    format!("JPEG_{}_.jpg", now.format("%Y%m%d_%H%M%S"))
}
