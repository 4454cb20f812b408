// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Download interception — classifying in-page download notifications.
//
// The web view reports every download trigger the same way whether the
// "URL" is an embedded data URI or a real remote file. Data URIs are the
// app's own generated documents and stay inside the bridge; anything else
// is handed to the platform download manager.

use assistencia_artifact::payload::data_url_parts;
use assistencia_core::error::Result;

/// How a download notification should be handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DownloadClass {
    /// The payload is embedded in the URL itself; runs through the save
    /// pipeline, which decodes it on the blocking worker.
    EmbeddedPayload { mime: String },
    /// A remote file for the platform download manager.
    ExternalDownload {
        url: String,
        suggested_name: String,
        mime: String,
    },
}

/// Classify one download notification.
///
/// A `data:` scheme is always an embedded payload. Only its header is
/// inspected here — a bad scheme or missing `;base64` marker fails with
/// `MalformedPayload`, while the body stays untouched until the blocking
/// worker decodes it. Everything else is external, with the suggested name
/// taken from a `filename=` disposition hint or the last URL path segment.
pub fn classify(
    url: &str,
    mime_hint: Option<&str>,
    disposition_hint: Option<&str>,
) -> Result<DownloadClass> {
    if url.starts_with("data:") {
        let (mime, _) = data_url_parts(url)?;
        return Ok(DownloadClass::EmbeddedPayload {
            mime: mime.to_string(),
        });
    }

    let suggested_name = disposition_hint
        .and_then(filename_from_disposition)
        .or_else(|| last_path_segment(url))
        .unwrap_or_else(|| "download.bin".to_string());
    let mime = match mime_hint {
        Some(m) if !m.is_empty() => m.to_string(),
        _ => "application/octet-stream".to_string(),
    };

    Ok(DownloadClass::ExternalDownload {
        url: url.to_string(),
        suggested_name,
        mime,
    })
}

/// Pull a file name out of a Content-Disposition style hint.
fn filename_from_disposition(disposition: &str) -> Option<String> {
    for part in disposition.split(';') {
        let part = part.trim();
        if let Some(value) = part.strip_prefix("filename=") {
            let value = value.trim_matches('"');
            if !value.is_empty() {
                return Some(value.to_string());
            }
        }
    }
    None
}

/// Last path segment of a URL, with query and fragment stripped.
fn last_path_segment(url: &str) -> Option<String> {
    let without_fragment = url.split('#').next().unwrap_or(url);
    let without_query = without_fragment.split('?').next().unwrap_or(without_fragment);
    let segment = without_query.rsplit('/').next()?;
    if segment.is_empty() || segment.contains(':') {
        return None;
    }
    Some(segment.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use assistencia_core::error::AssistenciaError;

    #[test]
    fn data_uri_is_embedded() {
        let class = classify("data:application/pdf;base64,JVBERi0xLjQ=", None, None)
            .expect("classify");
        assert_eq!(
            class,
            DownloadClass::EmbeddedPayload {
                mime: "application/pdf".into()
            }
        );
    }

    #[test]
    fn data_uri_without_base64_marker_fails() {
        let result = classify("data:text/plain,hello", None, None);
        assert!(matches!(
            result,
            Err(AssistenciaError::MalformedPayload(_))
        ));
    }

    #[test]
    fn embedded_body_is_not_decoded_during_classification() {
        // Garbage body, valid header: classification stays cheap and lets
        // the blocking worker reject the payload.
        let class =
            classify("data:application/pdf;base64,***", None, None).expect("classify");
        assert_eq!(
            class,
            DownloadClass::EmbeddedPayload {
                mime: "application/pdf".into()
            }
        );
    }

    #[test]
    fn https_url_is_external_with_segment_name() {
        let class = classify("https://x.example/reports/file.pdf", Some("application/pdf"), None)
            .expect("classify");
        assert_eq!(
            class,
            DownloadClass::ExternalDownload {
                url: "https://x.example/reports/file.pdf".into(),
                suggested_name: "file.pdf".into(),
                mime: "application/pdf".into(),
            }
        );
    }

    #[test]
    fn disposition_filename_wins_over_url_segment() {
        let class = classify(
            "https://x.example/dl?id=9",
            None,
            Some("attachment; filename=\"fatura.pdf\""),
        )
        .expect("classify");
        let DownloadClass::ExternalDownload { suggested_name, mime, .. } = class else {
            panic!("expected external");
        };
        assert_eq!(suggested_name, "fatura.pdf");
        assert_eq!(mime, "application/octet-stream");
    }

    #[test]
    fn unusable_url_falls_back_to_default_name() {
        let class = classify("https://x.example/", None, None).expect("classify");
        let DownloadClass::ExternalDownload { suggested_name, .. } = class else {
            panic!("expected external");
        };
        assert_eq!(suggested_name, "download.bin");
    }
}
