// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Payload decoding — data URIs and raw base64 blobs from the web content.
//
// The web app hands the bridge either a full `data:<mime>;base64,<payload>`
// URI (in-page download events) or a bare base64 string with the MIME type
// supplied separately (direct bridge calls). Decoding never touches the
// filesystem, so a malformed payload fails before anything is written.

use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::{Engine, alphabet};
use tracing::debug;

use assistencia_core::error::{AssistenciaError, Result};

/// Input bytes are consumed in blocks of this many base64 characters so a
/// very large document never forces a second full-size copy of the encoded
/// text. Must stay a multiple of 4 — blocks are decoded independently.
const DECODE_BLOCK: usize = 48 * 1024;

/// Standard alphabet with padding optional on decode. The platform decoder
/// the web content was written against accepts unpadded input, so the
/// bridge has to as well.
const LENIENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Decoded payload bytes plus the MIME type the web content declared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataPayload {
    pub bytes: Vec<u8>,
    pub mime: String,
}

/// Decode a `data:<mime>;base64,<payload>` URI.
///
/// The MIME type is taken from the URI header; an empty header falls back to
/// `application/octet-stream`. Fails with
/// [`AssistenciaError::MalformedPayload`] when the scheme, the `;base64`
/// marker, or the `,` separator is missing, or when the payload is not valid
/// base64.
pub fn decode_data_url(input: &str) -> Result<DataPayload> {
    let (mime, body) = data_url_parts(input)?;
    let bytes = decode_blocks(body)?;
    debug!(mime, len = bytes.len(), "data URI decoded");
    Ok(DataPayload {
        bytes,
        mime: mime.to_string(),
    })
}

/// Split a data URI into `(mime, base64-body)` without decoding the body.
///
/// Validates only the header — scheme, `;base64` marker, `,` separator —
/// so callers can classify a URI cheaply and leave the full decode to a
/// blocking worker. An empty MIME header falls back to
/// `application/octet-stream`.
pub fn data_url_parts(input: &str) -> Result<(&str, &str)> {
    let rest = input
        .strip_prefix("data:")
        .ok_or_else(|| AssistenciaError::MalformedPayload("missing data: scheme".into()))?;

    let comma = rest
        .find(',')
        .ok_or_else(|| AssistenciaError::MalformedPayload("missing ',' separator".into()))?;
    let (header, body) = (&rest[..comma], &rest[comma + 1..]);

    let mime = header.strip_suffix(";base64").ok_or_else(|| {
        AssistenciaError::MalformedPayload("payload is not base64-encoded".into())
    })?;
    let mime = if mime.is_empty() {
        "application/octet-stream"
    } else {
        mime
    };
    Ok((mime, body))
}

/// Decode a raw base64 blob whose MIME type is supplied by the caller.
pub fn decode_base64(payload: &str, declared_mime: &str) -> Result<DataPayload> {
    let bytes = decode_blocks(payload)?;
    debug!(mime = declared_mime, len = bytes.len(), "base64 payload decoded");
    Ok(DataPayload {
        bytes,
        mime: declared_mime.to_string(),
    })
}

/// Decode base64 text in bounded blocks.
///
/// ASCII whitespace is skipped — the platform decoder the web content was
/// written against accepts embedded line breaks. Each accumulated block is a
/// multiple of 4 characters and therefore decodes independently of the rest.
fn decode_blocks(body: &str) -> Result<Vec<u8>> {
    let mut out = Vec::with_capacity(body.len() / 4 * 3);
    let mut block = Vec::with_capacity(DECODE_BLOCK.min(body.len()));

    for byte in body.bytes() {
        if byte.is_ascii_whitespace() {
            continue;
        }
        block.push(byte);
        if block.len() == DECODE_BLOCK {
            LENIENT
                .decode_vec(&block, &mut out)
                .map_err(|e| AssistenciaError::MalformedPayload(format!("invalid base64: {e}")))?;
            block.clear();
        }
    }

    if !block.is_empty() {
        LENIENT
            .decode_vec(&block, &mut out)
            .map_err(|e| AssistenciaError::MalformedPayload(format!("invalid base64: {e}")))?;
    }

    Ok(out)
}
