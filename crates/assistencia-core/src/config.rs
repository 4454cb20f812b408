// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Bridge configuration.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Static bridge settings supplied by the embedding screen.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BridgeConfig {
    /// Filename prefix for generated documents (`<prefix>_<epoch-millis>.<ext>`).
    pub document_prefix: String,
    /// Title of the view chooser launched after an in-page document download.
    pub view_chooser_title: String,
    /// Title of the share sheet launched for SaveAndShare requests.
    pub share_chooser_title: String,
    /// Title of the combined camera/gallery chooser.
    pub capture_chooser_title: String,
    /// Toast shown after a save that launches no chooser.
    pub saved_toast: String,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            document_prefix: "Recibo".into(),
            view_chooser_title: "Abrir Recibo".into(),
            share_chooser_title: "Compartilhar".into(),
            capture_chooser_title: "Selecione a Foto".into(),
            saved_toast: "Arquivo salvo".into(),
        }
    }
}

impl BridgeConfig {
    /// Parse a configuration from JSON (as shipped alongside the screen).
    pub fn from_json(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Serialize the configuration to pretty JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_round_trips_through_json() {
        let config = BridgeConfig::default();
        let json = config.to_json().expect("serialize");
        let parsed = BridgeConfig::from_json(&json).expect("parse");
        assert_eq!(parsed.document_prefix, "Recibo");
        assert_eq!(parsed.view_chooser_title, config.view_chooser_title);
    }

    #[test]
    fn malformed_json_is_a_serialization_error() {
        let result = BridgeConfig::from_json("{not json");
        assert!(result.is_err());
    }
}
