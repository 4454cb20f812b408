// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Storage policy — the single rule table mapping (capability tier, media
// kind) to a storage target and the permissions it needs.
//
// Earlier revisions of the app scattered tier checks across every call site
// and drifted apart; here the policy is a pair of pure total functions so a
// new OS tier is an additive row, not another conditional.

use assistencia_core::types::{
    AccessMode, CapabilityTier, MediaKind, PermissionId, StorageArea, StorageTarget,
};

/// Resolve the storage target for one artifact request.
///
/// Total and pure — identical inputs always yield the identical target.
pub fn resolve(tier: CapabilityTier, kind: MediaKind) -> StorageTarget {
    match (tier, kind) {
        // Legacy storage: everything is a direct public path.
        (CapabilityTier::Legacy, MediaKind::Document) => StorageTarget {
            area: StorageArea::PublicDownloads,
            access: AccessMode::DirectPath,
        },
        (CapabilityTier::Legacy, MediaKind::Image) => StorageTarget {
            area: StorageArea::PublicDownloads,
            access: AccessMode::DirectPath,
        },

        // Scoped tiers: documents land in the app-scoped downloads dir,
        // images go through the media provider.
        (CapabilityTier::Scoped | CapabilityTier::FineGrainedMedia, MediaKind::Document) => {
            StorageTarget {
                area: StorageArea::PublicDownloads,
                access: AccessMode::DirectPath,
            }
        }
        (CapabilityTier::Scoped | CapabilityTier::FineGrainedMedia, MediaKind::Image) => {
            StorageTarget {
                area: StorageArea::ScopedPictures,
                access: AccessMode::ProviderInsert,
            }
        }
    }
}

/// Runtime permissions a save of `kind` needs on `tier`.
///
/// Documents on scoped tiers are permission-exempt (the app-scoped dir needs
/// no grant); images stay gated, with the fine-grained tier narrowing the
/// broad storage permission down to media-read.
pub fn required_permissions(tier: CapabilityTier, kind: MediaKind) -> &'static [PermissionId] {
    match (tier, kind) {
        (CapabilityTier::Legacy, _) => &[
            PermissionId::ReadExternalStorage,
            PermissionId::WriteExternalStorage,
        ],
        (CapabilityTier::Scoped, MediaKind::Document) => &[],
        (CapabilityTier::Scoped, MediaKind::Image) => &[PermissionId::ReadExternalStorage],
        (CapabilityTier::FineGrainedMedia, MediaKind::Document) => &[],
        (CapabilityTier::FineGrainedMedia, MediaKind::Image) => &[PermissionId::ReadMediaImages],
    }
}

/// Permissions the capture/pick flow needs on `tier`.
///
/// Camera plus whatever read grant lets the picked image be handed back.
pub fn capture_permissions(tier: CapabilityTier) -> &'static [PermissionId] {
    match tier {
        CapabilityTier::Legacy => &[
            PermissionId::Camera,
            PermissionId::ReadExternalStorage,
            PermissionId::WriteExternalStorage,
        ],
        CapabilityTier::Scoped => &[PermissionId::Camera, PermissionId::ReadExternalStorage],
        CapabilityTier::FineGrainedMedia => {
            &[PermissionId::Camera, PermissionId::ReadMediaImages]
        }
    }
}
