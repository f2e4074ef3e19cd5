// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Domain layer: conti and song records plus the normalization applied to form input.

pub mod conti;
pub mod song;

use uuid::Uuid;

/// Fresh opaque record id.
pub(crate) fn generate_id() -> String {
    Uuid::new_v4().to_string()
}
