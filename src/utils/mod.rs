// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Shared helper utilities reused by models, forms and sync logic.

pub mod conti_description;

/// Sanitize a stored or typed conti description for display and storage.
pub use conti_description::sanitize_conti_description;
/// Build and read the thread marker kept in conti descriptions.
pub use conti_description::{DISCORD_THREAD_PREFIX, conti_thread_marker, thread_id_from_description};
